/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
use tri_manifold::TriangulationError;
use tri_search::SearchError;

#[test]
fn triangulation_error_propagates_through_from_conversion() {
    let inner = TriangulationError::MalformedSignature("truncated".into());
    let wrapped: SearchError = inner.clone().into();
    assert_eq!(wrapped, SearchError::Triangulation(inner));
}

#[test]
fn displays_are_non_empty_and_distinct() {
    let a = SearchError::Transport("peer 1 unreachable".into());
    let b = SearchError::EmptyRun;
    assert_ne!(a.to_string(), b.to_string());
    assert!(a.to_string().contains("peer 1 unreachable"));
}
