/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
use tri_manifold::TriangulationError;

#[test]
fn displays_are_non_empty_and_distinct() {
    let a = TriangulationError::MalformedSignature("truncated".into());
    let b = TriangulationError::SizeOverflow { simplices: 100_000 };
    let c = TriangulationError::InvalidMove("facet is boundary".into());
    assert_ne!(a.to_string(), b.to_string());
    assert_ne!(b.to_string(), c.to_string());
    assert!(a.to_string().contains("truncated"));
}
