/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
// Hand-rolled error type matching tri_manifold's style: no `thiserror`, a
// plain enum implementing `std::error::Error`/`Display` directly.

use std::error::Error;
use std::fmt;

use tri_manifold::TriangulationError;

/// Failure modes of the canonicalisation and BFS layers (§7): everything the
/// collaborator crate can raise, plus the two kinds that originate here —
/// transport failures and a run that never got a seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A triangulation-level failure (malformed signature, size overflow, or
    /// an illegal move commit) propagated unchanged.
    Triangulation(TriangulationError),
    /// A peer-to-peer send or receive failed. The BFS driver treats this as
    /// fatal for the run rather than retrying silently.
    Transport(String),
    /// A run was started with no seed signatures at all.
    EmptyRun,
}

impl From<TriangulationError> for SearchError {
    fn from(err: TriangulationError) -> Self {
        SearchError::Triangulation(err)
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Triangulation(err) => write!(f, "{err}"),
            SearchError::Transport(reason) => write!(f, "transport error: {reason}"),
            SearchError::EmptyRun => write!(f, "search run started with no seed signatures"),
        }
    }
}

impl Error for SearchError {}
