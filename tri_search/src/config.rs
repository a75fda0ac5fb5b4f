/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! Plain constructor-argument configuration (§2.2): no config crate, since
//! a BFS run has exactly one caller-supplied shape and nothing here is ever
//! read from a file or environment.

use tri_manifold::Dim;

/// Everything one node needs to run its share of a distributed BFS (§4.5).
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub dim: Dim,
    /// Total number of cooperating nodes in this run.
    pub node_count: usize,
    /// This process's own rank among `0..node_count`.
    pub self_rank: usize,
    /// The simplex-count ceiling `K`: moves that would grow a triangulation
    /// past `K` simplices are never generated.
    pub ceiling: usize,
    /// Canonical signatures this node owns at startup (its share of the
    /// seed set, already sharded by `queue_sig`).
    pub seeds: Vec<String>,
}

impl SearchConfig {
    pub fn single_node(dim: Dim, ceiling: usize, seeds: Vec<String>) -> Self {
        Self {
            dim,
            node_count: 1,
            self_rank: 0,
            ceiling,
            seeds,
        }
    }
}
