/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! The peer-state table (§4.5/§5 lock (c)): "every node maintains its own
//! state and a cached belief about every peer's state (idle/non-idle)."
//! A small fixed-size table behind its own mutex, per §5's lock hierarchy
//! (queue → outbox → peer-state) — no dedicated primitive needed, since
//! unlike the dedup queue or the outbox this is always exactly `node_count`
//! booleans.

use std::sync::Mutex;

/// This node's cached belief about every peer's idle/non-idle status
/// (including its own slot, which the node updates itself rather than
/// through a transport message).
pub struct PeerState {
    idle: Mutex<Vec<bool>>,
}

impl PeerState {
    /// All peers start non-idle: a fresh run has not yet observed anyone go
    /// quiet, matching §4.5's startup ("other nodes start empty").
    pub fn new(node_count: usize) -> Self {
        Self {
            idle: Mutex::new(vec![false; node_count]),
        }
    }

    pub fn set(&self, node: usize, idle: bool) {
        self.idle.lock().unwrap()[node] = idle;
    }

    pub fn is_idle(&self, node: usize) -> bool {
        self.idle.lock().unwrap()[node]
    }

    /// Whether every peer other than `except` is currently believed idle.
    pub fn all_idle_except(&self, except: usize) -> bool {
        self.idle
            .lock()
            .unwrap()
            .iter()
            .enumerate()
            .all(|(node, &is_idle)| node == except || is_idle)
    }
}
