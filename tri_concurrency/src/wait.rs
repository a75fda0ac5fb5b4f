/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! Condvar-based wait/signal, ported from the donor ring buffer's
//! `BlockingWaitStrategy`.
//!
//! The BFS worker loop (§4.5) needs exactly the shape the donor's consumer
//! threads need: block until told there might be new work, then re-check a
//! caller-supplied predicate. The donor's `wait_for` additionally threads a
//! slice of gating sequences through the predicate (a ring buffer's
//! consumer-barrier dependency); the BFS has no such dependency graph, so
//! this trims that parameter and keeps only the predicate.

use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// A strategy for blocking a worker until signalled, re-checking `done` each
/// time it wakes.
pub trait WaitStrategy: Send + Sync {
    /// Blocks until `done` returns `true`, or until `signal` wakes every
    /// waiter to re-check it. Returns once `done()` holds.
    fn wait_until<F: Fn() -> bool>(&self, done: F);

    /// Parks the calling thread until `signal` wakes it or `timeout`
    /// elapses, whichever comes first. Used at a suspension point that must
    /// also re-poll something this strategy can't see (the BFS worker loop's
    /// inbound transport), so it can't just wait on a predicate alone.
    fn park_timeout(&self, timeout: Duration);

    /// Wakes every thread currently parked in `wait_until` or `park_timeout`.
    fn signal(&self);
}

/// The default strategy: a condvar parks the calling thread between
/// signals rather than spinning.
#[derive(Default)]
pub struct BlockingWaitStrategy {
    guard: Mutex<()>,
    cvar: Condvar,
}

impl BlockingWaitStrategy {
    pub fn new() -> Self {
        Self {
            guard: Mutex::new(()),
            cvar: Condvar::new(),
        }
    }
}

impl WaitStrategy for BlockingWaitStrategy {
    fn wait_until<F: Fn() -> bool>(&self, done: F) {
        let mut guard = self.guard.lock().unwrap();
        while !done() {
            guard = self.cvar.wait(guard).unwrap();
        }
    }

    fn park_timeout(&self, timeout: Duration) {
        let guard = self.guard.lock().unwrap();
        let _ = self.cvar.wait_timeout(guard, timeout).unwrap();
    }

    fn signal(&self) {
        let _guard = self.guard.lock().unwrap();
        self.cvar.notify_all();
    }
}
