/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! A per-peer buffered outbox, matching §9's "MPI buffered-send idiom"
//! design note: "for each outbound destination, atomically (a) append to a
//! per-peer outbox, (b) flush by handing the batch to the transport". The
//! attach/detach of an MPI send buffer is a transport-library detail; this
//! type only guarantees the append-then-flush happens under one lock so a
//! concurrent flush can never observe a partially-appended batch.

use std::sync::Mutex;

/// Buffers outbound items for one peer until flushed through a
/// caller-supplied transport closure.
pub struct Outbox<T> {
    pending: Mutex<Vec<T>>,
}

impl<T> Outbox<T> {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Appends `item` and immediately flushes every currently pending item
    /// (including `item` itself) through `transport`, all under the same
    /// lock acquisition. `transport` runs with the outbox lock held, per
    /// §5's stated exception to "no lock held across a blocking network
    /// call": the outbox lock is the one lock allowed to span the send.
    pub fn enqueue_and_flush<F: FnOnce(&[T])>(&self, item: T, transport: F) {
        let mut pending = self.pending.lock().unwrap();
        pending.push(item);
        transport(&pending);
        pending.clear();
    }
}

impl<T> Default for Outbox<T> {
    fn default() -> Self {
        Self::new()
    }
}
