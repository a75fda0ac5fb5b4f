/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! A single mutex guarding both a dedup set and a FIFO work queue.
//!
//! §9's design note reads: "coarse critical sections over the queue+set map
//! cleanly onto a single mutex guarding the combined structure" — this is
//! that mutex. It has no direct donor analogue (the donor's ring buffer is a
//! fixed-capacity SPSC/MPMC structure, not a growable dedup set) but is
//! built the same way the donor guards shared mutable state elsewhere: one
//! `Mutex` around one small struct, no lock-free cleverness, `.lock().unwrap()`
//! with poisoning left to propagate as a panic rather than recovered from.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;
use std::sync::Mutex;

struct Inner<T> {
    seen: HashSet<T>,
    local: VecDeque<T>,
}

/// Owns the `seen`/`local` pair of §4.5 for one shard: every item this node
/// has ever accepted, and the subset not yet processed.
pub struct DedupQueue<T> {
    inner: Mutex<Inner<T>>,
}

impl<T: Eq + Hash + Clone> DedupQueue<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                seen: HashSet::new(),
                local: VecDeque::new(),
            }),
        }
    }

    /// Inserts `item` into `seen`; if it was not already present, also
    /// pushes it onto `local`. Returns whether the item was newly inserted
    /// (§4.5's `queueSig` step 2: "if newly inserted, push onto local").
    pub fn offer(&self, item: T) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let fresh = inner.seen.insert(item.clone());
        if fresh {
            inner.local.push_back(item);
        }
        fresh
    }

    /// Pops the next unprocessed item, if any.
    pub fn pop(&self) -> Option<T> {
        self.inner.lock().unwrap().local.pop_front()
    }

    /// Whether `local` is currently empty. A snapshot: another thread may
    /// enqueue between this call returning and the caller acting on it.
    pub fn is_local_empty(&self) -> bool {
        self.inner.lock().unwrap().local.is_empty()
    }

    /// Number of distinct items ever accepted by this shard.
    pub fn seen_len(&self) -> usize {
        self.inner.lock().unwrap().seen.len()
    }

    /// Whether `item` has ever been accepted by this shard.
    pub fn has_seen(&self, item: &T) -> bool {
        self.inner.lock().unwrap().seen.contains(item)
    }

    /// Snapshot of every item this shard has accepted, for end-of-run
    /// reporting and tests.
    pub fn seen_snapshot(&self) -> Vec<T> {
        self.inner.lock().unwrap().seen.iter().cloned().collect()
    }
}

impl<T: Eq + Hash + Clone> Default for DedupQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_offer_is_fresh_and_enqueues() {
        let q: DedupQueue<u32> = DedupQueue::new();
        assert!(q.offer(1));
        assert_eq!(q.pop(), Some(1));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn duplicate_offer_is_not_fresh_and_does_not_requeue() {
        let q: DedupQueue<u32> = DedupQueue::new();
        assert!(q.offer(1));
        q.pop();
        assert!(!q.offer(1));
        assert_eq!(q.pop(), None);
        assert_eq!(q.seen_len(), 1);
    }

    #[test]
    fn has_seen_reflects_every_accepted_item_even_after_popped() {
        let q: DedupQueue<&str> = DedupQueue::new();
        q.offer("a");
        q.pop();
        assert!(q.has_seen(&"a"));
        assert!(!q.has_seen(&"b"));
    }
}
