//! Generic, triangulation-agnostic concurrency primitives the distributed
//! BFS driver (`tri_search::bfs`) is built from: an atomic counter, a
//! condvar-based wait strategy, a thread-per-task executor, a dedup queue,
//! and a per-peer buffered outbox.
//!
//! None of this crate knows what a triangulation or a signature is — it is
//! the same kind of small, dependency-light primitives crate the rest of
//! this workspace's BFS driver sits on top of, the way a ring-buffer crate
//! underpins an event-processing consumer without knowing what events it
//! carries.

#![forbid(unsafe_code)]

pub mod dedup_queue;
pub mod executor;
pub mod outbox;
pub mod prelude;
pub mod sequence;
pub mod wait;
