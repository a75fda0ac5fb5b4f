/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! A thread-per-task executor, ported from the donor ring buffer's
//! `ThreadedExecutor`/`ThreadedExecutorHandle`.
//!
//! This is the "cooperative task pool" of §4.5/§5: one orchestrator task
//! plus a fixed set of worker tasks, each an OS thread, joined when the
//! handle is dropped. The donor's version is generic over an
//! `EventProcessorExecutor` trait with an associated `Handle` type because
//! it has to interoperate with several ring-buffer processor kinds; there is
//! exactly one executor backend in this crate, so it is a concrete struct,
//! matching this crate's own `ultragraph`/`dcl_data_structures`-style
//! preference for concrete types over trait objects when only one
//! implementation exists.

/// A unit of work handed to the executor. `Send` because it crosses a
/// thread boundary; `'static` is imposed at `spawn` time via the `Box`
/// bound rather than here, so callers can build runnables that borrow
/// short-lived data and still describe the trait without a lifetime
/// parameter threaded through every call site.
pub trait Runnable: Send {
    fn run(self: Box<Self>);
}

/// Owns a collection of not-yet-started tasks.
pub struct ThreadedExecutor {
    runnables: Vec<Box<dyn Runnable + Send + 'static>>,
}

/// Manages the lifecycle of the threads spawned by [`ThreadedExecutor::spawn`].
pub struct ExecutorHandle {
    threads: Vec<std::thread::JoinHandle<()>>,
}

impl ThreadedExecutor {
    pub fn with_runnables(runnables: Vec<Box<dyn Runnable + Send + 'static>>) -> Self {
        Self { runnables }
    }

    /// Spawns every task onto its own OS thread and returns a handle that
    /// joins them all on drop or on an explicit `join()`.
    pub fn spawn(self) -> ExecutorHandle {
        let threads = self
            .runnables
            .into_iter()
            .map(|r| std::thread::spawn(move || r.run()))
            .collect();
        ExecutorHandle { threads }
    }
}

impl ExecutorHandle {
    /// Waits for every spawned thread to finish. Equivalent to dropping the
    /// handle; kept as an explicit method so call sites can document the
    /// join point.
    pub fn join(self) {
        drop(self)
    }
}

impl Drop for ExecutorHandle {
    fn drop(&mut self) {
        for t in std::mem::take(&mut self.threads) {
            // A poisoned join here means a worker thread panicked; that is
            // a programmer error in a Runnable, not a condition this
            // executor recovers from.
            t.join().expect("worker thread panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Increment(Arc<AtomicUsize>);

    impl Runnable for Increment {
        fn run(self: Box<Self>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn spawns_and_joins_every_task() {
        let counter = Arc::new(AtomicUsize::new(0));
        let tasks: Vec<Box<dyn Runnable + Send + 'static>> = (0..4)
            .map(|_| Box::new(Increment(counter.clone())) as Box<dyn Runnable + Send + 'static>)
            .collect();
        let handle = ThreadedExecutor::with_runnables(tasks).spawn();
        handle.join();
        assert_eq!(counter.load(Ordering::SeqCst), 4);
    }
}
