/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! The distributed BFS worker loop (§4.5): per-node sharded queue, dedup
//! set, outbound per-peer buffering, and the barrier-free quiescence
//! detector.

use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tri_concurrency::prelude::{
    AtomicCounter, BlockingWaitStrategy, DedupQueue, Outbox, Runnable, ThreadedExecutor, WaitStrategy,
};
use tri_manifold::Triangulation;

use crate::bfs::peer_state::PeerState;
use crate::bfs::shard::owner_of;
use crate::bfs::transport::{Message, Transport};
use crate::canonicalizer;
use crate::config::SearchConfig;
use crate::errors::SearchError;
use crate::moves;

/// The longest a worker parks at the idle-yield suspension point (§5)
/// before re-polling its inbox and the local queue regardless of whether it
/// was signalled. Bounds the delay between an inbound transport frame
/// landing and a parked worker noticing it, since delivery itself cannot
/// wake a parked thread (§4.6) — only another local worker enqueueing work
/// can do that, via [`BfsNode::wait`]'s `signal`.
const IDLE_YIELD: Duration = Duration::from_millis(2);

/// What one node accomplished by the time its share of the search reached
/// quiescence.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Every canonical signature this node ended up owning.
    pub seen: Vec<String>,
    /// Total signatures discovered (offered to `queue_sig`), including
    /// duplicates rejected by the dedup set.
    pub discovered: u64,
}

/// One node's share of the distributed BFS of §4.5.
pub struct BfsNode<T: Transport> {
    config: SearchConfig,
    queue: DedupQueue<String>,
    outboxes: Vec<Outbox<String>>,
    peers: PeerState,
    self_idle: AtomicBool,
    in_flight: AtomicUsize,
    discovered: AtomicCounter,
    transport: Arc<T>,
    diagnostics: Mutex<Box<dyn Write + Send>>,
    wait: BlockingWaitStrategy,
}

impl<T: Transport + 'static> BfsNode<T> {
    pub fn new(config: SearchConfig, transport: Arc<T>, diagnostics: Box<dyn Write + Send>) -> Arc<Self> {
        let node_count = config.node_count;
        let outboxes = (0..node_count).map(|_| Outbox::new()).collect();
        Arc::new(Self {
            peers: PeerState::new(node_count),
            self_idle: AtomicBool::new(false),
            in_flight: AtomicUsize::new(0),
            discovered: AtomicCounter::new(0),
            queue: DedupQueue::new(),
            outboxes,
            transport,
            diagnostics: Mutex::new(diagnostics),
            wait: BlockingWaitStrategy::new(),
            config,
        })
    }

    fn log(&self, line: &str) {
        let mut sink = self.diagnostics.lock().unwrap();
        let _ = writeln!(sink, "[node {}] {line}", self.config.self_rank);
    }

    /// `queueSig` (§4.5): routes a canonical signature to its owning shard,
    /// enqueueing locally if this node owns it or buffering it for the
    /// owning peer otherwise.
    fn queue_sig(&self, sig: String) -> Result<(), SearchError> {
        let owner = owner_of(&sig, self.config.node_count);
        if owner == self.config.self_rank {
            if self.queue.offer(sig) {
                self.discovered.increment();
                self.wait.signal();
            }
        } else {
            let transport = &self.transport;
            let self_rank = self.config.self_rank;
            let mut result = Ok(());
            self.outboxes[owner].enqueue_and_flush(sig, |batch| {
                for s in batch {
                    if let Err(e) = transport.send_signature(self_rank, owner, s) {
                        result = Err(e);
                    }
                }
            });
            result?;
        }
        Ok(())
    }

    fn broadcast_idle(&self, idle: bool) -> Result<(), SearchError> {
        for peer in 0..self.config.node_count {
            if peer == self.config.self_rank {
                continue;
            }
            self.transport.send_idle(self.config.self_rank, peer, idle)?;
        }
        Ok(())
    }

    /// Drains every currently pending inbound frame into `seen`/`local` or
    /// the peer-state table. Returns whether any *new* work arrived, so the
    /// caller can cancel a previously-announced idle status (§4.5: "If an
    /// inbound delivery actually produced new work and this node had been
    /// announcing idle, broadcast a non-idle status update").
    fn drain_incoming(&self) -> Result<bool, SearchError> {
        let mut produced_work = false;
        while let Some(message) = self.transport.try_recv(self.config.self_rank) {
            match message {
                Message::Signature { sig, .. } => {
                    if self.queue.offer(sig) {
                        self.discovered.increment();
                        produced_work = true;
                        self.wait.signal();
                    }
                }
                Message::Idle { from, idle } => {
                    self.peers.set(from, idle);
                }
            }
        }
        if produced_work && self.self_idle.swap(false, Ordering::SeqCst) {
            self.broadcast_idle(false)?;
        }
        Ok(produced_work)
    }

    /// Processes one signature: decode, enumerate Pachner neighbours (§4.4),
    /// canonicalise each (§4.3), and route the result (§4.5 worker loop,
    /// final bullet).
    fn process(&self, sig: &str) -> Result<(), SearchError> {
        let tri = Triangulation::from_signature(self.config.dim, sig)?;
        tri.check_size_budget()?;
        for neighbor in moves::generate_moves(&tri, self.config.ceiling) {
            let canonical = canonicalizer::canonicalize(&neighbor);
            self.queue_sig(canonical)?;
        }
        Ok(())
    }

    fn should_terminate(&self) -> bool {
        self.queue.is_local_empty()
            && self.in_flight.load(Ordering::SeqCst) == 0
            && self.peers.all_idle_except(self.config.self_rank)
    }

    fn worker_loop(&self) -> Result<(), SearchError> {
        loop {
            self.drain_incoming()?;
            match self.queue.pop() {
                Some(sig) => {
                    self.in_flight.fetch_add(1, Ordering::SeqCst);
                    if self.self_idle.swap(false, Ordering::SeqCst) {
                        self.broadcast_idle(false)?;
                    }
                    let result = self.process(&sig);
                    self.in_flight.fetch_sub(1, Ordering::SeqCst);
                    result?;
                }
                None => {
                    if self.in_flight.load(Ordering::SeqCst) == 0
                        && !self.self_idle.swap(true, Ordering::SeqCst)
                    {
                        self.broadcast_idle(true)?;
                    }
                    if self.should_terminate() {
                        return Ok(());
                    }
                    self.wait.park_timeout(IDLE_YIELD);
                }
            }
        }
    }

    /// Seeds this node's queue from `config.seeds` (§4.5 "Startup": "Node 0
    /// canonicalises each seed and routes it via `queueSig`"; every node
    /// canonicalises whatever share of the seed set it was handed, which
    /// degenerates to exactly that rule when only node 0 is given seeds).
    fn seed(&self) -> Result<(), SearchError> {
        for raw in &self.config.seeds {
            let tri = Triangulation::from_signature(self.config.dim, raw)?;
            tri.check_size_budget()?;
            let canonical = canonicalizer::canonicalize(&tri);
            self.queue_sig(canonical)?;
        }
        Ok(())
    }

    /// Runs this node's share of the search to quiescence using
    /// `worker_threads` cooperating OS threads (§4.5/§5's "cooperative task
    /// pool"), then returns what it accumulated.
    ///
    /// Returns [`SearchError::EmptyRun`] if, after seeding, this node has
    /// nothing to do and is not expecting any peer to ever send it work
    /// (i.e. it is the sole node and was started with no seeds).
    pub fn run(self: &Arc<Self>, worker_threads: usize) -> Result<SearchReport, SearchError> {
        self.seed()?;
        if self.config.node_count == 1 && self.queue.is_local_empty() {
            return Err(SearchError::EmptyRun);
        }

        self.log("starting worker pool");
        let runnables: Vec<Box<dyn Runnable + Send + 'static>> = (0..worker_threads.max(1))
            .map(|_| {
                let node = self.clone();
                Box::new(WorkerTask { node }) as Box<dyn Runnable + Send + 'static>
            })
            .collect();
        ThreadedExecutor::with_runnables(runnables).spawn().join();

        self.log(&format!(
            "quiescent: {} signatures owned, {} discovered in total",
            self.queue.seen_len(),
            self.discovered.get()
        ));
        Ok(SearchReport {
            seen: self.queue.seen_snapshot(),
            discovered: self.discovered.get(),
        })
    }
}

struct WorkerTask<T: Transport + 'static> {
    node: Arc<BfsNode<T>>,
}

impl<T: Transport + 'static> Runnable for WorkerTask<T> {
    fn run(self: Box<Self>) {
        // A worker thread propagating a transport error has nothing
        // meaningful left to do (§7: `TransportError` is fatal to the
        // node); there is no supervisor to report back to other than the
        // diagnostics sink, since `Runnable::run` cannot return a `Result`.
        if let Err(e) = self.node.worker_loop() {
            self.node.log(&format!("worker exiting on error: {e}"));
        }
    }
}
