/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tri_concurrency::dedup_queue::DedupQueue;
use tri_concurrency::sequence::AtomicCounter;

fn dedup_queue_benchmark(c: &mut Criterion) {
    let queue: DedupQueue<u64> = DedupQueue::new();

    c.bench_function("dedup_queue_offer_fresh", |b| {
        let mut next = 0u64;
        b.iter(|| {
            black_box(queue.offer(next));
            next += 1;
        })
    });

    c.bench_function("dedup_queue_offer_duplicate", |b| {
        queue.offer(1_000_000);
        b.iter(|| {
            black_box(queue.offer(1_000_000));
        })
    });

    c.bench_function("dedup_queue_pop_and_requeue", |b| {
        queue.offer(2_000_000);
        b.iter(|| {
            if let Some(item) = queue.pop() {
                black_box(item);
                queue.offer(item);
                queue.pop();
                queue.offer(item);
            }
        })
    });
}

fn atomic_counter_benchmark(c: &mut Criterion) {
    let counter = AtomicCounter::new(0);
    c.bench_function("atomic_counter_increment", |b| {
        b.iter(|| {
            black_box(counter.increment());
        })
    });
}

criterion_group! {
    name = dedup_queue;
    config = Criterion::default().sample_size(100);
    targets = dedup_queue_benchmark, atomic_counter_benchmark
}

criterion_main!(dedup_queue);
