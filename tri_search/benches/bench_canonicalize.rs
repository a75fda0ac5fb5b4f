/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tri_manifold::{Dim, Gluing, Perm, Simplex, Triangulation};
use tri_search::canonicalizer;
use tri_search::invariant::SimplexInvariant;

fn two_tetrahedra_sphere() -> Triangulation {
    let mut a = Simplex::new(4);
    let mut b = Simplex::new(4);
    for f in 0..4u8 {
        a.set_facet(f, Some(Gluing { neighbor: 1, perm: Perm::identity(4) }));
        b.set_facet(f, Some(Gluing { neighbor: 0, perm: Perm::identity(4) }));
    }
    Triangulation::from_simplices(Dim::Three, vec![a, b]).unwrap()
}

fn invariant_construct_benchmark(c: &mut Criterion) {
    let tri = two_tetrahedra_sphere();
    c.bench_function("simplex_invariant_construct", |b| {
        b.iter(|| black_box(SimplexInvariant::construct(0, &tri)))
    });
}

fn canonicalize_benchmark(c: &mut Criterion) {
    let tri = two_tetrahedra_sphere();
    c.bench_function("canonicalize_two_tetrahedra", |b| {
        b.iter(|| black_box(canonicalizer::canonicalize(&tri)))
    });
}

criterion_group!(benches, invariant_construct_benchmark, canonicalize_benchmark);
criterion_main!(benches);
