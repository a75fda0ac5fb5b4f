/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
use tri_manifold::{Gluing, Perm, Simplex};

#[test]
fn new_simplex_is_all_boundary() {
    let s = Simplex::new(4);
    for f in 0..4 {
        assert!(s.is_boundary(f));
    }
}

#[test]
fn set_and_read_facet() {
    let mut s = Simplex::new(4);
    let g = Gluing {
        neighbor: 2,
        perm: Perm::identity(4),
    };
    s.set_facet(1, Some(g));
    assert!(!s.is_boundary(1));
    assert_eq!(s.facet(1).unwrap().neighbor, 2);
}
