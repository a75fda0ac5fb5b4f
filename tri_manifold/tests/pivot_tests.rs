/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
use tri_manifold::perm::Perm;
use tri_manifold::pivot::discover_ring;
use tri_manifold::simplex::{Gluing, Simplex};

/// Two tetrahedra glued along every facet via the identity permutation,
/// forming the boundary of a 4-simplex projected down — not a genuine
/// manifold, but enough structure to exercise ring discovery on a trivial
/// (already-minimal) `j=2` case.
fn two_glued_tetrahedra() -> Vec<Simplex> {
    let mut a = Simplex::new(4);
    let mut b = Simplex::new(4);
    for f in 0..4u8 {
        a.set_facet(
            f,
            Some(Gluing {
                neighbor: 1,
                perm: Perm::identity(4),
            }),
        );
        b.set_facet(
            f,
            Some(Gluing {
                neighbor: 0,
                perm: Perm::identity(4),
            }),
        );
    }
    vec![a, b]
}

#[test]
fn trivial_two_simplex_ring_discovers_both_with_j_equals_two() {
    let simplices = two_glued_tetrahedra();
    // sigma = the facet-0 triangle {1,2,3} (3 sigma vertices), j = 5-3 = 2.
    let ring = discover_ring(&simplices, 0, &[1, 2, 3]).expect("ring discovers");
    assert_eq!(ring.tau_len(), 2);
    assert_eq!(ring.len(), 2);
}
