/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! Shared fixture triangulations for the `tri_search` integration tests,
//! matching spec.md §8's end-to-end scenarios.

#![allow(dead_code)]

use tri_manifold::{Dim, Gluing, Perm, Simplex, Triangulation};

/// The minimal 3-sphere: two tetrahedra glued along all four facets via the
/// identity (scenario 2 of spec.md §8).
pub fn two_tetrahedra_sphere() -> Triangulation {
    let mut a = Simplex::new(4);
    let mut b = Simplex::new(4);
    for f in 0..4u8 {
        a.set_facet(f, Some(Gluing { neighbor: 1, perm: Perm::identity(4) }));
        b.set_facet(f, Some(Gluing { neighbor: 0, perm: Perm::identity(4) }));
    }
    Triangulation::from_simplices(Dim::Three, vec![a, b]).unwrap()
}

/// The standard one-pentachoron 4-sphere: a single pentachoron with every
/// facet glued to itself via a fixed-point-free involution pairing opposite
/// vertices is not well-defined for an odd arity, so instead every facet is
/// glued back to the simplex itself through the permutation that swaps the
/// two vertices not on that facet and fixes the rest — the standard
/// construction of a 1-pentachoron triangulation of S^4 (scenario 1 of
/// spec.md §8).
pub fn one_pentachoron_sphere() -> Triangulation {
    let mut s = Simplex::new(5);
    for f in 0..5u8 {
        // facet f omits vertex f; glue it to itself via the transposition
        // of the two vertices adjacent to f in a 5-cycle, which maps facet
        // f to itself (f is the only vertex excluded from both sides).
        let other = (f + 1) % 5;
        let mut images = [0u8, 1, 2, 3, 4];
        // Swap `other` with the vertex two steps ahead, leaving f itself
        // and the remaining vertex fixed, so the whole permutation fixes f.
        let third = (f + 2) % 5;
        images.swap(other as usize, third as usize);
        let perm = Perm::from_images(&images);
        s.set_facet(f, Some(Gluing { neighbor: 0, perm }));
    }
    Triangulation::from_simplices(Dim::Four, vec![s]).unwrap()
}

/// Applies `perm` to every simplex's local vertex labelling (recomputing
/// every gluing permutation accordingly) without changing the set of
/// simplices or their gluings' combinatorial meaning — an isomorphism that
/// fixes the simplex indexing but relabels vertices uniformly.
pub fn relabel_vertices_uniformly(tri: &Triangulation, perm: &Perm) -> Triangulation {
    let simplices: Vec<Simplex> = tri
        .simplices()
        .iter()
        .map(|s| {
            let mut new_s = Simplex::new(s.arity());
            for f in 0..s.arity() {
                if let Some(g) = s.facet(f) {
                    let new_f = perm.image(f);
                    let new_perm = perm.compose(&g.perm).compose(&perm.inverse());
                    new_s.set_facet(new_f, Some(Gluing { neighbor: g.neighbor, perm: new_perm }));
                }
            }
            new_s
        })
        .collect();
    Triangulation::from_simplices(tri.dim(), simplices).unwrap()
}

/// Applies a simplex-index permutation (given as `new_index_of[old_index]`)
/// to `tri`, producing an isomorphic triangulation with simplices reordered.
pub fn relabel_simplices(tri: &Triangulation, new_index_of: &[usize]) -> Triangulation {
    let n = tri.len();
    let mut out = vec![Simplex::new(tri.dim().vertices() as u8); n];
    for (old_idx, simplex) in tri.simplices().iter().enumerate() {
        let new_idx = new_index_of[old_idx];
        let mut new_s = Simplex::new(simplex.arity());
        for f in 0..simplex.arity() {
            if let Some(g) = simplex.facet(f) {
                new_s.set_facet(f, Some(Gluing { neighbor: new_index_of[g.neighbor], perm: g.perm }));
            }
        }
        out[new_idx] = new_s;
    }
    Triangulation::from_simplices(tri.dim(), out).unwrap()
}
