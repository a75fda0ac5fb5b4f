/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! The move generator (§4.4): every legal Pachner move reachable from one
//! triangulation in a single step, subject to the simplex-count ceiling `K`.
//!
//! Every move is the generic bistellar pivot
//! (`tri_manifold::Triangulation::pachner_legal`/`pachner_commit`) applied at
//! a face of a particular size. A pivot on an `i`-vertex face turns a ring of
//! `j = D+2-i` simplices into `i` new ones, so the net change in simplex
//! count is always `i - j`; moves that grow the triangulation are only
//! generated when the result would stay within `ceiling`.
//!
//! A shared face is reachable from any of its `j` ring members' own local
//! vertex labelling, so naively looping over every `(simplex, sigma)` pair
//! would commit the same physical pivot once per ring member. Each ring's
//! sorted member-simplex set is tracked per move kind so every physical
//! move is only committed once, matching spec.md §8 scenario 5 ("three
//! legal 2-3 moves" means three distinct faces, not three-times-however-many
//! simplices touch them).

use std::collections::HashSet;

use tri_manifold::{faces, Dim, Triangulation};

/// One face size this dimension pivots on, and the post-move size bound (if
/// any) that must hold before the move is attempted.
struct MoveKind {
    sigma_size: u8,
    /// Net change in simplex count (`i - j`).
    delta: i64,
}

fn move_kinds(dim: Dim) -> &'static [MoveKind] {
    match dim {
        Dim::Three => &[
            MoveKind { sigma_size: 2, delta: -1 }, // 3-2, on every edge
            MoveKind { sigma_size: 3, delta: 1 },  // 2-3, on every triangle (facet)
        ],
        Dim::Four => &[
            MoveKind { sigma_size: 1, delta: -4 }, // 5-1, on every vertex
            MoveKind { sigma_size: 2, delta: -2 }, // 4-2, on every edge
            MoveKind { sigma_size: 3, delta: 0 },  // 3-3, on every triangle
            MoveKind { sigma_size: 4, delta: 2 },  // 2-4, on every tetrahedron (facet)
            MoveKind { sigma_size: 5, delta: 4 },  // 1-5, on every pentachoron (the whole simplex)
        ],
    }
}

/// Every triangulation reachable from `tri` by a single legal Pachner move
/// that does not push the simplex count past `ceiling`.
pub fn generate_moves(tri: &Triangulation, ceiling: usize) -> Vec<Triangulation> {
    let arity = tri.dim().vertices() as u8;
    let n = tri.len() as i64;
    let mut out = Vec::new();

    for kind in move_kinds(tri.dim()) {
        if kind.delta > 0 && n + kind.delta > ceiling as i64 {
            continue;
        }
        let sigma_choices = faces::subsets(arity, kind.sigma_size);
        let mut seen_rings: HashSet<Vec<usize>> = HashSet::new();
        for simplex in 0..tri.len() {
            for sigma in &sigma_choices {
                let Some(members) = tri.pachner_ring_members(simplex, sigma) else {
                    continue;
                };
                if !seen_rings.insert(members) {
                    continue;
                }
                let mut next = tri.clone();
                next.pachner_commit(simplex, sigma)
                    .expect("pachner_ring_members just confirmed this move is legal");
                out.push(next);
            }
        }
    }
    out
}
