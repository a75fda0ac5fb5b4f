/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! The simplex invariant (§4.1): a cheap, isomorphism-respecting summary of
//! one simplex's place in its triangulation, used both to rank simplices for
//! the canonicaliser's starting-run selection and to rank a simplex's own
//! vertices for admissible-permutation enumeration.

use std::cmp::Ordering;

use tri_manifold::{Dim, Perm, Triangulation};

/// The invariant of a single simplex. Ordering and equality only ever
/// compare `vertex_degrees_sorted` then `edge_comb_label` — `vertex_degrees`
/// and `incident_edge_degrees` are retained for per-vertex ranking, not for
/// simplex-to-simplex comparison.
#[derive(Debug, Clone)]
pub struct SimplexInvariant {
    vertex_degrees: Vec<u32>,
    vertex_degrees_sorted: Vec<u32>,
    edge_comb_label: Vec<u32>,
    incident_edge_degrees: Vec<Vec<u32>>,
}

impl SimplexInvariant {
    /// Builds the invariant of simplex `idx` in `tri`.
    pub fn construct(idx: usize, tri: &Triangulation) -> Self {
        let dim = tri.dim();
        let arity = dim.vertices() as u8;
        let n = tri.len() as u64;

        let vertex_degrees: Vec<u32> = (0..arity).map(|v| tri.face_degree(idx, &[v])).collect();
        let mut vertex_degrees_sorted = vertex_degrees.clone();
        vertex_degrees_sorted.sort_unstable();

        let edges = tri_manifold::faces::subsets(arity, 2);
        let edge_degrees: Vec<u32> = edges.iter().map(|e| tri.face_degree(idx, e)).collect();

        // `per_edge_combined[e]` is the combined label attributable to edge
        // `e` before the final simplex-wide sort: for D=3 this is just the
        // raw edge degree (the "opposite pair" reduction only happens once,
        // producing `edge_comb_label` directly); for D=4 it is the
        // edge-plus-opposite-triangle label each edge individually carries.
        let (edge_comb_label, per_edge_combined): (Vec<u32>, Vec<u32>) = match dim {
            Dim::Three => {
                const OPPOSITE_PAIRS: [(usize, usize); 3] = [(0, 5), (1, 4), (2, 3)];
                let mut label = Vec::with_capacity(3);
                for &(a, b) in &OPPOSITE_PAIRS {
                    let da = edge_degrees[a] as u64;
                    let db = edge_degrees[b] as u64;
                    let (lo, hi) = if da <= db { (da, db) } else { (db, da) };
                    label.push((lo * n + hi) as u32);
                }
                label.sort_unstable();
                (label, edge_degrees.clone())
            }
            Dim::Four => {
                let mut per_edge = Vec::with_capacity(10);
                for (e_idx, edge) in edges.iter().enumerate() {
                    let triangle = tri_manifold::faces::complement(arity, edge);
                    let d_tri = tri.face_degree(idx, &triangle);
                    per_edge.push((edge_degrees[e_idx] as u64 * n + d_tri as u64) as u32);
                }
                let mut label = per_edge.clone();
                label.sort_unstable();
                (label, per_edge)
            }
        };

        let incident_edge_degrees: Vec<Vec<u32>> = (0..arity)
            .map(|v| {
                let mut vals: Vec<u32> = edges
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.contains(&v))
                    .map(|(e_idx, _)| match dim {
                        Dim::Three => edge_degrees[e_idx],
                        Dim::Four => per_edge_combined[e_idx],
                    })
                    .collect();
                vals.sort_unstable();
                vals
            })
            .collect();

        Self {
            vertex_degrees,
            vertex_degrees_sorted,
            edge_comb_label,
            incident_edge_degrees,
        }
    }

    /// Ordering key for one local vertex `v`: `(vertex_degrees[v],
    /// incident_edge_degrees[v])`, compared lexicographically.
    fn vertex_rank_key(&self, v: u8) -> (u32, &[u32]) {
        (self.vertex_degrees[v as usize], &self.incident_edge_degrees[v as usize])
    }

    /// `vertex_rank(i) <= vertex_rank(j)` under the ordering
    /// [`SimplexInvariant::vertex_rank_key`] induces on this simplex's local
    /// vertices.
    pub fn vertex_rank(&self, v: u8) -> usize {
        let key = self.vertex_rank_key(v);
        (0..self.vertex_degrees.len() as u8)
            .filter(|&w| self.vertex_rank_key(w) < key)
            .count()
    }

    /// Every admissible vertex permutation of this simplex: a permutation
    /// `pi` (mapping local vertex labels to canonical positions `0..D+1`) is
    /// admissible iff walking canonical positions ascending visits local
    /// vertices in non-decreasing rank order. Returned in ascending
    /// permutation-rank order.
    pub fn admissible_permutations(&self) -> Vec<Perm> {
        let arity = self.vertex_degrees.len() as u8;
        let total = Perm::count(arity);
        let mut out = Vec::new();
        for rank in 0..total {
            let perm = Perm::from_rank(arity, rank);
            if self.is_admissible(&perm) {
                out.push(perm);
            }
        }
        out
    }

    fn is_admissible(&self, perm: &Perm) -> bool {
        let arity = self.vertex_degrees.len() as u8;
        let mut prev: Option<(u32, &[u32])> = None;
        for c in 0..arity {
            let v = perm.preimage_of(c);
            let key = self.vertex_rank_key(v);
            if let Some(prev_key) = prev {
                if key < prev_key {
                    return false;
                }
            }
            prev = Some(key);
        }
        true
    }

    /// `|Aut(simplex)|` restricted to vertex relabellings consistent with
    /// this invariant: the product, over maximal runs of vertices sharing a
    /// rank, of the run length's factorial. Agrees with
    /// `admissible_permutations().len()` by construction.
    pub fn automorphism_count(&self) -> u32 {
        let arity = self.vertex_degrees.len() as u8;
        let mut keys: Vec<(u32, &[u32])> = (0..arity).map(|v| self.vertex_rank_key(v)).collect();
        keys.sort();
        let mut count: u32 = 1;
        let mut run = 1u32;
        for i in 1..keys.len() {
            if keys[i] == keys[i - 1] {
                run += 1;
            } else {
                count *= factorial(run);
                run = 1;
            }
        }
        count *= factorial(run);
        count
    }
}

fn factorial(n: u32) -> u32 {
    (1..=n).product::<u32>().max(1)
}

impl PartialEq for SimplexInvariant {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_degrees_sorted == other.vertex_degrees_sorted
            && self.edge_comb_label == other.edge_comb_label
    }
}

impl Eq for SimplexInvariant {}

impl PartialOrd for SimplexInvariant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimplexInvariant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.vertex_degrees_sorted
            .cmp(&other.vertex_degrees_sorted)
            .then_with(|| self.edge_comb_label.cmp(&other.edge_comb_label))
    }
}
