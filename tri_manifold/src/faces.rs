/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! Enumeration of `k`-vertex subsets of a simplex's local vertex set, in
//! lexicographic order. This fixes the standard numbering of edges
//! (2-subsets) and, for D=4, triangles (3-subsets) used throughout the
//! invariant and pivot code: edge index 0 of a tetrahedron is `{0,1}`, index
//! 5 is `{2,3}`, matching the classical opposite pairing `(0,5),(1,4),(2,3)`
//! used in spec.md's `edgeCombLabel`.

/// All `size`-element increasing subsets of `0..arity`, in lexicographic
/// order.
pub fn subsets(arity: u8, size: u8) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(size as usize);
    subsets_rec(arity, size, 0, &mut current, &mut out);
    out
}

fn subsets_rec(arity: u8, size: u8, start: u8, current: &mut Vec<u8>, out: &mut Vec<Vec<u8>>) {
    if current.len() as u8 == size {
        out.push(current.clone());
        return;
    }
    let mut v = start;
    while v + (size - current.len() as u8) <= arity {
        current.push(v);
        subsets_rec(arity, size, v + 1, current, out);
        current.pop();
        v += 1;
    }
}

/// The complement of `subset` within `0..arity`.
pub fn complement(arity: u8, subset: &[u8]) -> Vec<u8> {
    (0..arity).filter(|v| !subset.contains(v)).collect()
}
