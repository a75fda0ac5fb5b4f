/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! The canonicaliser driver (§4.3): partitions simplices into equal-invariant
//! runs, picks the run with the smallest *total candidate count*
//! (`run_len * automorphismCount()`), and returns the lexicographically
//! smallest encoding among that run's admissible-permutation starts.
//!
//! Trying every simplex and every permutation of every simplex would also be
//! correct (and is what the encoder alone guarantees for any single start),
//! but it is wasteful. Any single equal-invariant run is guaranteed to
//! contain the global minimum (an automorphism of the isomorphism class maps
//! every such run onto itself), so it suffices to search the *cheapest* one
//! rather than, say, the one with the lexicographically smallest invariant
//! value — candidate count, not invariant value, is what bounds the work.
//! This mirrors the original `computeSignature`'s `best = INT32_MAX; if
//! (count < best) …` run-selection loop.

use tri_manifold::Triangulation;

use crate::encoder;
use crate::invariant::SimplexInvariant;

/// Computes the canonical isomorphism signature of `tri`.
///
/// Returns the empty string for an empty triangulation.
pub fn canonicalize(tri: &Triangulation) -> String {
    if tri.is_empty() {
        return String::new();
    }

    let mut indexed: Vec<(usize, SimplexInvariant)> = (0..tri.len())
        .map(|idx| (idx, SimplexInvariant::construct(idx, tri)))
        .collect();
    indexed.sort_by(|a, b| a.1.cmp(&b.1));

    // Partition into maximal equal-invariant runs (§4.1's "run"), then keep
    // the one with the smallest `run_len * automorphismCount()`; ties go to
    // the run encountered first (lowest run index, §4.3).
    let mut best_run: Option<&[(usize, SimplexInvariant)]> = None;
    let mut best_count: Option<u64> = None;
    let mut start = 0;
    while start < indexed.len() {
        let mut end = start + 1;
        while end < indexed.len() && indexed[end].1 == indexed[start].1 {
            end += 1;
        }
        let run = &indexed[start..end];
        let count = run.len() as u64 * indexed[start].1.automorphism_count() as u64;
        if best_count.map(|best| count < best).unwrap_or(true) {
            best_count = Some(count);
            best_run = Some(run);
        }
        start = end;
    }
    let run = best_run.expect("non-empty triangulation partitions into at least one run");

    let mut best: Option<Vec<u8>> = None;
    for (idx, inv) in run {
        for perm in inv.admissible_permutations() {
            let candidate = encoder::encode(tri, *idx, &perm);
            best = Some(match best {
                Some(current) if current <= candidate => current,
                _ => candidate,
            });
        }
    }

    String::from_utf8(best.expect("the selected run has at least one admissible permutation"))
        .expect("signature alphabet is always ASCII")
}
