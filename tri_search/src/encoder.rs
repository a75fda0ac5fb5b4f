/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! The canonical encoder (§4.2): a breadth-first relabelling of one
//! simplex's image under a starting vertex permutation, serialised into the
//! compact signature alphabet.
//!
//! This is the exact inverse of `tri_manifold::Triangulation::from_signature`
//! — the pairing this module owns is that decoder's algorithm run backwards.
//! The string layout follows §4.2's three trailing blocks in order: the full
//! facet-action trit stream, then every join destination, then every join
//! gluing permutation — see `DESIGN.md` for the one header field (a trit
//! count) this implementation adds beyond the literal spec text so the
//! decoder can locate the join-destination block without needing join data
//! before the trit stream that depends on it is fully read.

use std::collections::HashMap;

use tri_manifold::{alphabet, Perm, Triangulation};

enum Action {
    Boundary,
    New,
    Join { dest: usize, perm_rank: u32 },
}

/// Encodes `tri`'s connected component reachable from `start`, with `pi0`
/// assigning `start`'s local vertex labels to canonical positions `0..D+1`.
///
/// Produces the empty string for an empty triangulation, matching
/// `Triangulation::from_signature`'s acceptance of `""` as the empty
/// triangulation.
pub fn encode(tri: &Triangulation, start: usize, pi0: &Perm) -> Vec<u8> {
    if tri.is_empty() {
        return Vec::new();
    }
    let arity = tri.dim().vertices() as u8;

    let mut image_of: HashMap<usize, usize> = HashMap::new();
    let mut vertex_map: Vec<Perm> = Vec::new();
    let mut order: Vec<usize> = Vec::new();
    let mut resolved: Vec<Vec<bool>> = Vec::new();

    image_of.insert(start, 0);
    vertex_map.push(*pi0);
    order.push(start);
    resolved.push(vec![false; arity as usize]);

    let mut events: Vec<Action> = Vec::new();

    let mut oi = 0usize;
    while oi < order.len() {
        let p_src = order[oi];
        let p_img = oi;
        for f in 0..arity {
            if resolved[p_img][f as usize] {
                continue;
            }
            let vm_p = vertex_map[p_img];
            let f_src = vm_p.preimage_of(f);
            match tri.simplex(p_src).facet(f_src) {
                None => {
                    resolved[p_img][f as usize] = true;
                    events.push(Action::Boundary);
                }
                Some(g) => {
                    let q_src = g.neighbor;
                    if let Some(&q_img) = image_of.get(&q_src) {
                        let vm_q = vertex_map[q_img];
                        let out_perm = vm_q.compose(&g.perm).compose(&vm_p.inverse());
                        let back_f = out_perm.image(f);
                        resolved[p_img][f as usize] = true;
                        resolved[q_img][back_f as usize] = true;
                        events.push(Action::Join {
                            dest: q_img,
                            perm_rank: out_perm.rank(),
                        });
                    } else {
                        // A freshly discovered neighbour always gets its
                        // canonical labelling chosen so the gluing just
                        // discovered is the identity: vertex_map[dest] =
                        // vertex_map[p] . g^-1 makes
                        // vertex_map[dest] . g . vertex_map[p]^-1 cancel to
                        // the identity, so the back-facet is `f` itself and
                        // nothing needs to be stored for it.
                        let dest_img = order.len();
                        let vm_dest = vm_p.compose(&g.perm.inverse());
                        image_of.insert(q_src, dest_img);
                        vertex_map.push(vm_dest);
                        order.push(q_src);
                        resolved.push(vec![false; arity as usize]);
                        resolved[p_img][f as usize] = true;
                        resolved[dest_img][f as usize] = true;
                        events.push(Action::New);
                    }
                }
            }
        }
        oi += 1;
    }

    let n = order.len();
    let perm_chars = tri.dim().chars_per_perm();
    let dest_width = alphabet::chars_needed(n as u64).max(1);
    let trit_count_width = alphabet::chars_needed(n as u64 * arity as u64).max(1);

    let mut out: Vec<u8> = Vec::new();
    if n < alphabet::SENTINEL as usize {
        out.push(alphabet::char_for_index(n as u8));
    } else {
        out.push(alphabet::char_for_index(alphabet::SENTINEL));
        let width = alphabet::chars_needed(n as u64);
        out.push(alphabet::char_for_index(width as u8));
        alphabet::append_int(&mut out, n as u64, width);
    }
    alphabet::append_int(&mut out, events.len() as u64, trit_count_width);

    // Block 1: the full facet-action trit stream, packed three per
    // character (§4.2's "String layout").
    let mut pending: Vec<u8> = Vec::with_capacity(3);
    for action in &events {
        let trit = match action {
            Action::Boundary => 0,
            Action::New => 1,
            Action::Join { .. } => 2,
        };
        pending.push(trit);
        if pending.len() == 3 {
            out.push(alphabet::pack_trits(&pending));
            pending.clear();
        }
    }
    if !pending.is_empty() {
        while pending.len() < 3 {
            pending.push(0);
        }
        out.push(alphabet::pack_trits(&pending));
    }

    // Block 2: one join destination per `Join` action, in encounter order.
    for action in &events {
        if let Action::Join { dest, .. } = action {
            alphabet::append_int(&mut out, *dest as u64, dest_width);
        }
    }

    // Block 3: one join gluing permutation per `Join` action, in the same
    // order as block 2.
    for action in &events {
        if let Action::Join { perm_rank, .. } = action {
            alphabet::append_int(&mut out, *perm_rank as u64, perm_chars);
        }
    }

    out
}

/// Encodes `tri` as a string for convenience at call sites that don't need
/// the raw bytes (every canonical signature is ASCII by construction, since
/// the alphabet is a fixed 64-byte ASCII table).
pub fn encode_to_string(tri: &Triangulation, start: usize, pi0: &Perm) -> String {
    String::from_utf8(encode(tri, start, pi0)).expect("signature alphabet is always ASCII")
}
