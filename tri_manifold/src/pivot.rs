/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! Generic bistellar (Pachner) pivot: discovering the ring of simplices
//! around a shared low-dimensional face, and rebuilding the triangulation
//! with that ring replaced by its dual.
//!
//! Every Pachner move in §4.4 (2-3/3-2 for D=3; 1-5/5-1, 2-4/4-2, 3-3 for
//! D=4) is an instance of the same combinatorial pattern: a face `sigma`
//! with `i` local vertices is shared by `j = D+2-i` top simplices ("the
//! ring"), each of the form `sigma ∪ (tau \ {m})` for one of `j` outer
//! ("tau") vertices; the move replaces the ring with `i` new simplices, each
//! `tau ∪ (sigma \ {p})` for one of the `i` sigma vertices. This module
//! implements that pattern once; `Triangulation::pachner_legal`/
//! `pachner_commit` drive it per move type.

use crate::perm::Perm;
use crate::simplex::{Gluing, Simplex};

/// One element of a discovered ring: the old simplex that plays the role of
/// "before-simplex missing tau label `missing_tau`", together with a map
/// from abstract label (`0..i` for sigma labels, `i..i+j` for tau labels) to
/// this simplex's local vertex index.
#[derive(Debug, Clone)]
struct RingElement {
    simplex: usize,
    missing_tau: usize,
    local_of: Vec<Option<u8>>,
}

/// A fully discovered ring: `j` elements indexed by tau label `0..j`.
#[derive(Debug, Clone)]
pub struct Ring {
    sigma_len: usize,
    tau_len: usize,
    elements: Vec<RingElement>,
}

impl Ring {
    /// `i`, the number of sigma (shared-face) vertices.
    pub fn sigma_len(&self) -> usize {
        self.sigma_len
    }

    /// `j`, the number of simplices in the ring (and of tau labels).
    pub fn tau_len(&self) -> usize {
        self.tau_len
    }

    /// Number of simplices the discovered ring spans.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The simplex indices spanned by this ring, in tau-label order
    /// (`member_simplices()[m]` is the simplex carrying tau label `m`).
    /// Lets callers recognise when two `(simplex, sigma)` starts discover
    /// the same physical ring, so a move generator can dedupe before
    /// committing the same pivot twice.
    pub fn member_simplices(&self) -> Vec<usize> {
        self.elements.iter().map(|e| e.simplex).collect()
    }
}

/// Discovers the ring of simplices sharing the face `sigma_locals` (local
/// vertex indices, within `start`) of the simplex at index `start`. Returns
/// `None` if the face's link is not a valid, closed ring (boundary facet
/// encountered where an internal one was needed, inconsistent relabelling,
/// or the `j` ring simplices are not pairwise distinct).
pub fn discover_ring(simplices: &[Simplex], start: usize, sigma_locals: &[u8]) -> Option<Ring> {
    let arity = simplices[start].arity() as usize;
    let d = arity - 1;
    let i = sigma_locals.len();
    if i == 0 || i > d + 1 {
        return None;
    }
    let j = d + 2 - i;

    let mut outer: Vec<u8> = (0..arity as u8).filter(|v| !sigma_locals.contains(v)).collect();
    outer.sort_unstable();
    if outer.len() != j - 1 {
        return None;
    }

    let mut first = RingElement {
        simplex: start,
        missing_tau: j - 1,
        local_of: vec![None; i + j],
    };
    for (k, &loc) in sigma_locals.iter().enumerate() {
        first.local_of[k] = Some(loc);
    }
    for (m, &loc) in outer.iter().enumerate() {
        first.local_of[i + m] = Some(loc);
    }

    let mut by_label: Vec<Option<RingElement>> = vec![None; j];
    by_label[j - 1] = Some(first);

    let mut frontier = vec![j - 1];
    while let Some(label) = frontier.pop() {
        let present_taus: Vec<usize> = (0..j)
            .filter(|&m| m != by_label[label].as_ref().unwrap().missing_tau)
            .collect();
        for m in present_taus {
            let elem = by_label[label].as_ref().unwrap();
            let local = elem.local_of[i + m]?;
            let gluing = simplices[elem.simplex].facet(local)?;
            let discovered = propagate(elem, local, gluing, i, m);
            match &by_label[m] {
                Some(existing) => {
                    if existing.simplex != discovered.simplex {
                        return None;
                    }
                }
                None => {
                    by_label[m] = Some(discovered);
                    frontier.push(m);
                }
            }
        }
    }

    let mut elements = Vec::with_capacity(j);
    let mut seen_simplices = Vec::with_capacity(j);
    for slot in by_label {
        let elem = slot?;
        if seen_simplices.contains(&elem.simplex) {
            return None;
        }
        seen_simplices.push(elem.simplex);
        elements.push(elem);
    }

    let ring = Ring {
        sigma_len: i,
        tau_len: j,
        elements,
    };
    if ring_is_externally_clean(simplices, &ring) {
        Some(ring)
    } else {
        None
    }
}

/// Builds the ring element reached by stepping from `elem` through the
/// facet opposite its local representation of tau label `m` (at local
/// index `local`), landing at "before-simplex missing tau label `m`".
///
/// `elem` itself never has a local vertex for its own `missing_tau` label;
/// that label becomes present on the *other* side of this gluing instead
/// (this shared facet is, from the far side, the facet opposite
/// `elem.missing_tau`), recovered as the image of the dropped vertex.
fn propagate(elem: &RingElement, local: u8, gluing: &Gluing, i: usize, m: usize) -> RingElement {
    let mut local_of = vec![None; elem.local_of.len()];
    for (label, slot) in elem.local_of.iter().enumerate() {
        if label == i + m {
            continue;
        }
        if let Some(old_local) = slot {
            local_of[label] = Some(gluing.perm.image(*old_local));
        }
    }
    local_of[i + elem.missing_tau] = Some(gluing.perm.image(local));
    RingElement {
        simplex: gluing.neighbor,
        missing_tau: m,
        local_of,
    }
}

/// Checks that a discovered ring's external (sigma-facet) neighbours never
/// land back inside the ring itself — a degenerate configuration this
/// implementation declines to pivot on.
fn ring_is_externally_clean(simplices: &[Simplex], ring: &Ring) -> bool {
    let ring_simplices: Vec<usize> = ring.elements.iter().map(|e| e.simplex).collect();
    for elem in &ring.elements {
        for p in 0..ring.sigma_len {
            let local = elem.local_of[p].unwrap();
            if let Some(gluing) = simplices[elem.simplex].facet(local) {
                if ring_simplices.contains(&gluing.neighbor) {
                    return false;
                }
            }
        }
    }
    true
}

/// Whether the face `sigma_locals` of `simplices[start]` admits a legal
/// pivot: its ring is well-formed, closed, and externally clean.
pub fn legal_pivot(simplices: &[Simplex], start: usize, sigma_locals: &[u8]) -> bool {
    discover_ring(simplices, start, sigma_locals).is_some()
}

/// Sorted list of sigma labels other than `p`.
fn sigma_excluding(sigma_len: usize, p: usize) -> Vec<usize> {
    (0..sigma_len).filter(|&q| q != p).collect()
}

/// Rebuilds the triangulation's simplex list with the ring replaced by its
/// dual. Panics only if `ring` was not validated with [`legal_pivot`] first
/// (the documented precondition of every call site in
/// [`crate::Triangulation`]).
pub fn apply_pivot(simplices: &[Simplex], ring: &Ring) -> Vec<Simplex> {
    let i = ring.sigma_len;
    let j = ring.tau_len;
    let new_arity = (i + j - 1) as u8;

    let ring_old: Vec<usize> = ring.elements.iter().map(|e| e.simplex).collect();
    let kept_old: Vec<usize> = (0..simplices.len())
        .filter(|idx| !ring_old.contains(idx))
        .collect();
    let mut old_to_new = vec![usize::MAX; simplices.len()];
    for (new_idx, &old_idx) in kept_old.iter().enumerate() {
        old_to_new[old_idx] = new_idx;
    }
    let after_base = kept_old.len();

    let mut out: Vec<Simplex> = kept_old
        .iter()
        .map(|&old_idx| simplices[old_idx].clone())
        .collect();
    out.extend((0..i).map(|_| Simplex::new(new_arity)));

    // Remap every kept-old simplex's gluings to the new index space. A
    // gluing that pointed into the ring is, by `ring_is_externally_clean`,
    // impossible on a legal pivot's kept simplices — those back-edges are
    // installed explicitly below instead.
    for (new_idx, &old_idx) in kept_old.iter().enumerate() {
        for f in 0..out[new_idx].arity() {
            if let Some(g) = simplices[old_idx].facet(f).copied() {
                out[new_idx].set_facet(f, Some(Gluing {
                    neighbor: old_to_new[g.neighbor],
                    perm: g.perm,
                }));
            }
        }
    }

    // Tau-label facets: external gluings inherited from each ring element's
    // sigma-label facets, with the reverse edge installed on the kept
    // neighbour.
    for (m, elem) in ring.elements.iter().enumerate() {
        for p in 0..i {
            let old_local = elem.local_of[p].unwrap();
            let after_idx = after_base + p;
            match simplices[elem.simplex].facet(old_local) {
                None => out[after_idx].set_facet(m as u8, None),
                Some(old_gluing) => {
                    let new_perm = transport_perm(elem, old_gluing, i, j, m, p);
                    let neighbor_new = old_to_new[old_gluing.neighbor];
                    out[after_idx].set_facet(m as u8, Some(Gluing {
                        neighbor: neighbor_new,
                        perm: new_perm,
                    }));
                    let back_local = old_gluing.perm.image(old_local);
                    out[neighbor_new].set_facet(back_local, Some(Gluing {
                        neighbor: after_base + p,
                        perm: new_perm.inverse(),
                    }));
                }
            }
        }
    }

    // Sigma-label facets: internal gluings between the `i` new simplices.
    for p in 0..i {
        let excl_p = sigma_excluding(i, p);
        for (t, &q) in excl_p.iter().enumerate() {
            let local_p_in_p = (j + t) as u8;
            let excl_q = sigma_excluding(i, q);
            let t_in_q = excl_q.iter().position(|&v| v == p).unwrap();
            let local_q_in_q = (j + t_in_q) as u8;

            let mut images = vec![0u8; i + j - 1];
            for x in 0..j {
                images[x] = x as u8;
            }
            for (t2, &label) in excl_p.iter().enumerate() {
                let pos_in_q = if label == q {
                    t_in_q
                } else {
                    excl_q.iter().position(|&v| v == label).unwrap()
                };
                images[j + t2] = (j + pos_in_q) as u8;
            }
            let perm = Perm::from_images(&images);

            out[after_base + p].set_facet(local_p_in_p, Some(Gluing {
                neighbor: after_base + q,
                perm,
            }));
        }
    }

    out
}

/// Builds the new gluing permutation from `after_p`'s local numbering (tau
/// labels `0..j` then the `i-1` sigma labels other than `p`, in ascending
/// order) to the old neighbour's numbering, given the old gluing discovered
/// at `elem`'s local representation of sigma label `p`.
fn transport_perm(elem: &RingElement, old_gluing: &Gluing, i: usize, j: usize, m: usize, p: usize) -> Perm {
    let arity = i + j - 1;
    let mut images = vec![0u8; arity];
    let old_local_p = elem.local_of[p].unwrap();
    images[m] = old_gluing.perm.image(old_local_p);
    for x in 0..j {
        if x == m {
            continue;
        }
        let old_local = elem.local_of[i + x].unwrap();
        images[x] = old_gluing.perm.image(old_local);
    }
    let excl_p = sigma_excluding(i, p);
    for (t, &label) in excl_p.iter().enumerate() {
        let old_local = elem.local_of[label].unwrap();
        images[j + t] = old_gluing.perm.image(old_local);
    }
    Perm::from_images(&images)
}
