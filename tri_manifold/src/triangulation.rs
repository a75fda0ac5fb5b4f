/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! The concrete triangulation collaborator (§3.1/§6): a list of simplices
//! glued along facets, plus the derived face-degree queries the invariant
//! and move generator build on.

use std::collections::HashSet;

use crate::alphabet;
use crate::dim::Dim;
use crate::errors::TriangulationError;
use crate::faces;
use crate::perm::Perm;
use crate::pivot;
use crate::simplex::{Gluing, Simplex};

/// A 3- or 4-dimensional simplicial pseudomanifold triangulation: a flat
/// list of top simplices with symmetric facet gluings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangulation {
    dim: Dim,
    simplices: Vec<Simplex>,
}

/// Vertex, edge, and (D=4 only) triangle degrees of every simplex's local
/// faces, computed by the pseudomanifold face-walk of
/// [`Triangulation::face_degree`]. A snapshot, not a live cache: callers
/// that mutate the triangulation via a Pachner move should request a fresh
/// lattice afterwards.
#[derive(Debug, Clone)]
pub struct FaceLattice {
    pub vertex_degree: Vec<Vec<u32>>,
    pub edge_degree: Vec<Vec<u32>>,
    pub triangle_degree: Vec<Vec<u32>>,
}

impl Triangulation {
    /// An empty triangulation of the given dimension.
    pub fn empty(dim: Dim) -> Self {
        Self {
            dim,
            simplices: Vec::new(),
        }
    }

    /// Builds a triangulation from already-constructed simplices, checking
    /// that every gluing is symmetric (§3's invariant) before accepting it.
    pub fn from_simplices(dim: Dim, simplices: Vec<Simplex>) -> Result<Self, TriangulationError> {
        let expected_arity = dim.vertices() as u8;
        for (idx, s) in simplices.iter().enumerate() {
            if s.arity() != expected_arity {
                return Err(TriangulationError::MalformedSignature(format!(
                    "simplex {idx} has arity {} but dimension requires {expected_arity}",
                    s.arity()
                )));
            }
        }
        let tri = Self { dim, simplices };
        tri.check_symmetric_gluings()?;
        Ok(tri)
    }

    fn check_symmetric_gluings(&self) -> Result<(), TriangulationError> {
        for (idx, s) in self.simplices.iter().enumerate() {
            for f in 0..s.arity() {
                if let Some(g) = s.facet(f) {
                    let back = self
                        .simplices
                        .get(g.neighbor)
                        .ok_or_else(|| {
                            TriangulationError::MalformedSignature(format!(
                                "simplex {idx} facet {f} glues to out-of-range simplex {}",
                                g.neighbor
                            ))
                        })?
                        .facet(g.perm.image(f));
                    match back {
                        Some(back) if back.neighbor == idx && back.perm == g.perm.inverse() => {}
                        _ => {
                            return Err(TriangulationError::MalformedSignature(format!(
                                "simplex {idx} facet {f} gluing is not symmetric"
                            )))
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn dim(&self) -> Dim {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    pub fn simplex(&self, idx: usize) -> &Simplex {
        &self.simplices[idx]
    }

    pub fn simplices(&self) -> &[Simplex] {
        &self.simplices
    }

    /// Enforces the `|T|^2 < 2^31` budget spec.md's `edgeCombLabel` relies
    /// on fitting in 32 bits.
    pub fn check_size_budget(&self) -> Result<(), TriangulationError> {
        let n = self.simplices.len();
        if n.checked_mul(n).map(|sq| sq >= (1usize << 31)).unwrap_or(true) {
            return Err(TriangulationError::SizeOverflow { simplices: n });
        }
        Ok(())
    }

    /// The degree (incidence count, with multiplicity) of the local face
    /// `local_face` of `simplex`: the number of `(simplex, local-face)`
    /// incidences reachable by following gluings around that face's closed
    /// link. `local_face` must be sorted ascending local vertex indices.
    pub fn face_degree(&self, simplex: usize, local_face: &[u8]) -> u32 {
        self.face_orbit(simplex, local_face).len() as u32
    }

    fn face_orbit(&self, simplex: usize, local_face: &[u8]) -> HashSet<(usize, Vec<u8>)> {
        let mut visited = HashSet::new();
        let mut stack = vec![(simplex, local_face.to_vec())];
        visited.insert((simplex, local_face.to_vec()));
        while let Some((s, face)) = stack.pop() {
            let arity = self.simplices[s].arity();
            for f in 0..arity {
                if face.contains(&f) {
                    continue;
                }
                if let Some(g) = self.simplices[s].facet(f) {
                    let mut image: Vec<u8> = face.iter().map(|&v| g.perm.image(v)).collect();
                    image.sort_unstable();
                    let key = (g.neighbor, image);
                    if !visited.contains(&key) {
                        visited.insert(key.clone());
                        stack.push(key);
                    }
                }
            }
        }
        visited
    }

    /// Computes vertex, edge, and (D=4) triangle degrees for every simplex.
    pub fn face_lattice(&self) -> FaceLattice {
        let arity = self.dim.vertices() as u8;
        let vertex_degree = (0..self.simplices.len())
            .map(|s| (0..arity).map(|v| self.face_degree(s, &[v])).collect())
            .collect();
        let edge_degree = (0..self.simplices.len())
            .map(|s| {
                faces::subsets(arity, 2)
                    .iter()
                    .map(|e| self.face_degree(s, e))
                    .collect()
            })
            .collect();
        let triangle_degree = if matches!(self.dim, Dim::Four) {
            (0..self.simplices.len())
                .map(|s| {
                    faces::subsets(arity, 3)
                        .iter()
                        .map(|t| self.face_degree(s, t))
                        .collect()
                })
                .collect()
        } else {
            Vec::new()
        };
        FaceLattice {
            vertex_degree,
            edge_degree,
            triangle_degree,
        }
    }

    /// Whether the Pachner pivot centred on the face spanned by
    /// `sigma_locals` (local vertex indices of `simplex`) is legal: the
    /// face's ring closes up cleanly with no facet of the ring pointing
    /// back into itself through a sigma-facet.
    pub fn pachner_legal(&self, simplex: usize, sigma_locals: &[u8]) -> bool {
        pivot::legal_pivot(&self.simplices, simplex, sigma_locals)
    }

    /// The sorted simplex indices spanned by the ring centred on
    /// `sigma_locals` at `simplex`, or `None` if no legal pivot exists
    /// there. Two `(simplex, sigma)` starts on either side of the same
    /// shared face discover rings with the same member set in a different
    /// order; sorting here gives callers a stable key to recognise that
    /// without depending on traversal order.
    pub fn pachner_ring_members(&self, simplex: usize, sigma_locals: &[u8]) -> Option<Vec<usize>> {
        let ring = pivot::discover_ring(&self.simplices, simplex, sigma_locals)?;
        let mut members = ring.member_simplices();
        members.sort_unstable();
        Some(members)
    }

    /// Commits the Pachner pivot centred on `sigma_locals`. Callers must
    /// have checked [`Triangulation::pachner_legal`] first; this re-derives
    /// the ring and returns [`TriangulationError::InvalidMove`] if it is not
    /// legal rather than silently doing nothing; this is not a recoverable
    /// error path.
    pub fn pachner_commit(
        &mut self,
        simplex: usize,
        sigma_locals: &[u8],
    ) -> Result<(), TriangulationError> {
        let ring = pivot::discover_ring(&self.simplices, simplex, sigma_locals).ok_or_else(|| {
            TriangulationError::InvalidMove(format!(
                "no legal pivot at simplex {simplex} sigma {sigma_locals:?}"
            ))
        })?;
        self.simplices = pivot::apply_pivot(&self.simplices, &ring);
        Ok(())
    }

    /// Decodes a canonical isomorphism signature (§4.2/§6) back into a
    /// triangulation. This exactly inverts the encoder's image-order BFS:
    /// the facet-action trit stream drives the same traversal, assigning
    /// fresh simplex indices to `Join` actions and reading gluing
    /// permutations off the attached `joinGluing` stream.
    pub fn from_signature(dim: Dim, sig: &str) -> Result<Self, TriangulationError> {
        let bytes = sig.as_bytes();
        if bytes.is_empty() {
            return Ok(Self::empty(dim));
        }
        let arity = dim.vertices() as u8;
        let mut pos = 0usize;

        let first = alphabet::index_for_char(bytes[0])?;
        let n_simplices = if first != alphabet::SENTINEL {
            pos += 1;
            first as usize
        } else {
            pos += 1;
            let width = alphabet::index_for_char(bytes[pos])? as usize;
            pos += 1;
            alphabet::read_int(bytes, &mut pos, width)? as usize
        };

        if n_simplices == 0 {
            return Ok(Self::empty(dim));
        }

        let perm_chars = dim.chars_per_perm();
        let dest_width = alphabet::chars_needed(n_simplices as u64).max(1);

        let trit_count_width = alphabet::chars_needed(n_simplices as u64 * arity as u64).max(1);
        let trit_count = alphabet::read_int(bytes, &mut pos, trit_count_width)? as usize;

        // Block 1: the trit stream, packed three per character and padded
        // to a whole character with trailing zero trits.
        let mut trits: Vec<u8> = Vec::with_capacity(trit_count);
        let chars_needed = trit_count.div_ceil(3);
        for _ in 0..chars_needed {
            let c = bytes.get(pos).copied().ok_or_else(|| {
                TriangulationError::MalformedSignature("signature ends mid-trit-run".into())
            })?;
            pos += 1;
            let unpacked = alphabet::unpack_trits(c)?;
            trits.extend_from_slice(&unpacked);
        }
        trits.truncate(trit_count);

        let join_count = trits.iter().filter(|&&t| t == 2).count();

        // Block 2: one join destination per `Join` trit, in encounter order.
        let mut join_dest: Vec<usize> = Vec::with_capacity(join_count);
        for _ in 0..join_count {
            join_dest.push(alphabet::read_int(bytes, &mut pos, dest_width)? as usize);
        }

        // Block 3: one join gluing permutation rank per `Join` trit, in the
        // same order as block 2.
        let mut join_perm: Vec<u32> = Vec::with_capacity(join_count);
        for _ in 0..join_count {
            join_perm.push(alphabet::read_int(bytes, &mut pos, perm_chars)? as u32);
        }

        let mut simplices = vec![Simplex::new(arity); n_simplices];
        let mut next_free = 1usize;
        let mut order = vec![0usize];

        let mut trit_cursor = 0usize;
        let mut join_cursor = 0usize;
        let mut oi = 0usize;
        while oi < order.len() {
            let s = order[oi];
            oi += 1;
            for f in 0..arity {
                if simplices[s].facet(f).is_some() {
                    // Already glued from the other side while processing an
                    // earlier simplex in image order: no trit was emitted
                    // for this slot.
                    continue;
                }
                let action = *trits.get(trit_cursor).ok_or_else(|| {
                    TriangulationError::MalformedSignature("trit stream exhausted early".into())
                })?;
                trit_cursor += 1;
                match action {
                    0 => {}
                    1 => {
                        let dest = next_free;
                        next_free += 1;
                        glue(&mut simplices, s, f, dest, Perm::identity(arity))?;
                        order.push(dest);
                    }
                    2 => {
                        let dest = *join_dest.get(join_cursor).ok_or_else(|| {
                            TriangulationError::MalformedSignature("joinDest block exhausted early".into())
                        })?;
                        let rank = *join_perm.get(join_cursor).ok_or_else(|| {
                            TriangulationError::MalformedSignature("joinGluing block exhausted early".into())
                        })?;
                        join_cursor += 1;
                        let perm = Perm::from_rank(arity, rank);
                        glue(&mut simplices, s, f, dest, perm)?;
                    }
                    other => {
                        return Err(TriangulationError::MalformedSignature(format!(
                            "facet action trit {other} out of range"
                        )))
                    }
                }
            }
        }

        Triangulation::from_simplices(dim, simplices)
    }
}

fn glue(
    simplices: &mut [Simplex],
    s: usize,
    f: u8,
    dest: usize,
    perm: Perm,
) -> Result<(), TriangulationError> {
    if dest >= simplices.len() {
        return Err(TriangulationError::MalformedSignature(format!(
            "join destination {dest} out of range"
        )));
    }
    simplices[s].set_facet(f, Some(Gluing { neighbor: dest, perm }));
    let back_facet = perm.image(f);
    simplices[dest].set_facet(back_facet, Some(Gluing { neighbor: s, perm: perm.inverse() }));
    Ok(())
}
