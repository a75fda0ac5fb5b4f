/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! The two supported ambient dimensions.

/// A triangulated manifold is either 3- or 4-dimensional in this crate; a
/// top-dimensional simplex then has `D + 1` vertices (a tetrahedron or a
/// pentachoron).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dim {
    Three,
    Four,
}

impl Dim {
    /// `D`, the ambient dimension.
    pub fn value(self) -> usize {
        match self {
            Dim::Three => 3,
            Dim::Four => 4,
        }
    }

    /// `D + 1`: vertices per top simplex, and facets per top simplex.
    pub fn vertices(self) -> usize {
        self.value() + 1
    }

    /// `C(D+1, 2)`: edges per top simplex (6 for a tetrahedron, 10 for a
    /// pentachoron).
    pub fn edges_per_simplex(self) -> usize {
        let n = self.vertices();
        n * (n - 1) / 2
    }

    /// `C(D+1, 3)`: triangles per top simplex. Only meaningful for D=4,
    /// where each edge has an opposite triangle; D=3 never calls this.
    pub fn triangles_per_simplex(self) -> usize {
        let n = self.vertices();
        n * (n - 1) * (n - 2) / 6
    }

    /// Characters needed to encode one permutation index in base 64:
    /// `ceil(log64((D+1)!))`.
    pub fn chars_per_perm(self) -> usize {
        let total = factorial(self.vertices() as u32);
        let mut chars = 0usize;
        let mut capacity: u64 = 1;
        while capacity < total as u64 {
            capacity *= 64;
            chars += 1;
        }
        chars.max(1)
    }
}

fn factorial(n: u32) -> u32 {
    (1..=n).product()
}
