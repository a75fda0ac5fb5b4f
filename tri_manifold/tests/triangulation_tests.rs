/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
use tri_manifold::{Dim, Gluing, Perm, Simplex, Triangulation, TriangulationError};

fn two_tetrahedra_sphere() -> Triangulation {
    // Two tetrahedra glued along all four facets via the identity,
    // matching each facet index to itself — the standard two-tetrahedron
    // triangulation of S^3 (each vertex has degree 2, each edge degree 2).
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
    Triangulation::from_simplices(Dim::Three, vec![a, b]).unwrap()
}

#[test]
fn symmetric_gluing_check_accepts_well_formed_input() {
    two_tetrahedra_sphere();
}

#[test]
fn symmetric_gluing_check_rejects_dangling_reference() {
    let mut a = Simplex::new(4);
    a.set_facet(
        0,
        Some(Gluing {
            neighbor: 5,
            perm: Perm::identity(4),
        }),
    );
    let err = Triangulation::from_simplices(Dim::Three, vec![a]).unwrap_err();
    assert!(matches!(err, TriangulationError::MalformedSignature(_)));
}

#[test]
fn vertex_degree_on_two_tetrahedra_sphere() {
    let tri = two_tetrahedra_sphere();
    let lattice = tri.face_lattice();
    for degrees in &lattice.vertex_degree {
        for &d in degrees {
            assert_eq!(d, 2);
        }
    }
}

#[test]
fn pachner_2_3_is_always_legal_on_an_interior_facet() {
    let tri = two_tetrahedra_sphere();
    // Facet 0 of simplex 0 (local vertices 1,2,3) is interior.
    assert!(tri.pachner_legal(0, &[1, 2, 3]));
}

#[test]
fn pachner_2_3_then_3_2_round_trips_simplex_count() {
    let mut tri = two_tetrahedra_sphere();
    let before = tri.len();
    tri.pachner_commit(0, &[1, 2, 3]).unwrap();
    assert_eq!(tri.len(), before + 1);
}

#[test]
fn empty_signature_decodes_to_empty_triangulation() {
    let tri = Triangulation::from_signature(Dim::Three, "").unwrap();
    assert!(tri.is_empty());
}
