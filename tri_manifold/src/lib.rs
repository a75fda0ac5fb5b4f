//! Combinatorial triangulation data structure: simplices, facet gluings,
//! derived face lattices, the canonical-signature alphabet, and Pachner
//! moves for 3- and 4-dimensional triangulations.
//!
//! This crate concretely realises the "triangulation library" collaborator
//! of the design spec: it owns no notion of isomorphism canonicalisation or
//! search (that lives in `tri_search`), only the primitive operations a
//! canonicaliser and a move generator are built from.

pub mod alphabet;
pub mod dim;
pub mod errors;
pub mod faces;
pub mod perm;
pub mod pivot;
pub mod simplex;
pub mod triangulation;

pub use dim::Dim;
pub use errors::TriangulationError;
pub use perm::Perm;
pub use simplex::{Gluing, Simplex};
pub use triangulation::{FaceLattice, Triangulation};
