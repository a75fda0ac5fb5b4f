//! Canonical isomorphism signatures for 3- and 4-dimensional triangulations
//! (`SimplexInvariant`, the canonical encoder, the canonicaliser driver),
//! the Pachner-move generator, and the distributed BFS that explores the
//! move graph signature-by-signature.
//!
//! Built on [`tri_manifold`] for the triangulation primitives and
//! [`tri_concurrency`] for the generic concurrency structures the BFS
//! driver is assembled from; this crate contributes the domain-specific
//! logic none of the generic pieces know about: what a canonical signature
//! is, and which moves preserve the underlying manifold.

pub mod bfs;
pub mod canonicalizer;
pub mod config;
pub mod encoder;
pub mod errors;
pub mod invariant;
pub mod moves;

pub use canonicalizer::canonicalize;
pub use config::SearchConfig;
pub use errors::SearchError;
pub use invariant::SimplexInvariant;
