/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
// Hand-rolled error types, no `thiserror`: each error implements
// `std::error::Error` and `Display` directly, in the style the rest of this
// codebase uses throughout.

use std::error::Error;
use std::fmt;

/// Failure modes of the triangulation collaborator (§7 of the design spec:
/// `MalformedSignature` and `SizeOverflow` are the two kinds that originate
/// here; `MoveIllegal` is deliberately not an error — see
/// [`crate::Triangulation::pachner_legal`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriangulationError {
    /// A signature string failed to decode: truncated, out-of-alphabet
    /// bytes, or a join/gluing index pointing outside the decoded
    /// component.
    MalformedSignature(String),
    /// `|T|^2` would not fit in 32 bits, violating the invariant that
    /// `edgeCombLabel` values stay within `i32`.
    SizeOverflow { simplices: usize },
    /// A Pachner-move commit was attempted at a face where the move is not
    /// legal. Callers are expected to check `pachner_legal` first; this
    /// only fires if that contract is violated.
    InvalidMove(String),
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriangulationError::MalformedSignature(reason) => {
                write!(f, "malformed signature: {reason}")
            }
            TriangulationError::SizeOverflow { simplices } => {
                write!(
                    f,
                    "triangulation has {simplices} simplices, whose square overflows the 32-bit edge label budget"
                )
            }
            TriangulationError::InvalidMove(reason) => {
                write!(f, "invalid Pachner move: {reason}")
            }
        }
    }
}

impl Error for TriangulationError {}
