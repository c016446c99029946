// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for ring and flow arithmetic.

use thiserror::Error;

/// Contract violations raised by [`Eisen`](super::Eisen) and
/// [`EisenFlow`](super::EisenFlow) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgebraError {
    /// A value of the wrong kind was supplied where an exact integer
    /// coordinate was required.
    #[error("Eisen(a, b): expected integer coordinates, received ({re}, {z6})")]
    TypeKind { re: f64, z6: f64 },

    /// Arithmetic between an Eisenstein integer and an operand kind the ring
    /// does not support.
    #[error("unsupported operand kind for {op}: Eisen and {kind}")]
    UnsupportedOperandKind { op: &'static str, kind: &'static str },

    /// Two flows of different lengths were combined.
    #[error("flow length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A flow was indexed outside its ground set.
    #[error("index {index} out of range for flow of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A coordinate left the range of `i64`.
    #[error("integer overflow in Eisen {op}")]
    Overflow { op: &'static str },

    /// Text could not be parsed as an element or flow.
    #[error("cannot parse {input:?}: {reason}")]
    Parse { input: String, reason: &'static str },
}
