// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Broadcast Module
//!
//! Output length of a binary operation from the operand shapes.

use crate::enums::error::BinopError;
use crate::enums::operand::{Operand, OperandShape};

/// Output length for `lhs` against `rhs`.
///
/// A scalar broadcasts against a column of any length, including zero. Two
/// columns must have equal length. Two scalars are rejected, that case
/// belongs to scalar-level evaluation.
pub fn broadcast_len(lhs: &Operand<'_>, rhs: &Operand<'_>) -> Result<usize, BinopError> {
    match (lhs.shape(), rhs.shape()) {
        (OperandShape::Column(l), OperandShape::Column(r)) if l == r => Ok(l),
        (OperandShape::Column(n), OperandShape::Scalar)
        | (OperandShape::Scalar, OperandShape::Column(n)) => Ok(n),
        (l, r) => Err(BinopError::ShapeMismatch { lhs: l, rhs: r }),
    }
}
