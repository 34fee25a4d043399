// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Error Module - Custom *colbinop* Error Type
//!
//! Defines the unified error type for the engine.
//!
//! ## Features
//! - Every variant is a pre-flight failure: it is raised before any element
//!   is evaluated, so no partial output ever exists.
//! - Per-element numeric anomalies (division by zero, out-of-range shifts,
//!   logs of non-positive values) are never errors. They resolve to the
//!   documented per-operator values instead.

use thiserror::Error;

use crate::enums::data_type::DataType;
use crate::enums::operand::OperandShape;
use crate::enums::operator::BinaryOperator;

/// Catch all error type for `colbinop`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BinopError {
    /// Operand shapes cannot be broadcast against each other: two columns of
    /// different length, or two scalars.
    #[error("Shape mismatch: cannot broadcast {lhs} against {rhs}.")]
    ShapeMismatch {
        lhs: OperandShape,
        rhs: OperandShape,
    },

    /// No registered handler for the `(operator, lhs, rhs)` triple.
    #[error("Unsupported operand types: {op} is not defined between '{lhs}' and '{rhs}'.")]
    UnsupportedOperandTypes {
        op: BinaryOperator,
        lhs: DataType,
        rhs: DataType,
    },

    /// The requested output type cannot hold the operator's results.
    #[error("Invalid output type: {op} results cannot be written as '{out}'.")]
    InvalidOutputType { op: BinaryOperator, out: DataType },

    /// A validity bitmap whose length differs from its column.
    #[error("Null mask length mismatch: expected {expected}, found {found}.")]
    NullMaskLengthMismatch { expected: usize, found: usize },
}
