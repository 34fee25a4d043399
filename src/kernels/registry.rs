// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **Operator Registry** - *Typed Signature Table*
//!
//! Maps every supported `(operator, lhs type, rhs type)` triple to the
//! [`Signature`] the evaluation driver executes: the working type both
//! operands are cast into and the natural result type of the operator.
//!
//! The table is generated once per process from the declarative promotion
//! rules in [`resolve`], evaluated over every pair of [`DataType`]s. A triple
//! that resolves to nothing is absent from the table, and looking it up
//! yields [`BinopError::UnsupportedOperandTypes`].
//!
//! ## Working type rules
//! | Class          | Working type                                   | Result            |
//! |----------------|------------------------------------------------|-------------------|
//! | Arithmetic     | numeric promotion of both sides                | working type      |
//! | FloatingPoint  | `Float64`                                      | `Float64`         |
//! | Bitwise        | integer promotion of both sides                | working type      |
//! | Shift          | lhs type, rhs read as a `u32` shift amount     | lhs (or unsigned) |
//! | Logical        | `Boolean` (truthiness)                         | `Boolean`         |
//! | Comparison     | promoted numeric, finer timestamp, or string   | `Boolean`         |

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::enums::data_type::DataType;
use crate::enums::error::BinopError;
use crate::enums::operator::{BinaryOperator, OperatorClass};

/// Resolved execution plan of one operator over one pair of input types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub op: BinaryOperator,
    pub lhs: DataType,
    pub rhs: DataType,
    /// Type both operands are cast into before the operator runs. For shifts
    /// this is the lhs type only.
    pub working: DataType,
    /// Type of the operator's natural result, before the output cast.
    pub result: DataType,
}

impl Signature {
    /// Whether `out_type` can represent this operator's results.
    ///
    /// Bitwise and shift results are bit patterns, so only integer and
    /// boolean outputs accept them. Every other class accepts any numeric or
    /// boolean output. Strings and timestamps are never valid outputs.
    pub fn accepts_output(&self, out_type: DataType) -> bool {
        match self.op.class() {
            OperatorClass::Bitwise | OperatorClass::Shift => {
                out_type.is_integer() || out_type == DataType::Boolean
            }
            _ => out_type.is_numeric() || out_type == DataType::Boolean,
        }
    }

    /// Pre-flight output check.
    pub fn check_output(&self, out_type: DataType) -> Result<(), BinopError> {
        if self.accepts_output(out_type) {
            Ok(())
        } else {
            Err(BinopError::InvalidOutputType {
                op: self.op,
                out: out_type,
            })
        }
    }
}

/// Declarative typing rule of `op` over `(lhs, rhs)`.
///
/// Returns `None` when the operator is undefined for the pair.
pub fn resolve(op: BinaryOperator, lhs: DataType, rhs: DataType) -> Option<Signature> {
    let (working, result) = match op.class() {
        OperatorClass::Arithmetic => {
            let w = DataType::promote(lhs, rhs)?;
            (w, w)
        }
        OperatorClass::FloatingPoint => {
            lhs.numeric_form()?;
            rhs.numeric_form()?;
            (DataType::Float64, DataType::Float64)
        }
        OperatorClass::Bitwise => {
            let w = DataType::promote_integer(lhs, rhs)?;
            (w, w)
        }
        OperatorClass::Shift => {
            if !lhs.is_integer() || !rhs.is_integer() {
                return None;
            }
            let result = match op {
                BinaryOperator::ShiftRightUnsigned => lhs.to_unsigned()?,
                _ => lhs,
            };
            (lhs, result)
        }
        OperatorClass::Logical => {
            lhs.numeric_form()?;
            rhs.numeric_form()?;
            (DataType::Boolean, DataType::Boolean)
        }
        OperatorClass::Comparison => {
            let w = match (lhs, rhs) {
                (DataType::String, DataType::String) => DataType::String,
                (DataType::Timestamp(l), DataType::Timestamp(r)) => DataType::Timestamp(l.finer(r)),
                _ => DataType::promote(lhs, rhs)?,
            };
            (w, DataType::Boolean)
        }
    };
    Some(Signature {
        op,
        lhs,
        rhs,
        working,
        result,
    })
}

static REGISTRY: Lazy<HashMap<(BinaryOperator, DataType, DataType), Signature>> =
    Lazy::new(|| {
        let mut table = HashMap::new();
        for op in BinaryOperator::ALL {
            for lhs in DataType::all() {
                for rhs in DataType::all() {
                    if let Some(sig) = resolve(op, lhs, rhs) {
                        table.insert((op, lhs, rhs), sig);
                    }
                }
            }
        }
        debug!(entries = table.len(), "built binary operator registry");
        table
    });

/// Registered signature for a triple.
pub fn lookup(op: BinaryOperator, lhs: DataType, rhs: DataType) -> Result<Signature, BinopError> {
    REGISTRY
        .get(&(op, lhs, rhs))
        .copied()
        .ok_or(BinopError::UnsupportedOperandTypes { op, lhs, rhs })
}

/// Number of registered triples.
pub fn registered_count() -> usize {
    REGISTRY.len()
}
