// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Operand Module
//!
//! The single polymorphic input of a binary operation: a borrowed column or
//! a borrowed scalar.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::enums::data_type::DataType;
use crate::enums::scalar::Scalar;
use crate::structs::column::Column;

/// Borrowed operand of one evaluation call.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Column(&'a Column),
    Scalar(&'a Scalar),
}

/// Shape of an operand as seen by the broadcasting rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandShape {
    Scalar,
    Column(usize),
}

impl<'a> Operand<'a> {
    #[inline]
    pub fn data_type(&self) -> DataType {
        match self {
            Operand::Column(c) => c.data_type(),
            Operand::Scalar(s) => s.data_type(),
        }
    }

    #[inline]
    pub fn shape(&self) -> OperandShape {
        match self {
            Operand::Column(c) => OperandShape::Column(c.len()),
            Operand::Scalar(_) => OperandShape::Scalar,
        }
    }
}

impl<'a> From<&'a Column> for Operand<'a> {
    #[inline]
    fn from(c: &'a Column) -> Self {
        Operand::Column(c)
    }
}

impl<'a> From<&'a Scalar> for Operand<'a> {
    #[inline]
    fn from(s: &'a Scalar) -> Self {
        Operand::Scalar(s)
    }
}

impl Display for OperandShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            OperandShape::Scalar => f.write_str("scalar"),
            OperandShape::Column(len) => write!(f, "column of length {len}"),
        }
    }
}
