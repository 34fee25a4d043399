// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Operator Module
//!
//! The closed set of element-wise binary operators, and the class each one
//! belongs to. The class decides which output types can hold its results.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Element-wise binary operator.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    /// Truncating division in the promoted type.
    Div,
    /// Always floating-point division.
    TrueDiv,
    /// Division rounded toward negative infinity.
    FloorDiv,
    /// Remainder with the sign of the dividend.
    Mod,
    Pow,
    /// `log(lhs) / log(rhs)`, the rhs being the base.
    LogBase,
    ATan2,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    LogicalAnd,
    LogicalOr,
    ShiftLeft,
    ShiftRight,
    /// Right shift of the lhs bit pattern read as unsigned.
    ShiftRightUnsigned,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
}

/// Operator family, used for output-type validation.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum OperatorClass {
    /// Add, Sub, Mul, Div, FloorDiv, Mod.
    Arithmetic,
    /// TrueDiv, Pow, LogBase, ATan2 (computed in double precision).
    FloatingPoint,
    Bitwise,
    Shift,
    Logical,
    Comparison,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 23] = [
        BinaryOperator::Add,
        BinaryOperator::Sub,
        BinaryOperator::Mul,
        BinaryOperator::Div,
        BinaryOperator::TrueDiv,
        BinaryOperator::FloorDiv,
        BinaryOperator::Mod,
        BinaryOperator::Pow,
        BinaryOperator::LogBase,
        BinaryOperator::ATan2,
        BinaryOperator::BitwiseAnd,
        BinaryOperator::BitwiseOr,
        BinaryOperator::BitwiseXor,
        BinaryOperator::LogicalAnd,
        BinaryOperator::LogicalOr,
        BinaryOperator::ShiftLeft,
        BinaryOperator::ShiftRight,
        BinaryOperator::ShiftRightUnsigned,
        BinaryOperator::Less,
        BinaryOperator::Greater,
        BinaryOperator::LessEqual,
        BinaryOperator::GreaterEqual,
        BinaryOperator::Equal,
    ];

    pub fn class(&self) -> OperatorClass {
        use BinaryOperator::*;
        match self {
            Add | Sub | Mul | Div | FloorDiv | Mod => OperatorClass::Arithmetic,
            TrueDiv | Pow | LogBase | ATan2 => OperatorClass::FloatingPoint,
            BitwiseAnd | BitwiseOr | BitwiseXor => OperatorClass::Bitwise,
            ShiftLeft | ShiftRight | ShiftRightUnsigned => OperatorClass::Shift,
            LogicalAnd | LogicalOr => OperatorClass::Logical,
            Less | Greater | LessEqual | GreaterEqual | Equal => OperatorClass::Comparison,
        }
    }

    /// Canonical upper-snake name.
    pub fn name(&self) -> &'static str {
        use BinaryOperator::*;
        match self {
            Add => "ADD",
            Sub => "SUB",
            Mul => "MUL",
            Div => "DIV",
            TrueDiv => "TRUE_DIV",
            FloorDiv => "FLOOR_DIV",
            Mod => "MOD",
            Pow => "POW",
            LogBase => "LOG_BASE",
            ATan2 => "ATAN2",
            BitwiseAnd => "BITWISE_AND",
            BitwiseOr => "BITWISE_OR",
            BitwiseXor => "BITWISE_XOR",
            LogicalAnd => "LOGICAL_AND",
            LogicalOr => "LOGICAL_OR",
            ShiftLeft => "SHIFT_LEFT",
            ShiftRight => "SHIFT_RIGHT",
            ShiftRightUnsigned => "SHIFT_RIGHT_UNSIGNED",
            Less => "LESS",
            Greater => "GREATER",
            LessEqual => "LESS_EQUAL",
            GreaterEqual => "GREATER_EQUAL",
            Equal => "EQUAL",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for BinaryOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BinaryOperator::ALL
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown binary operator '{s}'"))
    }
}
