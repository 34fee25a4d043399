// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **colbinop** - *Element-wise Binary Operations over Nullable Columns*
//!
//! Evaluates one binary operator between two operands, each a typed column or
//! a scalar, into a new column of a requested output type.
//!
//! ## Features
//! - Scalar broadcasting against columns, with one uniform per-index loop.
//! - Null propagation: an output element is null iff either input is null.
//! - 23 operators across arithmetic, floating point, bitwise, shift, logical
//!   and comparison classes, typed through a registry built once per process.
//! - Working-type promotion before the operator and a truncating cast into
//!   the output type after it.
//! - Cross-resolution timestamp comparison and byte-wise string ordering.
//! - 64-byte aligned `Vec64` buffers throughout.
//! - Optional rayon-parallel evaluation for large outputs (`parallel_proc`).
//!
//! ## Example
//! ```rust
//! use colbinop::{evaluate, BinaryOperator, Column, DataType, Scalar};
//!
//! let lhs = Column::from_options([Some(-8i32), Some(78), None]);
//! let amount = Scalar::from(1i32);
//! let out = evaluate(&lhs, &amount, BinaryOperator::ShiftRightUnsigned, DataType::Int64).unwrap();
//! assert_eq!(out.to_vec::<i64>(), vec![Some(2_147_483_644), Some(39), None]);
//! ```

#[macro_use]
pub mod macros;

pub mod enums {
    pub mod data_type;
    pub mod error;
    pub mod operand;
    pub mod operator;
    pub mod scalar;
    pub mod time_units;
}

pub mod structs {
    pub mod bitmask;
    pub mod column;
    pub mod views {
        pub mod operand_view;
    }
}

pub mod traits {
    pub mod type_unions;
}

pub mod kernels {
    pub mod cast;
    pub mod null_mask;
    pub mod ops;
    pub mod registry;
    pub mod routing;
}

pub mod utils;

pub use enums::data_type::DataType;
pub use enums::error::BinopError;
pub use enums::operand::{Operand, OperandShape};
pub use enums::operator::{BinaryOperator, OperatorClass};
pub use enums::scalar::{Scalar, ScalarValue};
pub use enums::time_units::TimeUnit;
pub use kernels::registry::Signature;
pub use kernels::routing::binary_map::PARALLEL_THRESHOLD;
pub use kernels::routing::evaluate::evaluate;
pub use structs::bitmask::Bitmask;
pub use structs::column::{Column, ColumnData, StringData};
pub use traits::type_unions::{Float, Integer, NativeType};
pub use vec64::{Vec64, vec64};
