// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **Evaluate Module** - *Binary Operation Driver*
//!
//! Entry point of the engine. One call of [`evaluate`]:
//!
//! 1. **Pre-flight**: broadcast length, registry lookup, output type check,
//!    null mask combination. Any failure returns before a buffer is allocated.
//! 2. **Cast**: each operand becomes a working-typed [`OperandView`].
//! 3. **Map**: the operator kernel is applied over `0..len`.
//! 4. **Build**: the raw result is cast into the output type and wrapped into
//!    a [`Column`] with the combined null mask.
//!
//! The working type is dispatched once per call, so the per-element loop
//! always runs over concrete primitive types.

use tracing::{debug, trace, warn};

use crate::enums::data_type::DataType;
use crate::enums::error::BinopError;
use crate::enums::operand::Operand;
use crate::enums::operator::{BinaryOperator, OperatorClass};
use crate::kernels::cast::{cast_operand, string_view, timestamp_view};
use crate::kernels::null_mask::combine_validity;
use crate::kernels::ops::{self, ArithmeticKernel, BitwiseKernel};
use crate::kernels::registry::{self, Signature};
use crate::kernels::routing::binary_map::map_views;
use crate::kernels::routing::broadcast::broadcast_len;
use crate::kernels::routing::builder::ResultBuilder;
use crate::structs::column::Column;
use crate::structs::views::operand_view::OperandView;
use crate::traits::type_unions::NativeType;

/// Applies `op` element-wise to `lhs` and `rhs`, casting each result into
/// `out_type`.
///
/// Exactly one operand may be a scalar, which is broadcast against the other
/// side. Output index `i` is null iff either operand is null at `i`.
///
/// # Errors
/// - [`BinopError::ShapeMismatch`] for columns of different length, or two scalars.
/// - [`BinopError::UnsupportedOperandTypes`] when `op` is undefined over the input types.
/// - [`BinopError::InvalidOutputType`] when `out_type` cannot hold the results.
/// - [`BinopError::NullMaskLengthMismatch`] for a column whose mask length is off.
///
/// # Example
/// ```rust
/// use colbinop::{evaluate, BinaryOperator, Column, DataType, Scalar};
///
/// let lhs = Column::from_slice(&[1.3f32, 1.6]);
/// let out = evaluate(&lhs, &lhs, BinaryOperator::Add, DataType::Int32).unwrap();
/// assert_eq!(out.to_vec::<i32>(), vec![Some(2), Some(3)]);
///
/// let ten = Scalar::from(10i64);
/// let out = evaluate(&ten, &lhs, BinaryOperator::Greater, DataType::Boolean).unwrap();
/// assert_eq!(out.to_vec::<bool>(), vec![Some(true), Some(true)]);
/// ```
pub fn evaluate<'a>(
    lhs: impl Into<Operand<'a>>,
    rhs: impl Into<Operand<'a>>,
    op: BinaryOperator,
    out_type: DataType,
) -> Result<Column, BinopError> {
    let (lhs, rhs) = (lhs.into(), rhs.into());

    let (sig, builder) = preflight(&lhs, &rhs, op, out_type).inspect_err(|e| {
        warn!(
            op = %op,
            lhs = %lhs.data_type(),
            rhs = %rhs.data_type(),
            out = %out_type,
            error = %e,
            "binary operation rejected"
        )
    })?;

    debug!(
        op = %op,
        lhs = %sig.lhs,
        rhs = %sig.rhs,
        working = %sig.working,
        result = %sig.result,
        out = %out_type,
        len = builder.len(),
        "evaluating binary operation"
    );

    let out = match op.class() {
        OperatorClass::Arithmetic => eval_arithmetic(&lhs, &rhs, sig, builder),
        OperatorClass::FloatingPoint => eval_floating_point(&lhs, &rhs, sig, builder),
        OperatorClass::Bitwise => eval_bitwise(&lhs, &rhs, sig, builder),
        OperatorClass::Shift => eval_shift(&lhs, &rhs, sig, builder),
        OperatorClass::Logical => eval_logical(&lhs, &rhs, sig, builder),
        OperatorClass::Comparison => eval_comparison(&lhs, &rhs, sig, builder),
    }?;

    trace!(op = %op, len = out.len(), nulls = out.null_count(), "binary operation complete");
    Ok(out)
}

fn preflight(
    lhs: &Operand<'_>,
    rhs: &Operand<'_>,
    op: BinaryOperator,
    out_type: DataType,
) -> Result<(Signature, ResultBuilder), BinopError> {
    let len = broadcast_len(lhs, rhs)?;
    let sig = registry::lookup(op, lhs.data_type(), rhs.data_type())?;
    sig.check_output(out_type)?;
    let null_mask = combine_validity(lhs, rhs, len)?;
    Ok((sig, ResultBuilder::new(op, out_type, len, null_mask)))
}

fn unsupported(sig: Signature) -> BinopError {
    BinopError::UnsupportedOperandTypes {
        op: sig.op,
        lhs: sig.lhs,
        rhs: sig.rhs,
    }
}

/// Casts both operands into `W`.
fn working_views<W: NativeType>(
    lhs: &Operand<'_>,
    rhs: &Operand<'_>,
    sig: Signature,
) -> Result<(OperandView<W>, OperandView<W>), BinopError> {
    let l = cast_operand::<W>(lhs).ok_or_else(|| unsupported(sig))?;
    let r = cast_operand::<W>(rhs).ok_or_else(|| unsupported(sig))?;
    trace!(working = %sig.working, "operands cast to working type");
    Ok((l, r))
}

fn eval_arithmetic(
    lhs: &Operand<'_>,
    rhs: &Operand<'_>,
    sig: Signature,
    builder: ResultBuilder,
) -> Result<Column, BinopError> {
    let len = builder.len();
    with_numeric_type!(sig.working, T => {
        let (l, r) = working_views::<T>(lhs, rhs, sig)?;
        let raw = match sig.op {
            BinaryOperator::Add => map_views(&l, &r, len, <T as ArithmeticKernel>::add),
            BinaryOperator::Sub => map_views(&l, &r, len, <T as ArithmeticKernel>::sub),
            BinaryOperator::Mul => map_views(&l, &r, len, <T as ArithmeticKernel>::mul),
            BinaryOperator::Div => map_views(&l, &r, len, <T as ArithmeticKernel>::div),
            BinaryOperator::FloorDiv => map_views(&l, &r, len, <T as ArithmeticKernel>::floor_div),
            BinaryOperator::Mod => map_views(&l, &r, len, <T as ArithmeticKernel>::modulo),
            _ => return Err(unsupported(sig)),
        };
        builder.finish(raw)
    }, _ => Err(unsupported(sig)))
}

fn eval_floating_point(
    lhs: &Operand<'_>,
    rhs: &Operand<'_>,
    sig: Signature,
    builder: ResultBuilder,
) -> Result<Column, BinopError> {
    let len = builder.len();
    let (l, r) = working_views::<f64>(lhs, rhs, sig)?;
    let raw = match sig.op {
        BinaryOperator::TrueDiv => map_views(&l, &r, len, ops::true_div),
        BinaryOperator::Pow => map_views(&l, &r, len, ops::pow),
        BinaryOperator::LogBase => map_views(&l, &r, len, ops::log_base),
        BinaryOperator::ATan2 => map_views(&l, &r, len, ops::atan2),
        _ => return Err(unsupported(sig)),
    };
    builder.finish(raw)
}

fn eval_bitwise(
    lhs: &Operand<'_>,
    rhs: &Operand<'_>,
    sig: Signature,
    builder: ResultBuilder,
) -> Result<Column, BinopError> {
    let len = builder.len();
    with_integer_type!(sig.working, T => {
        let (l, r) = working_views::<T>(lhs, rhs, sig)?;
        let raw = match sig.op {
            BinaryOperator::BitwiseAnd => map_views(&l, &r, len, <T as BitwiseKernel>::bit_and),
            BinaryOperator::BitwiseOr => map_views(&l, &r, len, <T as BitwiseKernel>::bit_or),
            BinaryOperator::BitwiseXor => map_views(&l, &r, len, <T as BitwiseKernel>::bit_xor),
            _ => return Err(unsupported(sig)),
        };
        builder.finish(raw)
    }, _ => Err(unsupported(sig)))
}

/// The lhs keeps its own type, the rhs becomes a `u32` shift amount.
fn eval_shift(
    lhs: &Operand<'_>,
    rhs: &Operand<'_>,
    sig: Signature,
    builder: ResultBuilder,
) -> Result<Column, BinopError> {
    let len = builder.len();
    with_integer_type!(sig.working, T => {
        let values = cast_operand::<T>(lhs).ok_or_else(|| unsupported(sig))?;
        let amounts = cast_operand::<u32>(rhs).ok_or_else(|| unsupported(sig))?;
        match sig.op {
            BinaryOperator::ShiftLeft => {
                builder.finish(map_views(&values, &amounts, len, <T as BitwiseKernel>::shl))
            }
            BinaryOperator::ShiftRight => {
                builder.finish(map_views(&values, &amounts, len, <T as BitwiseKernel>::shr))
            }
            BinaryOperator::ShiftRightUnsigned => builder.finish(map_views(
                &values,
                &amounts,
                len,
                <T as BitwiseKernel>::shr_unsigned,
            )),
            _ => Err(unsupported(sig)),
        }
    }, _ => Err(unsupported(sig)))
}

fn eval_logical(
    lhs: &Operand<'_>,
    rhs: &Operand<'_>,
    sig: Signature,
    builder: ResultBuilder,
) -> Result<Column, BinopError> {
    let len = builder.len();
    let (l, r) = working_views::<bool>(lhs, rhs, sig)?;
    let raw = match sig.op {
        BinaryOperator::LogicalAnd => map_views(&l, &r, len, ops::logical_and),
        BinaryOperator::LogicalOr => map_views(&l, &r, len, ops::logical_or),
        _ => return Err(unsupported(sig)),
    };
    builder.finish(raw)
}

fn eval_comparison(
    lhs: &Operand<'_>,
    rhs: &Operand<'_>,
    sig: Signature,
    builder: ResultBuilder,
) -> Result<Column, BinopError> {
    match sig.working {
        DataType::String => {
            let l = string_view(lhs).ok_or_else(|| unsupported(sig))?;
            let r = string_view(rhs).ok_or_else(|| unsupported(sig))?;
            compare(&l, &r, sig, builder)
        }
        DataType::Timestamp(unit) => {
            let l = timestamp_view(lhs, unit).ok_or_else(|| unsupported(sig))?;
            let r = timestamp_view(rhs, unit).ok_or_else(|| unsupported(sig))?;
            compare(&l, &r, sig, builder)
        }
        working => with_numeric_type!(working, T => {
            let (l, r) = working_views::<T>(lhs, rhs, sig)?;
            compare(&l, &r, sig, builder)
        }, _ => Err(unsupported(sig))),
    }
}

fn compare<T>(
    l: &OperandView<T>,
    r: &OperandView<T>,
    sig: Signature,
    builder: ResultBuilder,
) -> Result<Column, BinopError>
where
    T: Copy + PartialOrd + Send + Sync,
{
    let len = builder.len();
    let raw = match sig.op {
        BinaryOperator::Less => map_views(l, r, len, ops::less::<T>),
        BinaryOperator::Greater => map_views(l, r, len, ops::greater::<T>),
        BinaryOperator::LessEqual => map_views(l, r, len, ops::less_equal::<T>),
        BinaryOperator::GreaterEqual => map_views(l, r, len, ops::greater_equal::<T>),
        BinaryOperator::Equal => map_views(l, r, len, ops::equal::<T>),
        _ => return Err(unsupported(sig)),
    };
    builder.finish(raw)
}
