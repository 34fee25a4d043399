// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **Cast Layer** - *Working-Type And Output Casts*
//!
//! Value conversions applied at the two boundaries of an operator: inputs
//! into the working type, and the operator's natural result into the
//! requested output type.
//!
//! ## Rules
//! - integer → integer: keeps the low-order bits (two's complement wrap).
//! - float → integer: truncates toward zero. Out-of-range values saturate
//!   at the integer bounds and NaN becomes 0.
//! - integer → float: exact within the float's precision, otherwise nearest.
//! - float → float: round to nearest representable value.
//! - numeric → bool: truthiness, nonzero is `true` (NaN is nonzero).
//! - bool → numeric: `1` / `0`.
//!
//! The same conversion is used whether the value came from a scalar or a
//! column element, so broadcasting never changes the numeric result.

use vec64::Vec64;

use crate::enums::operand::Operand;
use crate::enums::scalar::ScalarValue;
use crate::enums::time_units::TimeUnit;
use crate::structs::column::ColumnData;
use crate::structs::views::operand_view::OperandView;

/// Conversion from a native value of type `S`.
pub trait CastFrom<S> {
    fn cast_from(v: S) -> Self;
}

/// A type every native element type can be cast into.
pub trait CastTarget:
    CastFrom<i8>
    + CastFrom<i16>
    + CastFrom<i32>
    + CastFrom<i64>
    + CastFrom<u8>
    + CastFrom<u16>
    + CastFrom<u32>
    + CastFrom<u64>
    + CastFrom<f32>
    + CastFrom<f64>
    + CastFrom<bool>
    + Copy
    + Default
    + Send
    + Sync
    + 'static
{
}

impl<T> CastTarget for T where
    T: CastFrom<i8>
        + CastFrom<i16>
        + CastFrom<i32>
        + CastFrom<i64>
        + CastFrom<u8>
        + CastFrom<u16>
        + CastFrom<u32>
        + CastFrom<u64>
        + CastFrom<f32>
        + CastFrom<f64>
        + CastFrom<bool>
        + Copy
        + Default
        + Send
        + Sync
        + 'static
{
}

/// A native value that can be cast into any [`CastTarget`].
pub trait CastSource: Copy {
    fn cast<O: CastTarget>(self) -> O;
}

macro_rules! impl_numeric_casts {
    ($($src:ty),*) => {
        $(
            impl_numeric_casts!(@dst $src; i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

            impl CastFrom<$src> for bool {
                #[inline(always)]
                fn cast_from(v: $src) -> bool {
                    v != <$src>::default()
                }
            }

            impl CastFrom<bool> for $src {
                #[inline(always)]
                fn cast_from(v: bool) -> $src {
                    v as u8 as $src
                }
            }

            impl CastSource for $src {
                #[inline(always)]
                fn cast<O: CastTarget>(self) -> O {
                    <O as CastFrom<$src>>::cast_from(self)
                }
            }
        )*
    };
    (@dst $src:ty; $($dst:ty),*) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline(always)]
                fn cast_from(v: $src) -> $dst {
                    v as $dst
                }
            }
        )*
    };
}

impl_numeric_casts!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl CastFrom<bool> for bool {
    #[inline(always)]
    fn cast_from(v: bool) -> bool {
        v
    }
}

impl CastSource for bool {
    #[inline(always)]
    fn cast<O: CastTarget>(self) -> O {
        <O as CastFrom<bool>>::cast_from(self)
    }
}

#[inline]
fn cast_slice<S: CastSource, W: CastTarget>(values: &[S]) -> Vec64<W> {
    values.iter().map(|&v| v.cast::<W>()).collect()
}

/// Casts fixed-width column data into the working type.
///
/// Timestamps contribute their raw ticks. Returns `None` for strings,
/// which have no numeric form.
pub fn cast_column_data<W: CastTarget>(data: &ColumnData) -> Option<Vec64<W>> {
    let out = match data {
        ColumnData::Int8(v) => cast_slice(v),
        ColumnData::Int16(v) => cast_slice(v),
        ColumnData::Int32(v) => cast_slice(v),
        ColumnData::Int64(v) => cast_slice(v),
        ColumnData::UInt8(v) => cast_slice(v),
        ColumnData::UInt16(v) => cast_slice(v),
        ColumnData::UInt32(v) => cast_slice(v),
        ColumnData::UInt64(v) => cast_slice(v),
        ColumnData::Float32(v) => cast_slice(v),
        ColumnData::Float64(v) => cast_slice(v),
        ColumnData::Boolean(m) => m.iter().map(|b| b.cast::<W>()).collect(),
        ColumnData::Timestamp(v, _) => cast_slice(v),
        ColumnData::String(_) => return None,
    };
    Some(out)
}

/// Casts one scalar payload into the working type.
pub fn cast_scalar_value<W: CastTarget>(value: &ScalarValue) -> Option<W> {
    let out = match value {
        ScalarValue::Int8(v) => v.cast(),
        ScalarValue::Int16(v) => v.cast(),
        ScalarValue::Int32(v) => v.cast(),
        ScalarValue::Int64(v) => v.cast(),
        ScalarValue::UInt8(v) => v.cast(),
        ScalarValue::UInt16(v) => v.cast(),
        ScalarValue::UInt32(v) => v.cast(),
        ScalarValue::UInt64(v) => v.cast(),
        ScalarValue::Float32(v) => v.cast(),
        ScalarValue::Float64(v) => v.cast(),
        ScalarValue::Boolean(v) => v.cast(),
        ScalarValue::Timestamp(v, _) => v.cast(),
        ScalarValue::String(_) => return None,
    };
    Some(out)
}

/// Casts an operand into a working-typed view.
pub fn cast_operand<W: CastTarget>(operand: &Operand<'_>) -> Option<OperandView<W>> {
    match operand {
        Operand::Column(c) => cast_column_data::<W>(&c.data).map(OperandView::column),
        Operand::Scalar(s) => cast_scalar_value::<W>(&s.value).map(OperandView::scalar),
    }
}

/// Rescales timestamp ticks into `target`, which must be finer than or equal
/// to the operand's own unit. Ticks widen to `i128` first, so the rescaled
/// value is exact and ordering across units is preserved.
pub fn timestamp_view(operand: &Operand<'_>, target: TimeUnit) -> Option<OperandView<i128>> {
    match operand {
        Operand::Column(c) => match &c.data {
            ColumnData::Timestamp(v, unit) => {
                let factor = unit.scale_to(target) as i128;
                Some(OperandView::column(
                    v.iter().map(|&t| t as i128 * factor).collect(),
                ))
            }
            _ => None,
        },
        Operand::Scalar(s) => match &s.value {
            ScalarValue::Timestamp(t, unit) => Some(OperandView::scalar(
                *t as i128 * unit.scale_to(target) as i128,
            )),
            _ => None,
        },
    }
}

/// Byte view over string operands. Ordering on `&[u8]` is lexicographic by
/// byte, which for UTF-8 matches code point order.
pub fn string_view<'a>(operand: &Operand<'a>) -> Option<OperandView<&'a [u8]>> {
    match *operand {
        Operand::Column(c) => match &c.data {
            ColumnData::String(s) => Some(OperandView::column(
                (0..s.len()).map(|i| s.bytes_at(i)).collect(),
            )),
            _ => None,
        },
        Operand::Scalar(s) => match &s.value {
            ScalarValue::String(v) => Some(OperandView::scalar(v.as_bytes())),
            _ => None,
        },
    }
}
