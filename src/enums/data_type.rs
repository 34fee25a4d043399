// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **DataType Module** - *Closed Logical Type Set*
//!
//! The closed enumeration of element types a column or scalar can carry,
//! plus the promotion rules the operator registry builds on.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::enums::time_units::TimeUnit;

/// # DataType
///
/// Logical element type of a `Column`, `Scalar`, or requested output.
///
/// ## Behaviour
/// - Fixed-width numeric types decode straight from their `Vec64<T>` buffer.
/// - `Boolean` values are bit-packed.
/// - `String` values are UTF-8 in an `offsets + bytes` layout.
/// - `Timestamp` values are `i64` offsets from the UNIX epoch at the given
///   resolution.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum DataType {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Boolean,
    String,
    Timestamp(TimeUnit),
}

impl DataType {
    /// Every fixed (non-parameterised) type followed by each timestamp unit.
    pub fn all() -> impl Iterator<Item = DataType> {
        [
            DataType::Int8,
            DataType::Int16,
            DataType::Int32,
            DataType::Int64,
            DataType::UInt8,
            DataType::UInt16,
            DataType::UInt32,
            DataType::UInt64,
            DataType::Float32,
            DataType::Float64,
            DataType::Boolean,
            DataType::String,
        ]
        .into_iter()
        .chain(TimeUnit::ALL.into_iter().map(DataType::Timestamp))
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
        )
    }

    #[inline]
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::Float32
                | DataType::Float64
        )
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, DataType::Float32 | DataType::Float64)
    }

    /// Integers and floats. Booleans are not numeric on their own, but take
    /// part in numeric promotion as `UInt8`.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    #[inline]
    pub fn is_timestamp(&self) -> bool {
        matches!(self, DataType::Timestamp(_))
    }

    /// Physical width in bits for fixed-width types, `None` for strings.
    pub fn bit_width(&self) -> Option<u32> {
        match self {
            DataType::Boolean => Some(1),
            DataType::Int8 | DataType::UInt8 => Some(8),
            DataType::Int16 | DataType::UInt16 => Some(16),
            DataType::Int32 | DataType::UInt32 | DataType::Float32 => Some(32),
            DataType::Int64 | DataType::UInt64 | DataType::Float64 => Some(64),
            DataType::Timestamp(_) => Some(64),
            DataType::String => None,
        }
    }

    /// The type a value takes when it enters numeric promotion.
    ///
    /// Booleans become `UInt8` (0/1). Strings and timestamps have no
    /// numeric form.
    pub fn numeric_form(&self) -> Option<DataType> {
        match self {
            DataType::Boolean => Some(DataType::UInt8),
            dt if dt.is_numeric() => Some(*dt),
            _ => None,
        }
    }

    /// Widest common numeric type of two operands.
    ///
    /// - Floats dominate integers: `Float64` if either side is `Float64`,
    ///   otherwise `Float32` if either side is a float.
    /// - Two integers of equal signedness promote to the wider width.
    /// - With mixed signedness the wider signed type wins when it is strictly
    ///   wider. Otherwise, below 32 bits, the result is the signed type of
    ///   twice the unsigned width, so `Int8`/`UInt8` work in `Int16`. From
    ///   32 bits up the unsigned type wins.
    pub fn promote(lhs: DataType, rhs: DataType) -> Option<DataType> {
        let l = lhs.numeric_form()?;
        let r = rhs.numeric_form()?;

        if l == DataType::Float64 || r == DataType::Float64 {
            return Some(DataType::Float64);
        }
        if l.is_float() || r.is_float() {
            return Some(DataType::Float32);
        }

        let (lw, rw) = (l.bit_width()?, r.bit_width()?);
        if l.is_signed() == r.is_signed() {
            return Some(if lw >= rw { l } else { r });
        }
        let (signed, unsigned) = if l.is_signed() { (l, r) } else { (r, l) };
        let (sw, uw) = (signed.bit_width()?, unsigned.bit_width()?);
        Some(match uw {
            _ if sw > uw => signed,
            8 => DataType::Int16,
            16 => DataType::Int32,
            _ => unsigned,
        })
    }

    /// Widest common integer type, rejecting floats and booleans.
    pub fn promote_integer(lhs: DataType, rhs: DataType) -> Option<DataType> {
        if lhs.is_integer() && rhs.is_integer() {
            DataType::promote(lhs, rhs)
        } else {
            None
        }
    }

    /// Unsigned integer of the same width, identity for unsigned types.
    pub fn to_unsigned(&self) -> Option<DataType> {
        match self {
            DataType::Int8 | DataType::UInt8 => Some(DataType::UInt8),
            DataType::Int16 | DataType::UInt16 => Some(DataType::UInt16),
            DataType::Int32 | DataType::UInt32 => Some(DataType::UInt32),
            DataType::Int64 | DataType::UInt64 => Some(DataType::UInt64),
            _ => None,
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DataType::Int8 => f.write_str("int8"),
            DataType::Int16 => f.write_str("int16"),
            DataType::Int32 => f.write_str("int32"),
            DataType::Int64 => f.write_str("int64"),
            DataType::UInt8 => f.write_str("uint8"),
            DataType::UInt16 => f.write_str("uint16"),
            DataType::UInt32 => f.write_str("uint32"),
            DataType::UInt64 => f.write_str("uint64"),
            DataType::Float32 => f.write_str("float32"),
            DataType::Float64 => f.write_str("float64"),
            DataType::Boolean => f.write_str("bool"),
            DataType::String => f.write_str("string"),
            DataType::Timestamp(unit) => write!(f, "timestamp[{}]", unit.suffix()),
        }
    }
}
