// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **Scalar Module** - *Single Typed Value With Validity*
//!
//! A `Scalar` is the broadcast side of a binary operation: semantically a
//! column of implicit length whose every element equals the scalar value, or
//! is null when the scalar is null.

use crate::enums::data_type::DataType;
use crate::enums::time_units::TimeUnit;

/// Typed payload of a [`Scalar`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Boolean(bool),
    String(String),
    Timestamp(i64, TimeUnit),
}

impl ScalarValue {
    pub fn data_type(&self) -> DataType {
        match self {
            ScalarValue::Int8(_) => DataType::Int8,
            ScalarValue::Int16(_) => DataType::Int16,
            ScalarValue::Int32(_) => DataType::Int32,
            ScalarValue::Int64(_) => DataType::Int64,
            ScalarValue::UInt8(_) => DataType::UInt8,
            ScalarValue::UInt16(_) => DataType::UInt16,
            ScalarValue::UInt32(_) => DataType::UInt32,
            ScalarValue::UInt64(_) => DataType::UInt64,
            ScalarValue::Float32(_) => DataType::Float32,
            ScalarValue::Float64(_) => DataType::Float64,
            ScalarValue::Boolean(_) => DataType::Boolean,
            ScalarValue::String(_) => DataType::String,
            ScalarValue::Timestamp(_, unit) => DataType::Timestamp(*unit),
        }
    }

    /// Zero / empty value of the given type. Used as the payload of null scalars.
    pub fn default_for(dtype: DataType) -> Self {
        match dtype {
            DataType::Int8 => ScalarValue::Int8(0),
            DataType::Int16 => ScalarValue::Int16(0),
            DataType::Int32 => ScalarValue::Int32(0),
            DataType::Int64 => ScalarValue::Int64(0),
            DataType::UInt8 => ScalarValue::UInt8(0),
            DataType::UInt16 => ScalarValue::UInt16(0),
            DataType::UInt32 => ScalarValue::UInt32(0),
            DataType::UInt64 => ScalarValue::UInt64(0),
            DataType::Float32 => ScalarValue::Float32(0.0),
            DataType::Float64 => ScalarValue::Float64(0.0),
            DataType::Boolean => ScalarValue::Boolean(false),
            DataType::String => ScalarValue::String(String::new()),
            DataType::Timestamp(unit) => ScalarValue::Timestamp(0, unit),
        }
    }
}

/// # Scalar
///
/// One typed value plus one validity flag.
///
/// ## Example
/// ```rust
/// use colbinop::{DataType, Scalar};
///
/// let s = Scalar::from(10i32);
/// assert!(s.is_valid());
/// assert_eq!(s.data_type(), DataType::Int32);
///
/// let n = Scalar::null(DataType::Float64);
/// assert!(!n.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    pub value: ScalarValue,
    pub valid: bool,
}

impl Scalar {
    #[inline]
    pub fn new(value: ScalarValue) -> Self {
        Self { value, valid: true }
    }

    /// A null scalar of `dtype`.
    #[inline]
    pub fn null(dtype: DataType) -> Self {
        Self {
            value: ScalarValue::default_for(dtype),
            valid: false,
        }
    }

    #[inline]
    pub fn timestamp(ticks: i64, unit: TimeUnit) -> Self {
        Self::new(ScalarValue::Timestamp(ticks, unit))
    }

    #[inline]
    pub fn data_type(&self) -> DataType {
        self.value.data_type()
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

macro_rules! impl_scalar_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Scalar {
                #[inline]
                fn from(v: $t) -> Self {
                    Scalar::new(ScalarValue::$variant(v))
                }
            }
        )*
    };
}

impl_scalar_from!(
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    bool => Boolean,
    String => String,
);

impl From<&str> for Scalar {
    #[inline]
    fn from(v: &str) -> Self {
        Scalar::new(ScalarValue::String(v.to_owned()))
    }
}
