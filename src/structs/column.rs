// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **Column Module** - *Typed Nullable Column*
//!
//! Fixed-length sequence of typed values plus an optional validity bitmap.
//!
//! ## Overview
//! - Fixed-width types are stored in a 64-byte aligned `Vec64<T>`.
//! - Booleans are bit-packed into a [`Bitmask`].
//! - Strings use the Arrow `offsets + data` layout: the i-th string is
//!   `data[offsets[i]..offsets[i + 1]]`.
//! - Timestamps are `Vec64<i64>` ticks at a [`TimeUnit`] resolution.
//! - `null_mask` is `1 = valid`, `0 = null`. `None` means every element is
//!   valid. Values under a cleared bit are unspecified and are never read
//!   for semantic decisions.

use vec64::Vec64;

use crate::enums::data_type::DataType;
use crate::enums::error::BinopError;
use crate::enums::time_units::TimeUnit;
use crate::structs::bitmask::Bitmask;
use crate::traits::type_unions::NativeType;

/// UTF-8 string storage with `u32` offsets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringData {
    /// Offsets into `data`. Length = number of strings + 1.
    pub offsets: Vec64<u32>,
    /// Concatenated UTF-8 bytes.
    pub data: Vec64<u8>,
}

impl StringData {
    /// Builds from string slices.
    pub fn from_strs<S: AsRef<str>>(values: &[S]) -> Self {
        let mut offsets = Vec64::with_capacity(values.len() + 1);
        let mut data = Vec64::new();
        offsets.push(0u32);
        for s in values {
            data.extend_from_slice(s.as_ref().as_bytes());
            offsets.push(data.len() as u32);
        }
        Self { offsets, data }
    }

    /// Number of strings.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw UTF-8 bytes of string `i`.
    #[inline]
    pub fn bytes_at(&self, i: usize) -> &[u8] {
        let start = self.offsets[i] as usize;
        let end = self.offsets[i + 1] as usize;
        &self.data[start..end]
    }

    /// String `i`, or `None` if the bytes are not valid UTF-8.
    #[inline]
    pub fn str_at(&self, i: usize) -> Option<&str> {
        std::str::from_utf8(self.bytes_at(i)).ok()
    }
}

/// Typed payload of a [`Column`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int8(Vec64<i8>),
    Int16(Vec64<i16>),
    Int32(Vec64<i32>),
    Int64(Vec64<i64>),
    UInt8(Vec64<u8>),
    UInt16(Vec64<u16>),
    UInt32(Vec64<u32>),
    UInt64(Vec64<u64>),
    Float32(Vec64<f32>),
    Float64(Vec64<f64>),
    Boolean(Bitmask),
    String(StringData),
    Timestamp(Vec64<i64>, TimeUnit),
}

impl ColumnData {
    pub fn data_type(&self) -> DataType {
        match self {
            ColumnData::Int8(_) => DataType::Int8,
            ColumnData::Int16(_) => DataType::Int16,
            ColumnData::Int32(_) => DataType::Int32,
            ColumnData::Int64(_) => DataType::Int64,
            ColumnData::UInt8(_) => DataType::UInt8,
            ColumnData::UInt16(_) => DataType::UInt16,
            ColumnData::UInt32(_) => DataType::UInt32,
            ColumnData::UInt64(_) => DataType::UInt64,
            ColumnData::Float32(_) => DataType::Float32,
            ColumnData::Float64(_) => DataType::Float64,
            ColumnData::Boolean(_) => DataType::Boolean,
            ColumnData::String(_) => DataType::String,
            ColumnData::Timestamp(_, unit) => DataType::Timestamp(*unit),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int8(v) => v.len(),
            ColumnData::Int16(v) => v.len(),
            ColumnData::Int32(v) => v.len(),
            ColumnData::Int64(v) => v.len(),
            ColumnData::UInt8(v) => v.len(),
            ColumnData::UInt16(v) => v.len(),
            ColumnData::UInt32(v) => v.len(),
            ColumnData::UInt64(v) => v.len(),
            ColumnData::Float32(v) => v.len(),
            ColumnData::Float64(v) => v.len(),
            ColumnData::Boolean(m) => m.len(),
            ColumnData::String(s) => s.len(),
            ColumnData::Timestamp(v, _) => v.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// # Column
///
/// Typed, nullable, fixed-length column.
///
/// ## Example
/// ```rust
/// use colbinop::{Column, DataType};
///
/// let c = Column::from_options([Some(1i32), None, Some(3)]);
/// assert_eq!(c.len(), 3);
/// assert_eq!(c.data_type(), DataType::Int32);
/// assert_eq!(c.null_count(), 1);
/// assert_eq!(c.get::<i32>(2), Some(3));
/// assert_eq!(c.get::<i32>(1), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub data: ColumnData,
    /// Optional null mask (bit-packed; 1=valid, 0=null).
    pub null_mask: Option<Bitmask>,
}

impl Column {
    /// Constructs a column, validating the null mask length.
    pub fn new(data: ColumnData, null_mask: Option<Bitmask>) -> Result<Self, BinopError> {
        if let Some(mask) = &null_mask {
            if mask.len() != data.len() {
                return Err(BinopError::NullMaskLengthMismatch {
                    expected: data.len(),
                    found: mask.len(),
                });
            }
        }
        Ok(Self { data, null_mask })
    }

    /// Dense column, no nulls.
    #[inline]
    pub fn from_slice<T: NativeType>(values: &[T]) -> Self {
        let mut buf = Vec64::with_capacity(values.len());
        buf.extend_from_slice(values);
        Self::from_vec64(buf)
    }

    /// Dense column taking ownership of an aligned buffer.
    #[inline]
    pub fn from_vec64<T: NativeType>(values: Vec64<T>) -> Self {
        Self {
            data: T::into_column_data(values),
            null_mask: None,
        }
    }

    /// Column from optional values. `None` becomes a null slot holding
    /// `T::default()`.
    pub fn from_options<T, I>(values: I) -> Self
    where
        T: NativeType,
        I: IntoIterator<Item = Option<T>>,
    {
        let (values, validity): (Vec<T>, Vec<bool>) = values
            .into_iter()
            .map(|v| (v.unwrap_or_default(), v.is_some()))
            .unzip();
        let mut buf = Vec64::with_capacity(values.len());
        buf.extend_from_slice(&values);
        Self {
            data: T::into_column_data(buf),
            null_mask: Some(Bitmask::from_bools(validity)),
        }
    }

    /// Dense string column.
    pub fn from_strs<S: AsRef<str>>(values: &[S]) -> Self {
        Self {
            data: ColumnData::String(StringData::from_strs(values)),
            null_mask: None,
        }
    }

    /// String column from optional values. `None` becomes an empty null slot.
    pub fn from_str_options<'s, I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<&'s str>>,
    {
        let (values, validity): (Vec<&str>, Vec<bool>) = values
            .into_iter()
            .map(|v| (v.unwrap_or(""), v.is_some()))
            .unzip();
        Self {
            data: ColumnData::String(StringData::from_strs(&values)),
            null_mask: Some(Bitmask::from_bools(validity)),
        }
    }

    /// Dense timestamp column of raw ticks.
    pub fn from_timestamps(ticks: &[i64], unit: TimeUnit) -> Self {
        let mut buf = Vec64::with_capacity(ticks.len());
        buf.extend_from_slice(ticks);
        Self {
            data: ColumnData::Timestamp(buf, unit),
            null_mask: None,
        }
    }

    /// Replaces the null mask, validating its length.
    pub fn with_null_mask(self, null_mask: Bitmask) -> Result<Self, BinopError> {
        Self::new(self.data, Some(null_mask))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn data_type(&self) -> DataType {
        self.data.data_type()
    }

    /// True when index `i` holds a defined value.
    #[inline]
    pub fn is_valid(&self, i: usize) -> bool {
        match &self.null_mask {
            Some(mask) => mask.get(i),
            None => i < self.len(),
        }
    }

    #[inline]
    pub fn is_null(&self, i: usize) -> bool {
        !self.is_valid(i)
    }

    pub fn null_count(&self) -> usize {
        match &self.null_mask {
            Some(mask) => mask.count_zeros(),
            None => 0,
        }
    }

    /// Value at `i`, or `None` when null, out of range, or not of type `T`.
    #[inline]
    pub fn get<T: NativeType>(&self, i: usize) -> Option<T> {
        if !self.is_valid(i) {
            return None;
        }
        T::value_at(&self.data, i)
    }

    /// String at `i`, or `None` when null or not a string column.
    pub fn get_str(&self, i: usize) -> Option<&str> {
        match &self.data {
            ColumnData::String(s) if self.is_valid(i) => s.str_at(i),
            _ => None,
        }
    }

    /// Timestamp ticks at `i`, or `None` when null or not a timestamp column.
    pub fn get_timestamp(&self, i: usize) -> Option<i64> {
        match &self.data {
            ColumnData::Timestamp(v, _) if self.is_valid(i) => v.get(i).copied(),
            _ => None,
        }
    }

    /// All elements as options, `None` at null slots.
    pub fn to_vec<T: NativeType>(&self) -> Vec<Option<T>> {
        (0..self.len()).map(|i| self.get::<T>(i)).collect()
    }
}
