// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

use std::fmt::Debug;

use num_traits::{Float as NumFloat, PrimInt};
use vec64::Vec64;

use crate::enums::data_type::DataType;
use crate::kernels::cast::{CastSource, CastTarget};
use crate::structs::bitmask::Bitmask;
use crate::structs::column::ColumnData;

/// Trait for fixed-width element types a column can store natively.
///
/// Useful when specifying `my_fn::<T: NativeType>() {}`.
///
/// Ties a Rust primitive to its [`DataType`] and to its `ColumnData` arm,
/// and guarantees it can take part in every cast of the cast layer.
pub trait NativeType:
    CastSource + CastTarget + Copy + Default + Debug + PartialEq + PartialOrd + Send + Sync + 'static
{
    const DATA_TYPE: DataType;

    /// Wraps a buffer of values into the matching column data arm.
    fn into_column_data(values: Vec64<Self>) -> ColumnData;

    /// Reads index `idx` when `data` holds this type, ignoring validity.
    fn value_at(data: &ColumnData, idx: usize) -> Option<Self>;
}

macro_rules! impl_native_type {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl NativeType for $t {
                const DATA_TYPE: DataType = DataType::$variant;

                #[inline]
                fn into_column_data(values: Vec64<Self>) -> ColumnData {
                    ColumnData::$variant(values)
                }

                #[inline]
                fn value_at(data: &ColumnData, idx: usize) -> Option<Self> {
                    match data {
                        ColumnData::$variant(v) => v.get(idx).copied(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_native_type!(
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
);

impl NativeType for bool {
    const DATA_TYPE: DataType = DataType::Boolean;

    #[inline]
    fn into_column_data(values: Vec64<Self>) -> ColumnData {
        ColumnData::Boolean(Bitmask::from_bools(values.iter().copied()))
    }

    #[inline]
    fn value_at(data: &ColumnData, idx: usize) -> Option<Self> {
        match data {
            ColumnData::Boolean(m) if idx < m.len() => Some(m.get(idx)),
            _ => None,
        }
    }
}

/// Trait for native integer element types.
///
/// Extends and constrains the *num-traits* `PrimInt` implementation to fit the crate's type universe.
pub trait Integer: NativeType + PrimInt {}
impl Integer for i8 {}
impl Integer for i16 {}
impl Integer for i32 {}
impl Integer for i64 {}
impl Integer for u8 {}
impl Integer for u16 {}
impl Integer for u32 {}
impl Integer for u64 {}

/// Trait for native float element types.
///
/// Extends and constrains the *num-traits* `Float` implementation to fit the crate's type universe.
pub trait Float: NativeType + NumFloat {}
impl Float for f32 {}
impl Float for f64 {}
