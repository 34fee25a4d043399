// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Result Builder Module
//!
//! Final stage of an evaluation: casts the operator's natural result buffer
//! into the requested output type and attaches the combined null mask.

use vec64::Vec64;

use crate::enums::data_type::DataType;
use crate::enums::error::BinopError;
use crate::enums::operator::BinaryOperator;
use crate::structs::bitmask::Bitmask;
use crate::structs::column::Column;
use crate::traits::type_unions::NativeType;

/// Owns the output of one evaluation until it is handed to the caller.
#[derive(Debug)]
pub struct ResultBuilder {
    op: BinaryOperator,
    out_type: DataType,
    len: usize,
    null_mask: Option<Bitmask>,
}

impl ResultBuilder {
    pub fn new(op: BinaryOperator, out_type: DataType, len: usize, null_mask: Option<Bitmask>) -> Self {
        Self {
            op,
            out_type,
            len,
            null_mask,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Casts `raw` into the output type and assembles the column.
    pub fn finish<R: NativeType>(self, raw: Vec64<R>) -> Result<Column, BinopError> {
        debug_assert_eq!(raw.len(), self.len, "kernel output length");
        let data = with_native_type!(self.out_type, O => {
            let cast: Vec64<O> = raw.iter().map(|&v| v.cast::<O>()).collect();
            O::into_column_data(cast)
        }, _ => {
            return Err(BinopError::InvalidOutputType {
                op: self.op,
                out: self.out_type,
            });
        });
        Column::new(data, self.null_mask)
    }
}
