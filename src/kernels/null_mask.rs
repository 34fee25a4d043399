// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Null Mask Module
//!
//! Output validity of a binary operation: index `i` is null iff either
//! operand is null at `i`. Values are never consulted, so a null element
//! whose payload would trap or overflow is simply masked out.

use crate::enums::error::BinopError;
use crate::enums::operand::Operand;
use crate::structs::bitmask::Bitmask;

/// Validity of one operand over the output index range.
#[derive(Debug, Clone, Copy)]
enum Validity<'a> {
    AllValid,
    AllNull,
    Mask(&'a Bitmask),
}

fn validity_of<'a>(operand: &Operand<'a>) -> Result<Validity<'a>, BinopError> {
    match *operand {
        Operand::Scalar(s) if s.is_valid() => Ok(Validity::AllValid),
        Operand::Scalar(_) => Ok(Validity::AllNull),
        Operand::Column(c) => match &c.null_mask {
            None => Ok(Validity::AllValid),
            Some(mask) if mask.len() != c.len() => Err(BinopError::NullMaskLengthMismatch {
                expected: c.len(),
                found: mask.len(),
            }),
            Some(mask) => Ok(Validity::Mask(mask)),
        },
    }
}

/// Combines operand validity into the output null mask.
///
/// Returns `None` when every output element is valid.
pub fn combine_validity(
    lhs: &Operand<'_>,
    rhs: &Operand<'_>,
    len: usize,
) -> Result<Option<Bitmask>, BinopError> {
    let combined = match (validity_of(lhs)?, validity_of(rhs)?) {
        (Validity::AllNull, _) | (_, Validity::AllNull) => Some(Bitmask::new_set_all(len, false)),
        (Validity::AllValid, Validity::AllValid) => None,
        (Validity::Mask(m), Validity::AllValid) | (Validity::AllValid, Validity::Mask(m)) => {
            Some(m.clone())
        }
        (Validity::Mask(a), Validity::Mask(b)) => Some(a & b),
    };
    Ok(combined)
}
