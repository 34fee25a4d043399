// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **Bitmask Module** - *Fast Bitpacked Byte Bitmask*
//!
//! Arrow-compatible, packed validity/boolean bitmask with 64-byte alignment.
//!
//! ## Purpose
//! - Validity (null) masks for every column (1 = valid, 0 = null).
//! - Backing storage for `Boolean` column data.
//!
//! ## Behaviour
//! - LSB corresponds to the first logical element.
//! - Trailing padding bits are always masked off, so byte-wise combination
//!   never leaks bits beyond `len`.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::ops::BitAnd;

use vec64::Vec64;

/// # Bitmask
///
/// 64-byte–aligned packed bitmask.
///
/// ### Description
/// - Used for `Boolean` column data and as the validity/null mask for all datatypes.
/// - Arrow-compatible: LSB = first element, 1 = set/valid, 0 = cleared/null.
///
/// # Example
/// ```rust
/// use colbinop::Bitmask;
///
/// let mut m = Bitmask::new_set_all(10, false);
/// m.set(3, true);
/// m.set(7, true);
/// assert!(m.get(3) && m.get(7));
/// assert_eq!(m.count_ones(), 2);
/// ```
#[derive(Clone, PartialEq, Default)]
pub struct Bitmask {
    pub bits: Vec64<u8>,
    pub len: usize,
}

impl Bitmask {
    /// Ensures all unused bits above self.len are zeroed, as the Arrow format requires.
    #[inline]
    pub fn mask_trailing_bits(&mut self) {
        if self.len == 0 || (self.len & 7) == 0 {
            return;
        }
        let last = self.bits.len() - 1;
        let mask = (1u8 << (self.len & 7)) - 1;
        self.bits[last] &= mask;
    }

    /// Create new mask, length = `len`, all bits set if `set` else cleared.
    #[inline]
    pub fn new_set_all(len: usize, set: bool) -> Self {
        let n_bytes = len.div_ceil(8);
        let mut data = Vec64::with_capacity(n_bytes);
        let fill = if set { 0xFF } else { 0 };
        data.resize(n_bytes, fill);
        let mut mask = Self { bits: data, len };
        mask.mask_trailing_bits();
        mask
    }

    /// Packs an iterator of booleans, one bit per item.
    pub fn from_bools<I>(values: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let iter = values.into_iter();
        let mut bits: Vec64<u8> = Vec64::with_capacity(iter.size_hint().0.div_ceil(8));
        let mut len = 0usize;
        let mut current = 0u8;
        for v in iter {
            current |= (v as u8) << (len & 7);
            len += 1;
            if len & 7 == 0 {
                bits.push(current);
                current = 0;
            }
        }
        if len & 7 != 0 {
            bits.push(current);
        }
        Self { bits, len }
    }

    /// Creates a bitmask from an existing packed byte buffer.
    pub fn from_bytes(bytes: impl AsRef<[u8]>, len: usize) -> Self {
        let bytes = bytes.as_ref();
        let n_bytes = len.div_ceil(8);
        let mut bits = Vec64::with_capacity(n_bytes);
        bits.extend_from_slice(&bytes[..n_bytes]);
        let mut out = Self { bits, len };
        out.mask_trailing_bits();
        out
    }

    /// Returns a ref slice to the raw u8 bytes
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_slice()
    }

    /// Returns the logical length of the bitmask
    ///
    /// *Excludes padding*
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns bit `idx`. Bits at or beyond `len` read as cleared.
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        if idx >= self.len {
            return false;
        }
        (self.bits[idx >> 3] >> (idx & 7)) & 1 != 0
    }

    /// Set or clear bit at index `i`.
    ///
    /// Panics if `i >= len`.
    #[inline]
    pub fn set(&mut self, i: usize, value: bool) {
        assert!(i < self.len, "Bitmask::set out of bounds (idx={i}, len={})", self.len);
        let byte = &mut self.bits[i >> 3];
        let bit = 1u8 << (i & 7);
        if value {
            *byte |= bit;
        } else {
            *byte &= !bit;
        }
    }

    /// Number of set bits.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Number of cleared bits, i.e. nulls when used as a validity mask.
    #[inline]
    pub fn count_zeros(&self) -> usize {
        self.len - self.count_ones()
    }

    /// Returns true if all bits set (i.e. valid for null-mask).
    #[inline]
    pub fn all_set(&self) -> bool {
        self.count_ones() == self.len
    }

    /// Iterates the logical bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.get(i))
    }
}

/// Byte-wise intersection of two masks of equal length.
impl BitAnd for &Bitmask {
    type Output = Bitmask;

    fn bitand(self, rhs: &Bitmask) -> Bitmask {
        assert_eq!(self.len, rhs.len, "Bitmask length mismatch in &");
        let bits: Vec64<u8> = self
            .bits
            .iter()
            .zip(rhs.bits.iter())
            .map(|(a, b)| a & b)
            .collect();
        Bitmask { bits, len: self.len }
    }
}

impl Debug for Bitmask {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Bitmask [")?;
        for (i, b) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", b as u8)?;
        }
        write!(f, "] (len={})", self.len)
    }
}
