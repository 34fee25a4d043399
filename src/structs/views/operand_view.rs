// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **OperandView Module** - *Uniform Per-Index Operand Access*
//!
//! Read-only view over an operand already cast into the working type.
//!
//! A column view holds `N` values with stride 1. A scalar view holds one
//! value with stride 0. Both are read with `values[i * stride]`, so the
//! evaluation loop is identical for every combination of operand kinds and
//! carries no per-index branch on the scalar side.

use vec64::Vec64;

/// Working-typed operand view. See the module docs.
#[derive(Debug, Clone)]
pub struct OperandView<T> {
    values: Vec64<T>,
    stride: usize,
}

impl<T: Copy> OperandView<T> {
    /// View over one value per output index.
    #[inline]
    pub fn column(values: Vec64<T>) -> Self {
        Self { values, stride: 1 }
    }

    /// View broadcasting a single value to every output index.
    #[inline]
    pub fn scalar(value: T) -> Self {
        let mut values = Vec64::with_capacity(1);
        values.push(value);
        Self { values, stride: 0 }
    }

    /// Working value at output index `i`.
    #[inline(always)]
    pub fn value(&self, i: usize) -> T {
        self.values[i * self.stride]
    }

    #[inline]
    pub fn is_broadcast(&self) -> bool {
        self.stride == 0
    }

    /// Number of physical values held.
    #[inline]
    pub fn physical_len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vec64::vec64;

    #[test]
    fn test_column_view_reads_in_order() {
        let v = OperandView::column(vec64![1i32, 2, 3]);
        assert_eq!((0..3).map(|i| v.value(i)).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(!v.is_broadcast());
    }

    #[test]
    fn test_scalar_view_repeats() {
        let v = OperandView::scalar(7.5f64);
        assert!(v.is_broadcast());
        assert_eq!(v.physical_len(), 1);
        assert!((0..100).all(|i| v.value(i) == 7.5));
    }
}
