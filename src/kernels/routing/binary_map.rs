// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Binary Map Module
//!
//! Element-wise application of a binary function over two working-typed
//! operand views.
//!
//! Both views are read through [`OperandView::value`], so a column and a
//! broadcast scalar go through the same loop. With the `parallel_proc`
//! feature, outputs of at least [`PARALLEL_THRESHOLD`] elements are split
//! across rayon's thread pool. Indices are independent, so no
//! synchronisation beyond the final join is needed.

use vec64::Vec64;

use crate::structs::views::operand_view::OperandView;

/// Output length at or above which the map runs in parallel when the
/// `parallel_proc` feature is enabled.
pub const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Apply `f` at every output index in `0..len`.
///
/// # Example
/// ```ignore
/// let lhs = OperandView::column(vec64![1.0f64, 2.0, 3.0]);
/// let rhs = OperandView::scalar(10.0f64);
/// let out = map_views(&lhs, &rhs, 3, |a, b| a * b);
/// assert_eq!(out.as_slice(), &[10.0, 20.0, 30.0]);
/// ```
#[inline]
pub fn map_views<L, R, O, F>(lhs: &OperandView<L>, rhs: &OperandView<R>, len: usize, f: F) -> Vec64<O>
where
    L: Copy + Send + Sync,
    R: Copy + Send + Sync,
    O: Copy + Default + Send + Sync,
    F: Fn(L, R) -> O + Send + Sync,
{
    #[cfg(feature = "parallel_proc")]
    if len >= PARALLEL_THRESHOLD {
        return map_views_parallel(lhs, rhs, len, f);
    }
    (0..len).map(|i| f(lhs.value(i), rhs.value(i))).collect()
}

#[cfg(feature = "parallel_proc")]
fn map_views_parallel<L, R, O, F>(lhs: &OperandView<L>, rhs: &OperandView<R>, len: usize, f: F) -> Vec64<O>
where
    L: Copy + Send + Sync,
    R: Copy + Send + Sync,
    O: Copy + Default + Send + Sync,
    F: Fn(L, R) -> O + Send + Sync,
{
    use rayon::prelude::*;

    let mut out = Vec64::with_capacity(len);
    out.resize(len, O::default());
    out.as_mut_slice()
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, slot)| *slot = f(lhs.value(i), rhs.value(i)));
    out
}
