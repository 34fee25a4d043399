// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! Shared helpers for the integration tests: seeded random columns and a
//! per-element reference check of an evaluation result.

#![allow(dead_code)]

use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use colbinop::kernels::cast::cast_scalar_value;
use colbinop::{Column, NativeType, Operand, Scalar, TimeUnit};

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random validity, roughly one null in five.
pub fn random_validity(rng: &mut StdRng, len: usize) -> Vec<bool> {
    (0..len).map(|_| rng.gen_bool(0.8)).collect()
}

/// Column of `len` values drawn from `1..10` with random nulls.
pub fn random_column<T>(rng: &mut StdRng, len: usize) -> Column
where
    T: NativeType + SampleUniform + From<u8>,
{
    random_column_in(rng, len, T::from(1), T::from(10))
}

/// Column of `len` values drawn from `lo..hi` with random nulls.
pub fn random_column_in<T>(rng: &mut StdRng, len: usize, lo: T, hi: T) -> Column
where
    T: NativeType + SampleUniform,
{
    let validity = random_validity(rng, len);
    let values: Vec<Option<T>> = validity
        .into_iter()
        .map(|valid| {
            let v = rng.gen_range(lo..hi);
            valid.then_some(v)
        })
        .collect();
    Column::from_options(values)
}

/// Valid scalar drawn from `1..10`.
pub fn random_scalar<T>(rng: &mut StdRng) -> Scalar
where
    T: NativeType + SampleUniform + From<u8> + Into<Scalar>,
{
    rng.gen_range(T::from(1)..T::from(10)).into()
}

/// Timestamp column of ticks in `1..10` scaled by `factor`, with random nulls.
pub fn random_timestamps(rng: &mut StdRng, len: usize, unit: TimeUnit, factor: i64) -> Column {
    let ticks: Vec<i64> = (0..len).map(|_| rng.gen_range(1..10) * factor).collect();
    let validity = random_validity(rng, len);
    Column::from_timestamps(&ticks, unit)
        .with_null_mask(colbinop::Bitmask::from_bools(validity))
        .unwrap()
}

/// Value an operand contributes at output index `i`, `None` when null.
pub fn value_at<T: NativeType>(operand: Operand<'_>, i: usize) -> Option<T> {
    match operand {
        Operand::Column(c) => c.get::<T>(i),
        Operand::Scalar(s) if s.is_valid() => cast_scalar_value::<T>(&s.value),
        Operand::Scalar(_) => None,
    }
}

/// Equality that treats two NaNs as equal.
pub fn same<T: NativeType>(a: T, b: T) -> bool {
    #[allow(clippy::eq_op)]
    let both_nan = a != a && b != b;
    a == b || both_nan
}

/// Checks every output element against `reference` applied to the inputs,
/// and every null against the null rule.
pub fn assert_binop<O, L, R, F>(out: &Column, lhs: Operand<'_>, rhs: Operand<'_>, reference: F)
where
    O: NativeType,
    L: NativeType,
    R: NativeType,
    F: Fn(L, R) -> O,
{
    assert_eq!(out.data_type(), O::DATA_TYPE);
    for i in 0..out.len() {
        match (value_at::<L>(lhs, i), value_at::<R>(rhs, i)) {
            (Some(l), Some(r)) => {
                let expected = reference(l, r);
                let got = out.get::<O>(i);
                assert!(
                    got.is_some_and(|g| same(g, expected)),
                    "index {i}: lhs {l:?}, rhs {r:?}, expected {expected:?}, got {got:?}"
                );
            }
            _ => assert!(out.is_null(i), "index {i} should be null"),
        }
    }
}
