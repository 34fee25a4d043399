// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **Operator Kernels** - *Per-Element Value Functions*
//!
//! Pure `(working lhs, working rhs) -> result` functions for every operator.
//! The evaluation driver picks one of these per call and maps it over the
//! output index range, so each body here is monomorphic and branch-light.
//!
//! ## Edge cases
//! - Integer `div`, `floor_div` and `modulo` by zero return `0`.
//! - Integer `MIN / -1` wraps to `MIN`, and `MIN % -1` is `0`.
//! - Integer add, sub and mul wrap in two's complement.
//! - Shift amounts are taken modulo the bit width of the shifted type.
//! - Float kernels follow IEEE-754, producing `inf` or `NaN` where it does.

use crate::traits::type_unions::{Float, Integer, NativeType};

/// Arithmetic operators over a promoted working type.
pub trait ArithmeticKernel: NativeType {
    fn add(a: Self, b: Self) -> Self;
    fn sub(a: Self, b: Self) -> Self;
    fn mul(a: Self, b: Self) -> Self;
    /// Truncating division.
    fn div(a: Self, b: Self) -> Self;
    /// Division rounded toward negative infinity.
    fn floor_div(a: Self, b: Self) -> Self;
    /// Remainder carrying the sign of the dividend.
    fn modulo(a: Self, b: Self) -> Self;
}

macro_rules! impl_arithmetic_int {
    ($($t:ident),*) => {
        $(
            impl ArithmeticKernel for $t {
                #[inline(always)]
                fn add(a: Self, b: Self) -> Self { a.wrapping_add(b) }
                #[inline(always)]
                fn sub(a: Self, b: Self) -> Self { a.wrapping_sub(b) }
                #[inline(always)]
                fn mul(a: Self, b: Self) -> Self { a.wrapping_mul(b) }

                #[inline(always)]
                fn div(a: Self, b: Self) -> Self {
                    if b == 0 { 0 } else { a.wrapping_div(b) }
                }

                #[inline(always)]
                fn floor_div(a: Self, b: Self) -> Self {
                    floor_div_int!(@$t, a, b)
                }

                #[inline(always)]
                fn modulo(a: Self, b: Self) -> Self {
                    if b == 0 { 0 } else { a.wrapping_rem(b) }
                }
            }
        )*
    };
}

// Signed quotients step down when the remainder and divisor disagree in sign.
// Unsigned floor division is plain truncating division.
macro_rules! floor_div_int {
    (@i8, $a:expr, $b:expr) => { floor_div_int!(signed $a, $b) };
    (@i16, $a:expr, $b:expr) => { floor_div_int!(signed $a, $b) };
    (@i32, $a:expr, $b:expr) => { floor_div_int!(signed $a, $b) };
    (@i64, $a:expr, $b:expr) => { floor_div_int!(signed $a, $b) };
    (@$t:ty, $a:expr, $b:expr) => {{
        let (a, b) = ($a, $b);
        if b == 0 { 0 } else { a / b }
    }};
    (signed $a:expr, $b:expr) => {{
        let (a, b) = ($a, $b);
        if b == 0 {
            0
        } else {
            let q = a.wrapping_div(b);
            let r = a.wrapping_rem(b);
            if r != 0 && ((r < 0) != (b < 0)) { q.wrapping_sub(1) } else { q }
        }
    }};
}

impl_arithmetic_int!(i8, i16, i32, i64, u8, u16, u32, u64);

#[inline(always)]
fn float_floor_div<T: Float>(a: T, b: T) -> T {
    (a / b).floor()
}

#[inline(always)]
fn float_modulo<T: Float>(a: T, b: T) -> T {
    a % b
}

macro_rules! impl_arithmetic_float {
    ($($t:ty),*) => {
        $(
            impl ArithmeticKernel for $t {
                #[inline(always)]
                fn add(a: Self, b: Self) -> Self { a + b }
                #[inline(always)]
                fn sub(a: Self, b: Self) -> Self { a - b }
                #[inline(always)]
                fn mul(a: Self, b: Self) -> Self { a * b }
                #[inline(always)]
                fn div(a: Self, b: Self) -> Self { a / b }
                #[inline(always)]
                fn floor_div(a: Self, b: Self) -> Self { float_floor_div(a, b) }
                #[inline(always)]
                fn modulo(a: Self, b: Self) -> Self { float_modulo(a, b) }
            }
        )*
    };
}

impl_arithmetic_float!(f32, f64);

/// Bitwise and shift operators over integer working types.
pub trait BitwiseKernel: Integer {
    /// Unsigned integer of the same width.
    type Unsigned: NativeType;

    fn bit_and(a: Self, b: Self) -> Self;
    fn bit_or(a: Self, b: Self) -> Self;
    fn bit_xor(a: Self, b: Self) -> Self;
    fn shl(a: Self, amount: u32) -> Self;
    /// Arithmetic shift for signed types.
    fn shr(a: Self, amount: u32) -> Self;
    /// Reinterprets `a` as unsigned, then shifts in zeros.
    fn shr_unsigned(a: Self, amount: u32) -> Self::Unsigned;
}

macro_rules! impl_bitwise {
    ($($t:ty => $u:ty),*) => {
        $(
            impl BitwiseKernel for $t {
                type Unsigned = $u;

                #[inline(always)]
                fn bit_and(a: Self, b: Self) -> Self { a & b }
                #[inline(always)]
                fn bit_or(a: Self, b: Self) -> Self { a | b }
                #[inline(always)]
                fn bit_xor(a: Self, b: Self) -> Self { a ^ b }
                #[inline(always)]
                fn shl(a: Self, amount: u32) -> Self { a.wrapping_shl(amount) }
                #[inline(always)]
                fn shr(a: Self, amount: u32) -> Self { a.wrapping_shr(amount) }
                #[inline(always)]
                fn shr_unsigned(a: Self, amount: u32) -> $u {
                    (a as $u).wrapping_shr(amount)
                }
            }
        )*
    };
}

impl_bitwise!(
    i8 => u8, i16 => u16, i32 => u32, i64 => u64,
    u8 => u8, u16 => u16, u32 => u32, u64 => u64
);

// Double precision operators

#[inline(always)]
pub fn true_div(a: f64, b: f64) -> f64 {
    a / b
}

#[inline(always)]
pub fn pow(a: f64, b: f64) -> f64 {
    a.powf(b)
}

/// `log(a) / log(b)`, `b` being the base.
#[inline(always)]
pub fn log_base(a: f64, b: f64) -> f64 {
    a.ln() / b.ln()
}

#[inline(always)]
pub fn atan2(a: f64, b: f64) -> f64 {
    a.atan2(b)
}

// Logical

#[inline(always)]
pub fn logical_and(a: bool, b: bool) -> bool {
    a && b
}

#[inline(always)]
pub fn logical_or(a: bool, b: bool) -> bool {
    a || b
}

// Comparison, shared by numerics, timestamp ticks and string bytes

#[inline(always)]
pub fn less<T: PartialOrd>(a: T, b: T) -> bool {
    a < b
}

#[inline(always)]
pub fn greater<T: PartialOrd>(a: T, b: T) -> bool {
    a > b
}

#[inline(always)]
pub fn less_equal<T: PartialOrd>(a: T, b: T) -> bool {
    a <= b
}

#[inline(always)]
pub fn greater_equal<T: PartialOrd>(a: T, b: T) -> bool {
    a >= b
}

#[inline(always)]
pub fn equal<T: PartialOrd>(a: T, b: T) -> bool {
    a == b
}
