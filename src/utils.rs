// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Utilities - *Float Accuracy Helpers*
//!
//! ULP (unit in the last place) distances, used to state accuracy bounds of
//! the transcendental operators.

/// Number of representable `f64` values between `a` and `b`.
///
/// `0.0` and `-0.0` are 0 apart, as are two NaNs. A NaN against a number is
/// `u64::MAX`.
pub fn ulp_distance_f64(a: f64, b: f64) -> u64 {
    if a == b || (a.is_nan() && b.is_nan()) {
        return 0;
    }
    if a.is_nan() || b.is_nan() {
        return u64::MAX;
    }
    let (a, b) = (ordered_bits_f64(a) as i128, ordered_bits_f64(b) as i128);
    (a - b).unsigned_abs() as u64
}

/// Number of representable `f32` values between `a` and `b`.
pub fn ulp_distance_f32(a: f32, b: f32) -> u64 {
    if a == b || (a.is_nan() && b.is_nan()) {
        return 0;
    }
    if a.is_nan() || b.is_nan() {
        return u64::MAX;
    }
    let (a, b) = (ordered_bits_f32(a) as i64, ordered_bits_f32(b) as i64);
    (a - b).unsigned_abs()
}

// Sign-magnitude to two's complement, so adjacent floats are adjacent integers.
#[inline]
fn ordered_bits_f64(x: f64) -> i64 {
    let bits = x.to_bits() as i64;
    if bits < 0 { i64::MIN - bits } else { bits }
}

#[inline]
fn ordered_bits_f32(x: f32) -> i32 {
    let bits = x.to_bits() as i32;
    if bits < 0 { i32::MIN - bits } else { bits }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_values() {
        let x = 1.0f64;
        assert_eq!(ulp_distance_f64(x, f64::from_bits(x.to_bits() + 1)), 1);
        assert_eq!(ulp_distance_f64(x, f64::from_bits(x.to_bits() + 2)), 2);
        assert_eq!(ulp_distance_f32(1.0, f32::from_bits(1.0f32.to_bits() + 3)), 3);
    }

    #[test]
    fn test_across_zero() {
        assert_eq!(ulp_distance_f64(0.0, -0.0), 0);
        let tiny = f64::from_bits(1);
        assert_eq!(ulp_distance_f64(tiny, -tiny), 2);
    }

    #[test]
    fn test_nan() {
        assert_eq!(ulp_distance_f64(f64::NAN, f64::NAN), 0);
        assert_eq!(ulp_distance_f64(f64::NAN, 1.0), u64::MAX);
        assert_eq!(ulp_distance_f32(1.0, f32::NAN), u64::MAX);
    }
}
