// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **Macros Module** - *DataType Dispatch Macros*
//!
//! Turn a runtime [`DataType`](crate::DataType) into a monomorphic code
//! path. The body is expanded once per matching type with `$t` aliased to
//! that type's native Rust primitive.
//!
//! ```ignore
//! let len = with_numeric_type!(dtype, T => { size_of::<T>() }, _ => 0);
//! ```

/// Dispatches over every natively stored type: the numerics plus `bool`.
#[macro_export]
macro_rules! with_native_type {
    ($dt:expr, $t:ident => $body:block, _ => $fallback:expr) => {
        match $dt {
            $crate::DataType::Boolean => {
                #[allow(dead_code)]
                type $t = bool;
                $body
            }
            other => $crate::with_numeric_type!(other, $t => $body, _ => $fallback),
        }
    };
}

/// Dispatches over integer and float types.
#[macro_export]
macro_rules! with_numeric_type {
    ($dt:expr, $t:ident => $body:block, _ => $fallback:expr) => {
        match $dt {
            $crate::DataType::Float32 => {
                #[allow(dead_code)]
                type $t = f32;
                $body
            }
            $crate::DataType::Float64 => {
                #[allow(dead_code)]
                type $t = f64;
                $body
            }
            other => $crate::with_integer_type!(other, $t => $body, _ => $fallback),
        }
    };
}

/// Dispatches over the eight integer types.
#[macro_export]
macro_rules! with_integer_type {
    ($dt:expr, $t:ident => $body:block, _ => $fallback:expr) => {
        match $dt {
            $crate::DataType::Int8 => {
                #[allow(dead_code)]
                type $t = i8;
                $body
            }
            $crate::DataType::Int16 => {
                #[allow(dead_code)]
                type $t = i16;
                $body
            }
            $crate::DataType::Int32 => {
                #[allow(dead_code)]
                type $t = i32;
                $body
            }
            $crate::DataType::Int64 => {
                #[allow(dead_code)]
                type $t = i64;
                $body
            }
            $crate::DataType::UInt8 => {
                #[allow(dead_code)]
                type $t = u8;
                $body
            }
            $crate::DataType::UInt16 => {
                #[allow(dead_code)]
                type $t = u16;
                $body
            }
            $crate::DataType::UInt32 => {
                #[allow(dead_code)]
                type $t = u32;
                $body
            }
            $crate::DataType::UInt64 => {
                #[allow(dead_code)]
                type $t = u64;
                $body
            }
            _ => $fallback,
        }
    };
}
