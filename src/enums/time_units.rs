// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **TimeUnits Module** - *Timestamp Resolutions*
//!
//! Defines the resolutions a `Timestamp` column or scalar can be stored in.
//!
//! Timestamps are raw `i64` offsets from the UNIX epoch. Two timestamps of
//! different resolution are only comparable once both are expressed in the
//! finer of the two units, so `TimeUnit` carries the arithmetic needed for
//! that normalisation.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// # TimeUnit
///
/// Resolution of a timestamp value.
///
/// ## Behaviour
/// - Ordered from coarse to fine via [`TimeUnit::nanos_per_unit`].
/// - [`TimeUnit::finer`] picks the common resolution for a comparison, and
///   [`TimeUnit::scale_to`] gives the multiplier that rescales a value.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum TimeUnit {
    /// Whole seconds since epoch.
    Seconds,
    /// Milliseconds since epoch.
    Milliseconds,
    /// Microseconds since epoch.
    Microseconds,
    /// Nanoseconds since epoch.
    Nanoseconds,
    /// Default = days since epoch.
    #[default]
    Days,
}

impl TimeUnit {
    /// Every unit, coarsest first.
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Days,
        TimeUnit::Seconds,
        TimeUnit::Milliseconds,
        TimeUnit::Microseconds,
        TimeUnit::Nanoseconds,
    ];

    /// Number of nanoseconds in one tick of this unit.
    #[inline]
    pub const fn nanos_per_unit(self) -> i64 {
        match self {
            TimeUnit::Days => 86_400_000_000_000,
            TimeUnit::Seconds => 1_000_000_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Nanoseconds => 1,
        }
    }

    /// Returns whichever of `self` and `other` has the smaller tick.
    #[inline]
    pub fn finer(self, other: TimeUnit) -> TimeUnit {
        if self.nanos_per_unit() <= other.nanos_per_unit() {
            self
        } else {
            other
        }
    }

    /// Multiplier converting a value in `self` into `target`.
    ///
    /// Only meaningful when `target` is finer than or equal to `self`;
    /// rescaling towards a coarser unit is never needed for comparison and
    /// returns `1`.
    #[inline]
    pub fn scale_to(self, target: TimeUnit) -> i64 {
        let (from, to) = (self.nanos_per_unit(), target.nanos_per_unit());
        if from >= to { from / to } else { 1 }
    }

    /// Short suffix used in type names, e.g. `timestamp[ms]`.
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Days => "D",
            TimeUnit::Seconds => "s",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Microseconds => "us",
            TimeUnit::Nanoseconds => "ns",
        }
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            TimeUnit::Seconds => f.write_str("Seconds"),
            TimeUnit::Milliseconds => f.write_str("Milliseconds"),
            TimeUnit::Microseconds => f.write_str("Microseconds"),
            TimeUnit::Nanoseconds => f.write_str("Nanoseconds"),
            TimeUnit::Days => f.write_str("Days"),
        }
    }
}
