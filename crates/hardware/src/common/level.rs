//! Logic Levels and Bit-Width Helpers.
//!
//! This module provides:
//! 1. **Levels:** `Level::Low` / `Level::High` for the clock and the reset pin.
//! 2. **Masks:** `mask(width)` and `fits(value, width)` for W-bit truncation.

use std::fmt;
use std::ops::Not;

use super::constants::MAX_WIDTH;

/// Logic level carried by a single wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// Logic 0.
    #[default]
    Low,
    /// Logic 1.
    High,
}

impl Level {
    /// Returns `true` for `Level::High`.
    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }

    /// Converts a bit into a level (`true` is high).
    #[inline]
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Self::High } else { Self::Low }
    }
}

impl Not for Level {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "0"),
            Self::High => write!(f, "1"),
        }
    }
}

/// Returns the all-ones mask for a register of `width` bits.
///
/// Widths of 64 or more saturate to `u64::MAX`; a width of 0 yields 0.
#[inline]
pub const fn mask(width: u32) -> u64 {
    if width >= MAX_WIDTH {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Returns `true` when `value` is representable in `width` bits.
#[inline]
pub const fn fits(value: u64, width: u32) -> bool {
    value & !mask(width) == 0
}
