//! Global Simulator Constants.
//!
//! This module defines the constants shared by the register core and the
//! testbench. It includes:
//! 1. **Width Limits:** Legal register widths, bounded by the `u64` backing store.
//! 2. **Clock Constants:** The virtual clock's half period in ticks.

/// Narrowest legal register width in bits.
pub const MIN_WIDTH: u32 = 1;

/// Widest legal register width in bits (the register is backed by a `u64`).
pub const MAX_WIDTH: u32 = 64;

/// Ticks between two consecutive clock toggles.
///
/// Only edge ordering matters to the model; the value is carried so recorded
/// samples have a readable timestamp (rising edges land on odd multiples).
pub const HALF_PERIOD_TICKS: u64 = 10;
