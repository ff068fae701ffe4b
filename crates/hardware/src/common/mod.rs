//! Common utilities and types used throughout the PISO simulator.
//!
//! This module provides the building blocks shared by the register core and the
//! testbench. It includes:
//! 1. **Constants:** Register width limits and the clock half period.
//! 2. **Bit Helpers:** Width masks and fit checks for W-bit values.
//! 3. **Logic Levels:** The two-valued level carried by a wire (clock, reset pin).
//! 4. **Error Handling:** Configuration-time error type.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types raised while building a simulation.
pub mod error;

/// Logic level and bit-width helpers.
pub mod level;

pub use constants::{MAX_WIDTH, MIN_WIDTH};
pub use error::ConfigError;
pub use level::{Level, fits, mask};
