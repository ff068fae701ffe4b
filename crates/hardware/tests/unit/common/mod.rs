//! Unit tests for shared helpers.


/// Bit masks and logic levels.
pub mod level;
