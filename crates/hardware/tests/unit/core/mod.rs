//! Register core tests.

/// Property tests for the next-state function.
pub mod properties;
