//! Simulation harness tests.

/// Virtual clock edge generation.
pub mod clock;
