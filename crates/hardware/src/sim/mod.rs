//! Discrete-event simulation harness.
//!
//! Drives the register core from a virtual clock. It provides:
//! 1. **Clock:** A free-running generator that alternates rising and falling edges.
//! 2. **Stimulus:** Scripts of reset/load/clock directives, held as plain data.
//! 3. **Testbench:** The scheduler loop that applies a script and records serial output.

/// Free-running virtual clock.
pub mod clock;

/// Stimulus steps and scripts.
pub mod stimulus;

/// Event scheduler that runs scripts against the register.
pub mod testbench;

pub use clock::{Clock, Edge};
pub use stimulus::{Script, Step};
pub use testbench::{Sample, Testbench};
