//! Parallel-In Serial-Out shift register simulator library.
//!
//! This crate models a single PISO shift register and the minimal clocked
//! harness needed to exercise it deterministically:
//! 1. **Core:** A pure next-state function (reset, load, shift) and a stateful register.
//! 2. **Simulation:** A virtual clock, stimulus scripts, and the testbench scheduler loop.
//! 3. **Configuration:** Width, reset polarity and mode, and the reference stimulus.
//! 4. **Statistics:** Edge and sample counters for a run.
//!
//! ```
//! use piso_core::{Config, Testbench};
//!
//! let (_, samples) = Testbench::scenario(&Config::default()).unwrap();
//! let bits: Vec<u8> = samples.iter().map(|s| s.bit()).collect();
//! assert_eq!(bits, [1, 1, 0, 1]);
//! ```

/// Common types and constants (bit masks, logic levels, errors).
pub mod common;
/// Simulator configuration (defaults, reset mode, validation).
pub mod config;
/// Register core (state, next-state function, stateful register).
pub mod core;
/// Discrete-event harness (clock, stimulus, testbench).
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Configuration-time error type.
pub use crate::common::ConfigError;
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// The register core's next-state function and stateful wrapper.
pub use crate::core::{PisoRegister, RegisterState, advance};
/// Testbench types; construct with `Testbench::new` and drive with `Testbench::run`.
pub use crate::sim::{Sample, Script, Step, Testbench};
