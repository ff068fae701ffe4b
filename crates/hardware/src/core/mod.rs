//! Register core.
//!
//! This module contains the PISO shift register's next-state function and a
//! stateful wrapper around it. Nothing here knows about clocks or time; the
//! testbench decides when an edge happens and calls in.

/// PISO register state, next-state function, and stateful wrapper.
pub mod register;

pub use self::register::{Inputs, PisoRegister, RegisterState, advance};
