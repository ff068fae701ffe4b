//! Parallel-In Serial-Out Shift Register.
//!
//! This module implements the register's clocked behaviour as a pure function.
//! On every active edge:
//! 1. **Reset:** An asserted reset clears the register; it overrides load and shift.
//! 2. **Load:** Otherwise, an asserted load captures `parallel_in`, masked to the width.
//! 3. **Shift:** Otherwise, the register shifts right by one, zero-filling the top bit.
//!
//! The serial output is the least-significant bit of the state *after* the
//! update, so a load edge already presents bit 0 of the loaded pattern.

use crate::common::constants::{MAX_WIDTH, MIN_WIDTH};
use crate::common::error::ConfigError;
use crate::common::level::mask;

/// Contents of a W-bit register.
///
/// `bits` never has a set bit at or above `width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterState {
    bits: u64,
    width: u32,
}

impl RegisterState {
    /// Creates a cleared register of `width` bits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWidth`] if `width` is outside `1..=64`.
    pub fn new(width: u32) -> Result<Self, ConfigError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
            return Err(ConfigError::InvalidWidth { width });
        }
        Ok(Self { bits: 0, width })
    }

    /// Creates a register of `width` bits holding `bits`, truncated to the width.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWidth`] if `width` is outside `1..=64`.
    pub fn with_bits(width: u32, bits: u64) -> Result<Self, ConfigError> {
        Ok(Self::new(width)?.replaced(bits))
    }

    /// Current register contents.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Register width in bits.
    #[inline]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Least-significant bit, i.e. the serial output pin.
    #[inline]
    pub const fn lsb(self) -> bool {
        self.bits & 1 == 1
    }

    /// Same-width register holding `bits & mask(width)`.
    #[inline]
    const fn replaced(self, bits: u64) -> Self {
        Self {
            bits: bits & mask(self.width),
            width: self.width,
        }
    }
}

/// Input pins sampled at an active edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inputs {
    /// Reset is asserted (already resolved from the pin's polarity).
    pub reset_active: bool,
    /// Capture `parallel_in` instead of shifting.
    pub load: bool,
    /// Parallel data; only observed when `load` is set.
    pub parallel_in: u64,
}

/// Computes the register's next state and serial output for one active edge.
///
/// Reset takes priority over load, and load over shift. `parallel_in` is
/// truncated to the register width; the function is total.
///
/// # Arguments
///
/// * `state` - Register contents before the edge.
/// * `reset_active` - Reset is asserted at this edge.
/// * `load` - Load is asserted at this edge.
/// * `parallel_in` - Parallel data presented to the register.
///
/// # Returns
///
/// `(new_state, serial_out)` where `serial_out` is the LSB of `new_state`.
#[inline]
pub const fn advance(
    state: RegisterState,
    reset_active: bool,
    load: bool,
    parallel_in: u64,
) -> (RegisterState, bool) {
    let next = if reset_active {
        state.replaced(0)
    } else if load {
        state.replaced(parallel_in)
    } else {
        state.replaced(state.bits >> 1)
    };
    (next, next.lsb())
}

/// A PISO register that owns its state between edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PisoRegister {
    state: RegisterState,
    serial_out: bool,
}

impl PisoRegister {
    /// Creates a cleared register of `width` bits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWidth`] if `width` is outside `1..=64`.
    pub fn new(width: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            state: RegisterState::new(width)?,
            serial_out: false,
        })
    }

    /// Applies one active clock edge and returns the new serial output.
    pub const fn clock(&mut self, inputs: Inputs) -> bool {
        let (state, serial_out) = advance(
            self.state,
            inputs.reset_active,
            inputs.load,
            inputs.parallel_in,
        );
        self.state = state;
        self.serial_out = serial_out;
        serial_out
    }

    /// Clears the register outside of a clock edge.
    pub const fn reset(&mut self) {
        self.state = self.state.replaced(0);
        self.serial_out = false;
    }

    /// Current register state.
    pub const fn state(&self) -> RegisterState {
        self.state
    }

    /// Current register contents.
    pub const fn bits(&self) -> u64 {
        self.state.bits
    }

    /// Register width in bits.
    pub const fn width(&self) -> u32 {
        self.state.width
    }

    /// Serial output as of the last update.
    pub const fn serial_out(&self) -> bool {
        self.serial_out
    }
}
