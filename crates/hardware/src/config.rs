//! Configuration system for the PISO simulator.
//!
//! This module defines the configuration structure used to parameterize a run.
//! It provides:
//! 1. **Defaults:** The reference scenario (4-bit register, pattern `0b1011`, 4 shifts).
//! 2. **Structure:** Register width, reset polarity and mode, and stimulus settings.
//! 3. **Validation:** Fail-fast checks performed before any clock edge is simulated.
//!
//! Configuration is supplied as JSON (see [`Config::from_json_str`]) or built
//! with `Config::default()` and field overrides from the CLI.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{MAX_WIDTH, MIN_WIDTH};
use crate::common::error::ConfigError;
use crate::common::level::{Level, fits, mask};

/// Default configuration constants for the simulator.
///
/// These values reproduce the reference scenario when not explicitly
/// overridden.
mod defaults {
    /// Register width in bits.
    pub const WIDTH: u32 = 4;

    /// Reset asserts on a low pin level.
    pub const RESET_ACTIVE_LOW: bool = true;

    /// Parallel pattern loaded after reset (`0b1011`).
    pub const INITIAL_PATTERN: u64 = 0b1011;

    /// Sampled shift cycles after the load edge.
    pub const SHIFT_CYCLES: usize = 4;
}

/// How the reset input is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ResetMode {
    /// Reset is only observed at rising clock edges.
    #[default]
    #[serde(alias = "synchronous", alias = "sync")]
    Synchronous,
    /// Asserting reset clears the register immediately, without waiting
    /// for an edge; it is still honoured at every rising edge while held.
    #[serde(alias = "asynchronous", alias = "async")]
    Asynchronous,
}

/// Root simulator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Register width in bits (1 to 64)
    #[serde(default = "Config::default_width")]
    pub width: u32,

    /// Reset is asserted by a low pin level
    #[serde(default = "Config::default_reset_active_low")]
    pub reset_active_low: bool,

    /// Parallel value loaded by the reference script
    #[serde(default = "Config::default_initial_pattern")]
    pub initial_pattern: u64,

    /// Number of sampled shift cycles after the load edge
    #[serde(default = "Config::default_shift_cycles")]
    pub shift_cycles: usize,

    /// Reset sampling mode
    #[serde(default)]
    pub reset_mode: ResetMode,

    /// Reject patterns wider than `width` instead of truncating them
    #[serde(default)]
    pub strict_width: bool,
}

impl Config {
    /// Returns the default register width.
    fn default_width() -> u32 {
        defaults::WIDTH
    }

    /// Returns the default reset polarity.
    fn default_reset_active_low() -> bool {
        defaults::RESET_ACTIVE_LOW
    }

    /// Returns the default parallel pattern.
    fn default_initial_pattern() -> u64 {
        defaults::INITIAL_PATTERN
    }

    /// Returns the default number of shift cycles.
    fn default_shift_cycles() -> usize {
        defaults::SHIFT_CYCLES
    }

    /// Parses and validates a configuration from a JSON string.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any error
    /// reported by [`Config::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Config::from_json_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks the configuration before a run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWidth`] when `width` is outside
    /// `1..=64`, and [`ConfigError::PatternTooWide`] when `strict_width` is
    /// set and `initial_pattern` has bits above `width`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.width) {
            return Err(ConfigError::InvalidWidth { width: self.width });
        }
        if self.strict_width && !self.pattern_fits() {
            return Err(ConfigError::PatternTooWide {
                pattern: self.initial_pattern,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Returns `true` when `initial_pattern` fits in `width` bits, so
    /// [`Config::pattern`] loads it unchanged.
    pub const fn pattern_fits(&self) -> bool {
        fits(self.initial_pattern, self.width)
    }

    /// Returns `initial_pattern` truncated to the register width.
    pub const fn pattern(&self) -> u64 {
        self.initial_pattern & mask(self.width)
    }

    /// Returns the reset pin level that asserts reset.
    pub const fn reset_asserted_level(&self) -> Level {
        if self.reset_active_low {
            Level::Low
        } else {
            Level::High
        }
    }
}

impl Default for Config {
    /// Creates the reference configuration: 4-bit register, active-low
    /// synchronous reset, pattern `0b1011`, 4 shift cycles.
    fn default() -> Self {
        Self {
            width: defaults::WIDTH,
            reset_active_low: defaults::RESET_ACTIVE_LOW,
            initial_pattern: defaults::INITIAL_PATTERN,
            shift_cycles: defaults::SHIFT_CYCLES,
            reset_mode: ResetMode::default(),
            strict_width: false,
        }
    }
}
