//! Configuration Error Definitions.
//!
//! The register core is total over its input domain, so the only failures in
//! the simulator happen while a configuration is being loaded or validated:
//! 1. **Width:** A register width outside the supported range.
//! 2. **Pattern:** A parallel pattern wider than the register, when strict checking is on.
//! 3. **Loading:** I/O and JSON problems reading a configuration file.

use std::io;

use super::constants::{MAX_WIDTH, MIN_WIDTH};

/// Errors raised at configuration time. Never raised mid-run.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Register width outside `MIN_WIDTH..=MAX_WIDTH`.
    #[error("invalid register width {width}: must be between {MIN_WIDTH} and {MAX_WIDTH} bits")]
    InvalidWidth {
        /// The rejected width.
        width: u32,
    },

    /// Parallel pattern does not fit the register and `strict_width` is set.
    #[error("pattern {pattern:#b} does not fit in a {width}-bit register")]
    PatternTooWide {
        /// The rejected pattern.
        pattern: u64,
        /// The configured register width.
        width: u32,
    },

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] io::Error),

    /// Configuration file is not valid JSON for [`Config`](crate::config::Config).
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
