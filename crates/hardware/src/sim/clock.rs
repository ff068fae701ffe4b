//! Virtual Clock Generator.
//!
//! The clock starts low at tick 0 and toggles every half period, so edges
//! strictly alternate: rising, falling, rising, ... Only the ordering of
//! edges is meaningful; the tick counter exists to timestamp samples.

use crate::common::constants::HALF_PERIOD_TICKS;
use crate::common::level::Level;

/// Direction of a clock transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Low to high. The only edge that updates the register.
    Rising,
    /// High to low.
    Falling,
}

/// Free-running square-wave clock in logical time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    level: Level,
    time: u64,
    half_period: u64,
    rising_edges: u64,
}

impl Clock {
    /// Creates a low clock at tick 0 that toggles every `half_period` ticks.
    ///
    /// A zero half period is bumped to one tick so time stays strictly monotonic.
    pub const fn new(half_period: u64) -> Self {
        Self {
            level: Level::Low,
            time: 0,
            half_period: if half_period == 0 { 1 } else { half_period },
            rising_edges: 0,
        }
    }

    /// Advances time by one half period and flips the level.
    ///
    /// # Returns
    ///
    /// The edge that just occurred.
    pub fn toggle(&mut self) -> Edge {
        self.time += self.half_period;
        self.level = !self.level;
        match self.level {
            Level::High => {
                self.rising_edges += 1;
                Edge::Rising
            }
            Level::Low => Edge::Falling,
        }
    }

    /// Current clock level.
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Current logical time in ticks.
    pub const fn time(&self) -> u64 {
        self.time
    }

    /// Number of rising edges generated so far (the cycle count).
    pub const fn cycle(&self) -> u64 {
        self.rising_edges
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(HALF_PERIOD_TICKS)
    }
}
