//! Event Scheduler and Testbench.
//!
//! The testbench owns the register, the virtual clock, and the latched input
//! pins. It runs a single-threaded loop:
//! 1. **Apply:** Take the next script step and update the input pins.
//! 2. **Clock:** Generate a rising edge and clock the register with the latched inputs.
//! 3. **Record:** Store the serial output when the step asks for samples.
//! 4. **Settle:** Generate the falling edge, which only advances time.
//!
//! A sample is taken by the same rising edge that updates the register, so it
//! observes the serial output pin as it stood going into the edge: the value
//! produced by the previous edge. Loading `0b1011` and then sampling four
//! shift edges therefore records `1, 1, 0, 1`.
//!
//! Input changes only ever happen between a falling edge and the next rising
//! edge. Synchronous and asynchronous reset therefore differ only when a
//! sampled edge directly follows a reset assertion on a non-empty register:
//! the asynchronous clear is already visible on the pin.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::common::error::ConfigError;
use crate::common::level::Level;
use crate::config::{Config, ResetMode};
use crate::core::register::{Inputs, PisoRegister};
use crate::sim::clock::{Clock, Edge};
use crate::sim::stimulus::{Script, Step};
use crate::stats::SimStats;

/// Upper bound on the sample slots reserved ahead of a [`Step::Sample`].
const SAMPLE_RESERVE_LIMIT: usize = 1024;

/// Serial output recorded at one rising edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Rising-edge index since the start of the run, starting at 1.
    pub cycle: u64,
    /// Logical time of the rising edge in ticks.
    pub time: u64,
    /// Serial output pin observed at the edge, before the edge's update lands.
    pub serial_out: bool,
    /// Register contents after the edge's update.
    pub state: u64,
}

impl Sample {
    /// Serial output as a 0/1 bit.
    pub fn bit(&self) -> u8 {
        u8::from(self.serial_out)
    }
}

impl fmt::Display for Sample {
    /// Formats the sample as a trace line, e.g. `PISO Serial Out: 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PISO Serial Out: {}", self.bit())
    }
}

/// Clocked harness around a [`PisoRegister`].
#[derive(Debug, Clone)]
pub struct Testbench {
    register: PisoRegister,
    clock: Clock,
    reset_pin: Level,
    reset_asserted_level: Level,
    reset_mode: ResetMode,
    load: bool,
    parallel_in: u64,
    stats: SimStats,
}

impl Testbench {
    /// Builds a testbench from a configuration.
    ///
    /// The register starts cleared, reset is deasserted, load is low. A
    /// pattern wider than the register is reported with a warning and
    /// truncated by [`Config::pattern`].
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Config::validate`].
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        if !config.pattern_fits() {
            warn!(
                pattern = config.initial_pattern,
                width = config.width,
                "pattern wider than register, truncating"
            );
        }
        let reset_asserted_level = config.reset_asserted_level();
        Ok(Self {
            register: PisoRegister::new(config.width)?,
            clock: Clock::default(),
            reset_pin: !reset_asserted_level,
            reset_asserted_level,
            reset_mode: config.reset_mode,
            load: false,
            parallel_in: 0,
            stats: SimStats::default(),
        })
    }

    /// Runs the configured reference scenario on a fresh testbench.
    ///
    /// Reset, load `initial_pattern`, then record `shift_cycles` edges.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Config::validate`]; the run itself cannot fail.
    pub fn scenario(config: &Config) -> Result<(Self, Vec<Sample>), ConfigError> {
        let mut tb = Self::new(config)?;
        let samples = tb.run(&Script::reference(config.pattern()), config.shift_cycles);
        Ok((tb, samples))
    }

    /// Applies `script`, then records `cycle_count` further rising edges.
    ///
    /// # Returns
    ///
    /// Every recorded sample in edge order: those requested by
    /// [`Step::Sample`] inside the script followed by the trailing
    /// `cycle_count` samples.
    pub fn run(&mut self, script: &Script, cycle_count: usize) -> Vec<Sample> {
        let mut samples = Vec::new();
        for step in script {
            self.apply(*step, &mut samples);
        }
        self.apply(Step::Sample(cycle_count), &mut samples);
        debug!(
            cycles = self.clock.cycle(),
            samples = samples.len(),
            "run complete"
        );
        samples
    }

    /// Applies a single step, appending any recorded samples to `samples`.
    pub fn apply(&mut self, step: Step, samples: &mut Vec<Sample>) {
        debug!(time = self.clock.time(), %step, "stimulus");
        match step {
            Step::AssertReset => {
                self.reset_pin = self.reset_asserted_level;
                if self.reset_mode == ResetMode::Asynchronous {
                    self.register.reset();
                    self.stats.async_resets += 1;
                }
            }
            Step::DeassertReset => self.reset_pin = !self.reset_asserted_level,
            Step::Load(value) => {
                self.load = true;
                self.parallel_in = value;
            }
            Step::ClearLoad => self.load = false,
            Step::Clock(n) => {
                for _ in 0..n {
                    let _ = self.period();
                }
            }
            Step::Sample(n) => {
                reserve_samples(samples, n);
                for _ in 0..n {
                    let sample = self.period();
                    self.stats.samples += 1;
                    samples.push(sample);
                }
            }
        }
    }

    /// Runs one full clock period: up to and including the next rising edge,
    /// then the following falling edge.
    fn period(&mut self) -> Sample {
        let sample = loop {
            match self.clock.toggle() {
                Edge::Rising => break self.rising_edge(),
                Edge::Falling => self.stats.falling_edges += 1,
            }
        };
        if self.clock.toggle() == Edge::Falling {
            self.stats.falling_edges += 1;
        }
        sample
    }

    /// Samples the serial output pin, then clocks the register with the
    /// currently latched inputs.
    fn rising_edge(&mut self) -> Sample {
        let inputs = self.inputs();
        if inputs.reset_active {
            self.stats.reset_edges += 1;
        } else if inputs.load {
            self.stats.load_edges += 1;
        } else {
            self.stats.shift_edges += 1;
        }
        self.stats.rising_edges += 1;

        let observed = self.register.serial_out();
        let serial_out = self.register.clock(inputs);
        let sample = Sample {
            cycle: self.clock.cycle(),
            time: self.clock.time(),
            serial_out: observed,
            state: self.register.bits(),
        };
        trace!(
            cycle = sample.cycle,
            time = sample.time,
            state = sample.state,
            observed,
            serial_out,
            "rising edge"
        );
        sample
    }

    /// Input pins as seen by the register at the next edge.
    pub fn inputs(&self) -> Inputs {
        Inputs {
            reset_active: self.reset_active(),
            load: self.load,
            parallel_in: self.parallel_in,
        }
    }

    /// Returns `true` while the reset pin is at its asserted level.
    pub fn reset_active(&self) -> bool {
        self.reset_pin == self.reset_asserted_level
    }

    /// Current reset pin level.
    pub const fn reset_pin(&self) -> Level {
        self.reset_pin
    }

    /// The register under test.
    pub const fn register(&self) -> &PisoRegister {
        &self.register
    }

    /// The virtual clock.
    pub const fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Counters accumulated so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }
}

/// Reserves room for up to `n` samples, capped so that huge counts grow the
/// buffer as samples arrive instead of allocating up front.
fn reserve_samples(samples: &mut Vec<Sample>, n: usize) {
    samples.reserve(n.min(SAMPLE_RESERVE_LIMIT));
}
