//! Stimulus Scripts.
//!
//! A script is an ordered list of [`Step`]s applied by the testbench. Steps
//! that change inputs take effect between clock edges; `Clock` and `Sample`
//! steps advance time by whole clock periods. Keeping stimulus as data lets
//! the same register be driven by many scripts.

use std::fmt;

use serde::Deserialize;

/// One stimulus directive.
///
/// Deserializes from JSON as `"AssertReset"`, `{"Load": 11}`, `{"Sample": 4}`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Step {
    /// Drive the reset pin to its asserted level.
    AssertReset,
    /// Drive the reset pin to its deasserted level.
    DeassertReset,
    /// Assert load and present the given parallel value.
    Load(u64),
    /// Deassert load.
    ClearLoad,
    /// Run this many full clock periods without recording output.
    Clock(usize),
    /// Run this many full clock periods, recording serial output after each rising edge.
    Sample(usize),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssertReset => write!(f, "assert reset"),
            Self::DeassertReset => write!(f, "deassert reset"),
            Self::Load(value) => write!(f, "load {value:#b}"),
            Self::ClearLoad => write!(f, "clear load"),
            Self::Clock(n) => write!(f, "clock {n}"),
            Self::Sample(n) => write!(f, "sample {n}"),
        }
    }
}

/// Ordered sequence of stimulus steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    /// Creates an empty script.
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Reset-then-load prologue used by the reference scenario.
    ///
    /// Asserts reset for one full clock period, releases it, then loads
    /// `pattern` on the next rising edge and drops load. Shift cycles are
    /// supplied separately to [`Testbench::run`](crate::sim::Testbench::run).
    #[must_use]
    pub fn reference(pattern: u64) -> Self {
        Self::new()
            .assert_reset()
            .clock(1)
            .deassert_reset()
            .load(pattern)
            .clock(1)
            .clear_load()
    }

    /// Parses a script from a JSON array of steps.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Appends a step.
    #[must_use]
    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Appends [`Step::AssertReset`].
    #[must_use]
    pub fn assert_reset(self) -> Self {
        self.then(Step::AssertReset)
    }

    /// Appends [`Step::DeassertReset`].
    #[must_use]
    pub fn deassert_reset(self) -> Self {
        self.then(Step::DeassertReset)
    }

    /// Appends [`Step::Load`].
    #[must_use]
    pub fn load(self, value: u64) -> Self {
        self.then(Step::Load(value))
    }

    /// Appends [`Step::ClearLoad`].
    #[must_use]
    pub fn clear_load(self) -> Self {
        self.then(Step::ClearLoad)
    }

    /// Appends [`Step::Clock`].
    #[must_use]
    pub fn clock(self, cycles: usize) -> Self {
        self.then(Step::Clock(cycles))
    }

    /// Appends [`Step::Sample`].
    #[must_use]
    pub fn sample(self, cycles: usize) -> Self {
        self.then(Step::Sample(cycles))
    }

    /// The script's steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the script has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total rising edges the script generates, saturating at `usize::MAX`.
    pub fn cycles(&self) -> usize {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Clock(n) | Step::Sample(n) => *n,
                _ => 0,
            })
            .fold(0, usize::saturating_add)
    }
}

impl FromIterator<Step> for Script {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
