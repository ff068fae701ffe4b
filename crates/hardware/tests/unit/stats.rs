//! # Statistics Tests
//!
//! Verifies that `SimStats` classifies every rising edge and counts samples.

use piso_core::config::{Config, ResetMode};
use piso_core::stats::SimStats;
use piso_core::{Script, Testbench};

use crate::common::harness::TestContext;

#[test]
fn default_stats_are_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.rising_edges, 0);
    assert_eq!(stats.falling_edges, 0);
    assert_eq!(stats.reset_edges, 0);
    assert_eq!(stats.load_edges, 0);
    assert_eq!(stats.shift_edges, 0);
    assert_eq!(stats.async_resets, 0);
    assert_eq!(stats.samples, 0);
}

#[test]
fn reference_scenario_counts() {
    let (tb, _) = Testbench::scenario(&Config::default()).unwrap();
    let stats = tb.stats();
    assert_eq!(stats.rising_edges, 6);
    assert_eq!(stats.falling_edges, 6);
    assert_eq!(stats.reset_edges, 1);
    assert_eq!(stats.load_edges, 1);
    assert_eq!(stats.shift_edges, 4);
    assert_eq!(stats.async_resets, 0);
    assert_eq!(stats.samples, 4);
}

#[test]
fn edge_classes_partition_rising_edges() {
    let script = Script::new()
        .assert_reset()
        .clock(2)
        .deassert_reset()
        .load(5)
        .sample(3)
        .clear_load()
        .clock(4);
    let mut tb = TestContext::new()
        .reset_mode(ResetMode::Asynchronous)
        .testbench();
    let samples = tb.run(&script, 1);

    let stats = tb.stats();
    assert_eq!(stats.rising_edges, 10);
    assert_eq!(
        stats.reset_edges + stats.load_edges + stats.shift_edges,
        stats.rising_edges
    );
    assert_eq!(stats.reset_edges, 2);
    assert_eq!(stats.load_edges, 3);
    assert_eq!(stats.shift_edges, 5);
    assert_eq!(stats.async_resets, 1);
    assert_eq!(stats.samples, samples.len() as u64);
    assert_eq!(stats.samples, 4);
}

#[test]
fn print_does_not_panic_on_empty_run() {
    SimStats::default().print();
}
