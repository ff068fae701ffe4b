//! # Clock Generator Tests

use piso_core::common::Level;
use piso_core::sim::{Clock, Edge};

#[test]
fn default_clock_starts_low_at_zero() {
    let clk = Clock::default();
    assert_eq!(clk.level(), Level::Low);
    assert_eq!(clk.time(), 0);
    assert_eq!(clk.cycle(), 0);
}

#[test]
fn rising_edges_land_on_odd_half_periods() {
    let mut clk = Clock::default();
    let mut rising = Vec::new();
    for _ in 0..8 {
        if clk.toggle() == Edge::Rising {
            rising.push(clk.time());
        }
    }
    assert_eq!(rising, [10, 30, 50, 70]);
    assert_eq!(clk.cycle(), 4);
    assert_eq!(clk.level(), Level::Low);
}

#[test]
fn edges_strictly_alternate() {
    let mut clk = Clock::new(3);
    let mut last = Edge::Falling;
    let mut last_time = 0;
    for _ in 0..100 {
        let edge = clk.toggle();
        assert_ne!(edge, last);
        assert!(clk.time() > last_time);
        last = edge;
        last_time = clk.time();
    }
}
