//! # Bit Helper Tests

use piso_core::common::{Level, MAX_WIDTH, MIN_WIDTH, fits, mask};
use rstest::rstest;

#[rstest]
#[case(1, 0x1)]
#[case(4, 0xF)]
#[case(8, 0xFF)]
#[case(32, 0xFFFF_FFFF)]
#[case(63, 0x7FFF_FFFF_FFFF_FFFF)]
#[case(64, u64::MAX)]
fn mask_has_width_ones(#[case] width: u32, #[case] expected: u64) {
    assert_eq!(mask(width), expected);
    assert_eq!(mask(width).count_ones(), width);
}

#[test]
fn width_limits() {
    assert_eq!(MIN_WIDTH, 1);
    assert_eq!(MAX_WIDTH, 64);
}

#[test]
fn fits_matches_mask() {
    assert!(fits(0, 1));
    assert!(fits(1, 1));
    assert!(!fits(2, 1));
    assert!(fits(0xFF, 8));
    assert!(!fits(0x100, 8));
}

#[test]
fn level_defaults_low() {
    assert_eq!(Level::default(), Level::Low);
    assert!(!Level::Low.is_high());
    assert!(Level::High.is_high());
}
