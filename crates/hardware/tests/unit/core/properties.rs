//! # Next-State Properties
//!
//! Property tests over every legal width (1 to 64) and arbitrary contents:
//!   - Reset always yields `(0, 0)`, regardless of load and data
//!   - Load yields the masked parallel input and its LSB
//!   - Shift yields `state >> 1` with a clear top bit
//!   - Reset is idempotent
//!   - Load then shifts present the pattern on the pin LSB first

use piso_core::common::mask;
use piso_core::core::{Inputs, PisoRegister, RegisterState, advance};
use proptest::prelude::*;

/// A register of arbitrary legal width holding arbitrary (masked) contents.
fn any_state() -> impl Strategy<Value = RegisterState> {
    (1u32..=64, any::<u64>()).prop_map(|(w, bits)| RegisterState::with_bits(w, bits).unwrap())
}

proptest! {
    #[test]
    fn contents_fit_width(s in any_state()) {
        prop_assert_eq!(s.bits() & !mask(s.width()), 0);
    }

    #[test]
    fn reset_clears(s in any_state(), load in any::<bool>(), p in any::<u64>()) {
        let (next, out) = advance(s, true, load, p);
        prop_assert_eq!(next.bits(), 0);
        prop_assert!(!out);
        prop_assert_eq!(next.width(), s.width());
    }

    #[test]
    fn load_captures_masked_input(s in any_state(), p in any::<u64>()) {
        let (next, out) = advance(s, false, true, p);
        let expected = p & mask(s.width());
        prop_assert_eq!(next.bits(), expected);
        prop_assert_eq!(out, expected & 1 == 1);
    }

    #[test]
    fn shift_moves_right(s in any_state(), p in any::<u64>()) {
        let (next, out) = advance(s, false, false, p);
        prop_assert_eq!(next.bits(), s.bits() >> 1);
        prop_assert_eq!(out, (s.bits() >> 1) & 1 == 1);
        prop_assert_eq!(next.bits() >> (s.width() - 1), 0, "top bit must be zero-filled");
    }

    #[test]
    fn reset_is_idempotent(s in any_state(), load in any::<bool>(), p in any::<u64>()) {
        let (once, out_once) = advance(s, true, load, p);
        let (twice, out_twice) = advance(once, true, load, p);
        prop_assert_eq!(once, twice);
        prop_assert_eq!(out_once, out_twice);
    }

    #[test]
    fn emits_lsb_first(width in 1u32..=64, p in any::<u64>()) {
        let mut reg = PisoRegister::new(width).unwrap();
        let pattern = p & mask(width);

        // The load edge presents bit 0; each shift presents the next bit.
        let mut pin = vec![reg.clock(Inputs { reset_active: false, load: true, parallel_in: p })];
        for _ in 1..width {
            pin.push(reg.clock(Inputs::default()));
        }
        let expected: Vec<bool> = (0..width).map(|i| (pattern >> i) & 1 == 1).collect();
        prop_assert_eq!(pin, expected);

        prop_assert!(!reg.clock(Inputs::default()), "register drains to zero");
        prop_assert_eq!(reg.bits(), 0);
    }
}
