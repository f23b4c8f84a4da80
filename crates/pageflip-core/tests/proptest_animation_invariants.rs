//! Property-based tests for animation invariants.
//!
//! Invariants checked:
//!
//! 1. Sweep progress is always in [0, 1] and hits exactly 1.0 at completion.
//! 2. With a monotonic easing, progress never decreases as ticks accumulate.
//! 3. The current angle never leaves the closed interval between endpoints.
//! 4. A sequence never advances its second stage while the first is
//!    incomplete, and completes once the summed ticks cover both durations.
//! 5. Overshoot equals fed time minus duration, never negative.
//! 6. Reset restores the observables of a freshly built animation.

use std::time::Duration;

use pageflip_core::animation::{
    Animation, AngleSweep, EasingFn, ease_in, ease_in_out, ease_out, linear, sequence,
};
use proptest::prelude::*;

// ═══════════════════════════════════════════════════════════════════════════
// Strategies
// ═══════════════════════════════════════════════════════════════════════════

fn arb_duration_ms() -> impl Strategy<Value = u64> {
    0u64..=2_000
}

fn arb_ticks() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..=120, 0..=64)
}

fn arb_easing() -> impl Strategy<Value = EasingFn> {
    prop::sample::select(vec![
        linear as EasingFn,
        ease_in,
        ease_out,
        ease_in_out,
    ])
}

fn arb_angles() -> impl Strategy<Value = (f32, f32)> {
    (-720i32..=720, -720i32..=720).prop_map(|(a, b)| (a as f32, b as f32))
}

// ═══════════════════════════════════════════════════════════════════════════
// 1-3. Single sweep invariants
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sweep_progress_stays_normalized(
        dur_ms in arb_duration_ms(),
        ticks in arb_ticks(),
        easing in arb_easing(),
        (from, to) in arb_angles(),
    ) {
        let mut sweep =
            AngleSweep::new(from, to, Duration::from_millis(dur_ms)).easing(easing);
        let mut prev = sweep.value();
        prop_assert!((0.0..=1.0).contains(&prev), "initial value {prev}");

        for ms in ticks {
            sweep.tick(Duration::from_millis(ms));
            let v = sweep.value();
            prop_assert!((0.0..=1.0).contains(&v), "value escaped: {v}");
            prop_assert!(v >= prev - 1e-6, "progress regressed: {prev} -> {v}");
            prev = v;
        }
        if sweep.is_complete() {
            prop_assert_eq!(sweep.value(), 1.0);
        }
    }

    #[test]
    fn sweep_angle_bounded_by_endpoints(
        dur_ms in arb_duration_ms(),
        ticks in arb_ticks(),
        easing in arb_easing(),
        (from, to) in arb_angles(),
    ) {
        let lo = from.min(to);
        let hi = from.max(to);
        let mut sweep =
            AngleSweep::new(from, to, Duration::from_millis(dur_ms)).easing(easing);
        for ms in ticks {
            sweep.tick(Duration::from_millis(ms));
            let a = sweep.angle();
            prop_assert!(
                a >= lo - 1e-3 && a <= hi + 1e-3,
                "angle {} outside [{}, {}]", a, lo, hi
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 4-5. Sequence invariants
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sequence_orders_stages_and_conserves_time(
        first_ms in arb_duration_ms(),
        second_ms in arb_duration_ms(),
        ticks in arb_ticks(),
    ) {
        let mut seq = sequence(
            AngleSweep::new(0.0, -90.0, Duration::from_millis(first_ms)),
            AngleSweep::new(-270.0, -360.0, Duration::from_millis(second_ms)),
        );

        let mut fed = Duration::ZERO;
        for ms in ticks {
            let before_first_done = seq.first().is_complete();
            let second_before = seq.second().angle();
            seq.tick(Duration::from_millis(ms));
            fed += Duration::from_millis(ms);

            if !before_first_done && !seq.first().is_complete() {
                prop_assert_eq!(
                    seq.second().angle(),
                    second_before,
                    "second stage moved while first was running"
                );
            }
        }

        let total = Duration::from_millis(first_ms + second_ms);
        prop_assert_eq!(seq.is_complete(), fed >= total);
    }

    #[test]
    fn overshoot_is_fed_minus_duration(
        dur_ms in arb_duration_ms(),
        ticks in arb_ticks(),
    ) {
        let dur = Duration::from_millis(dur_ms);
        let mut sweep = AngleSweep::new(0.0, 90.0, dur);
        let mut fed = Duration::ZERO;
        for ms in ticks {
            sweep.tick(Duration::from_millis(ms));
            fed += Duration::from_millis(ms);
        }
        prop_assert_eq!(sweep.overshoot(), fed.saturating_sub(dur));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 6. Reset
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reset_restores_fresh_observables(
        dur_ms in arb_duration_ms(),
        ticks in arb_ticks(),
        (from, to) in arb_angles(),
    ) {
        let dur = Duration::from_millis(dur_ms);
        let fresh = AngleSweep::new(from, to, dur);
        let (v0, a0, c0) = (fresh.value(), fresh.angle(), fresh.is_complete());

        let mut sweep = AngleSweep::new(from, to, dur);
        for ms in ticks {
            sweep.tick(Duration::from_millis(ms));
        }
        sweep.reset();
        prop_assert_eq!(sweep.value(), v0);
        prop_assert_eq!(sweep.angle(), a0);
        prop_assert_eq!(sweep.is_complete(), c0);
        prop_assert_eq!(sweep.overshoot(), Duration::ZERO);
    }
}
