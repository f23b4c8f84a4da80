#![forbid(unsafe_code)]

//! Two animations played back to back.

use std::time::Duration;

use super::Animation;

/// Runs `first` to completion, then `second`.
///
/// The second stage receives the overshoot of the tick that completes the
/// first stage, so a coarse host tick rate does not stretch the combined
/// duration. When the first stage ends exactly on a tick boundary the second
/// stage starts on the following tick.
#[derive(Debug, Clone)]
pub struct Sequence<A: Animation, B: Animation> {
    first: A,
    second: B,
}

impl<A: Animation, B: Animation> Sequence<A, B> {
    /// The leading stage.
    #[inline]
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The trailing stage.
    #[inline]
    pub fn second(&self) -> &B {
        &self.second
    }
}

/// Compose two animations sequentially.
pub fn sequence<A: Animation, B: Animation>(first: A, second: B) -> Sequence<A, B> {
    Sequence { first, second }
}

impl<A: Animation, B: Animation> Animation for Sequence<A, B> {
    fn tick(&mut self, dt: Duration) {
        if self.first.is_complete() {
            self.second.tick(dt);
            return;
        }
        self.first.tick(dt);
        if self.first.is_complete() {
            let spill = self.first.overshoot();
            if !spill.is_zero() {
                self.second.tick(spill);
            }
        }
    }

    fn is_complete(&self) -> bool {
        self.first.is_complete() && self.second.is_complete()
    }

    fn value(&self) -> f32 {
        if self.first.is_complete() {
            self.second.value()
        } else {
            self.first.value()
        }
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
    }

    fn overshoot(&self) -> Duration {
        self.second.overshoot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AngleSweep;

    const MS_100: Duration = Duration::from_millis(100);

    fn two_stage() -> Sequence<AngleSweep, AngleSweep> {
        sequence(
            AngleSweep::new(0.0, -90.0, MS_100),
            AngleSweep::new(-270.0, -360.0, MS_100),
        )
    }

    #[test]
    fn second_stage_waits_for_first() {
        let mut seq = two_stage();
        seq.tick(Duration::from_millis(60));
        assert!(!seq.first().is_complete());
        assert_eq!(seq.second().angle(), -270.0);
    }

    #[test]
    fn completes_after_combined_duration() {
        let mut seq = two_stage();
        for _ in 0..20 {
            seq.tick(Duration::from_millis(10));
        }
        assert!(seq.is_complete());
        assert_eq!(seq.second().angle(), -360.0);
    }

    #[test]
    fn forwards_overshoot_into_second_stage() {
        let mut seq = two_stage();
        // 100 finishes stage one, 40 spills into stage two.
        seq.tick(Duration::from_millis(140));
        assert!(seq.first().is_complete());
        assert!(!seq.second().is_complete());
        assert!((seq.second().angle() - (-306.0)).abs() < 0.01);
    }

    #[test]
    fn boundary_tick_leaves_second_untouched() {
        let mut seq = two_stage();
        seq.tick(MS_100);
        assert!(seq.first().is_complete());
        assert_eq!(seq.second().angle(), -270.0);
        assert_eq!(seq.second().overshoot(), Duration::ZERO);
    }

    #[test]
    fn value_tracks_active_stage() {
        let mut seq = two_stage();
        seq.tick(Duration::from_millis(50));
        assert!((seq.value() - 0.5).abs() < 0.01);
        seq.tick(Duration::from_millis(50));
        // First complete, second untouched.
        assert_eq!(seq.value(), 0.0);
        seq.tick(Duration::from_millis(50));
        assert!((seq.value() - 0.5).abs() < 0.01);
    }

    #[test]
    fn reset_rewinds_both_stages() {
        let mut seq = two_stage();
        seq.tick(Duration::from_millis(250));
        assert!(seq.is_complete());
        seq.reset();
        assert!(!seq.first().is_complete());
        assert_eq!(seq.first().angle(), 0.0);
        assert_eq!(seq.second().angle(), -270.0);
    }

    // ---- Edge-case tests ----

    #[test]
    fn edge_zero_duration_first_routes_immediately() {
        let mut seq = sequence(
            AngleSweep::new(0.0, -90.0, Duration::ZERO),
            AngleSweep::new(-270.0, -360.0, MS_100),
        );
        assert!(seq.first().is_complete());
        seq.tick(Duration::from_millis(50));
        assert!((seq.second().angle() - (-315.0)).abs() < 0.01);
    }

    #[test]
    fn edge_both_zero_duration_complete_without_progress() {
        let seq = sequence(
            AngleSweep::new(0.0, -90.0, Duration::ZERO),
            AngleSweep::new(-270.0, -360.0, Duration::ZERO),
        );
        assert!(seq.is_complete());
        assert_eq!(seq.second().angle(), -360.0);
    }

    #[test]
    fn edge_ticking_completed_sequence_is_harmless() {
        let mut seq = two_stage();
        seq.tick(Duration::from_secs(1));
        assert!(seq.is_complete());
        seq.tick(MS_100);
        assert!(seq.is_complete());
        assert_eq!(seq.second().angle(), -360.0);
    }

    #[test]
    fn edge_huge_single_tick_completes_everything() {
        let mut seq = two_stage();
        seq.tick(Duration::from_secs(3600));
        assert!(seq.is_complete());
        assert_eq!(seq.first().angle(), -90.0);
        assert_eq!(seq.second().angle(), -360.0);
    }
}
