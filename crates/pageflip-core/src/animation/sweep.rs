#![forbid(unsafe_code)]

//! Eased interpolation between two angles.

use std::time::Duration;

use super::{Animation, EasingFn, linear};

/// Animates an angle from a start to an end value over a fixed duration.
///
/// Angles are in degrees and unbounded; a sweep from -270 to -360 is distinct
/// from one from 90 to 0 even though the endpoints are congruent. Before the
/// first tick [`angle`](Self::angle) reports the start angle, so an element
/// can be posed at its starting rotation the moment it is built.
#[derive(Debug, Clone)]
pub struct AngleSweep {
    from_deg: f32,
    to_deg: f32,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFn,
}

impl AngleSweep {
    /// Create a sweep from `from_deg` to `to_deg` over `duration`.
    ///
    /// A zero duration is complete from construction and reports the end
    /// angle immediately.
    pub fn new(from_deg: f32, to_deg: f32, duration: Duration) -> Self {
        Self {
            from_deg,
            to_deg,
            duration,
            elapsed: Duration::ZERO,
            easing: linear,
        }
    }

    /// Set the easing curve (default: linear).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Start angle in degrees.
    #[inline]
    pub fn start_deg(&self) -> f32 {
        self.from_deg
    }

    /// End angle in degrees.
    #[inline]
    pub fn end_deg(&self) -> f32 {
        self.to_deg
    }

    /// Configured duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Current angle in degrees.
    pub fn angle(&self) -> f32 {
        self.from_deg + (self.to_deg - self.from_deg) * self.value()
    }

    fn raw_progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

impl Animation for AngleSweep {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.raw_progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}
