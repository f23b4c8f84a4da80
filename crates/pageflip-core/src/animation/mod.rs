#![forbid(unsafe_code)]

//! Tick-driven animation primitives.
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use pageflip_core::animation::{Animation, AngleSweep, ease_out, sequence};
//!
//! let fold = AngleSweep::new(0.0, -90.0, Duration::from_millis(350)).easing(ease_out);
//! let unfold = AngleSweep::new(-270.0, -360.0, Duration::from_millis(350));
//! let mut flip = sequence(fold, unfold);
//!
//! flip.tick(Duration::from_millis(400));
//! assert!(flip.first().is_complete());
//! assert!(!flip.is_complete());
//! ```
//!
//! # Invariants
//!
//! 1. `value()` is always in `[0.0, 1.0]` and reaches exactly `1.0` when
//!    complete.
//! 2. `tick` never advances a later stage before the earlier stage reports
//!    complete, and time left over from the completing tick carries into the
//!    next stage via `overshoot()`.
//! 3. Zero-duration animations are complete from construction and report
//!    `value() == 1.0` without ever being ticked.
//! 4. `reset()` restores the state observable at construction.
//!
//! # Failure Modes
//!
//! None. All operations are total; ticking a completed animation is a no-op
//! apart from overshoot accounting.

mod easing;
mod sequence;
mod sweep;

pub use easing::{
    EasingFn, ease_in, ease_in_cubic, ease_in_out, ease_out, ease_out_cubic, linear,
};
pub use sequence::{Sequence, sequence};
pub use sweep::AngleSweep;

use std::time::Duration;

/// A value that advances with elapsed time.
///
/// Implementations are driven by the host loop calling [`tick`](Self::tick)
/// with frame deltas; they never read a clock themselves.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has consumed its full duration.
    fn is_complete(&self) -> bool;

    /// Eased progress in `[0.0, 1.0]`.
    fn value(&self) -> f32;

    /// Restore the state observable at construction.
    fn reset(&mut self);

    /// Time received beyond the duration, for handing to a follow-up stage.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}
