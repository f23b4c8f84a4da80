#![forbid(unsafe_code)]

//! Easing curves.
//!
//! Every curve maps `[0.0, 1.0]` to `[0.0, 1.0]` monotonically with
//! `f(0) = 0` and `f(1) = 1`. Callers clamp before applying.

/// An easing curve applied to normalized progress.
pub type EasingFn = fn(f32) -> f32;

/// Constant-rate progress.
#[inline]
pub fn linear(t: f32) -> f32 {
    t
}

/// Quadratic acceleration from rest.
#[inline]
pub fn ease_in(t: f32) -> f32 {
    t * t
}

/// Quadratic deceleration to rest.
#[inline]
pub fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Quadratic acceleration then deceleration.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Cubic acceleration from rest.
#[inline]
pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

/// Cubic deceleration to rest.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
