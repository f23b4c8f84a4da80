#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: animation primitives, easing curves, and pixel geometry.
//!
//! # Role in pageflip
//! `pageflip-core` is the timing layer. It owns the `Animation` trait, the
//! easing roster, the eased angle interpolator that drives each flip stage,
//! and the small geometry types the raster layer builds on. Nothing in this
//! crate knows about pixels or scenes.
//!
//! # Primary responsibilities
//! - **Animation**: tick-driven progress with overshoot accounting, so
//!   back-to-back stages lose no time at the boundary.
//! - **AngleSweep**: eased interpolation between two angles over a duration.
//! - **Sequence**: exactly-two-stage sequential composition.
//! - **FrameClock**: wall-clock frame deltas for hosts that drive sessions in
//!   real time (wasm-safe via `web-time`).
//! - **Geometry**: `Point` and `Rect` in pixel coordinates.
//!
//! # How it fits in the system
//! The raster layer (`pageflip-render`) consumes `Rect` for regions and the
//! orchestrator (`pageflip`) consumes `AngleSweep`/`Sequence` to time the two
//! flip stages. Hosts only need this crate directly when they drive ticks
//! from their own clock.

pub mod animation;
pub mod clock;
pub mod geometry;
