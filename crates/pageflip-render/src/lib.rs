#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Raster kernel: packed pixels, pixmaps, and the flip scene compositor.
//!
//! # Role in pageflip
//! `pageflip-render` owns everything that touches pixels. Panel snapshots
//! arrive as [`pixmap::Pixmap`]s, get split at the seam, and are composited
//! back-to-front by [`scene::Scene`] with an optional vertical-axis rotation
//! per element.
//!
//! # Primary responsibilities
//! - **PackedRgba**: `u32`-packed straight-alpha pixel with source-over
//!   blending.
//! - **Pixmap**: owned row-major buffer with region copy and half-split.
//! - **YRotation**: the 2D projection of a rotation about a vertical axis, a
//!   cosine scale about a pivot column.
//! - **Scene**: depth-ordered items rendered with per-column inverse mapping.
//!
//! # How it fits in the system
//! The orchestrator (`pageflip`) assembles a `Scene` per flip and re-renders
//! it each tick; hosts only see the composited `Pixmap`. Timing lives in
//! `pageflip-core` and never reaches this crate.

pub mod pixel;
pub mod pixmap;
pub mod scene;
pub mod transform;

pub use pixel::PackedRgba;
pub use pixmap::Pixmap;
pub use scene::{BACKDROP_Z, ItemId, Scene};
pub use transform::YRotation;
