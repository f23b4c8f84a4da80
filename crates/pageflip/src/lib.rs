#![forbid(unsafe_code)]

//! Page-flip transitions for pixmap surfaces.
//!
//! This crate provides the stable surface area for users: the
//! [`FlipEffect`] entry point, the [`FlipSession`] it returns, and the
//! [`PanelSource`] and [`FlipObserver`] traits the host implements. The
//! geometry, animation, and compositing layers live in `pageflip-core`
//! and `pageflip-render` and are re-exported here.
//!
//! ```
//! use pageflip::prelude::*;
//!
//! struct Page(PackedRgba);
//!
//! impl PanelSource for Page {
//!     fn is_visible(&self) -> bool {
//!         true
//!     }
//!
//!     fn snapshot(&self) -> Pixmap {
//!         Pixmap::solid(8, 4, self.0)
//!     }
//! }
//!
//! let old = Page(PackedRgba::rgb(210, 80, 40));
//! let new = Page(PackedRgba::rgb(40, 120, 210));
//!
//! let effect = FlipEffect::new();
//! let mut observer = NullObserver;
//! let mut session = effect
//!     .flip(
//!         &mut observer,
//!         Some(&old),
//!         Some(&new),
//!         FlipDirection::RightToLeft,
//!         false,
//!     )
//!     .unwrap();
//!
//! let step = std::time::Duration::from_millis(16);
//! while !session.tick(step, &mut observer) {
//!     let frame = session.render().unwrap();
//!     assert_eq!((frame.width(), frame.height()), (8, 4));
//! }
//! assert!(session.is_finished());
//! ```

pub mod effect;
pub mod error;
pub mod observer;
pub mod panel;
pub mod session;

// --- Flip surface ----------------------------------------------------------

pub use effect::{DEFAULT_DURATION, FlipDirection, FlipEffect};
pub use error::{FlipError, Result};
pub use observer::{FlipObserver, NullObserver};
pub use panel::PanelSource;
pub use session::{FlipSession, SessionState};

// --- Core re-exports -------------------------------------------------------

pub use pageflip_core::clock::FrameClock;

// --- Render re-exports -----------------------------------------------------

pub use pageflip_render::{PackedRgba, Pixmap, Scene, YRotation};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        FlipDirection, FlipEffect, FlipError, FlipObserver, FlipSession, FrameClock, NullObserver,
        PackedRgba, PanelSource, Pixmap, Result, Scene, SessionState,
    };

    pub use crate::{core, render};
}

pub use pageflip_core as core;
pub use pageflip_render as render;
