#![forbid(unsafe_code)]

//! Host notification hooks for the flip lifecycle.
//!
//! A successful flip fires, in order:
//!
//! 1. `about_to_start` once, synchronously inside
//!    [`FlipEffect::flip`](crate::FlipEffect::flip), with the freshly built
//!    scene. Attach or size your output here.
//! 2. `finished` once, on the tick that completes the animation, with the
//!    scene posed at its final frame. The scene is torn down right after
//!    this returns.
//! 3. `dispose_outgoing` once, after `finished`, only when disposal was
//!    requested at launch. Release the outgoing panel here.
//!
//! A rejected flip fires `error` once and nothing else. Dropping a session
//! mid-animation fires nothing.
//!
//! All hooks default to no-ops; implement only what the host cares about.

use pageflip_render::Scene;

/// Receives flip lifecycle notifications.
pub trait FlipObserver {
    /// The scene is assembled and the first frame is ready to composite.
    fn about_to_start(&mut self, surface: &Scene) {
        let _ = surface;
    }

    /// The animation just completed; `surface` shows the final frame.
    fn finished(&mut self, surface: &Scene) {
        let _ = surface;
    }

    /// Disposal was requested and the flip is done with the outgoing panel.
    fn dispose_outgoing(&mut self) {}

    /// The flip was rejected; no animation will run.
    fn error(&mut self) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl FlipObserver for NullObserver {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_observer_accepts_all_hooks() {
        let mut obs = NullObserver;
        let scene = Scene::new(2, 2);
        obs.about_to_start(&scene);
        obs.finished(&scene);
        obs.dispose_outgoing();
        obs.error();
    }

    #[test]
    fn test_default_hooks_are_no_ops() {
        struct Silent;
        impl FlipObserver for Silent {}
        let mut obs = Silent;
        obs.error();
        obs.finished(&Scene::new(0, 0));
    }
}
