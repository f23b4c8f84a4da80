#![forbid(unsafe_code)]

//! One flip in flight.
//!
//! # Invariants
//!
//! 1. `finished()` fires exactly once, on the tick whose accumulated time
//!    reaches the total duration, and `tick` returns `true` on that tick
//!    only.
//! 2. The scene is torn down after `finished()` fires and before
//!    `dispose_outgoing()` does; observers reading the surface during
//!    `finished()` still see the final frame.
//! 3. Ticks after completion do nothing and fire nothing.
//! 4. Dropping an unfinished session fires nothing.

use std::time::Duration;

use pageflip_core::animation::{Animation, AngleSweep, Sequence};
use pageflip_render::{ItemId, Pixmap, Scene};

use crate::observer::FlipObserver;

/// Where a session is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Still animating; keep ticking.
    Playing,
    /// Completion already reported; further ticks are no-ops.
    Finished,
}

/// A running flip, returned by [`FlipEffect::flip`](crate::FlipEffect::flip).
///
/// The host owns the session and drives it: call [`tick`](Self::tick) with
/// the elapsed time each frame, then [`render`](Self::render) or
/// [`render_into`](Self::render_into) to get the frame. The session owns
/// the snapshots taken at launch; the live panels are never touched again.
#[derive(Debug)]
pub struct FlipSession {
    /// Present while playing, torn down on completion.
    scene: Option<Scene>,
    animation: Sequence<AngleSweep, AngleSweep>,
    /// The outgoing half that folds away in stage 1.
    near_id: ItemId,
    /// The incoming half that unfolds in stage 2.
    shown_id: ItemId,
    dispose_outgoing: bool,
    state: SessionState,
}

impl FlipSession {
    pub(crate) fn new(
        scene: Scene,
        animation: Sequence<AngleSweep, AngleSweep>,
        near_id: ItemId,
        shown_id: ItemId,
        dispose_outgoing: bool,
    ) -> Self {
        Self {
            scene: Some(scene),
            animation,
            near_id,
            shown_id,
            dispose_outgoing,
            state: SessionState::Playing,
        }
    }

    /// Advance the flip by `dt` and report completion.
    ///
    /// Applies the current stage angles to the scene, then, on the tick
    /// that exhausts the total duration, fires `finished()` with the final
    /// frame, tears the scene down, fires `dispose_outgoing()` if requested
    /// at launch, and returns `true`. Every other call returns `false`.
    pub fn tick(&mut self, dt: Duration, observer: &mut dyn FlipObserver) -> bool {
        if self.state == SessionState::Finished {
            return false;
        }
        self.animation.tick(dt);
        if let Some(scene) = self.scene.as_mut() {
            scene.set_angle(self.near_id, self.animation.first().angle());
            scene.set_angle(self.shown_id, self.animation.second().angle());
        }
        if !self.animation.is_complete() {
            return false;
        }
        self.state = SessionState::Finished;
        if let Some(scene) = self.scene.take() {
            observer.finished(&scene);
        }
        if self.dispose_outgoing {
            observer.dispose_outgoing();
        }
        true
    }

    /// Composite the current frame, or `None` once the session finished.
    pub fn render(&self) -> Option<Pixmap> {
        self.scene.as_ref().map(Scene::composite)
    }

    /// Composite into `out`, reusing its allocation when the size matches.
    ///
    /// Returns `false` without touching `out` once the session finished.
    pub fn render_into(&self, out: &mut Pixmap) -> bool {
        match self.scene.as_ref() {
            Some(scene) => {
                scene.composite_into(out);
                true
            }
            None => false,
        }
    }

    /// The live scene, while one exists.
    pub fn surface(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Current angle of the folding outgoing half, in degrees.
    pub fn outgoing_angle(&self) -> f32 {
        self.animation.first().angle()
    }

    /// Current angle of the unfolding incoming half, in degrees.
    pub fn incoming_angle(&self) -> f32 {
        self.animation.second().angle()
    }
}
