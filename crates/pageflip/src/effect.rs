#![forbid(unsafe_code)]

//! Flip orchestration: validation, scene assembly, stage construction.
//!
//! # Invariants
//!
//! 1. A rejected flip has no side effects: no snapshot is taken, no scene is
//!    built, and only `error()` fires.
//! 2. An accepted flip fires `about_to_start` exactly once, synchronously,
//!    before `flip` returns.
//! 3. The configured duration is read once per call; reconfiguring the
//!    effect never touches sessions already returned.
//! 4. Every direction-dependent choice comes from one [`FlipPlan`], built in
//!    a single place per call.

use std::time::Duration;

use pageflip_core::animation::{AngleSweep, ease_in_out, ease_out, sequence};
use pageflip_render::{BACKDROP_Z, Scene, YRotation};

use crate::error::{FlipError, Result};
use crate::observer::FlipObserver;
use crate::panel::PanelSource;
use crate::session::FlipSession;

/// Duration of a flip when none is configured.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(700);

// ============================================================================
// Direction and plan
// ============================================================================

/// Which way the new page comes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipDirection {
    /// The new page enters from the right edge moving left.
    #[default]
    RightToLeft,
    /// The new page enters from the left edge moving right.
    LeftToRight,
}

/// One half of a split snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Half {
    Left,
    Right,
}

/// The four direction-dependent decisions, resolved together.
///
/// Pivots are item-local columns; both stages rotate about the seam, which
/// is column 0 for right halves and the full half width for left halves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FlipPlan {
    /// Which outgoing half folds away in stage 1.
    pub(crate) near_half: Half,
    pub(crate) near_pivot: f32,
    /// Stage 1 target angle; the start is always 0.
    pub(crate) stage1_to: f32,
    /// Which incoming half unfolds in stage 2.
    pub(crate) shown_half: Half,
    pub(crate) shown_pivot: f32,
    /// Stage 2 starting pose, a quarter turn short of flat.
    pub(crate) stage2_from: f32,
    pub(crate) stage2_to: f32,
}

impl FlipDirection {
    /// Build the plan for this direction.
    ///
    /// `outgoing_seam` and `incoming_seam` are the left-half widths of the
    /// respective snapshots.
    pub(crate) fn plan(self, outgoing_seam: f32, incoming_seam: f32) -> FlipPlan {
        match self {
            FlipDirection::RightToLeft => FlipPlan {
                near_half: Half::Right,
                near_pivot: 0.0,
                stage1_to: -90.0,
                shown_half: Half::Left,
                shown_pivot: incoming_seam,
                stage2_from: -270.0,
                stage2_to: -360.0,
            },
            FlipDirection::LeftToRight => FlipPlan {
                near_half: Half::Left,
                near_pivot: outgoing_seam,
                stage1_to: 90.0,
                shown_half: Half::Right,
                shown_pivot: 0.0,
                stage2_from: 270.0,
                stage2_to: 360.0,
            },
        }
    }
}

// ============================================================================
// Effect
// ============================================================================

/// Builds and launches flip sessions.
///
/// The effect itself is tiny: one configured duration and the assembly
/// logic. It keeps no reference to the sessions it returns, so any number
/// of flips can be in flight independently.
#[derive(Debug, Clone)]
pub struct FlipEffect {
    duration: Duration,
}

impl FlipEffect {
    /// Create an effect with the default 700 ms duration.
    pub fn new() -> Self {
        Self {
            duration: DEFAULT_DURATION,
        }
    }

    /// Set the duration for future flips. Unvalidated; zero is legal and
    /// completes on the first tick.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// The currently configured duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Start a flip from `outgoing` to `incoming`.
    ///
    /// Validates the panels, snapshots them, assembles the scene, and
    /// returns the running session. `about_to_start` fires on `observer`
    /// before this returns; the caller then drives the session with
    /// [`FlipSession::tick`](crate::FlipSession::tick).
    ///
    /// # Errors
    ///
    /// [`FlipError`] when a panel is absent, the handles are identical, or
    /// either panel is hidden. `error()` fires on the observer and nothing
    /// else happens.
    pub fn flip(
        &self,
        observer: &mut dyn FlipObserver,
        outgoing: Option<&dyn PanelSource>,
        incoming: Option<&dyn PanelSource>,
        direction: FlipDirection,
        dispose_outgoing: bool,
    ) -> Result<FlipSession> {
        let (outgoing, incoming) = match validate(outgoing, incoming) {
            Ok(panels) => panels,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, "cannot animate, rejecting flip");
                observer.error();
                return Err(err);
            }
        };

        let outgoing_snapshot = outgoing.snapshot();
        let incoming_snapshot = incoming.snapshot();

        let (outgoing_left, outgoing_right) = outgoing_snapshot.split_halves();
        let outgoing_seam = outgoing_left.width() as f32;
        let incoming_left = incoming_snapshot.left_half();
        let incoming_seam = incoming_left.width() as f32;
        let plan = direction.plan(outgoing_seam, incoming_seam);

        // Only the half that will be shown is derived; the other never
        // appears in the scene.
        let (shown_pixmap, shown_x) = match plan.shown_half {
            Half::Left => (incoming_left, 0.0),
            Half::Right => (incoming_snapshot.right_half(), incoming_seam),
        };

        // Surface covers both pages when their sizes differ.
        let bounds = outgoing_snapshot
            .bounds()
            .union(&incoming_snapshot.bounds());
        let mut scene = Scene::new(bounds.width, bounds.height);

        // The outgoing halves reconstruct the old page in place.
        let outgoing_left_id = scene.add(outgoing_left);
        let outgoing_right_id = scene.add(outgoing_right);
        scene.set_pos(outgoing_right_id, outgoing_seam, 0.0);

        // The resting page sits behind everything.
        let backdrop_id = scene.add(incoming_snapshot);
        scene.set_z(backdrop_id, BACKDROP_Z);

        let near_id = match plan.near_half {
            Half::Left => outgoing_left_id,
            Half::Right => outgoing_right_id,
        };
        scene.set_rotation(near_id, Some(YRotation::new(0.0, plan.near_pivot)));

        // Inserted last so it covers the far outgoing half once it lands
        // flat; pre-posed edge-on so it is invisible until stage 2.
        let shown_id = scene.add(shown_pixmap);
        scene.set_pos(shown_id, shown_x, 0.0);
        scene.set_rotation(
            shown_id,
            Some(YRotation::new(plan.stage2_from, plan.shown_pivot)),
        );

        let stage = self.duration / 2;
        let fold = AngleSweep::new(0.0, plan.stage1_to, stage).easing(ease_out);
        let unfold =
            AngleSweep::new(plan.stage2_from, plan.stage2_to, stage).easing(ease_in_out);

        let session = FlipSession::new(
            scene,
            sequence(fold, unfold),
            near_id,
            shown_id,
            dispose_outgoing,
        );
        if let Some(surface) = session.surface() {
            observer.about_to_start(surface);
        }
        Ok(session)
    }
}

impl Default for FlipEffect {
    fn default() -> Self {
        Self::new()
    }
}

/// All preconditions together: both present, distinct, both visible.
fn validate<'a>(
    outgoing: Option<&'a dyn PanelSource>,
    incoming: Option<&'a dyn PanelSource>,
) -> Result<(&'a dyn PanelSource, &'a dyn PanelSource)> {
    let (Some(outgoing), Some(incoming)) = (outgoing, incoming) else {
        return Err(FlipError::MissingPanel);
    };
    if std::ptr::addr_eq(outgoing, incoming) {
        return Err(FlipError::IdenticalPanels);
    }
    if !outgoing.is_visible() || !incoming.is_visible() {
        return Err(FlipError::HiddenPanel);
    }
    Ok((outgoing, incoming))
}
