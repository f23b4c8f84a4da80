#![forbid(unsafe_code)]

//! The host-side panel seam.

use pageflip_render::Pixmap;

/// A live UI panel that can be snapshotted.
///
/// The host implements this for whatever it considers a page: a widget, a
/// document view, an offscreen buffer. The effect reads visibility during
/// validation and captures one snapshot per panel per flip; it never holds
/// on to the panel afterwards.
///
/// Panel identity is handle identity: passing the same object as both
/// outgoing and incoming is rejected, two distinct panels with identical
/// content are fine.
pub trait PanelSource {
    /// Whether the panel is currently visible to the user.
    ///
    /// Flips between hidden panels are rejected; there is nothing to
    /// transition.
    fn is_visible(&self) -> bool;

    /// Render the panel to a pixel buffer at its current size.
    fn snapshot(&self) -> Pixmap;
}
