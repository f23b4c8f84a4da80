#![forbid(unsafe_code)]

//! Depth-ordered scene compositing.
//!
//! # Usage
//!
//! ```
//! use pageflip_render::{BACKDROP_Z, PackedRgba, Pixmap, Scene, YRotation};
//!
//! let mut scene = Scene::new(4, 2);
//! let back = scene.add(Pixmap::solid(4, 2, PackedRgba::rgb(0, 0, 200)));
//! scene.set_z(back, BACKDROP_Z);
//! let flap = scene.add(Pixmap::solid(2, 2, PackedRgba::rgb(200, 0, 0)));
//! scene.set_rotation(flap, Some(YRotation::new(60.0, 2.0)));
//!
//! let frame = scene.composite();
//! assert_eq!(frame.width(), 4);
//! ```
//!
//! # Invariants
//!
//! 1. Items paint back to front by depth; equal depths paint in insertion
//!    order, later over earlier.
//! 2. Edge-on items (projected width ~0) contribute nothing.
//! 3. Compositing never reads or writes outside the target buffer, whatever
//!    the item positions, sizes, and angles.
//! 4. An unrotated item at an integer position reproduces its pixmap
//!    exactly, pixel for pixel.

use pageflip_core::geometry::Point;

use crate::pixel::PackedRgba;
use crate::pixmap::Pixmap;
use crate::transform::YRotation;

/// Depth assigned to the resting full snapshot, behind every animated half.
pub const BACKDROP_Z: i32 = -10;

/// Handle to an item within one scene.
///
/// Ids are only meaningful for the scene that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(usize);

#[derive(Debug, Clone)]
struct Item {
    pixmap: Pixmap,
    pos: Point,
    z: i32,
    rotation: Option<YRotation>,
}

/// A layered drawing surface for one flip session.
///
/// Holds positioned, depth-ordered, optionally rotated pixmaps and
/// composites them into a single frame. Items cannot be removed; a scene
/// lives for one animation and is dropped whole.
#[derive(Debug, Clone)]
pub struct Scene {
    width: u16,
    height: u16,
    items: Vec<Item>,
}

impl Scene {
    /// Create an empty scene of the given pixel size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            items: Vec::new(),
        }
    }

    /// Scene width in pixels.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Scene height in pixels.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of items placed so far.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the scene rasterizes to nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Place a pixmap at the origin with depth 0 and no rotation.
    pub fn add(&mut self, pixmap: Pixmap) -> ItemId {
        self.items.push(Item {
            pixmap,
            pos: Point::ORIGIN,
            z: 0,
            rotation: None,
        });
        ItemId(self.items.len() - 1)
    }

    /// Move an item. Unknown ids are ignored.
    pub fn set_pos(&mut self, id: ItemId, x: f32, y: f32) {
        if let Some(item) = self.items.get_mut(id.0) {
            item.pos = Point::new(x, y);
        }
    }

    /// Change an item's depth. Unknown ids are ignored.
    pub fn set_z(&mut self, id: ItemId, z: i32) {
        if let Some(item) = self.items.get_mut(id.0) {
            item.z = z;
        }
    }

    /// Attach or clear an item's rotation. Unknown ids are ignored.
    pub fn set_rotation(&mut self, id: ItemId, rotation: Option<YRotation>) {
        if let Some(item) = self.items.get_mut(id.0) {
            item.rotation = rotation;
        }
    }

    /// Update the angle of an item's rotation, keeping its pivot.
    ///
    /// Installs a rotation with pivot 0 when none was set. Unknown ids are
    /// ignored.
    pub fn set_angle(&mut self, id: ItemId, angle_deg: f32) {
        if let Some(item) = self.items.get_mut(id.0) {
            match &mut item.rotation {
                Some(rot) => rot.angle_deg = angle_deg,
                None => item.rotation = Some(YRotation::new(angle_deg, 0.0)),
            }
        }
    }

    /// An item's position, or `None` for unknown ids.
    pub fn pos(&self, id: ItemId) -> Option<Point> {
        self.items.get(id.0).map(|item| item.pos)
    }

    /// An item's depth, or `None` for unknown ids.
    pub fn z(&self, id: ItemId) -> Option<i32> {
        self.items.get(id.0).map(|item| item.z)
    }

    /// An item's rotation, or `None` when absent or the id is unknown.
    pub fn rotation(&self, id: ItemId) -> Option<YRotation> {
        self.items.get(id.0).and_then(|item| item.rotation)
    }

    /// Composite all items into a fresh frame.
    pub fn composite(&self) -> Pixmap {
        let mut out = Pixmap::new(self.width, self.height);
        self.composite_into(&mut out);
        out
    }

    /// Composite all items into `out`, reallocating it on size mismatch.
    pub fn composite_into(&self, out: &mut Pixmap) {
        if out.width() != self.width || out.height() != self.height {
            *out = Pixmap::new(self.width, self.height);
        } else {
            out.fill(PackedRgba::TRANSPARENT);
        }
        if self.is_empty() {
            return;
        }

        // Back to front; stable sort keeps insertion order for equal depths.
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.sort_by_key(|&i| self.items[i].z);
        for i in order {
            paint_item(&self.items[i], out);
        }
    }
}

fn paint_item(item: &Item, out: &mut Pixmap) {
    if item.pixmap.is_empty() {
        return;
    }
    let rot = item.rotation.unwrap_or(YRotation::new(0.0, 0.0));
    if rot.is_edge_on() {
        return;
    }

    let src_w = item.pixmap.width();
    let src_h = item.pixmap.height();
    let out_w = out.width() as i64;
    let out_h = out.height() as i64;

    // Projected horizontal extent in scene columns; saturating float casts
    // keep wild positions and spans inside i64.
    let (lo, hi) = rot.span(src_w as f32);
    let dx_lo = ((item.pos.x + lo).floor() as i64).max(0);
    let dx_hi = ((item.pos.x + hi).ceil() as i64).min(out_w);

    // Rows are never transformed: map each target row to its source row once.
    let dy_lo = (item.pos.y.floor() as i64).max(0);
    let dy_hi = ((item.pos.y + src_h as f32).ceil() as i64).min(out_h);
    let rows: Vec<(u16, u16)> = (dy_lo..dy_hi)
        .filter_map(|dy| {
            let sy = (dy as f32 + 0.5 - item.pos.y).floor();
            if sy < 0.0 || sy >= src_h as f32 {
                return None;
            }
            Some((dy as u16, sy as u16))
        })
        .collect();
    if rows.is_empty() {
        return;
    }

    for dx in dx_lo..dx_hi {
        // Sample at the column center and invert the projection.
        let projected = dx as f32 + 0.5 - item.pos.x;
        let sx = rot.source_x(projected).floor();
        if sx < 0.0 || sx >= src_w as f32 {
            continue;
        }
        let sx = sx as u16;
        for &(dy, sy) in &rows {
            let Some(src) = item.pixmap.get(sx, sy) else {
                continue;
            };
            if src.is_transparent() {
                continue;
            }
            let Some(dst) = out.get(dx as u16, dy) else {
                continue;
            };
            out.set(dx as u16, dy, src.over(dst));
        }
    }
}
