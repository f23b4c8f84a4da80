#![forbid(unsafe_code)]

//! Owned pixel buffers and the seam split.

use pageflip_core::geometry::Rect;

use crate::pixel::PackedRgba;

/// An owned, row-major RGBA buffer.
///
/// Snapshots, half images, and composited frames are all `Pixmap`s. The
/// buffer length is always exactly `width * height`; zero-sized pixmaps are
/// valid and hold no pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u16,
    height: u16,
    px: Vec<PackedRgba>,
}

impl Pixmap {
    /// Create a fully transparent pixmap.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            px: vec![PackedRgba::TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Create a pixmap filled with one color.
    pub fn solid(width: u16, height: u16, color: PackedRgba) -> Self {
        Self {
            width,
            height,
            px: vec![color; width as usize * height as usize],
        }
    }

    /// Create a pixmap by evaluating `f` at every (x, y).
    pub fn from_fn(width: u16, height: u16, mut f: impl FnMut(u16, u16) -> PackedRgba) -> Self {
        let mut px = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                px.push(f(x, y));
            }
        }
        Self { width, height, px }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whether the pixmap holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bounds as a rectangle at the origin.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// The pixel at (x, y), or `None` outside the bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<PackedRgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.px[y as usize * self.width as usize + x as usize])
    }

    /// Overwrite the pixel at (x, y). Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, color: PackedRgba) {
        if x < self.width && y < self.height {
            self.px[y as usize * self.width as usize + x as usize] = color;
        }
    }

    /// Fill the whole buffer with one color.
    pub fn fill(&mut self, color: PackedRgba) {
        self.px.fill(color);
    }

    /// One row of pixels, or `None` past the bottom edge.
    #[inline]
    pub fn row(&self, y: u16) -> Option<&[PackedRgba]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.px[start..start + self.width as usize])
    }

    /// The whole buffer, row-major.
    #[inline]
    pub fn pixels(&self) -> &[PackedRgba] {
        &self.px
    }

    /// Copy a region into a new pixmap.
    ///
    /// Each dimension is clamped independently, so a degenerate source (for
    /// example zero height) still yields the requested width.
    pub fn copy_region(&self, region: Rect) -> Pixmap {
        let x = region.x.min(self.width);
        let y = region.y.min(self.height);
        let width = region.width.min(self.width - x);
        let height = region.height.min(self.height - y);
        let mut out = Pixmap::new(width, height);
        for row in 0..height {
            let src_start = (y + row) as usize * self.width as usize + x as usize;
            let dst_start = row as usize * width as usize;
            out.px[dst_start..dst_start + width as usize]
                .copy_from_slice(&self.px[src_start..src_start + width as usize]);
        }
        out
    }

    /// The left half: columns `[0, W / 2)`, full height.
    pub fn left_half(&self) -> Pixmap {
        self.copy_region(Rect::from_size(self.width / 2, self.height))
    }

    /// The right half: columns `[W / 2, W)`, full height.
    ///
    /// Width is `W - W / 2`, so left and right concatenate back to the
    /// original even when `W` is odd.
    pub fn right_half(&self) -> Pixmap {
        let seam = self.width / 2;
        self.copy_region(Rect::new(seam, 0, self.width - seam, self.height))
    }

    /// Both halves in one call.
    pub fn split_halves(&self) -> (Pixmap, Pixmap) {
        (self.left_half(), self.right_half())
    }
}
