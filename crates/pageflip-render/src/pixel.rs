#![forbid(unsafe_code)]

//! Packed RGBA pixels.

/// A straight-alpha RGBA pixel packed into a `u32` as `0xRRGGBBAA`.
///
/// Channels are not premultiplied; [`over`](Self::over) does the full
/// source-over composite. The default value is fully transparent black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackedRgba(u32);

impl PackedRgba {
    /// Fully transparent black.
    pub const TRANSPARENT: PackedRgba = PackedRgba(0);

    /// Construct from channels.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// Construct an opaque pixel.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Whether the pixel contributes nothing when composited.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }

    /// Whether the pixel fully covers whatever is behind it.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a() == 255
    }

    /// Scale the alpha channel by `factor` (clamped to `[0, 1]`).
    #[must_use]
    pub fn with_opacity(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        let a = (self.a() as f32 * f).round() as u8;
        Self::rgba(self.r(), self.g(), self.b(), a)
    }

    /// Composite `self` over `base` (straight-alpha source-over).
    #[must_use]
    pub fn over(self, base: PackedRgba) -> PackedRgba {
        let sa = self.a() as u32;
        if sa == 255 {
            return self;
        }
        if sa == 0 {
            return base;
        }
        let da = base.a() as u32;
        let inv = 255 - sa;
        let contrib = da * inv / 255;
        let out_a = sa + contrib;
        if out_a == 0 {
            return PackedRgba::TRANSPARENT;
        }
        let blend = |s: u8, d: u8| -> u8 {
            let num = s as u32 * sa + d as u32 * contrib;
            ((num + out_a / 2) / out_a) as u8
        };
        PackedRgba::rgba(
            blend(self.r(), base.r()),
            blend(self.g(), base.g()),
            blend(self.b(), base.b()),
            out_a as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack_roundtrip() {
        let p = PackedRgba::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(p.r(), 0x12);
        assert_eq!(p.g(), 0x34);
        assert_eq!(p.b(), 0x56);
        assert_eq!(p.a(), 0x78);
    }

    #[test]
    fn rgb_is_opaque() {
        let p = PackedRgba::rgb(10, 20, 30);
        assert_eq!(p.a(), 255);
        assert!(p.is_opaque());
        assert!(!p.is_transparent());
    }

    #[test]
    fn default_is_transparent() {
        let p = PackedRgba::default();
        assert!(p.is_transparent());
        assert_eq!(p, PackedRgba::TRANSPARENT);
    }

    #[test]
    fn opaque_source_replaces_base() {
        let src = PackedRgba::rgb(200, 0, 0);
        let dst = PackedRgba::rgb(0, 200, 0);
        assert_eq!(src.over(dst), src);
    }

    #[test]
    fn transparent_source_keeps_base() {
        let src = PackedRgba::TRANSPARENT;
        let dst = PackedRgba::rgb(0, 200, 0);
        assert_eq!(src.over(dst), dst);
    }

    #[test]
    fn half_alpha_over_opaque_mixes_evenly() {
        let src = PackedRgba::rgba(255, 255, 255, 128);
        let dst = PackedRgba::rgb(0, 0, 0);
        let out = src.over(dst);
        assert_eq!(out.a(), 255);
        // 255 * 128/255 rounded against a black base.
        assert!((out.r() as i32 - 128).abs() <= 1);
    }

    #[test]
    fn over_transparent_base_keeps_source_alpha() {
        let src = PackedRgba::rgba(40, 50, 60, 77);
        let out = src.over(PackedRgba::TRANSPARENT);
        assert_eq!(out.a(), 77);
        assert_eq!(out.r(), 40);
        assert_eq!(out.g(), 50);
        assert_eq!(out.b(), 60);
    }

    #[test]
    fn with_opacity_scales_and_clamps() {
        let p = PackedRgba::rgba(1, 2, 3, 200);
        assert_eq!(p.with_opacity(0.5).a(), 100);
        assert_eq!(p.with_opacity(2.0).a(), 200);
        assert_eq!(p.with_opacity(-1.0).a(), 0);
        assert_eq!(p.with_opacity(0.5).r(), 1);
    }
}
