#![forbid(unsafe_code)]

//! Vertical-axis rotation as a 2D column transform.

/// A rotation about a vertical axis, projected to 2D.
///
/// At angle θ a column at distance d from the pivot lands at distance
/// `d * cos(θ)`: the element narrows as it turns, vanishes edge-on at ±90°,
/// and renders mirrored while the cosine is negative. Rows are unaffected.
///
/// `pivot_x` is in item-local columns; the scene adds the item position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YRotation {
    /// Rotation angle in degrees. Unbounded; -270° and 90° project alike.
    pub angle_deg: f32,
    /// Pivot column in item-local coordinates.
    pub pivot_x: f32,
}

/// Below this projected width factor an element is treated as edge-on.
pub const EDGE_EPSILON: f32 = 1e-4;

impl YRotation {
    /// Create a rotation.
    #[inline]
    pub const fn new(angle_deg: f32, pivot_x: f32) -> Self {
        Self { angle_deg, pivot_x }
    }

    /// Horizontal scale factor, `cos(angle)`.
    ///
    /// Cardinal angles (multiples of 90°) produce exact factors so a fully
    /// turned or resting element reproduces its source bit-for-bit.
    pub fn scale(&self) -> f32 {
        let canonical = self.angle_deg.rem_euclid(360.0);
        if canonical == 0.0 {
            1.0
        } else if canonical == 90.0 || canonical == 270.0 {
            0.0
        } else if canonical == 180.0 {
            -1.0
        } else {
            canonical.to_radians().cos()
        }
    }

    /// Whether the projected width collapses to nothing.
    #[inline]
    pub fn is_edge_on(&self) -> bool {
        self.scale().abs() < EDGE_EPSILON
    }

    /// Map an item-local column to its projected position.
    #[inline]
    pub fn map_x(&self, x: f32) -> f32 {
        self.pivot_x + (x - self.pivot_x) * self.scale()
    }

    /// Invert [`map_x`](Self::map_x): the source column that lands at
    /// `projected`.
    ///
    /// Meaningless when [`is_edge_on`](Self::is_edge_on); callers skip
    /// edge-on elements before sampling.
    #[inline]
    pub fn source_x(&self, projected: f32) -> f32 {
        self.pivot_x + (projected - self.pivot_x) / self.scale()
    }

    /// Projected span of an element `width` columns wide, as `(lo, hi)`.
    pub fn span(&self, width: f32) -> (f32, f32) {
        let a = self.map_x(0.0);
        let b = self.map_x(width);
        if a <= b { (a, b) } else { (b, a) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_angle_is_identity() {
        let rot = YRotation::new(0.0, 50.0);
        assert_eq!(rot.scale(), 1.0);
        assert_eq!(rot.map_x(0.0), 0.0);
        assert_eq!(rot.map_x(100.0), 100.0);
        assert!(!rot.is_edge_on());
    }

    #[test]
    fn full_turn_is_identity() {
        for angle in [-360.0, 360.0, 720.0] {
            let rot = YRotation::new(angle, 13.0);
            assert_eq!(rot.scale(), 1.0, "angle {angle}");
            assert_eq!(rot.map_x(20.0), 20.0);
        }
    }

    #[test]
    fn quarter_turns_are_edge_on() {
        for angle in [90.0, -90.0, 270.0, -270.0] {
            let rot = YRotation::new(angle, 0.0);
            assert_eq!(rot.scale(), 0.0, "angle {angle}");
            assert!(rot.is_edge_on());
        }
    }

    #[test]
    fn half_turn_mirrors_about_pivot() {
        let rot = YRotation::new(180.0, 10.0);
        assert_eq!(rot.scale(), -1.0);
        assert_eq!(rot.map_x(0.0), 20.0);
        assert_eq!(rot.map_x(20.0), 0.0);
        assert_eq!(rot.map_x(10.0), 10.0);
    }

    #[test]
    fn pivot_is_a_fixed_point() {
        for angle in [0.0, 37.5, -123.0, 301.0] {
            let rot = YRotation::new(angle, 42.0);
            assert!((rot.map_x(42.0) - 42.0).abs() < 1e-5, "angle {angle}");
        }
    }

    #[test]
    fn map_and_source_are_inverse() {
        let rot = YRotation::new(-45.0, 8.0);
        for x in [0.0, 3.0, 8.0, 16.0, 100.0] {
            let there = rot.map_x(x);
            let back = rot.source_x(there);
            assert!((back - x).abs() < 1e-3, "x {x} came back as {back}");
        }
    }

    #[test]
    fn span_orders_endpoints() {
        let narrow = YRotation::new(60.0, 0.0);
        let (lo, hi) = narrow.span(100.0);
        assert_eq!(lo, 0.0);
        assert!((hi - 50.0).abs() < 0.1);

        let mirrored = YRotation::new(180.0, 0.0);
        let (lo, hi) = mirrored.span(100.0);
        assert_eq!(lo, -100.0);
        assert_eq!(hi, 0.0);
    }

    #[test]
    fn scale_shrinks_toward_quarter_turn() {
        let mut prev = 1.0;
        for deg in 0..=90 {
            let s = YRotation::new(deg as f32, 0.0).scale();
            assert!(s <= prev + 1e-6, "scale not shrinking at {deg}");
            prev = s;
        }
        assert_eq!(prev, 0.0);
    }
}
