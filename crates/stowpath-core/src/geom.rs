//! Geometry primitives: [`Coord3`], [`Axis`] and [`Bounds`].

use std::fmt;
use std::ops::Add;

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// One of the three warehouse axes. Z grows upwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in (x, y, z) order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Coord3
// ---------------------------------------------------------------------------

/// A 3D point in warehouse coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coord3 {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component along `axis`.
    #[inline]
    pub const fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Return a copy with the component along `axis` replaced by `v`.
    #[inline]
    pub const fn with(self, axis: Axis, v: f64) -> Self {
        match axis {
            Axis::X => Self::new(v, self.y, self.z),
            Axis::Y => Self::new(self.x, v, self.z),
            Axis::Z => Self::new(self.x, self.y, v),
        }
    }

    /// Componentwise midpoint of `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new(
            (self.x + other.x) / 2.0,
            (self.y + other.y) / 2.0,
            (self.z + other.z) / 2.0,
        )
    }

    /// Componentwise absolute difference.
    #[inline]
    pub fn abs_diff(self, other: Self) -> Self {
        Self::new(
            (self.x - other.x).abs(),
            (self.y - other.y).abs(),
            (self.z - other.z).abs(),
        )
    }

    /// Whether all three components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Coord3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(f64, f64, f64)> for Coord3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Coord3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// An axis-aligned box given by its `min` and `max` corners.
///
/// `min <= max` on each axis is expected but not enforced: unlike a grid
/// range, a box with swapped corners is kept as given and simply yields a
/// degenerate centroid.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Coord3,
    pub max: Coord3,
}

impl Bounds {
    /// Create bounds from two corners, kept as given.
    #[inline]
    pub const fn new(min: Coord3, max: Coord3) -> Self {
        Self { min, max }
    }

    /// Geometric centre of the box.
    #[inline]
    pub fn centroid(self) -> Coord3 {
        self.min.midpoint(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_arithmetic() {
        let a = Coord3::new(1.0, 2.0, 3.0);
        let b = Coord3::new(4.0, 6.0, 8.0);
        assert_eq!(a + b, Coord3::new(5.0, 8.0, 11.0));
        assert_eq!(a.abs_diff(b), Coord3::new(3.0, 4.0, 5.0));
        assert_eq!(b.abs_diff(a), a.abs_diff(b));
    }

    #[test]
    fn coord_axis_access() {
        let c = Coord3::new(1.0, 2.0, 3.0);
        assert_eq!(c.get(Axis::Y), 2.0);
        assert_eq!(c.with(Axis::Z, 9.0), Coord3::new(1.0, 2.0, 9.0));
        assert_eq!(c.with(Axis::X, -1.0).x, -1.0);
    }

    #[test]
    fn bounds_centroid_is_midpoint() {
        let b = Bounds::new(Coord3::new(0.0, 0.0, 0.0), Coord3::new(2.0, 4.0, 1.0));
        assert_eq!(b.centroid(), Coord3::new(1.0, 2.0, 0.5));
    }

    #[test]
    fn swapped_bounds_are_kept() {
        let b = Bounds::new(Coord3::new(2.0, 0.0, 0.0), Coord3::new(0.0, 1.0, 1.0));
        assert_eq!(b.min.x, 2.0);
        assert_eq!(b.centroid().x, 1.0);
    }

    #[test]
    fn non_finite_coord() {
        assert!(Coord3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Coord3::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Coord3::new(0.0, f64::INFINITY, 0.0).is_finite());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn bounds_from_layout_json() {
        let json = r#"{"min":{"x":369.9,"y":125.35,"z":0.05},"max":{"x":371.9,"y":126.075,"z":1.25}}"#;
        let b: Bounds = serde_json::from_str(json).unwrap();
        assert_eq!(b.min, Coord3::new(369.9, 125.35, 0.05));
        assert_eq!(b.max.z, 1.25);
    }
}
