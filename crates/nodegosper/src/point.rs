//! Planar points and bounding boxes consumed by the curve.

use std::ops::{Add, Sub};

/// A point in the normalised plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new `Point`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin, which always hashes to the central cell.
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Calculate the Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned bounding box of a point set.
///
/// Boxes produced by [`crate::cloud::PointCloud`] are square, centred on the
/// origin and slightly inset so no point rounds onto a boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Lower-left corner.
    pub min: Point,
    /// Upper-right corner.
    pub max: Point,
}

impl BoundingBox {
    /// Create a box from its corners.
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Square box centred on the origin with the given half side.
    pub const fn centered(half_side: f64) -> Self {
        Self::new(
            Point::new(-half_side, -half_side),
            Point::new(half_side, half_side),
        )
    }

    /// Length of the diagonal from `min` to `max`.
    pub fn diagonal(&self) -> f64 {
        self.min.distance(&self.max)
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Whether `p` lies inside the box, boundary included.
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance() {
        let a = Point::new(2.0, 2.0);
        let b = Point::new(2.0, 1.0);
        assert_eq!(a.distance(&b), 1.0);

        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn arithmetic() {
        let p = Point::new(1.5, 4.0);
        assert_eq!(p - Point::new(0.5, 1.0), Point::new(1.0, 3.0));
        assert_eq!(p + Point::from((1.0, 1.0)), Point::new(2.5, 5.0));
    }

    #[test]
    fn bounding_box() {
        let bb = BoundingBox::centered(2.0);
        assert_eq!(bb.width(), 4.0);
        assert_eq!(bb.height(), 4.0);
        assert_eq!(bb.diagonal(), 32f64.sqrt());
        assert!(bb.contains(&Point::origin()));
        assert!(bb.contains(&Point::new(2.0, -2.0)));
        assert!(!bb.contains(&Point::new(2.1, 0.0)));
    }
}
