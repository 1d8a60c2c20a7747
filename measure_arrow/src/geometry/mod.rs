//! Basic geometry primitives for measurement overlays.

use nalgebra::{Rotation2, Vector2};

pub mod point;

pub use point::Point;

/// Representation of a 2D line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    /// Creates a new line segment.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns the length of the line segment.
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// Returns the midpoint of the line segment.
    pub fn midpoint(&self) -> Point {
        midpoint(self.start, self.end)
    }

    /// Returns the direction from the start point to the end point in radians,
    /// measured from the positive X axis.
    ///
    /// A zero-length segment has an azimuth of `0.0`.
    pub fn azimuth(&self) -> f64 {
        (self.end.y - self.start.y).atan2(self.end.x - self.start.x)
    }
}

/// Calculates the Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Returns the point halfway between `a` and `b`.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Rotates `point` about `center` by `angle` radians.
///
/// Positive angles turn from the positive X axis towards the positive Y axis,
/// which appears clockwise on a surface whose Y axis points down.
pub fn rotate_point(point: Point, center: Point, angle: f64) -> Point {
    let v = Rotation2::new(angle) * Vector2::new(point.x - center.x, point.y - center.y);
    Point::new(center.x + v.x, center.y + v.y)
}

/// Translates `origin` by `(dx, dy)` in the unrotated frame and rotates the
/// result about `origin` by `angle`.
///
/// Every offset along a measured segment is expressed this way: a shift along
/// the conceptual horizontal/vertical axes, then a rotation into the segment's
/// orientation.
pub fn offset_rotated(origin: Point, dx: f64, dy: f64, angle: f64) -> Point {
    rotate_point(origin.offset(dx, dy), origin, angle)
}
