//! Basic 2D point type used throughout the crate.

/// Representation of a 2D point in surface space.
///
/// Surface space follows the canvas convention: `x` grows to the right and
/// `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the point translated by `dx` and `dy`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<nalgebra::Point2<f64>> for Point {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Point::new(p.x, p.y)
    }
}
