//! Canvas-style state shared by the bundled surfaces.

use nalgebra::{Matrix3, Point2, Vector2};

use super::{Font, TextAlignment, TextBaseline};
use crate::geometry::Point;

/// Style state saved and restored by [`super::Surface::save`] and
/// [`super::Surface::restore`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    pub stroke_color: String,
    pub fill_color: String,
    pub line_width: f64,
    pub font: Font,
    pub text_align: TextAlignment,
    pub text_baseline: TextBaseline,
    /// Homogeneous affine transform from user space to surface space.
    pub transform: Matrix3<f64>,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            stroke_color: crate::styles::DEFAULT_COLOR.to_string(),
            fill_color: crate::styles::DEFAULT_COLOR.to_string(),
            line_width: 1.0,
            font: Font::default(),
            text_align: TextAlignment::default(),
            text_baseline: TextBaseline::default(),
            transform: Matrix3::identity(),
        }
    }
}

impl DrawState {
    /// Maps a user-space point through the current transform.
    pub fn apply(&self, p: Point) -> Point {
        self.transform.transform_point(&Point2::new(p.x, p.y)).into()
    }

    /// Rotation component of the current transform, in radians.
    pub fn rotation(&self) -> f64 {
        self.transform[(1, 0)].atan2(self.transform[(0, 0)])
    }
}

/// Current state plus the stack of saved states.
#[derive(Debug, Clone, Default)]
pub struct StateStack {
    current: DrawState,
    saved: Vec<DrawState>,
}

impl StateStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &DrawState {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut DrawState {
        &mut self.current
    }

    /// Number of saved states not yet restored.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn save(&mut self) {
        self.saved.push(self.current.clone());
    }

    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.current = state;
        } else {
            log::warn!("restore called without a matching save");
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        let t = Matrix3::new_translation(&Vector2::new(dx, dy));
        self.current.transform *= t;
    }

    pub fn rotate(&mut self, angle: f64) {
        let r = Matrix3::new_rotation(angle);
        self.current.transform *= r;
    }
}

/// One connected run of path vertices, in surface space.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct Subpath {
    pub points: Vec<Point>,
    pub closed: bool,
}

/// Path under construction.
#[derive(Debug, Clone, Default)]
pub struct PathState {
    subpaths: Vec<Subpath>,
}

impl PathState {
    pub fn begin(&mut self) {
        self.subpaths.clear();
    }

    pub fn move_to(&mut self, p: Point) {
        self.subpaths.push(Subpath {
            points: vec![p],
            closed: false,
        });
    }

    /// Extends the last subpath; starts a new one when there is none.
    pub fn line_to(&mut self, p: Point) {
        match self.subpaths.last_mut() {
            Some(sub) if !sub.closed => sub.points.push(p),
            _ => self.move_to(p),
        }
    }

    pub fn close(&mut self) {
        if let Some(sub) = self.subpaths.last_mut() {
            sub.closed = true;
        }
    }

    pub fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn translate_then_rotate() {
        let mut stack = StateStack::new();
        stack.translate(10.0, 20.0);
        stack.rotate(FRAC_PI_2);
        let p = stack.current().apply(Point::new(5.0, 0.0));
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y - 25.0).abs() < 1e-9);
        assert!((stack.current().rotation() - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn restore_returns_saved_transform() {
        let mut stack = StateStack::new();
        stack.save();
        stack.translate(3.0, 4.0);
        stack.restore();
        assert_eq!(stack.current().transform, Matrix3::identity());
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn unbalanced_restore_is_ignored() {
        let mut stack = StateStack::new();
        stack.current_mut().line_width = 3.0;
        stack.restore();
        assert_eq!(stack.current().line_width, 3.0);
    }

    #[test]
    fn line_to_after_close_starts_new_subpath() {
        let mut path = PathState::default();
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(1.0, 0.0));
        path.close();
        path.line_to(Point::new(2.0, 2.0));
        assert_eq!(path.subpaths().len(), 2);
        assert!(path.subpaths()[0].closed);
    }
}
