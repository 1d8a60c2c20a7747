//! Drawing surface abstraction used by the measurement renderer.
//!
//! A [`Surface`] mirrors a 2D canvas context: it owns a stack of style state
//! (colors, line width, font, text alignment and the current transform), a
//! current path, and text metrics. Two implementations are provided:
//! [`RecordingSurface`] keeps a log of draw commands and [`SvgSurface`] builds
//! an SVG document.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::geometry::Point;

pub mod color;
pub mod recording;
pub mod state;
pub mod svg;

pub use color::Color;
pub use recording::{DrawCommand, RecordingSurface};
pub use state::{DrawState, PathState, StateStack, Subpath};
pub use svg::SvgSurface;

/// Errors reported by a drawing surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("invalid color '{0}'")]
    InvalidColor(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Horizontal alignment of painted text relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical alignment of painted text relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
    #[default]
    Alphabetic,
}

/// Font used for text painting and measurement.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Font {
    pub size: f64,
    pub family: String,
}

impl Font {
    pub fn new(size: f64, family: &str) -> Self {
        Self {
            size,
            family: family.to_string(),
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(10.0, "sans-serif")
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size, self.family)
    }
}

/// A 2D drawing context.
///
/// Path coordinates are interpreted in the current transform at the time they
/// are added, as on an HTML canvas.
pub trait Surface {
    /// Pushes a copy of the current style state.
    fn save(&mut self);
    /// Pops the most recently saved style state. Unbalanced calls are ignored.
    fn restore(&mut self);

    fn set_stroke_color(&mut self, color: &str) -> Result<(), SurfaceError>;
    fn set_fill_color(&mut self, color: &str) -> Result<(), SurfaceError>;
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: Font);
    fn set_text_align(&mut self, align: TextAlignment);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn close_path(&mut self);
    fn stroke(&mut self) -> Result<(), SurfaceError>;
    fn fill(&mut self) -> Result<(), SurfaceError>;

    /// Returns the advance width of `text` in the current font.
    fn measure_text(&mut self, text: &str) -> f64;
    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), SurfaceError>;

    fn translate(&mut self, dx: f64, dy: f64);
    fn rotate(&mut self, angle: f64);
}

/// Scoped style state: saves on creation and restores when dropped.
///
/// The guard dereferences to the surface, so drawing goes through it and the
/// restore happens on every exit path, including `?` returns.
pub struct SurfaceGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> SurfaceGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for SurfaceGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SurfaceGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SurfaceGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

/// Approximate advance of one glyph as a fraction of the font size.
pub const AVERAGE_GLYPH_ADVANCE: f64 = 0.55;

/// Estimates the rendered width of `text` without font files.
pub fn estimate_text_width(text: &str, font: &Font) -> f64 {
    text.chars().count() as f64 * font.size * AVERAGE_GLYPH_ADVANCE
}
