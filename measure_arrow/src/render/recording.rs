//! Surface that records every drawing operation.

use super::state::{PathState, StateStack, Subpath};
use super::{
    estimate_text_width, Color, DrawState, Font, Surface, SurfaceError, TextAlignment,
    TextBaseline,
};
use crate::geometry::Point;

/// A painted primitive, with coordinates already mapped to surface space.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawCommand {
    Stroke {
        subpaths: Vec<Subpath>,
        color: String,
        width: f64,
    },
    Fill {
        subpaths: Vec<Subpath>,
        color: String,
    },
    Text {
        text: String,
        origin: Point,
        /// Rotation of the text baseline in radians.
        rotation: f64,
        color: String,
        font: Font,
        align: TextAlignment,
        baseline: TextBaseline,
    },
}

/// In-memory surface used by tests and by hosts that only need geometry.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    states: StateStack,
    path: PathState,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Current (unsaved) style state.
    pub fn state(&self) -> &DrawState {
        self.states.current()
    }

    /// Number of outstanding saves.
    pub fn depth(&self) -> usize {
        self.states.depth()
    }

    /// Strokes recorded so far.
    pub fn strokes(&self) -> impl Iterator<Item = (&[Subpath], &str, f64)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Stroke {
                subpaths,
                color,
                width,
            } => Some((subpaths.as_slice(), color.as_str(), *width)),
            _ => None,
        })
    }

    /// Texts recorded so far.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.states.save();
    }

    fn restore(&mut self) {
        self.states.restore();
    }

    fn set_stroke_color(&mut self, color: &str) -> Result<(), SurfaceError> {
        Color::parse(color)?;
        self.states.current_mut().stroke_color = color.to_string();
        Ok(())
    }

    fn set_fill_color(&mut self, color: &str) -> Result<(), SurfaceError> {
        Color::parse(color)?;
        self.states.current_mut().fill_color = color.to_string();
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) {
        self.states.current_mut().line_width = width;
    }

    fn set_font(&mut self, font: Font) {
        self.states.current_mut().font = font;
    }

    fn set_text_align(&mut self, align: TextAlignment) {
        self.states.current_mut().text_align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.states.current_mut().text_baseline = baseline;
    }

    fn begin_path(&mut self) {
        self.path.begin();
    }

    fn move_to(&mut self, p: Point) {
        let p = self.states.current().apply(p);
        self.path.move_to(p);
    }

    fn line_to(&mut self, p: Point) {
        let p = self.states.current().apply(p);
        self.path.line_to(p);
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        let state = self.states.current();
        self.commands.push(DrawCommand::Stroke {
            subpaths: self.path.subpaths().to_vec(),
            color: state.stroke_color.clone(),
            width: state.line_width,
        });
        Ok(())
    }

    fn fill(&mut self) -> Result<(), SurfaceError> {
        let state = self.states.current();
        self.commands.push(DrawCommand::Fill {
            subpaths: self.path.subpaths().to_vec(),
            color: state.fill_color.clone(),
        });
        Ok(())
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        estimate_text_width(text, &self.states.current().font)
    }

    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), SurfaceError> {
        let state = self.states.current();
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin: state.apply(at),
            rotation: state.rotation(),
            color: state.fill_color.clone(),
            font: state.font.clone(),
            align: state.text_align,
            baseline: state.text_baseline,
        });
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.states.translate(dx, dy);
    }

    fn rotate(&mut self, angle: f64) {
        self.states.rotate(angle);
    }
}
