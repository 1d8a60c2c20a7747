//! Surface that accumulates SVG elements.
//!
//! Paths are flattened through the current transform when they are added, so
//! the emitted `<path>` data is in document coordinates. Text keeps its local
//! origin and carries the transform as a `matrix(...)` attribute.

use std::fmt::Write as _;
use std::io;

use super::state::{PathState, StateStack, Subpath};
use super::{
    estimate_text_width, Color, Font, Surface, SurfaceError, TextAlignment, TextBaseline,
};
use crate::geometry::Point;

/// Canvas size used when none is given.
pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;

#[derive(Debug, Default)]
pub struct SvgSurface {
    states: StateStack,
    path: PathState,
    elements: Vec<String>,
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn path_data(subpaths: &[Subpath]) -> String {
    let mut d = String::new();
    for sub in subpaths {
        for (i, p) in sub.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{:.2},{:.2} ", p.x, p.y);
        }
        if sub.closed {
            d.push_str("Z ");
        }
    }
    d.trim_end().to_string()
}

fn text_anchor(align: TextAlignment) -> &'static str {
    match align {
        TextAlignment::Left => "start",
        TextAlignment::Center => "middle",
        TextAlignment::Right => "end",
    }
}

fn dominant_baseline(baseline: TextBaseline) -> &'static str {
    match baseline {
        TextBaseline::Top => "text-before-edge",
        TextBaseline::Middle => "middle",
        TextBaseline::Bottom => "text-after-edge",
        TextBaseline::Alphabetic => "alphabetic",
    }
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements painted so far.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Returns the complete SVG document.
    pub fn finish(&self, width: f64, height: f64) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}' viewBox='0 0 {width} {height}'>"
        );
        for element in &self.elements {
            svg.push_str("  ");
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Writes the document to `path`.
    pub fn write_svg(&self, path: &str, width: f64, height: f64) -> io::Result<()> {
        crate::io::write_string(path, &self.finish(width, height))
    }
}

impl Surface for SvgSurface {
    fn save(&mut self) {
        self.states.save();
    }

    fn restore(&mut self) {
        self.states.restore();
    }

    fn set_stroke_color(&mut self, color: &str) -> Result<(), SurfaceError> {
        let hex = Color::parse(color)?.to_hex();
        self.states.current_mut().stroke_color = hex;
        Ok(())
    }

    fn set_fill_color(&mut self, color: &str) -> Result<(), SurfaceError> {
        let hex = Color::parse(color)?.to_hex();
        self.states.current_mut().fill_color = hex;
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
        let d = path_data(self.path.subpaths());
        if d.is_empty() {
            return Ok(());
        }
        let state = self.states.current();
        log::trace!("svg stroke {d}");
        self.elements.push(format!(
            "<path d='{d}' fill='none' stroke='{}' stroke-width='{}' />",
            state.stroke_color, state.line_width
        ));
        Ok(())
    }

    fn fill(&mut self) -> Result<(), SurfaceError> {
        let d = path_data(self.path.subpaths());
        if d.is_empty() {
            return Ok(());
        }
        let state = self.states.current();
        log::trace!("svg fill {d}");
        self.elements
            .push(format!("<path d='{d}' fill='{}' stroke='none' />", state.fill_color));
        Ok(())
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        estimate_text_width(text, &self.states.current().font)
    }

    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), SurfaceError> {
        let state = self.states.current();
        let m = &state.transform;
        log::trace!("svg text {text:?}");
        self.elements.push(format!(
            "<text x='{:.2}' y='{:.2}' transform='matrix({:.6} {:.6} {:.6} {:.6} {:.2} {:.2})' \
             font-family='{}' font-size='{}' fill='{}' text-anchor='{}' dominant-baseline='{}'>{}</text>",
            at.x,
            at.y,
            m[(0, 0)],
            m[(1, 0)],
            m[(0, 1)],
            m[(1, 1)],
            m[(0, 2)],
            m[(1, 2)],
            escape_xml(&state.font.family),
            state.font.size,
            state.fill_color,
            text_anchor(state.text_align),
            dominant_baseline(state.text_baseline),
            escape_xml(text),
        ));
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.states.translate(dx, dy);
    }

    fn rotate(&mut self, angle: f64) {
        self.states.rotate(angle);
    }
}
