//! Measurement arrow rendering.
//!
//! [`draw_measurement_arrow`] paints one annotated dimension between two
//! points: guide lines at both ends, the offset dimension line, two
//! arrowheads and a rotated label with the distance or custom text.

use serde::{Deserialize, Serialize};

use crate::geometry::{distance, midpoint, Line, Point};
use crate::render::{Font, Surface, SurfaceError, SurfaceGuard};
use crate::styles::{format_distance, ArrowStyle, DistanceLineStyle, PilarLineStyle, TextStyle};

pub mod arrowhead;
pub mod label;
pub mod lines;

pub use arrowhead::Arrowhead;
pub use label::LabelFrame;
pub use lines::{DistanceLine, PilarLine};

/// Length of an arrowhead along the line.
pub const ARROW_SIZE: f64 = 10.0;
/// Half-width of an arrowhead base as a fraction of [`ARROW_SIZE`].
pub const ARROW_HEAD_WIDTH_RATIO: f64 = 0.25;
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Everything needed to draw one measurement arrow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRequest {
    pub start_point: Point,
    pub end_point: Point,
    #[serde(default, rename = "pilarLinesParams")]
    pub pilar_lines: PilarLineStyle,
    #[serde(default, rename = "distanceLineParams")]
    pub distance_line: DistanceLineStyle,
    #[serde(default, rename = "textParams")]
    pub text: TextStyle,
    #[serde(default, rename = "arrowsParams")]
    pub arrows: ArrowStyle,
    #[serde(default, rename = "extendLineAfterStartArrow")]
    pub extend_after_start_arrow: f64,
    #[serde(default, rename = "extendLineAfterEndArrow")]
    pub extend_after_end_arrow: f64,
}

impl MeasurementRequest {
    /// Creates a request between two points with default styling.
    pub fn new(start_point: Point, end_point: Point) -> Self {
        Self {
            start_point,
            end_point,
            pilar_lines: PilarLineStyle::default(),
            distance_line: DistanceLineStyle::default(),
            text: TextStyle::default(),
            arrows: ArrowStyle::default(),
            extend_after_start_arrow: 0.0,
            extend_after_end_arrow: 0.0,
        }
    }

    /// Returns the measured length.
    pub fn length(&self) -> f64 {
        distance(self.start_point, self.end_point)
    }

    /// Text the label shows: the custom text, or the rounded distance.
    pub fn label_text(&self) -> String {
        if self.text.text.is_empty() {
            format_distance(self.length())
        } else {
            self.text.text.clone()
        }
    }
}

/// Coordinates computed while drawing one measurement arrow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementLayout {
    /// Segment direction in radians.
    pub angle: f64,
    pub distance: f64,
    pub pilar_lines: [PilarLine; 2],
    pub distance_line: DistanceLine,
    pub arrowheads: [Arrowhead; 2],
    pub midpoint: Point,
    pub text: String,
    pub text_width: f64,
    pub text_height: f64,
    /// Point the label is painted from, before the text rotation.
    pub text_anchor: Point,
    /// Total label rotation in radians.
    pub text_rotation: f64,
}

/// Draws a measurement arrow on `surface` and returns its layout.
///
/// All style changes happen inside a saved surface state that is restored
/// before returning, also when the surface reports an error.
pub fn draw_measurement_arrow<S: Surface + ?Sized>(
    surface: &mut S,
    request: &MeasurementRequest,
) -> Result<MeasurementLayout, SurfaceError> {
    let mut surface = SurfaceGuard::new(surface);

    let segment = Line::new(request.start_point, request.end_point);
    let angle = segment.azimuth();
    let distance = segment.length();
    if distance == 0.0 {
        log::warn!(
            "measuring a zero-length segment at ({}, {})",
            request.start_point.x,
            request.start_point.y
        );
    }
    log::debug!("measurement angle {angle:.4} rad, distance {distance:.3}");

    let pilar_lines = lines::draw_pilar_lines(
        &mut *surface,
        request.start_point,
        request.end_point,
        angle,
        &request.pilar_lines,
    )?;

    let distance_line = lines::draw_distance_line(
        &mut *surface,
        request.start_point,
        request.end_point,
        angle,
        &request.distance_line,
        request.extend_after_start_arrow,
        request.extend_after_end_arrow,
        request.arrows.position,
    )?;

    surface.set_stroke_color(&request.arrows.color)?;
    surface.set_fill_color(&request.arrows.color)?;
    surface.set_line_width(request.arrows.thickness);
    let (start_tip, end_tip) = arrowhead::arrow_tips(
        distance_line.start_offset,
        distance_line.end_offset,
        angle,
        request.arrows.position,
    );
    let arrowheads = [
        arrowhead::arrowhead(start_tip, angle, &request.arrows, true),
        arrowhead::arrowhead(end_tip, angle, &request.arrows, false),
    ];
    for head in &arrowheads {
        arrowhead::draw_arrowhead(&mut *surface, head, request.arrows.filled)?;
    }

    surface.set_font(Font::new(request.text.size, DEFAULT_FONT_FAMILY));
    surface.set_fill_color(&request.text.color)?;
    let text = request.label_text();
    let text_width = surface.measure_text(&text);
    let text_height = request.text.size;

    let frame = LabelFrame {
        start_offset: distance_line.start_offset,
        end_offset: distance_line.end_offset,
        midpoint: midpoint(distance_line.start_offset, distance_line.end_offset),
    };
    let anchor = &request.text.position;
    let text_anchor = label::text_position(
        anchor,
        &frame,
        text_width,
        text_height,
        &request.text,
        angle,
    );
    let text_rotation = angle + request.text.rotation.to_radians();
    log::debug!("label {text:?} at ({:.2}, {:.2}) using {anchor}", text_anchor.x, text_anchor.y);

    {
        let mut local = SurfaceGuard::new(&mut *surface);
        local.translate(text_anchor.x, text_anchor.y);
        local.rotate(text_rotation);
        local.set_text_align(label::text_alignment(anchor));
        local.set_text_baseline(label::text_baseline(anchor));
        local.fill_text(&text, Point::new(0.0, 0.0))?;
    }

    Ok(MeasurementLayout {
        angle,
        distance,
        pilar_lines,
        distance_line,
        arrowheads,
        midpoint: frame.midpoint,
        text,
        text_width,
        text_height,
        text_anchor,
        text_rotation,
    })
}
