//! Guide ("pilar") lines and the offset dimension line.

use std::f64::consts::FRAC_PI_2;

use crate::geometry::{offset_rotated, Point};
use crate::render::{Surface, SurfaceError};
use crate::styles::{ArrowPosition, DistanceLineStyle, PilarLineStyle};

/// A guide line from a measured point to its rotated far end.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PilarLine {
    pub from: Point,
    pub to: Point,
}

/// Computes the guide line dropped from `point`.
///
/// The far end sits `height` below the point in the unrotated frame and is
/// rotated into the segment orientation.
pub fn pilar_line(point: Point, angle: f64, style: &PilarLineStyle) -> PilarLine {
    PilarLine {
        from: point,
        to: offset_rotated(point, 0.0, style.height, angle),
    }
}

/// Strokes the guide lines for both measured points.
pub fn draw_pilar_lines<S: Surface + ?Sized>(
    surface: &mut S,
    start: Point,
    end: Point,
    angle: f64,
    style: &PilarLineStyle,
) -> Result<[PilarLine; 2], SurfaceError> {
    surface.set_stroke_color(&style.color)?;
    surface.set_line_width(style.thickness);
    let lines = [pilar_line(start, angle, style), pilar_line(end, angle, style)];
    for line in &lines {
        surface.begin_path();
        surface.move_to(line.from);
        surface.line_to(line.to);
        surface.stroke()?;
    }
    Ok(lines)
}

/// Endpoints of the dimension line.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceLine {
    /// Start point moved perpendicular to the segment by the line offset.
    pub start_offset: Point,
    pub end_offset: Point,
    /// `start_offset` extended backwards along the segment.
    pub start_extend: Point,
    /// `end_offset` extended forwards along the segment.
    pub end_extend: Point,
}

impl DistanceLine {
    /// The part of the line that is actually stroked for `position`.
    ///
    /// Outside arrows get the extended line; inside arrows sit on the plain
    /// offset segment and extensions are ignored.
    pub fn stroked(&self, position: ArrowPosition) -> (Point, Point) {
        match position {
            ArrowPosition::Outside => (self.start_extend, self.end_extend),
            ArrowPosition::Inside => (self.start_offset, self.end_offset),
        }
    }
}

/// Computes the dimension line parallel to the segment `start`-`end`.
pub fn distance_line(
    start: Point,
    end: Point,
    angle: f64,
    style: &DistanceLineStyle,
    extend_after_start: f64,
    extend_after_end: f64,
) -> DistanceLine {
    let perpendicular = angle + FRAC_PI_2;
    let start_offset = offset_rotated(start, style.offset_from_point, 0.0, perpendicular);
    let end_offset = offset_rotated(end, style.offset_from_point, 0.0, perpendicular);
    DistanceLine {
        start_offset,
        end_offset,
        start_extend: offset_rotated(start_offset, -extend_after_start, 0.0, angle),
        end_extend: offset_rotated(end_offset, extend_after_end, 0.0, angle),
    }
}

/// Computes and strokes the dimension line.
#[allow(clippy::too_many_arguments)]
pub fn draw_distance_line<S: Surface + ?Sized>(
    surface: &mut S,
    start: Point,
    end: Point,
    angle: f64,
    style: &DistanceLineStyle,
    extend_after_start: f64,
    extend_after_end: f64,
    arrow_position: ArrowPosition,
) -> Result<DistanceLine, SurfaceError> {
    let line = distance_line(start, end, angle, style, extend_after_start, extend_after_end);
    surface.begin_path();
    surface.set_stroke_color(&style.color)?;
    surface.set_line_width(style.thickness);
    let (from, to) = line.stroked(arrow_position);
    surface.move_to(from);
    surface.line_to(to);
    surface.stroke()?;
    Ok(line)
}
