//! Triangular arrowheads at the ends of the dimension line.

use std::f64::consts::PI;

use super::{ARROW_HEAD_WIDTH_RATIO, ARROW_SIZE};
use crate::geometry::{offset_rotated, rotate_point, Point};
use crate::render::{Surface, SurfaceError};
use crate::styles::{ArrowPosition, ArrowStyle};

/// Apex and base corners of one arrowhead.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Arrowhead {
    pub tip: Point,
    pub corners: [Point; 2],
}

/// Returns the start and end tips for arrows placed at `position`.
///
/// Inside arrows are pulled towards the segment interior by half the arrow size
/// so the head sits on the dimension line.
pub fn arrow_tips(
    start_offset: Point,
    end_offset: Point,
    angle: f64,
    position: ArrowPosition,
) -> (Point, Point) {
    match position {
        ArrowPosition::Inside => (
            offset_rotated(start_offset, ARROW_SIZE / 2.0, 0.0, angle),
            offset_rotated(end_offset, -ARROW_SIZE / 2.0, 0.0, angle),
        ),
        ArrowPosition::Outside => (start_offset, end_offset),
    }
}

/// Computes the arrowhead with its apex at `tip`.
///
/// The base lies `ARROW_SIZE` behind the tip (before it for the start head,
/// after it for the end head) and is flipped by half a turn for inside arrows.
pub fn arrowhead(tip: Point, angle: f64, style: &ArrowStyle, is_start: bool) -> Arrowhead {
    let dx = if is_start { -ARROW_SIZE } else { ARROW_SIZE };
    let half_width = ARROW_SIZE * ARROW_HEAD_WIDTH_RATIO;
    let rotation = match style.position {
        ArrowPosition::Inside => angle + PI,
        ArrowPosition::Outside => angle,
    };
    Arrowhead {
        tip,
        corners: [
            rotate_point(tip.offset(dx, -half_width), tip, rotation),
            rotate_point(tip.offset(dx, half_width), tip, rotation),
        ],
    }
}

/// Paints an arrowhead with the current stroke and fill style.
///
/// Filled heads are closed and filled before stroking. Unfilled heads are left
/// open: only the path tip -> corner -> corner is stroked.
pub fn draw_arrowhead<S: Surface + ?Sized>(
    surface: &mut S,
    head: &Arrowhead,
    filled: bool,
) -> Result<(), SurfaceError> {
    surface.begin_path();
    surface.move_to(head.tip);
    surface.line_to(head.corners[0]);
    surface.line_to(head.corners[1]);
    if filled {
        surface.close_path();
        surface.fill()?;
    }
    surface.stroke()
}
