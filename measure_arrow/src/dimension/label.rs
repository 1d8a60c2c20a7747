//! Label anchor placement.

use crate::geometry::{rotate_point, Point};
use crate::render::{TextAlignment, TextBaseline};
use crate::styles::{AnchorColumn, AnchorRow, TextAlign, TextAnchor, TextStyle};

/// Reference points a label can hang from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFrame {
    pub start_offset: Point,
    pub end_offset: Point,
    pub midpoint: Point,
}

/// Horizontal shift of the label for `column` and `align`.
fn horizontal_shift(column: AnchorColumn, align: TextAlign, width: f64) -> f64 {
    match (column, align) {
        (AnchorColumn::Left, TextAlign::Outside) => -width,
        (AnchorColumn::Left, TextAlign::Center) => -width / 2.0,
        (AnchorColumn::Left, TextAlign::Inside) => 0.0,
        (AnchorColumn::Center, TextAlign::Outside) => -width / 2.0,
        (AnchorColumn::Center, TextAlign::Center) => 0.0,
        (AnchorColumn::Center, TextAlign::Inside) => width / 2.0,
        (AnchorColumn::Right, TextAlign::Outside) => width,
        (AnchorColumn::Right, TextAlign::Center) => width / 2.0,
        (AnchorColumn::Right, TextAlign::Inside) => 0.0,
    }
}

/// Computes the point the label is painted from.
///
/// The anchor column picks the reference point, the row shifts it by one text
/// height, `align` shifts it horizontally, and the user offsets are added in
/// the unrotated frame. The result is rotated about the reference point by
/// `angle`, except for `middleCenter` and unknown names, which stay
/// unrotated.
pub fn text_position(
    anchor: &TextAnchor,
    frame: &LabelFrame,
    text_width: f64,
    text_height: f64,
    style: &TextStyle,
    angle: f64,
) -> Point {
    let reference = match anchor.column() {
        AnchorColumn::Left => frame.start_offset,
        AnchorColumn::Center => frame.midpoint,
        AnchorColumn::Right => frame.end_offset,
    };
    let dy = match anchor.row() {
        AnchorRow::Top => -text_height,
        AnchorRow::Middle => 0.0,
        AnchorRow::Bottom => text_height,
    };
    let dx = horizontal_shift(anchor.column(), style.align, text_width);
    let unrotated = reference.offset(dx + style.offset_x, dy + style.offset_y);
    if anchor.is_centered() {
        unrotated
    } else {
        rotate_point(unrotated, reference, angle)
    }
}

/// Text alignment the label is painted with, read from the words in the
/// anchor name: `Center`, then `Right`, otherwise left.
pub fn text_alignment(anchor: &TextAnchor) -> TextAlignment {
    let name = anchor.name();
    if name.contains("Center") {
        TextAlignment::Center
    } else if name.contains("Right") {
        TextAlignment::Right
    } else {
        TextAlignment::Left
    }
}

/// Text baseline the label is painted with: `middle`, then `bottom`,
/// otherwise top.
pub fn text_baseline(anchor: &TextAnchor) -> TextBaseline {
    let name = anchor.name();
    if name.contains("middle") {
        TextBaseline::Middle
    } else if name.contains("bottom") {
        TextBaseline::Bottom
    } else {
        TextBaseline::Top
    }
}
