//! Styling structures for measurement arrows.
//!
//! Every style implements [`Default`] with the documented drawing defaults and
//! deserializes with `#[serde(default)]`, so partially specified styles are
//! completed before they ever reach the renderer.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default stroke, fill and text color.
pub const DEFAULT_COLOR: &str = "#000000";

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Style of the perpendicular guide lines dropped from each measured point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PilarLineStyle {
    /// Length of each guide line.
    pub height: f64,
    pub thickness: f64,
    pub color: String,
}

impl Default for PilarLineStyle {
    fn default() -> Self {
        Self {
            height: 50.0,
            thickness: 1.0,
            color: default_color(),
        }
    }
}

/// Style of the dimension line that carries the arrowheads and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DistanceLineStyle {
    /// Perpendicular distance between the measured segment and the drawn line.
    pub offset_from_point: f64,
    pub thickness: f64,
    pub color: String,
}

impl Default for DistanceLineStyle {
    fn default() -> Self {
        Self {
            offset_from_point: 0.0,
            thickness: 1.0,
            color: default_color(),
        }
    }
}

/// Row component of a [`TextAnchor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorRow {
    Top,
    Middle,
    Bottom,
}

/// Column component of a [`TextAnchor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorColumn {
    Left,
    Center,
    Right,
}

/// One of the nine label slots around the dimension line.
///
/// Names outside the nine slots are kept as [`TextAnchor::Unknown`]. They are
/// placed like `middleCenter`, while alignment and baseline still follow the
/// words found in the name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TextAnchor {
    TopLeft,
    #[default]
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    Unknown(String),
}

impl TextAnchor {
    pub const ALL: [TextAnchor; 9] = [
        TextAnchor::TopLeft,
        TextAnchor::TopCenter,
        TextAnchor::TopRight,
        TextAnchor::MiddleLeft,
        TextAnchor::MiddleCenter,
        TextAnchor::MiddleRight,
        TextAnchor::BottomLeft,
        TextAnchor::BottomCenter,
        TextAnchor::BottomRight,
    ];

    /// Resolves an anchor name such as `"bottomRight"`. Names must match
    /// exactly.
    pub fn parse(name: &str) -> Self {
        match name {
            "topLeft" => TextAnchor::TopLeft,
            "topCenter" => TextAnchor::TopCenter,
            "topRight" => TextAnchor::TopRight,
            "middleLeft" => TextAnchor::MiddleLeft,
            "middleCenter" => TextAnchor::MiddleCenter,
            "middleRight" => TextAnchor::MiddleRight,
            "bottomLeft" => TextAnchor::BottomLeft,
            "bottomCenter" => TextAnchor::BottomCenter,
            "bottomRight" => TextAnchor::BottomRight,
            other => {
                log::debug!("unknown text position {other:?}, placing at middleCenter");
                TextAnchor::Unknown(other.to_string())
            }
        }
    }

    /// The name this anchor was given.
    pub fn name(&self) -> &str {
        match self {
            TextAnchor::TopLeft => "topLeft",
            TextAnchor::TopCenter => "topCenter",
            TextAnchor::TopRight => "topRight",
            TextAnchor::MiddleLeft => "middleLeft",
            TextAnchor::MiddleCenter => "middleCenter",
            TextAnchor::MiddleRight => "middleRight",
            TextAnchor::BottomLeft => "bottomLeft",
            TextAnchor::BottomCenter => "bottomCenter",
            TextAnchor::BottomRight => "bottomRight",
            TextAnchor::Unknown(name) => name,
        }
    }

    pub fn row(&self) -> AnchorRow {
        match self {
            TextAnchor::TopLeft | TextAnchor::TopCenter | TextAnchor::TopRight => AnchorRow::Top,
            TextAnchor::MiddleLeft
            | TextAnchor::MiddleCenter
            | TextAnchor::MiddleRight
            | TextAnchor::Unknown(_) => AnchorRow::Middle,
            TextAnchor::BottomLeft | TextAnchor::BottomCenter | TextAnchor::BottomRight => {
                AnchorRow::Bottom
            }
        }
    }

    pub fn column(&self) -> AnchorColumn {
        match self {
            TextAnchor::TopLeft | TextAnchor::MiddleLeft | TextAnchor::BottomLeft => {
                AnchorColumn::Left
            }
            TextAnchor::TopCenter
            | TextAnchor::MiddleCenter
            | TextAnchor::BottomCenter
            | TextAnchor::Unknown(_) => AnchorColumn::Center,
            TextAnchor::TopRight | TextAnchor::MiddleRight | TextAnchor::BottomRight => {
                AnchorColumn::Right
            }
        }
    }

    /// True when the label hangs from the midpoint without any shift.
    pub fn is_centered(&self) -> bool {
        self.row() == AnchorRow::Middle && self.column() == AnchorColumn::Center
    }
}

impl FromStr for TextAnchor {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for TextAnchor {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<TextAnchor> for String {
    fn from(anchor: TextAnchor) -> Self {
        match anchor {
            TextAnchor::Unknown(name) => name,
            other => other.name().to_string(),
        }
    }
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Horizontal placement of the label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum TextAlign {
    /// Flush against the anchor, towards the inside of the line.
    #[default]
    Inside,
    /// Pushed away from the line.
    Outside,
    /// Centered on the anchor.
    Center,
}

impl TextAlign {
    /// Resolves an alignment name; anything unrecognized is treated as
    /// [`TextAlign::Inside`].
    pub fn parse(name: &str) -> Self {
        match name {
            "outside" => TextAlign::Outside,
            "center" => TextAlign::Center,
            _ => TextAlign::Inside,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Inside => "inside",
            TextAlign::Outside => "outside",
            TextAlign::Center => "center",
        }
    }
}

impl FromStr for TextAlign {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for TextAlign {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<TextAlign> for &'static str {
    fn from(align: TextAlign) -> Self {
        align.as_str()
    }
}

/// Label style definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextStyle {
    pub position: TextAnchor,
    pub color: String,
    /// Font size in surface units; also used as the text height.
    pub size: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Extra rotation in degrees on top of the line angle.
    pub rotation: f64,
    pub align: TextAlign,
    /// Literal label; empty means the measured distance is shown.
    pub text: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            position: TextAnchor::TopCenter,
            color: default_color(),
            size: 12.0,
            offset_x: 0.0,
            offset_y: 0.0,
            rotation: 0.0,
            align: TextAlign::Inside,
            text: String::new(),
        }
    }
}

/// Whether the arrowheads sit outside or inside the dimension line ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowPosition {
    Inside,
    #[default]
    Outside,
}

impl FromStr for ArrowPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inside" => Ok(ArrowPosition::Inside),
            "outside" => Ok(ArrowPosition::Outside),
            other => Err(format!("unknown arrow position '{other}'")),
        }
    }
}

/// Arrowhead style definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArrowStyle {
    pub position: ArrowPosition,
    pub thickness: f64,
    pub color: String,
    /// Closed and filled triangles instead of open wedges.
    pub filled: bool,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            position: ArrowPosition::Outside,
            thickness: 1.0,
            color: default_color(),
            filled: false,
        }
    }
}

/// Formats a measured distance as the default label text.
pub fn format_distance(distance: f64) -> String {
    format!("{}px", distance.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_names_round_trip() {
        for anchor in TextAnchor::ALL {
            assert_eq!(TextAnchor::parse(anchor.name()), anchor);
        }
    }

    #[test]
    fn unknown_anchor_keeps_name_and_centers() {
        let anchor = TextAnchor::parse("aboveLeft");
        assert_eq!(anchor, TextAnchor::Unknown("aboveLeft".into()));
        assert_eq!(anchor.name(), "aboveLeft");
        assert!(anchor.is_centered());
        assert!(TextAnchor::parse("").is_centered());
        assert!(!TextAnchor::TopCenter.is_centered());
    }

    #[test]
    fn anchor_names_match_exactly() {
        assert_eq!(TextAnchor::parse(" topLeft"), TextAnchor::Unknown(" topLeft".into()));
        assert_eq!(TextAnchor::parse("TopLeft"), TextAnchor::Unknown("TopLeft".into()));
        assert_eq!(TextAlign::parse(" outside"), TextAlign::Inside);
        assert!(" inside".parse::<ArrowPosition>().is_err());
    }

    #[test]
    fn unknown_anchor_name_survives_serde() {
        let style: TextStyle = serde_json::from_str(r#"{"position":"sideways"}"#).unwrap();
        let json = serde_json::to_string(&style).unwrap();
        assert!(json.contains(r#""position":"sideways""#));
    }

    #[test]
    fn anchor_rows_and_columns() {
        assert_eq!(TextAnchor::BottomRight.row(), AnchorRow::Bottom);
        assert_eq!(TextAnchor::BottomRight.column(), AnchorColumn::Right);
        assert_eq!(TextAnchor::MiddleLeft.row(), AnchorRow::Middle);
        assert_eq!(TextAnchor::TopCenter.column(), AnchorColumn::Center);
    }

    #[test]
    fn unknown_align_is_inside() {
        assert_eq!(TextAlign::parse("justify"), TextAlign::Inside);
        assert_eq!(TextAlign::parse("outside"), TextAlign::Outside);
    }

    #[test]
    fn defaults_match_documented_values() {
        let text = TextStyle::default();
        assert_eq!(text.position, TextAnchor::TopCenter);
        assert_eq!(text.size, 12.0);
        assert_eq!(text.align, TextAlign::Inside);
        assert!(text.text.is_empty());
        assert_eq!(PilarLineStyle::default().height, 50.0);
        assert_eq!(DistanceLineStyle::default().offset_from_point, 0.0);
        let arrows = ArrowStyle::default();
        assert_eq!(arrows.position, ArrowPosition::Outside);
        assert!(!arrows.filled);
    }

    #[test]
    fn partial_text_style_gets_defaults() {
        let style: TextStyle =
            serde_json::from_str(r#"{"position":"bottomLeft","offsetX":4}"#).unwrap();
        assert_eq!(style.position, TextAnchor::BottomLeft);
        assert_eq!(style.offset_x, 4.0);
        assert_eq!(style.size, 12.0);
        assert_eq!(style.color, DEFAULT_COLOR);
    }

    #[test]
    fn arrow_position_from_str() {
        assert_eq!("inside".parse::<ArrowPosition>(), Ok(ArrowPosition::Inside));
        assert!("sideways".parse::<ArrowPosition>().is_err());
    }

    #[test]
    fn distance_label_rounds() {
        assert_eq!(format_distance(299.5), "300px");
        assert_eq!(format_distance(200.0), "200px");
        assert_eq!(format_distance(0.2), "0px");
    }
}
