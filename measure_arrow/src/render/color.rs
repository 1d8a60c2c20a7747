//! Parsing of CSS-style color strings.

use once_cell::sync::Lazy;
use regex::Regex;

use super::SurfaceError;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern is valid")
});

static RGB_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
        .expect("rgb color pattern is valid")
});

const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
];

/// RGB color resolved from a color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub [u8; 3]);

impl Color {
    /// Parses `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a basic color keyword.
    pub fn parse(s: &str) -> Result<Self, SurfaceError> {
        let trimmed = s.trim();
        let invalid = || SurfaceError::InvalidColor(s.to_string());
        if let Some(caps) = HEX_COLOR.captures(trimmed) {
            let digits = &caps[1];
            let expanded: String = if digits.len() == 3 {
                digits.chars().flat_map(|c| [c, c]).collect()
            } else {
                digits.to_string()
            };
            let channel = |i: usize| {
                u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid())
            };
            return Ok(Color([channel(0)?, channel(2)?, channel(4)?]));
        }
        if let Some(caps) = RGB_COLOR.captures(trimmed) {
            let channel = |i: usize| caps[i].parse::<u8>().map_err(|_| invalid());
            return Ok(Color([channel(1)?, channel(2)?, channel(3)?]));
        }
        let lower = trimmed.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, rgb)| Color(*rgb))
            .ok_or_else(invalid)
    }

    /// Formats the color as `#rrggbb`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Color::parse("#000000").unwrap(), Color([0, 0, 0]));
        assert_eq!(Color::parse("#FF8000").unwrap(), Color([255, 128, 0]));
        assert_eq!(Color::parse("#f00").unwrap(), Color([255, 0, 0]));
    }

    #[test]
    fn parses_rgb_and_names() {
        assert_eq!(Color::parse("rgb(1, 2, 3)").unwrap(), Color([1, 2, 3]));
        assert_eq!(Color::parse("Blue").unwrap(), Color([0, 0, 255]));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("rgb(300, 0, 0)").is_err());
        assert!(Color::parse("blurple").is_err());
    }

    #[test]
    fn hex_output() {
        assert_eq!(Color([255, 0, 16]).to_hex(), "#ff0010");
    }
}
