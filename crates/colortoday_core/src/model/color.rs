//! Fill colors and the quick-swatch palette.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color regex"));

/// Quick swatches offered next to the free color picker.
pub const PALETTE: [&str; 8] = [
    "#f0643a", "#f6b83f", "#4bb58f", "#2a79ff", "#7232d5", "#ff6b9a", "#1d1d1b", "#ffffff",
];

/// Brush color selected when a canvas is first opened.
pub const DEFAULT_COLOR: &str = "#f0643a";

/// Opaque sRGB color written as `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    InvalidHex(String),
}

impl Display for ColorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex(value) => write!(f, "invalid color `{value}`; expected #rrggbb"),
        }
    }
}

impl Error for ColorError {}

impl HexColor {
    /// Parses `#rrggbb` (any case) and normalizes to lowercase.
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let trimmed = value.trim();
        if !HEX_COLOR_RE.is_match(trimmed) {
            return Err(ColorError::InvalidHex(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// The default brush color.
    pub fn default_brush() -> Self {
        Self(DEFAULT_COLOR.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `(r, g, b)` channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or_default()
        };
        (channel(1..3), channel(3..5), channel(5..7))
    }
}

/// Returns the palette as validated colors.
pub fn palette() -> Vec<HexColor> {
    PALETTE
        .iter()
        .map(|value| HexColor((*value).to_string()))
        .collect()
}

impl Default for HexColor {
    fn default() -> Self {
        Self::default_brush()
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::{palette, HexColor, DEFAULT_COLOR, PALETTE};

    #[test]
    fn parse_normalizes_case() {
        let color = HexColor::parse("#2A79FF").unwrap();
        assert_eq!(color.as_str(), "#2a79ff");
        assert_eq!(color.rgb(), (0x2a, 0x79, 0xff));
    }

    #[test]
    fn parse_rejects_short_and_named_colors() {
        assert!(HexColor::parse("#fff").is_err());
        assert!(HexColor::parse("red").is_err());
        assert!(HexColor::parse("#12345g").is_err());
    }

    #[test]
    fn palette_entries_are_valid_and_start_with_default() {
        let colors = palette();
        assert_eq!(colors.len(), PALETTE.len());
        assert_eq!(colors[0].as_str(), DEFAULT_COLOR);
        for color in colors {
            assert_eq!(HexColor::parse(color.as_str()).unwrap(), color);
        }
    }
}
