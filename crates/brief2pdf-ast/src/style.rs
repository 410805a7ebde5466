//! Style descriptors for content blocks
//!
//! A [`StyleSheet`] holds one [`Style`] per text-bearing block kind plus
//! the spacer height and bullet glyph. Sizes and spacing are in points.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::block::BlockKind;

/// Font families tried in order; the first one available wins.
const SANS_FAMILIES: [&str; 4] = ["Helvetica", "Liberation Sans", "Arial", "DejaVu Sans"];

/// Error parsing a color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid color '{0}': expected #rrggbb")]
pub struct ColorError(pub String);

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ColorError(s.to_string()))?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError(s.to_string()))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Visual formatting for one block kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Font families, in fallback order
    pub fonts: Vec<String>,
    pub weight: FontWeight,
    /// Font size in points
    pub size: f64,
    /// Baseline-to-baseline distance in points
    pub leading: f64,
    pub space_before: f64,
    pub space_after: f64,
    pub color: Color,
    /// Indent of the text body from the left margin
    pub left_indent: f64,
    /// Indent of the bullet glyph from the left margin
    pub bullet_indent: f64,
}

impl Style {
    /// Body text: Helvetica 10.5/15, slate-900
    pub fn body() -> Self {
        Self {
            fonts: SANS_FAMILIES.iter().map(|f| f.to_string()).collect(),
            weight: FontWeight::Regular,
            size: 10.5,
            leading: 15.0,
            space_before: 0.0,
            space_after: 6.0,
            color: Color::rgb(0x0f, 0x17, 0x2a),
            left_indent: 0.0,
            bullet_indent: 0.0,
        }
    }

    /// Extra space between lines, on top of the font size
    ///
    /// Only equals the baseline pitch minus the size when each line box is
    /// exactly one em tall, which the transpiler sets via the text edges.
    pub fn line_gap(&self) -> f64 {
        (self.leading - self.size).max(0.0)
    }
}

/// Per-kind styles for a whole document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Height of a spacer block in points
    pub spacer_height: f64,
    pub bullet_glyph: String,
    pub heading: Style,
    pub sub_heading: Style,
    pub bullet: Style,
    pub paragraph: Style,
}

impl StyleSheet {
    /// The project brief look
    pub fn brief() -> Self {
        let paragraph = Style::body();
        let heading = Style {
            weight: FontWeight::Bold,
            size: 20.0,
            leading: 24.0,
            space_before: 8.0,
            space_after: 12.0,
            color: Color::rgb(0x1e, 0x29, 0x3b),
            ..Style::body()
        };
        let sub_heading = Style {
            weight: FontWeight::Bold,
            size: 13.5,
            leading: 18.0,
            space_before: 10.0,
            space_after: 7.0,
            ..Style::body()
        };
        let bullet = Style {
            left_indent: 14.0,
            bullet_indent: 2.0,
            space_after: 4.0,
            ..Style::body()
        };

        Self {
            spacer_height: 4.0,
            bullet_glyph: "\u{2022}".to_string(),
            heading,
            sub_heading,
            bullet,
            paragraph,
        }
    }

    /// Style for a block kind, `None` for spacers
    pub fn style_for(&self, kind: BlockKind) -> Option<&Style> {
        match kind {
            BlockKind::Heading => Some(&self.heading),
            BlockKind::SubHeading => Some(&self.sub_heading),
            BlockKind::BulletItem => Some(&self.bullet),
            BlockKind::Paragraph => Some(&self.paragraph),
            BlockKind::Spacer => None,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::brief()
    }
}
