//! Colour palette configuration.
//!
//! A palette is an ordered list of colours, one per temperature bucket.
//! Palettes can be loaded from JSON or YAML:
//!
//! ```yaml
//! name: warm-cool
//! colors: ["#F3F2F7", [142, 133, 242], "red"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{HeatmapError, HeatmapResult};

/// Reference palette: cool blues through pale yellow to red.
pub const REFERENCE_COLORS: [&str; 10] = [
    "#F3F2F7", "#8E85F2", "#6B43E6", "#2B30CC", "#F7F7BC", "#F2D17E", "#E39139", "#EB6C17",
    "#EB3E17", "#FF0000",
];

/// Color representation supporting multiple formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// Hex string: "#RRGGBB" or "#RRGGBBAA", or a colour name
    Hex(String),

    /// RGB array: [r, g, b] or [r, g, b, a]
    Array(Vec<u8>),

    /// Explicit RGBA
    Rgba { r: u8, g: u8, b: u8, a: u8 },
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgba { r, g, b, a: 255 }
    }

    /// Convert to RGBA, `None` if the colour cannot be interpreted.
    pub fn try_to_rgba(&self) -> Option<(u8, u8, u8, u8)> {
        match self {
            Color::Hex(s) if s.starts_with('#') => parse_hex_color(s),
            Color::Hex(s) => named_color(s),
            Color::Array(arr) => match arr.as_slice() {
                [r, g, b] => Some((*r, *g, *b, 255)),
                [r, g, b, a] => Some((*r, *g, *b, *a)),
                _ => None,
            },
            Color::Rgba { r, g, b, a } => Some((*r, *g, *b, *a)),
        }
    }

    /// Convert to RGBA tuple, opaque black when unparseable.
    pub fn to_rgba(&self) -> (u8, u8, u8, u8) {
        self.try_to_rgba().unwrap_or((0, 0, 0, 255))
    }

    /// `#RRGGBB` form, suitable for an SVG `fill` attribute.
    pub fn to_hex(&self) -> String {
        let (r, g, b, _) = self.to_rgba();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Alpha as a 0-1 opacity.
    pub fn opacity(&self) -> f64 {
        self.to_rgba().3 as f64 / 255.0
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8, u8)> {
    let s = s.trim_start_matches('#');
    if !s.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();

    match s.len() {
        6 => Some((channel(0)?, channel(2)?, channel(4)?, 255)),
        8 => Some((channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}

fn named_color(name: &str) -> Option<(u8, u8, u8, u8)> {
    let rgba = match name.to_lowercase().as_str() {
        "transparent" => (0, 0, 0, 0),
        "black" => (0, 0, 0, 255),
        "white" => (255, 255, 255, 255),
        "red" => (255, 0, 0, 255),
        "green" => (0, 255, 0, 255),
        "blue" => (0, 0, 255, 255),
        "yellow" => (255, 255, 0, 255),
        "cyan" => (0, 255, 255, 255),
        "magenta" => (255, 0, 255, 255),
        "orange" => (255, 165, 0, 255),
        "purple" => (128, 0, 128, 255),
        "gray" | "grey" => (128, 128, 128, 255),
        _ => return None,
    };
    Some(rgba)
}

/// Ordered bucket colours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Human-readable name
    #[serde(default = "default_palette_name")]
    pub name: String,

    /// One colour per bucket, coldest first
    pub colors: Vec<Color>,
}

fn default_palette_name() -> String {
    "custom".to_string()
}

impl Default for Palette {
    fn default() -> Self {
        Self::reference()
    }
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// The ten-colour palette of the published chart.
    pub fn reference() -> Self {
        Self::new(
            "reference",
            REFERENCE_COLORS
                .iter()
                .map(|c| Color::Hex(c.to_string()))
                .collect(),
        )
    }

    /// Load a palette from a `.json`, `.yaml` or `.yml` file.
    pub fn from_file(path: impl AsRef<Path>) -> HeatmapResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let palette = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content)?,
            _ => Self::from_json(&content)?,
        };
        palette.validate()?;
        Ok(palette)
    }

    pub fn from_json(json: &str) -> HeatmapResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml(yaml: &str) -> HeatmapResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// A usable palette has at least one colour and every colour parses.
    pub fn validate(&self) -> HeatmapResult<()> {
        if self.colors.is_empty() {
            return Err(HeatmapError::InvalidPalette(format!(
                "{}: palette must have at least 1 color",
                self.name
            )));
        }
        for (i, color) in self.colors.iter().enumerate() {
            if color.try_to_rgba().is_none() {
                return Err(HeatmapError::InvalidPalette(format!(
                    "{}: color {} ({:?}) is not a valid color",
                    self.name, i, color
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colour of a bucket index.
    pub fn color(&self, bucket: usize) -> Option<&Color> {
        self.colors.get(bucket)
    }
}
