// crates/thumbview-core/src/attributes.rs
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::{Bounds, Dimension, Result, ThumbviewError};

/// ARGB colour packed as `0xAARRGGBB`.
pub type Color = u32;

pub const COLOR_BLACK: Color = 0xFF00_0000;

/// Configuration attributes for a thumbnail view.
///
/// Every field is optional; missing bounds leave the view unconstrained.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailAttributes {
    pub min_width: Dimension,
    pub max_width: Dimension,
    pub min_height: Dimension,
    pub max_height: Dimension,
    #[serde(deserialize_with = "deserialize_color")]
    pub background_color_hint: Color,
    pub corner_radius: Dimension,
}

impl Default for ThumbnailAttributes {
    fn default() -> Self {
        Self {
            min_width: Dimension::ZERO,
            max_width: Dimension::ZERO,
            min_height: Dimension::ZERO,
            max_height: Dimension::ZERO,
            background_color_hint: COLOR_BLACK,
            corner_radius: Dimension::ZERO,
        }
    }
}

impl ThumbnailAttributes {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| ThumbviewError::Config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = fs::read_to_string(path.as_ref())?;
        let attributes = Self::from_toml_str(&source)?;
        tracing::debug!("Loaded thumbnail attributes from {}: {:?}", path.as_ref().display(), attributes);
        Ok(attributes)
    }

    /// Resolve the configured envelope to whole pixels.
    pub fn bounds(&self, density: f32) -> Result<Bounds> {
        if !density.is_finite() || density <= 0.0 {
            return Err(ThumbviewError::Config(format!("display density must be positive, got {}", density)));
        }

        let bounds = Bounds::new(
            self.min_width.to_pixels(density),
            self.max_width.to_pixels(density),
            self.min_height.to_pixels(density),
            self.max_height.to_pixels(density),
        );
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn corner_radius_pixels(&self, density: f32) -> u32 {
        self.corner_radius.to_pixels(density)
    }
}

/// Parse `#RRGGBB` or `#AARRGGBB`.
pub fn parse_color(value: &str) -> Result<Color> {
    let hex = value
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| ThumbviewError::Config(format!("colour '{}' must start with '#'", value)))?;

    let parsed = u32::from_str_radix(hex, 16)
        .map_err(|_| ThumbviewError::Config(format!("colour '{}' is not hexadecimal", value)))?;

    match hex.len() {
        6 => Ok(0xFF00_0000 | parsed),
        8 => Ok(parsed),
        _ => Err(ThumbviewError::Config(format!("colour '{}' must be #RRGGBB or #AARRGGBB", value))),
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> std::result::Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_color(&text).map_err(serde::de::Error::custom)
}
