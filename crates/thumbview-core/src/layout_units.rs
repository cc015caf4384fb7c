// crates/thumbview-core/src/layout_units.rs
use serde::Deserialize;
use std::fmt;

use crate::{Result, ThumbviewError};

/// A configured length: raw pixels or density-independent pixels
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "DimensionRepr")]
pub enum Dimension {
    /// Physical pixels
    Pixels(f32),
    /// Density-independent pixels, scaled by the display density
    Dip(f32),
}

impl Dimension {
    pub const ZERO: Self = Dimension::Pixels(0.0);

    /// Convert to whole pixels for the given display density.
    ///
    /// Rounds to the nearest pixel, but a non-zero length never collapses to 0.
    pub fn to_pixels(&self, density: f32) -> u32 {
        let raw = match self {
            Dimension::Pixels(px) => *px,
            Dimension::Dip(dp) => dp * density,
        };

        let rounded = (raw + 0.5) as u32;
        if rounded == 0 && raw > 0.0 {
            1
        } else {
            rounded
        }
    }

    /// Parse a value like "120px", "48dp" or "64" (pixels).
    pub fn from_string(value: &str) -> Result<Self> {
        let value = value.trim();

        let parse = |number: &str| {
            number
                .trim()
                .parse::<f32>()
                .map_err(|_| ThumbviewError::InvalidDimension(format!("'{}'", value)))
        };

        let dimension = if let Some(px) = value.strip_suffix("px") {
            Dimension::Pixels(parse(px)?)
        } else if let Some(dp) = value.strip_suffix("dip").or_else(|| value.strip_suffix("dp")) {
            Dimension::Dip(parse(dp)?)
        } else {
            Dimension::Pixels(parse(value)?)
        };

        dimension.checked()
    }

    fn checked(self) -> Result<Self> {
        match self {
            Dimension::Pixels(v) | Dimension::Dip(v) if v.is_finite() && v >= 0.0 => Ok(self),
            _ => Err(ThumbviewError::InvalidDimension(format!("'{}' must be a non-negative length", self))),
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::ZERO
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Pixels(px) => write!(f, "{}px", px),
            Dimension::Dip(dp) => write!(f, "{}dp", dp),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DimensionRepr {
    Number(f32),
    Text(String),
}

impl TryFrom<DimensionRepr> for Dimension {
    type Error = ThumbviewError;

    fn try_from(repr: DimensionRepr) -> Result<Self> {
        match repr {
            DimensionRepr::Number(px) => Dimension::Pixels(px).checked(),
            DimensionRepr::Text(text) => Dimension::from_string(&text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!(Dimension::from_string("120px").unwrap(), Dimension::Pixels(120.0));
        assert_eq!(Dimension::from_string("48dp").unwrap(), Dimension::Dip(48.0));
        assert_eq!(Dimension::from_string(" 16dip ").unwrap(), Dimension::Dip(16.0));
        assert_eq!(Dimension::from_string("64").unwrap(), Dimension::Pixels(64.0));
    }

    #[test]
    fn test_reject_bad_values() {
        assert!(Dimension::from_string("wide").is_err());
        assert!(Dimension::from_string("-4px").is_err());
        assert!(Dimension::from_string("").is_err());
    }

    #[test]
    fn test_to_pixels() {
        assert_eq!(Dimension::Pixels(120.0).to_pixels(3.0), 120);
        assert_eq!(Dimension::Dip(48.0).to_pixels(2.0), 96);
        assert_eq!(Dimension::Dip(10.0).to_pixels(1.25), 13);
        // Small but non-zero lengths keep at least one pixel
        assert_eq!(Dimension::Dip(0.1).to_pixels(1.0), 1);
        assert_eq!(Dimension::ZERO.to_pixels(4.0), 0);
    }
}
