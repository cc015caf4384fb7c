// crates/thumbview-core/src/geometry.rs
use glam::DVec2;
use std::fmt;
use std::str::FromStr;

use crate::{Result, ThumbviewError};

/// Intrinsic size of the content. Both zero means "unknown".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalSize {
    pub width: u32,
    pub height: u32,
}

impl NaturalSize {
    pub const UNKNOWN: Self = Self { width: 0, height: 0 };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn non_zero_count(&self) -> usize {
        non_zero_count(&[self.width, self.height])
    }

    pub fn is_empty(&self) -> bool {
        self.non_zero_count() == 0
    }

    /// Rejects a size where only one axis is known.
    pub fn validate(&self) -> Result<()> {
        match self.non_zero_count() {
            0 | 2 => Ok(()),
            _ => Err(ThumbviewError::PartialNaturalSize {
                width: self.width,
                height: self.height,
            }),
        }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.width as f64, self.height as f64)
    }
}

impl fmt::Display for NaturalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for NaturalSize {
    type Err = ThumbviewError;

    /// Parses `WIDTHxHEIGHT`, e.g. `1000x500`.
    fn from_str(s: &str) -> Result<Self> {
        let (width, height) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| ThumbviewError::InvalidDimension(format!("expected WIDTHxHEIGHT, got '{}'", s)))?;
        Ok(Self::new(parse_component(width)?, parse_component(height)?))
    }
}

/// Display envelope imposed by the container. All zero means "unconstrained".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

impl Bounds {
    pub const UNCONSTRAINED: Self = Self {
        min_width: 0,
        max_width: 0,
        min_height: 0,
        max_height: 0,
    };

    pub fn new(min_width: u32, max_width: u32, min_height: u32, max_height: u32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    pub fn non_zero_count(&self) -> usize {
        non_zero_count(&[self.min_width, self.max_width, self.min_height, self.max_height])
    }

    pub fn is_empty(&self) -> bool {
        self.non_zero_count() == 0
    }

    /// Rejects bounds where only some of the four limits are set.
    pub fn validate(&self) -> Result<()> {
        match self.non_zero_count() {
            0 | 4 => Ok(()),
            _ => Err(ThumbviewError::PartialBounds {
                min_width: self.min_width,
                max_width: self.max_width,
                min_height: self.min_height,
                max_height: self.max_height,
            }),
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.min_width, self.max_width, self.min_height, self.max_height
        )
    }
}

impl FromStr for Bounds {
    type Err = ThumbviewError;

    /// Parses `MIN_W,MAX_W,MIN_H,MAX_H`.
    fn from_str(s: &str) -> Result<Self> {
        match parse_list(s)?.as_slice() {
            &[min_width, max_width, min_height, max_height] => {
                Ok(Self::new(min_width, max_width, min_height, max_height))
            }
            _ => Err(ThumbviewError::InvalidDimension(format!(
                "expected MIN_W,MAX_W,MIN_H,MAX_H, got '{}'",
                s
            ))),
        }
    }
}

/// Size picked for layout. `(0, 0)` means "use the default measurement".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub const UNCONSTRAINED: Self = Self { width: 0, height: 0 };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Truncates toward zero.
    pub fn truncate(size: DVec2) -> Self {
        Self::new(size.x as u32, size.y as u32)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.width == 0 && self.height == 0
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Saturates at `u32::MAX`.
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Saturates at `u32::MAX`.
    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

impl FromStr for Padding {
    type Err = ThumbviewError;

    /// Accepts either a single value or `LEFT,TOP,RIGHT,BOTTOM`.
    fn from_str(s: &str) -> Result<Self> {
        match parse_list(s)?.as_slice() {
            &[value] => Ok(Self::uniform(value)),
            &[left, top, right, bottom] => Ok(Self::new(left, top, right, bottom)),
            _ => Err(ThumbviewError::InvalidDimension(format!(
                "expected 1 or 4 padding values, got '{}'",
                s
            ))),
        }
    }
}

fn non_zero_count(values: &[u32]) -> usize {
    values.iter().filter(|&&v| v > 0).count()
}

fn parse_component(value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|e| ThumbviewError::InvalidDimension(format!("'{}': {}", value.trim(), e)))
}

fn parse_list(s: &str) -> Result<Vec<u32>> {
    s.split(',').map(parse_component).collect()
}
