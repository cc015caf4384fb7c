// crates/thumbview-layout/src/measure.rs
use std::fmt;
use std::str::FromStr;

use thumbview_core::{Bounds, Padding, TargetSize, ThumbviewError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeasureMode {
    /// The parent imposes no constraint
    #[default]
    Unspecified,
    /// The parent has decided the exact size
    Exactly,
    /// The child can be as large as it wants up to the size
    AtMost,
}

impl fmt::Display for MeasureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeasureMode::Unspecified => "unspecified",
            MeasureMode::Exactly => "exactly",
            MeasureMode::AtMost => "at-most",
        };
        f.write_str(name)
    }
}

impl FromStr for MeasureMode {
    type Err = ThumbviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "unspecified" => Ok(MeasureMode::Unspecified),
            "exactly" => Ok(MeasureMode::Exactly),
            "at-most" | "at_most" => Ok(MeasureMode::AtMost),
            other => Err(ThumbviewError::Config(format!("unknown measure mode '{}'", other))),
        }
    }
}

/// A size offered by the enclosing layout, together with how binding it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: u32,
}

impl MeasureSpec {
    pub fn new(mode: MeasureMode, size: u32) -> Self {
        Self { mode, size }
    }

    pub fn unspecified() -> Self {
        Self::default()
    }

    pub fn exactly(size: u32) -> Self {
        Self::new(MeasureMode::Exactly, size)
    }

    pub fn at_most(size: u32) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    /// Same mode, new size.
    pub fn with_size(self, size: u32) -> Self {
        Self { size, ..self }
    }
}

/// Outcome of a measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    /// No opinion: measure with the parent's original specs
    Default { width: MeasureSpec, height: MeasureSpec },
    /// Measure with these adjusted specs
    Requested { width: MeasureSpec, height: MeasureSpec },
}

impl Measurement {
    pub fn width(&self) -> MeasureSpec {
        match self {
            Measurement::Default { width, .. } | Measurement::Requested { width, .. } => *width,
        }
    }

    pub fn height(&self) -> MeasureSpec {
        match self {
            Measurement::Default { height, .. } | Measurement::Requested { height, .. } => *height,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Measurement::Default { .. })
    }
}

/// Turn a resolved target into the specs handed back to the parent layout.
///
/// Each axis is raised to at least its configured minimum and grown by the
/// padding on that axis, saturating at `u32::MAX`. The parent's modes are
/// kept as-is.
pub fn measure(
    target: TargetSize,
    bounds: Bounds,
    padding: Padding,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
) -> Measurement {
    if target.is_unconstrained() {
        return Measurement::Default {
            width: width_spec,
            height: height_spec,
        };
    }

    let final_width = target.width.max(bounds.min_width).saturating_add(padding.horizontal());
    let final_height = target.height.max(bounds.min_height).saturating_add(padding.vertical());

    Measurement::Requested {
        width: width_spec.with_size(final_width),
        height: height_spec.with_size(final_height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained_target_falls_back() {
        let width_spec = MeasureSpec::at_most(480);
        let height_spec = MeasureSpec::unspecified();
        let measurement = measure(
            TargetSize::UNCONSTRAINED,
            Bounds::new(100, 200, 100, 200),
            Padding::uniform(8),
            width_spec,
            height_spec,
        );

        assert_eq!(
            measurement,
            Measurement::Default {
                width: width_spec,
                height: height_spec
            }
        );
        assert!(measurement.is_default());
    }

    #[test]
    fn test_padding_added_and_modes_kept() {
        let measurement = measure(
            TargetSize::new(200, 100),
            Bounds::new(100, 200, 100, 100),
            Padding::new(1, 2, 3, 4),
            MeasureSpec::at_most(480),
            MeasureSpec::exactly(50),
        );

        assert!(!measurement.is_default());
        assert_eq!(measurement.width(), MeasureSpec::at_most(204));
        assert_eq!(measurement.height(), MeasureSpec::exactly(106));
    }

    #[test]
    fn test_min_bounds_raise_small_axis() {
        // 400x20 came out of an overflow; height is lifted back to the minimum
        let measurement = measure(
            TargetSize::new(400, 20),
            Bounds::new(100, 400, 100, 300),
            Padding::default(),
            MeasureSpec::unspecified(),
            MeasureSpec::unspecified(),
        );

        assert_eq!(measurement.width().size, 400);
        assert_eq!(measurement.height().size, 100);
        assert_eq!(measurement.height().mode, MeasureMode::Unspecified);
    }

    #[test]
    fn test_oversized_padding_saturates() {
        let measurement = measure(
            TargetSize::new(200, 100),
            Bounds::new(100, 200, 100, 100),
            Padding::new(u32::MAX, 0, 1, 0),
            MeasureSpec::exactly(480),
            MeasureSpec::at_most(320),
        );

        assert_eq!(measurement.width(), MeasureSpec::exactly(u32::MAX));
        assert_eq!(measurement.height(), MeasureSpec::at_most(100));

        let measurement = measure(
            TargetSize::new(200, 100),
            Bounds::new(100, 200, 100, 100),
            Padding::new(0, u32::MAX - 50, 0, 0),
            MeasureSpec::unspecified(),
            MeasureSpec::unspecified(),
        );
        assert_eq!(measurement.height().size, u32::MAX);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("exactly".parse::<MeasureMode>().unwrap(), MeasureMode::Exactly);
        assert_eq!("at-most".parse::<MeasureMode>().unwrap(), MeasureMode::AtMost);
        assert_eq!(MeasureMode::AtMost.to_string(), "at-most");
        assert!("sideways".parse::<MeasureMode>().is_err());
    }
}
