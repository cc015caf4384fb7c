// crates/thumbview-core/src/lib.rs
pub mod attributes;
pub mod content;
pub mod events;
pub mod geometry;
pub mod layout_units;

pub use attributes::*;
pub use content::*;
pub use events::*;
pub use geometry::*;
pub use layout_units::*;

#[derive(Debug, thiserror::Error)]
pub enum ThumbviewError {
    #[error("Partially specified natural size: {width}x{height}")]
    PartialNaturalSize { width: u32, height: u32 },

    #[error("Partially specified bounds: [{min_width}, {max_width}, {min_height}, {max_height}]")]
    PartialBounds {
        min_width: u32,
        max_width: u32,
        min_height: u32,
        max_height: u32,
    },

    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ThumbviewError {
    /// True for the contract violations raised by size validation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ThumbviewError::PartialNaturalSize { .. } | ThumbviewError::PartialBounds { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ThumbviewError>;
