// crates/thumbview-runtime/src/loader.rs
use thumbview_core::{Slide, TargetSize};

/// How the loader should size the decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSizing {
    /// No target size is known; crop to fill the view
    CenterCrop,
    /// Decode straight to this size
    Override { width: u32, height: u32 },
}

impl From<TargetSize> for ImageSizing {
    fn from(target: TargetSize) -> Self {
        if target.is_unconstrained() {
            ImageSizing::CenterCrop
        } else {
            ImageSizing::Override {
                width: target.width,
                height: target.height,
            }
        }
    }
}

/// Everything the view decides about a load; the loader decides the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRequest {
    pub sizing: ImageSizing,
    pub corner_radius: u32,
    /// Show the loader's error image when the load fails
    pub error_fallback: bool,
}

/// External image pipeline. Fetching, decoding, caching and transitions all
/// live behind this trait.
pub trait ImageLoader {
    fn load(&mut self, slide: &Slide, request: ImageRequest);

    fn load_uri(&mut self, uri: &str, request: ImageRequest);

    fn clear(&mut self);
}
