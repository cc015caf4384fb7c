// crates/thumbview-core/src/events.rs
use crate::Slide;

/// Area of the thumbnail view that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickRegion {
    Thumbnail,
    DownloadControl,
}

/// What a click resolved to, given the view's current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Open the fully transferred content
    ThumbnailTap(Slide),
    /// Start or retry the transfer
    DownloadTap(Slide),
    /// Forward to the listener registered on the enclosing view
    ParentTap,
}

impl ClickAction {
    pub fn slide(&self) -> Option<&Slide> {
        match self {
            ClickAction::ThumbnailTap(slide) | ClickAction::DownloadTap(slide) => Some(slide),
            ClickAction::ParentTap => None,
        }
    }
}
