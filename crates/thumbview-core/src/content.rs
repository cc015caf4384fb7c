// crates/thumbview-core/src/content.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferState {
    Done,
    Started,
    Pending,
    Failed,
}

/// Descriptor for the content shown in a thumbnail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub data_uri: Option<String>,
    pub thumbnail_uri: Option<String>,
    pub transfer_state: TransferState,
    pub has_play_overlay: bool,
    pub fast_preflight_id: Option<String>,
}

impl Slide {
    pub fn new(data_uri: impl Into<String>) -> Self {
        Self {
            data_uri: Some(data_uri.into()),
            ..Default::default()
        }
    }

    pub fn with_thumbnail(mut self, uri: impl Into<String>) -> Self {
        self.thumbnail_uri = Some(uri.into());
        self
    }

    pub fn with_transfer_state(mut self, state: TransferState) -> Self {
        self.transfer_state = state;
        self
    }

    pub fn with_play_overlay(mut self, has_play_overlay: bool) -> Self {
        self.has_play_overlay = has_play_overlay;
        self
    }

    pub fn with_fast_preflight_id(mut self, id: impl Into<String>) -> Self {
        self.fast_preflight_id = Some(id.into());
        self
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self.transfer_state, TransferState::Started | TransferState::Pending)
    }

    pub fn is_transfer_done(&self) -> bool {
        self.transfer_state == TransferState::Done
    }
}

impl Default for Slide {
    fn default() -> Self {
        Self {
            data_uri: None,
            thumbnail_uri: None,
            transfer_state: TransferState::Done,
            has_play_overlay: false,
            fast_preflight_id: None,
        }
    }
}
