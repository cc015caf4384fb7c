// crates/thumbview-runtime/src/transfer_controls.rs
use thumbview_core::Slide;

/// Download/progress overlay shown on top of a thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferControls {
    pub slide: Option<Slide>,
    pub visible: bool,
    pub spinner_visible: bool,
    pub focusable: bool,
    pub clickable: bool,
}

impl TransferControls {
    pub fn new(focusable: bool, clickable: bool) -> Self {
        Self {
            slide: None,
            visible: false,
            spinner_visible: false,
            focusable,
            clickable,
        }
    }

    pub fn set_slide(&mut self, slide: Slide) {
        self.slide = Some(slide);
        self.visible = true;
        self.spinner_visible = false;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn show_progress_spinner(&mut self) {
        self.visible = true;
        self.spinner_visible = true;
    }

    pub fn clear(&mut self) {
        self.slide = None;
        self.visible = false;
        self.spinner_visible = false;
    }
}
