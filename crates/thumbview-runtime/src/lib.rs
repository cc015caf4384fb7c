// crates/thumbview-runtime/src/lib.rs

use thumbview_core::{
    Bounds, ClickAction, ClickRegion, Color, NaturalSize, Padding, Result, Slide, TargetSize,
    ThumbnailAttributes,
};
use thumbview_layout::{measure, BoundsResolver, MeasureSpec, Measurement, SizeResolver};
use tracing::{debug, warn};

pub mod loader;
pub mod transfer_controls;

pub use loader::*;
pub use transfer_controls::*;

/// Result of assigning new content to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentUpdate {
    /// Same slide as before; nothing reloaded
    Unchanged,
    /// Same fast-preflight id; slide replaced without reloading
    PreflightMatch,
    /// A load was handed to the image loader
    Loaded,
}

/// Registered click listeners. The view only tracks which exist; the
/// caller routes the returned [`ClickAction`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ClickListeners {
    thumbnail: bool,
    download: bool,
    parent: bool,
}

/// Sizing host for a single thumbnail.
///
/// Bounds are fixed at construction. The natural size follows whatever
/// content was assigned last, and every measure pass re-resolves the target.
pub struct ThumbnailView<L: ImageLoader> {
    loader: L,
    resolver: Box<dyn SizeResolver>,

    // Configuration
    bounds: Bounds,
    corner_radius: u32,
    background_color_hint: Color,
    padding: Padding,

    // Content
    natural_size: NaturalSize,
    slide: Option<Slide>,

    // Overlays
    transfer_controls: Option<TransferControls>,
    play_overlay_visible: bool,

    // Interaction
    listeners: ClickListeners,
    focusable: bool,
    clickable: bool,
}

impl<L: ImageLoader> ThumbnailView<L> {
    pub fn new(attributes: &ThumbnailAttributes, density: f32, loader: L) -> Result<Self> {
        Self::new_with_resolver(attributes, density, loader, None)
    }

    pub fn new_with_resolver(
        attributes: &ThumbnailAttributes,
        density: f32,
        loader: L,
        resolver: Option<Box<dyn SizeResolver>>,
    ) -> Result<Self> {
        let bounds = attributes.bounds(density)?;
        let resolver = resolver.unwrap_or_else(|| Box::new(BoundsResolver::new()));

        debug!("Thumbnail view configured with bounds {}", bounds);

        Ok(Self {
            loader,
            resolver,
            bounds,
            corner_radius: attributes.corner_radius_pixels(density),
            background_color_hint: attributes.background_color_hint,
            padding: Padding::default(),
            natural_size: NaturalSize::UNKNOWN,
            slide: None,
            transfer_controls: None,
            play_overlay_visible: false,
            listeners: ClickListeners::default(),
            focusable: false,
            clickable: false,
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn natural_size(&self) -> NaturalSize {
        self.natural_size
    }

    pub fn slide(&self) -> Option<&Slide> {
        self.slide.as_ref()
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn transfer_controls(&self) -> Option<&TransferControls> {
        self.transfer_controls.as_ref()
    }

    pub fn is_play_overlay_visible(&self) -> bool {
        self.play_overlay_visible
    }

    pub fn background_color_hint(&self) -> Color {
        self.background_color_hint
    }

    pub fn set_background_color_hint(&mut self, color: Color) {
        self.background_color_hint = color;
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    /// Resolve the target size from the current natural size and bounds.
    pub fn target_size(&self) -> Result<TargetSize> {
        self.resolver.resolve(self.natural_size, self.bounds)
    }

    /// One measure pass. Falls back to the parent's specs when the resolver
    /// has no opinion.
    pub fn measure(&self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Result<Measurement> {
        let target = self.target_size()?;
        Ok(measure(target, self.bounds, self.padding, width_spec, height_spec))
    }

    fn image_request(&self, target: TargetSize, error_fallback: bool) -> ImageRequest {
        ImageRequest {
            sizing: ImageSizing::from(target),
            corner_radius: self.corner_radius,
            error_fallback,
        }
    }

    fn transfer_controls_mut(&mut self) -> &mut TransferControls {
        let (focusable, clickable) = (self.focusable, self.clickable);
        self.transfer_controls
            .get_or_insert_with(|| TransferControls::new(focusable, clickable))
    }

    /// Assign new content.
    ///
    /// The target is resolved against the new natural size before any state
    /// changes, so on error the view is left untouched.
    pub fn set_content(
        &mut self,
        slide: Slide,
        show_controls: bool,
        is_preview: bool,
        natural_size: NaturalSize,
    ) -> Result<ContentUpdate> {
        natural_size.validate()?;
        let target = self.resolver.resolve(natural_size, self.bounds)?;
        self.natural_size = natural_size;

        if show_controls {
            self.transfer_controls_mut().set_slide(slide.clone());
        } else if let Some(controls) = self.transfer_controls.as_mut() {
            controls.hide();
        }

        self.play_overlay_visible = slide.thumbnail_uri.is_some()
            && slide.has_play_overlay
            && (slide.is_transfer_done() || is_preview);

        if self.slide.as_ref() == Some(&slide) {
            warn!("Not re-loading slide {:?}", slide.data_uri);
            return Ok(ContentUpdate::Unchanged);
        }

        let preflight_match = match (&self.slide, &slide.fast_preflight_id) {
            (Some(current), Some(id)) => current.fast_preflight_id.as_ref() == Some(id),
            _ => false,
        };
        if preflight_match {
            warn!("Not re-loading slide for fast preflight: {:?}", slide.fast_preflight_id);
            self.slide = Some(slide);
            return Ok(ContentUpdate::PreflightMatch);
        }

        debug!(
            "loading part with id {:?}, progress {:?}, fast preflight id: {:?}",
            slide.data_uri, slide.transfer_state, slide.fast_preflight_id
        );

        let request = self.image_request(target, !slide.is_in_progress());
        self.loader.load(&slide, request);
        self.slide = Some(slide);

        Ok(ContentUpdate::Loaded)
    }

    /// Load a bare URI, bypassing slide bookkeeping.
    pub fn set_content_uri(&mut self, uri: &str) -> Result<()> {
        if let Some(controls) = self.transfer_controls.as_mut() {
            controls.hide();
        }

        let request = self.image_request(self.target_size()?, false);
        self.loader.load_uri(uri, request);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.loader.clear();

        if let Some(controls) = self.transfer_controls.as_mut() {
            controls.clear();
        }

        self.slide = None;
    }

    pub fn show_progress_spinner(&mut self) {
        self.transfer_controls_mut().show_progress_spinner();
    }

    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
        if let Some(controls) = self.transfer_controls.as_mut() {
            controls.focusable = focusable;
        }
    }

    pub fn set_clickable(&mut self, clickable: bool) {
        self.clickable = clickable;
        if let Some(controls) = self.transfer_controls.as_mut() {
            controls.clickable = clickable;
        }
    }

    pub fn set_thumbnail_click_listener(&mut self, registered: bool) {
        self.listeners.thumbnail = registered;
    }

    pub fn set_download_click_listener(&mut self, registered: bool) {
        self.listeners.download = registered;
    }

    pub fn set_parent_click_listener(&mut self, registered: bool) {
        self.listeners.parent = registered;
    }

    /// Decide what a click on `region` means right now.
    pub fn dispatch_click(&self, region: ClickRegion) -> Option<ClickAction> {
        match region {
            ClickRegion::Thumbnail => {
                let openable = self
                    .slide
                    .as_ref()
                    .filter(|slide| slide.data_uri.is_some() && slide.is_transfer_done());

                match openable {
                    Some(slide) if self.listeners.thumbnail => Some(ClickAction::ThumbnailTap(slide.clone())),
                    _ if self.listeners.parent => Some(ClickAction::ParentTap),
                    _ => None,
                }
            }
            ClickRegion::DownloadControl => match &self.slide {
                Some(slide) if self.listeners.download => Some(ClickAction::DownloadTap(slide.clone())),
                _ => None,
            },
        }
    }
}
