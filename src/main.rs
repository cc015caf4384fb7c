use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use thumbview_core::{Bounds, Dimension, NaturalSize, Padding, Slide, ThumbnailAttributes};
use thumbview_layout::{MeasureMode, MeasureSpec, Measurement};
use thumbview_runtime::{ImageLoader, ImageRequest, ImageSizing, ThumbnailView};

#[derive(Parser)]
#[command(name = "thumbview")]
#[command(about = "Resolve and measure a thumbnail against min/max layout bounds")]
struct Args {
    /// Natural size of the content, e.g. 1000x500 (0x0 if unknown)
    #[arg(long)]
    natural: NaturalSize,

    /// Bounds in pixels: MIN_W,MAX_W,MIN_H,MAX_H
    #[arg(long, conflicts_with = "attributes")]
    bounds: Option<Bounds>,

    /// TOML file with thumbnail attributes
    #[arg(long)]
    attributes: Option<PathBuf>,

    /// Display density used to convert dp values
    #[arg(long, default_value_t = 1.0)]
    density: f32,

    /// Padding: one value or LEFT,TOP,RIGHT,BOTTOM
    #[arg(long, default_value = "0")]
    padding: Padding,

    /// Width measure mode offered by the parent
    #[arg(long, default_value = "unspecified")]
    width_mode: MeasureMode,

    /// Width offered by the parent
    #[arg(long, default_value_t = 0)]
    width: u32,

    /// Height measure mode offered by the parent
    #[arg(long, default_value = "unspecified")]
    height_mode: MeasureMode,

    /// Height offered by the parent
    #[arg(long, default_value_t = 0)]
    height: u32,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// Remembers the last request instead of fetching anything.
#[derive(Debug, Default)]
struct DryRunLoader {
    last: Option<ImageRequest>,
}

impl ImageLoader for DryRunLoader {
    fn load(&mut self, slide: &Slide, request: ImageRequest) {
        info!("Would load {:?} with {:?}", slide.data_uri, request);
        self.last = Some(request);
    }

    fn load_uri(&mut self, uri: &str, request: ImageRequest) {
        info!("Would load {} with {:?}", uri, request);
        self.last = Some(request);
    }

    fn clear(&mut self) {
        self.last = None;
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(level.into())
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let attributes = match (&args.attributes, args.bounds) {
        (Some(path), _) => ThumbnailAttributes::load(path)
            .with_context(|| format!("Failed to load attributes from {}", path.display()))?,
        (None, Some(bounds)) => ThumbnailAttributes {
            min_width: Dimension::Pixels(bounds.min_width as f32),
            max_width: Dimension::Pixels(bounds.max_width as f32),
            min_height: Dimension::Pixels(bounds.min_height as f32),
            max_height: Dimension::Pixels(bounds.max_height as f32),
            ..Default::default()
        },
        (None, None) => ThumbnailAttributes::default(),
    };

    let mut view = ThumbnailView::new(&attributes, args.density, DryRunLoader::default())
        .context("Invalid thumbnail bounds")?;
    view.set_padding(args.padding);

    view.set_content(Slide::new("thumbview://cli"), false, false, args.natural)
        .context("Invalid natural size")?;

    let target = view.target_size()?;
    println!("target: {}", target);

    let measurement = view.measure(
        MeasureSpec::new(args.width_mode, args.width),
        MeasureSpec::new(args.height_mode, args.height),
    )?;
    match measurement {
        Measurement::Default { .. } => println!("measure: default"),
        Measurement::Requested { width, height } => println!(
            "measure: {}x{} ({}, {})",
            width.size, height.size, width.mode, height.mode
        ),
    }

    match view.loader().last.map(|request| request.sizing) {
        Some(ImageSizing::Override { width, height }) => println!("load: override {}x{}", width, height),
        Some(ImageSizing::CenterCrop) => println!("load: center-crop"),
        None => println!("load: none"),
    }

    Ok(())
}
