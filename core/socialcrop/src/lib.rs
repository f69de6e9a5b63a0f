//! Image preparation for web and social media: cover-fit scaling, offset
//! cropping, and JPEG compression with size presets.
//!
//! The source image is scaled proportionally until it covers the target
//! frame, cropped at a user-chosen offset within the valid slack, and
//! JPEG-encoded at a chosen quality.
//!
//! # Example
//!
//! ```no_run
//! use socialcrop::{ImageExporter, SizePreset};
//!
//! let raw_bytes = std::fs::read("photo.jpg").unwrap();
//! let result = ImageExporter::new(raw_bytes)
//!     .unwrap()
//!     .preset(SizePreset::InstagramPost)
//!     .offset(200, 0)
//!     .quality(85)
//!     .export()
//!     .unwrap();
//! println!("{}: {:.1} KB", result.filename(), result.size_kb());
//! ```
#![warn(missing_docs)]

mod error;
mod export;
/// Crop geometry: cover-fit scaling, offset bounds, and crop rectangles.
pub mod geometry;
mod preview;

/// Error type returned by socialcrop operations.
pub use error::ExportError;
/// Geometry value types used throughout the API.
pub use geometry::{CropOffset, CropRect, Dimensions, OffsetBounds};

/// Inclusive lower bound for custom target dimensions, per axis.
pub const CUSTOM_SIZE_MIN: u32 = 100;

/// Inclusive upper bound for custom target dimensions, per axis.
pub const CUSTOM_SIZE_MAX: u32 = 5000;

/// Lowest allowed JPEG quality.
pub const QUALITY_MIN: u8 = 10;

/// Highest allowed JPEG quality.
pub const QUALITY_MAX: u8 = 100;

/// Default JPEG quality.
pub const DEFAULT_QUALITY: u8 = 85;

/// MIME type of every exported image.
pub const JPEG_MIME: &str = "image/jpeg";

/// Fixed output sizes for common web and social media placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePreset {
    /// General web use, 1200×800.
    Web,

    /// Square Instagram feed post, 1080×1080.
    InstagramPost,

    /// Full-height Instagram story, 1080×1920.
    InstagramStory,

    /// YouTube video thumbnail, 1280×720.
    YoutubeThumbnail,

    /// Facebook page cover, 1200×630.
    FacebookCover,
}

impl SizePreset {
    /// All presets, in display order.
    pub const ALL: [SizePreset; 5] = [
        SizePreset::Web,
        SizePreset::InstagramPost,
        SizePreset::InstagramStory,
        SizePreset::YoutubeThumbnail,
        SizePreset::FacebookCover,
    ];

    /// Output dimensions of this preset.
    pub const fn dimensions(self) -> Dimensions {
        match self {
            SizePreset::Web => Dimensions::new(1200, 800),
            SizePreset::InstagramPost => Dimensions::new(1080, 1080),
            SizePreset::InstagramStory => Dimensions::new(1080, 1920),
            SizePreset::YoutubeThumbnail => Dimensions::new(1280, 720),
            SizePreset::FacebookCover => Dimensions::new(1200, 630),
        }
    }
}

/// Target output size: a named preset or a user-supplied custom size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSize {
    /// One of the fixed preset sizes.
    Preset(SizePreset),

    /// Custom dimensions; each axis must be within
    /// [`CUSTOM_SIZE_MIN`]`..=`[`CUSTOM_SIZE_MAX`].
    Custom(Dimensions),
}

impl TargetSize {
    /// Build a validated custom target size.
    pub fn custom(width: u32, height: u32) -> Result<Self, ExportError> {
        let size = TargetSize::Custom(Dimensions::new(width, height));
        size.validated_dimensions()?;
        Ok(size)
    }

    /// Pixel dimensions of this target.
    pub const fn dimensions(self) -> Dimensions {
        match self {
            TargetSize::Preset(preset) => preset.dimensions(),
            TargetSize::Custom(dimensions) => dimensions,
        }
    }

    /// Dimensions after range validation. Custom sizes outside the allowed
    /// per-axis range are rejected rather than clamped.
    pub(crate) fn validated_dimensions(self) -> Result<Dimensions, ExportError> {
        if let TargetSize::Custom(d) = self {
            let in_range =
                |v: u32| -> bool { (CUSTOM_SIZE_MIN..=CUSTOM_SIZE_MAX).contains(&v) };
            if !in_range(d.width) || !in_range(d.height) {
                return Err(ExportError::CustomSizeOutOfRange {
                    width: d.width,
                    height: d.height,
                });
            }
        }
        Ok(self.dimensions())
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        TargetSize::Preset(SizePreset::Web)
    }
}

/// Geometry computed for one export: everything a UI needs to size its
/// offset sliders and draw the crop frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropGeometry {
    /// Cover-fit scaled dimensions of the source.
    pub scaled: Dimensions,

    /// Largest valid offset on each axis; zero means the axis is fixed.
    pub bounds: OffsetBounds,

    /// The requested offset after clamping into the valid range.
    pub offset: CropOffset,

    /// Final crop rectangle in scaled-image coordinates.
    pub rect: CropRect,
}

/// Result of a single export operation.
#[derive(Debug, Clone)]
pub struct ExportedImage {
    /// The JPEG-encoded output bytes.
    pub data: Vec<u8>,

    /// Width of the output image in pixels.
    pub width: u32,

    /// Height of the output image in pixels.
    pub height: u32,

    /// JPEG quality the output was encoded at.
    pub quality: u8,

    /// Size of the original input in bytes.
    pub original_size: usize,
}

impl ExportedImage {
    /// Estimated download size in kilobytes.
    pub fn size_kb(&self) -> f64 {
        self.data.len() as f64 / 1024.0
    }

    /// Download filename: `bild_{width}x{height}_q{quality}.jpg`.
    pub fn filename(&self) -> String {
        format!("bild_{}x{}_q{}.jpg", self.width, self.height, self.quality)
    }
}

/// Scaled source image with the crop frame drawn on top, for previews.
#[derive(Debug, Clone)]
pub struct FramedPreview {
    /// The JPEG-encoded preview bytes.
    pub data: Vec<u8>,

    /// Width of the preview: the scaled width, not the target width.
    pub width: u32,

    /// Height of the preview: the scaled height, not the target height.
    pub height: u32,
}

/// Compute the full crop geometry for a source of known dimensions.
///
/// This is the pure core of the crate: no pixel data is involved, so a UI
/// can size its sliders from dimensions alone before any image work runs.
pub fn crop_geometry(
    original: Dimensions,
    target: TargetSize,
    offset_x: i64,
    offset_y: i64,
) -> Result<CropGeometry, ExportError> {
    let target = target.validated_dimensions()?;
    export::compute_geometry(original, target, (offset_x, offset_y))
}

/// Builder for exporting web-ready images.
///
/// Validates the input on construction, then applies cover-fit scaling,
/// offset cropping, and JPEG compression with configurable parameters.
pub struct ImageExporter {
    input: Vec<u8>,
    target: TargetSize,
    offset_x: i64,
    offset_y: i64,
    quality: u8,
}

impl ImageExporter {
    /// Create a new exporter from raw image bytes (JPEG or PNG).
    pub fn new(input: Vec<u8>) -> Result<Self, ExportError> {
        // Validate that the input can be decoded
        export::detect_format(&input)?;

        Ok(Self {
            input,
            target: TargetSize::default(),
            offset_x: 0,
            offset_y: 0,
            quality: DEFAULT_QUALITY,
        })
    }

    /// Set the target output size (default: the Web preset).
    pub fn target(mut self, target: TargetSize) -> Self {
        self.target = target;
        self
    }

    /// Shorthand for targeting a preset size.
    pub fn preset(mut self, preset: SizePreset) -> Self {
        self.target = TargetSize::Preset(preset);
        self
    }

    /// Set the requested crop offset, in scaled-image pixels.
    ///
    /// The offset is clamped to the valid range at export time; requests
    /// outside it snap to the nearest bound.
    pub fn offset(mut self, x: i64, y: i64) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Set the JPEG quality from 10 (smallest) to 100 (best).
    /// Default: 85.
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Compute the crop geometry for the current configuration without
    /// decoding pixel data.
    pub fn geometry(&self) -> Result<CropGeometry, ExportError> {
        let target = self.target.validated_dimensions()?;
        let original = export::probe_dimensions(&self.input)?;
        export::compute_geometry(original, target, (self.offset_x, self.offset_y))
    }

    /// Render the scaled source with the crop frame outlined, for preview.
    pub fn preview_with_frame(&self) -> Result<FramedPreview, ExportError> {
        let target = self.target.validated_dimensions()?;
        let quality = self.validated_quality()?;
        preview::render_frame(&self.input, target, (self.offset_x, self.offset_y), quality)
    }

    /// Export the image with the configured settings.
    pub fn export(self) -> Result<ExportedImage, ExportError> {
        let target = self.target.validated_dimensions()?;
        let quality = self.validated_quality()?;
        export::export_pipeline(&self.input, target, (self.offset_x, self.offset_y), quality)
    }

    fn validated_quality(&self) -> Result<u8, ExportError> {
        if !(QUALITY_MIN..=QUALITY_MAX).contains(&self.quality) {
            return Err(ExportError::InvalidQuality(self.quality));
        }
        Ok(self.quality)
    }
}
