use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageEncoder, ImageFormat, ImageReader, RgbImage, RgbaImage};

use crate::error::ExportError;
use crate::geometry::{self, CropRect, Dimensions};
use crate::{CropGeometry, ExportedImage};

/// Decode input bytes into a `DynamicImage`.
pub(crate) fn decode_image(input: &[u8]) -> Result<DynamicImage, ExportError> {
    image::load_from_memory(input).map_err(|e| ExportError::DecodeError(e.to_string()))
}

/// Detect the input image format from the raw bytes.
pub(crate) fn detect_format(input: &[u8]) -> Result<ImageFormat, ExportError> {
    image::guess_format(input).map_err(|e| ExportError::DecodeError(e.to_string()))
}

/// Read the input's pixel dimensions without decoding the full image.
pub(crate) fn probe_dimensions(input: &[u8]) -> Result<Dimensions, ExportError> {
    let reader = ImageReader::new(Cursor::new(input))
        .with_guessed_format()
        .map_err(|e| ExportError::DecodeError(e.to_string()))?;
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| ExportError::DecodeError(e.to_string()))?;
    Ok(Dimensions::new(width, height))
}

/// Compute the full crop geometry for one export.
pub(crate) fn compute_geometry(
    original: Dimensions,
    target: Dimensions,
    requested: (i64, i64),
) -> Result<CropGeometry, ExportError> {
    let scaled = geometry::scaled_size(original, target)?;
    let bounds = geometry::offset_bounds(scaled, target);
    let offset = geometry::clamp_offset(requested.0, requested.1, bounds);
    let rect = geometry::crop_rect(offset, target);
    Ok(CropGeometry {
        scaled,
        bounds,
        offset,
        rect,
    })
}

/// Resize the image exactly to its cover-fit scaled size.
pub(crate) fn scale_to_cover(image: &DynamicImage, scaled: Dimensions) -> DynamicImage {
    image.resize_exact(scaled.width, scaled.height, FilterType::Lanczos3)
}

/// Cut the crop rectangle out of the scaled image.
pub(crate) fn crop_to_rect(image: &DynamicImage, rect: CropRect) -> DynamicImage {
    image.crop_imm(rect.left, rect.top, rect.width(), rect.height())
}

/// Flatten the alpha channel by compositing onto a white background.
/// JPEG has no alpha, so transparency must be resolved before encoding.
pub(crate) fn flatten_alpha(image: &DynamicImage) -> RgbImage {
    let rgba: RgbaImage = image.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());
    let mut rgb = RgbImage::new(width, height);

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as f32 / 255.0;
        let inv_alpha = 1.0 - alpha;
        let out_r = (r as f32 * alpha + 255.0 * inv_alpha).round() as u8;
        let out_g = (g as f32 * alpha + 255.0 * inv_alpha).round() as u8;
        let out_b = (b as f32 * alpha + 255.0 * inv_alpha).round() as u8;
        rgb.put_pixel(x, y, image::Rgb([out_r, out_g, out_b]));
    }

    rgb
}

/// JPEG-encode an RGB image at the given quality (10–100).
pub(crate) fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ExportError::EncodeError(e.to_string()))?;
    Ok(buffer)
}

/// Full export pipeline: decode → scale → crop → flatten → encode.
pub(crate) fn export_pipeline(
    input: &[u8],
    target: Dimensions,
    requested_offset: (i64, i64),
    quality: u8,
) -> Result<ExportedImage, ExportError> {
    let decoded = decode_image(input)?;
    let original = Dimensions::new(decoded.width(), decoded.height());

    let geo = compute_geometry(original, target, requested_offset)?;
    let scaled = scale_to_cover(&decoded, geo.scaled);
    let cropped = crop_to_rect(&scaled, geo.rect);
    let rgb = flatten_alpha(&cropped);
    let data = encode_jpeg(&rgb, quality)?;

    Ok(ExportedImage {
        data,
        width: rgb.width(),
        height: rgb.height(),
        quality,
        original_size: input.len(),
    })
}
