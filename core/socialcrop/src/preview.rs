use image::{Rgb, RgbImage};

use crate::error::ExportError;
use crate::export::{compute_geometry, decode_image, encode_jpeg, flatten_alpha, scale_to_cover};
use crate::geometry::{CropRect, Dimensions};
use crate::FramedPreview;

/// Outline color of the crop frame.
const FRAME_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Stroke width of the crop frame in pixels.
const FRAME_WIDTH: u32 = 3;

/// Render the scaled (uncropped) source with the crop rectangle outlined,
/// so the user can see which part of the image the export will keep.
pub(crate) fn render_frame(
    input: &[u8],
    target: Dimensions,
    requested_offset: (i64, i64),
    quality: u8,
) -> Result<FramedPreview, ExportError> {
    let decoded = decode_image(input)?;
    let original = Dimensions::new(decoded.width(), decoded.height());

    let geo = compute_geometry(original, target, requested_offset)?;
    let scaled = scale_to_cover(&decoded, geo.scaled);
    let mut rgb = flatten_alpha(&scaled);
    draw_frame(&mut rgb, geo.rect);
    let data = encode_jpeg(&rgb, quality)?;

    Ok(FramedPreview {
        data,
        width: rgb.width(),
        height: rgb.height(),
    })
}

/// Draw the rectangle outline. The stroke grows inward from the rect edges,
/// so it stays fully visible when the rect touches the image border.
fn draw_frame(image: &mut RgbImage, rect: CropRect) {
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        if x < rect.left || x >= rect.right || y < rect.top || y >= rect.bottom {
            continue;
        }
        let on_border = x < rect.left + FRAME_WIDTH
            || x >= rect.right.saturating_sub(FRAME_WIDTH)
            || y < rect.top + FRAME_WIDTH
            || y >= rect.bottom.saturating_sub(FRAME_WIDTH);
        if on_border {
            *pixel = FRAME_COLOR;
        }
    }
}
