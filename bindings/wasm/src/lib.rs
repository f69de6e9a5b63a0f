use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Options for image export, passed as a JavaScript object.
///
/// All fields are optional. When both a `preset` and explicit
/// `targetWidth`/`targetHeight` are given, the explicit dimensions win.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    pub preset: Option<String>,
    pub target_width: Option<u32>,
    pub target_height: Option<u32>,
    pub offset_x: Option<i64>,
    pub offset_y: Option<i64>,
    pub quality: Option<u8>,
}

fn string_to_preset(preset: &str) -> Result<socialcrop::SizePreset, JsValue> {
    match preset {
        "web" => Ok(socialcrop::SizePreset::Web),
        "instagram-post" => Ok(socialcrop::SizePreset::InstagramPost),
        "instagram-story" => Ok(socialcrop::SizePreset::InstagramStory),
        "youtube-thumbnail" => Ok(socialcrop::SizePreset::YoutubeThumbnail),
        "facebook-cover" => Ok(socialcrop::SizePreset::FacebookCover),
        _ => Err(make_error(
            "INVALID_OPTIONS",
            &format!("unknown preset: {preset}"),
        )),
    }
}

/// Create a JS `Error` with a `code` property.
fn make_error(code: &str, message: &str) -> JsValue {
    let err = js_sys::Error::new(message);
    let _ = js_sys::Reflect::set(&err, &"code".into(), &JsValue::from_str(code));
    JsValue::from(err)
}

/// Convert an `ExportError` into a JS `Error` with a machine-readable `code` property.
fn to_js_error(e: socialcrop::ExportError) -> JsValue {
    let (code, message) = match &e {
        socialcrop::ExportError::DecodeError(_) => ("DECODE_ERROR", e.to_string()),
        socialcrop::ExportError::EncodeError(_) => ("ENCODE_ERROR", e.to_string()),
        socialcrop::ExportError::InvalidDimension => ("INVALID_DIMENSION", e.to_string()),
        socialcrop::ExportError::CustomSizeOutOfRange { .. } => {
            ("CUSTOM_SIZE_OUT_OF_RANGE", e.to_string())
        }
        socialcrop::ExportError::InvalidQuality(_) => ("INVALID_QUALITY", e.to_string()),
    };
    make_error(code, &message)
}

fn parse_options(options: JsValue) -> Result<ExportOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(ExportOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| make_error("INVALID_OPTIONS", &format!("invalid options: {e}")))
    }
}

/// Resolve the target size from the options, if any was requested.
fn resolve_target(opts: &ExportOptions) -> Result<Option<socialcrop::TargetSize>, JsValue> {
    if let (Some(width), Some(height)) = (opts.target_width, opts.target_height) {
        return socialcrop::TargetSize::custom(width, height)
            .map(Some)
            .map_err(to_js_error);
    }
    if let Some(ref preset) = opts.preset {
        return Ok(Some(socialcrop::TargetSize::Preset(string_to_preset(
            preset,
        )?)));
    }
    Ok(None)
}

/// Apply parsed `ExportOptions` to an `ImageExporter`, returning the
/// configured exporter.
fn apply_options(
    mut exporter: socialcrop::ImageExporter,
    opts: &ExportOptions,
) -> Result<socialcrop::ImageExporter, JsValue> {
    if let Some(target) = resolve_target(opts)? {
        exporter = exporter.target(target);
    }
    exporter = exporter.offset(opts.offset_x.unwrap_or(0), opts.offset_y.unwrap_or(0));
    if let Some(quality) = opts.quality {
        exporter = exporter.quality(quality);
    }
    Ok(exporter)
}

/// Build a plain JS object from an `ExportedImage`.
fn build_export_object(image: &socialcrop::ExportedImage) -> Result<JsValue, JsValue> {
    let obj = js_sys::Object::new();
    let data = js_sys::Uint8Array::from(&image.data[..]);
    js_sys::Reflect::set(&obj, &"data".into(), &data)?;
    js_sys::Reflect::set(&obj, &"width".into(), &JsValue::from(image.width))?;
    js_sys::Reflect::set(&obj, &"height".into(), &JsValue::from(image.height))?;
    js_sys::Reflect::set(&obj, &"quality".into(), &JsValue::from(image.quality))?;
    js_sys::Reflect::set(&obj, &"sizeKb".into(), &JsValue::from(image.size_kb()))?;
    js_sys::Reflect::set(
        &obj,
        &"filename".into(),
        &JsValue::from_str(&image.filename()),
    )?;
    js_sys::Reflect::set(
        &obj,
        &"mimeType".into(),
        &JsValue::from_str(socialcrop::JPEG_MIME),
    )?;
    js_sys::Reflect::set(
        &obj,
        &"originalSize".into(),
        &JsValue::from(image.original_size as u32),
    )?;
    Ok(JsValue::from(obj))
}

/// Export an image with the given options.
///
/// @param input - Raw image bytes (JPEG or PNG)
/// @param options - Optional object with fields: preset, targetWidth,
///   targetHeight, offsetX, offsetY, quality
#[wasm_bindgen]
pub fn export(input: Vec<u8>, options: JsValue) -> Result<JsValue, JsValue> {
    let opts = parse_options(options)?;

    let exporter = socialcrop::ImageExporter::new(input).map_err(to_js_error)?;
    let exporter = apply_options(exporter, &opts)?;

    let result = exporter.export().map_err(to_js_error)?;

    build_export_object(&result)
}

/// Render the scaled source with the crop frame outlined, for preview.
///
/// The returned image has the scaled dimensions, not the target ones, so
/// the UI can show where the crop window sits within the source.
///
/// @param input - Raw image bytes (JPEG or PNG)
/// @param options - Optional object with fields: preset, targetWidth,
///   targetHeight, offsetX, offsetY, quality
#[wasm_bindgen(js_name = "previewFrame")]
pub fn preview_frame(input: Vec<u8>, options: JsValue) -> Result<JsValue, JsValue> {
    let opts = parse_options(options)?;

    let exporter = socialcrop::ImageExporter::new(input).map_err(to_js_error)?;
    let exporter = apply_options(exporter, &opts)?;

    let preview = exporter.preview_with_frame().map_err(to_js_error)?;

    let obj = js_sys::Object::new();
    let data = js_sys::Uint8Array::from(&preview.data[..]);
    js_sys::Reflect::set(&obj, &"data".into(), &data)?;
    js_sys::Reflect::set(&obj, &"width".into(), &JsValue::from(preview.width))?;
    js_sys::Reflect::set(&obj, &"height".into(), &JsValue::from(preview.height))?;
    Ok(JsValue::from(obj))
}

/// Compute slider bounds and the clamped offset for a source size, without
/// shipping any pixel data across the boundary.
///
/// @param width - Source image width in pixels
/// @param height - Source image height in pixels
/// @param options - Optional object with fields: preset, targetWidth,
///   targetHeight, offsetX, offsetY
#[wasm_bindgen(js_name = "cropGeometry")]
pub fn crop_geometry(width: u32, height: u32, options: JsValue) -> Result<JsValue, JsValue> {
    let opts = parse_options(options)?;
    let target = resolve_target(&opts)?.unwrap_or_default();

    let geo = socialcrop::crop_geometry(
        socialcrop::Dimensions::new(width, height),
        target,
        opts.offset_x.unwrap_or(0),
        opts.offset_y.unwrap_or(0),
    )
    .map_err(to_js_error)?;

    let obj = js_sys::Object::new();
    js_sys::Reflect::set(
        &obj,
        &"scaledWidth".into(),
        &JsValue::from(geo.scaled.width),
    )?;
    js_sys::Reflect::set(
        &obj,
        &"scaledHeight".into(),
        &JsValue::from(geo.scaled.height),
    )?;
    js_sys::Reflect::set(
        &obj,
        &"maxOffsetX".into(),
        &JsValue::from(geo.bounds.max_x),
    )?;
    js_sys::Reflect::set(
        &obj,
        &"maxOffsetY".into(),
        &JsValue::from(geo.bounds.max_y),
    )?;
    js_sys::Reflect::set(&obj, &"offsetX".into(), &JsValue::from(geo.offset.x))?;
    js_sys::Reflect::set(&obj, &"offsetY".into(), &JsValue::from(geo.offset.y))?;
    Ok(JsValue::from(obj))
}
