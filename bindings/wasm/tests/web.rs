use js_sys::Reflect;
use socialcrop_wasm::{crop_geometry, export, preview_frame};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};

fn make_test_png(width: u32, height: u32) -> Vec<u8> {
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
        ]);
    }

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
    buffer
}

fn get_f64(obj: &JsValue, key: &str) -> f64 {
    Reflect::get(obj, &key.into()).unwrap().as_f64().unwrap()
}

fn get_string(obj: &JsValue, key: &str) -> String {
    Reflect::get(obj, &key.into()).unwrap().as_string().unwrap()
}

fn options(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap()
}

#[wasm_bindgen_test]
fn export_defaults_to_web_preset() {
    let png = make_test_png(200, 300);
    let result = export(png.clone(), JsValue::UNDEFINED).unwrap();

    assert_eq!(get_f64(&result, "width") as u32, 1200);
    assert_eq!(get_f64(&result, "height") as u32, 800);
    assert_eq!(get_f64(&result, "quality") as u8, 85);
    assert_eq!(get_f64(&result, "originalSize") as usize, png.len());
    assert_eq!(get_string(&result, "filename"), "bild_1200x800_q85.jpg");
    assert_eq!(get_string(&result, "mimeType"), "image/jpeg");
}

#[wasm_bindgen_test]
fn export_with_preset_option() {
    let png = make_test_png(200, 300);
    let result = export(png, options(r#"{"preset": "instagram-post"}"#)).unwrap();

    assert_eq!(get_f64(&result, "width") as u32, 1080);
    assert_eq!(get_f64(&result, "height") as u32, 1080);
}

#[wasm_bindgen_test]
fn export_with_custom_size_and_quality() {
    let png = make_test_png(400, 400);
    let result = export(
        png,
        options(r#"{"targetWidth": 300, "targetHeight": 200, "quality": 60}"#),
    )
    .unwrap();

    assert_eq!(get_f64(&result, "width") as u32, 300);
    assert_eq!(get_f64(&result, "height") as u32, 200);
    assert_eq!(get_string(&result, "filename"), "bild_300x200_q60.jpg");
}

#[wasm_bindgen_test]
fn crop_geometry_reports_slider_bounds() {
    let result = crop_geometry(
        2000,
        1000,
        options(r#"{"preset": "instagram-post", "offsetX": 5000, "offsetY": 50}"#),
    )
    .unwrap();

    assert_eq!(get_f64(&result, "scaledWidth") as u32, 2160);
    assert_eq!(get_f64(&result, "scaledHeight") as u32, 1080);
    assert_eq!(get_f64(&result, "maxOffsetX") as u32, 1080);
    assert_eq!(get_f64(&result, "maxOffsetY") as u32, 0);
    assert_eq!(get_f64(&result, "offsetX") as u32, 1080);
    assert_eq!(get_f64(&result, "offsetY") as u32, 0);
}

#[wasm_bindgen_test]
fn preview_returns_scaled_dimensions() {
    let png = make_test_png(1000, 400);
    let result = preview_frame(
        png,
        options(r#"{"targetWidth": 400, "targetHeight": 400}"#),
    )
    .unwrap();

    assert_eq!(get_f64(&result, "width") as u32, 1000);
    assert_eq!(get_f64(&result, "height") as u32, 400);
}

#[wasm_bindgen_test]
fn invalid_input_returns_decode_error() {
    let result = export(b"not an image".to_vec(), JsValue::UNDEFINED);
    let err = result.unwrap_err();
    assert_eq!(get_string(&err, "code"), "DECODE_ERROR");
}

#[wasm_bindgen_test]
fn unknown_preset_returns_invalid_options() {
    let png = make_test_png(100, 100);
    let err = export(png, options(r#"{"preset": "tiktok"}"#)).unwrap_err();
    assert_eq!(get_string(&err, "code"), "INVALID_OPTIONS");
}

#[wasm_bindgen_test]
fn zero_dimension_geometry_is_blocked() {
    let err = crop_geometry(0, 600, JsValue::UNDEFINED).unwrap_err();
    assert_eq!(get_string(&err, "code"), "INVALID_DIMENSION");
}

#[wasm_bindgen_test]
fn custom_size_out_of_range_is_reported() {
    let png = make_test_png(100, 100);
    let err = export(
        png,
        options(r#"{"targetWidth": 50, "targetHeight": 800}"#),
    )
    .unwrap_err();
    assert_eq!(get_string(&err, "code"), "CUSTOM_SIZE_OUT_OF_RANGE");
}
