//! Export every preset size for one input image.
//!
//! Usage:
//!   cargo run --example export_presets -- path/to/photo.jpg [output_dir]
//!
//! Writes one JPEG per preset plus a framed preview of the Web target.

use socialcrop::{ImageExporter, SizePreset};
use std::path::Path;

fn main() {
    let mut args = std::env::args().skip(1);
    let input_path = args
        .next()
        .expect("usage: export_presets <image> [output_dir]");
    let output_dir = args.next().unwrap_or_else(|| "exported".to_string());

    let input = std::fs::read(&input_path)
        .unwrap_or_else(|e| panic!("failed to read {input_path}: {e}"));
    std::fs::create_dir_all(&output_dir).expect("failed to create output directory");

    println!("=== {input_path} ===");
    for preset in SizePreset::ALL {
        let result = ImageExporter::new(input.clone())
            .unwrap()
            .preset(preset)
            .export()
            .unwrap();

        let filename = result.filename();
        let output_path = Path::new(&output_dir).join(&filename);
        std::fs::write(&output_path, &result.data).unwrap();

        println!(
            "  {preset:?}: {filename} ({width}x{height}, {size:.1} KB)",
            width = result.width,
            height = result.height,
            size = result.size_kb(),
        );
    }

    // Framed preview of the default Web target, offset at the center
    let exporter = ImageExporter::new(input).unwrap().preset(SizePreset::Web);
    let geo = exporter.geometry().unwrap();
    let exporter = exporter.offset(
        i64::from(geo.bounds.max_x / 2),
        i64::from(geo.bounds.max_y / 2),
    );
    let preview = exporter.preview_with_frame().unwrap();

    let preview_path = Path::new(&output_dir).join("preview_frame.jpg");
    std::fs::write(&preview_path, &preview.data).unwrap();
    println!(
        "  preview: preview_frame.jpg ({}x{})",
        preview.width, preview.height
    );

    println!("Output written to {output_dir}");
}
