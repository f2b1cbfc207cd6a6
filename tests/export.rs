use egui::{pos2, Color32, ColorImage, Rect};
use formation_board::export::{
    canvas_to_png, crop_to_canvas, export_file_name, flatten_onto_background,
};
use formation_board::ExportError;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[test]
fn test_canvas_encodes_as_png() {
    let image = ColorImage::new([40, 30], Color32::from_rgb(0x3b, 0x82, 0xf6));
    let bytes = canvas_to_png(&image).expect("encode");

    assert!(bytes.starts_with(&PNG_SIGNATURE));

    let decoded = image::load_from_memory(&bytes).expect("decode").to_rgb8();
    assert_eq!(decoded.dimensions(), (40, 30));
    assert_eq!(decoded.get_pixel(5, 5).0, [0x3b, 0x82, 0xf6]);
}

#[test]
fn test_transparent_pixels_become_background() {
    let image = ColorImage::new([2, 2], Color32::TRANSPARENT);
    let flat = flatten_onto_background(&image, Color32::WHITE).expect("flatten");
    for pixel in flat.pixels() {
        assert_eq!(pixel.0, [255, 255, 255]);
    }
}

#[test]
fn test_empty_capture_is_rejected() {
    let image = ColorImage::new([0, 0], Color32::WHITE);
    assert!(matches!(canvas_to_png(&image), Err(ExportError::EmptyImage)));
}

#[test]
fn test_canvas_larger_than_window_is_clamped() {
    // The window shrank to 800x600 after the canvas rect was recorded.
    let screenshot = ColorImage::new([800, 600], Color32::WHITE);
    let stale_canvas = Rect::from_min_max(pos2(0.0, 40.0), pos2(1000.0, 700.0));

    let cropped = crop_to_canvas(&screenshot, stale_canvas, 1.0).expect("crop");
    assert_eq!(cropped.size, [800, 560]);

    let bytes = canvas_to_png(&cropped).expect("encode");
    assert!(bytes.starts_with(&PNG_SIGNATURE));
}

#[test]
fn test_crop_keeps_canvas_pixels() {
    let mut screenshot = ColorImage::new([40, 30], Color32::WHITE);
    screenshot[(12, 8)] = Color32::BLACK;
    let canvas = Rect::from_min_max(pos2(5.0, 4.0), pos2(15.0, 12.0));

    let cropped = crop_to_canvas(&screenshot, canvas, 2.0).expect("crop");
    assert_eq!(cropped.size, [20, 16]);
    assert_eq!(cropped[(2, 0)], Color32::BLACK);
}

#[test]
fn test_export_file_name_shape() {
    let name = export_file_name();
    assert!(name.starts_with("formation_"));
    assert!(name.ends_with(".png"));
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_save_png_writes_into_dir() {
    let dir = std::env::temp_dir().join(format!("formation_board_test_{}", std::process::id()));
    let image = ColorImage::new([4, 4], Color32::BLACK);
    let bytes = canvas_to_png(&image).expect("encode");

    let path = formation_board::export::save_png(&bytes, &dir).expect("save");
    assert!(path.starts_with(&dir));
    assert_eq!(std::fs::read(&path).expect("read back"), bytes);

    std::fs::remove_dir_all(&dir).ok();
}
