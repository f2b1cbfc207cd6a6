//! One-shot raster export of the canvas.
//!
//! The app captures the window with a viewport screenshot and crops it to the
//! canvas. Everything after that lives here: composite onto an opaque
//! background, encode as PNG, then either write the file (native) or hand it
//! to the browser as a download (web).

use std::io::Cursor;

use egui::{pos2, Color32, ColorImage, Rect};
use image::{ImageFormat, Rgb, RgbImage};

use crate::error::{ExportError, ExportResult};

/// Background substituted for transparent pixels.
pub const EXPORT_BACKGROUND: Color32 = Color32::WHITE;

/// Composite `image` over an opaque `background`.
///
/// egui images hold premultiplied alpha, so each channel is
/// `src + background * (1 - alpha)`.
pub fn flatten_onto_background(image: &ColorImage, background: Color32) -> ExportResult<RgbImage> {
    let [width, height] = image.size;
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyImage);
    }

    let blend = |src: u8, bg: u8, alpha: f32| -> u8 {
        (src as f32 + bg as f32 * (1.0 - alpha)).round().clamp(0.0, 255.0) as u8
    };

    Ok(RgbImage::from_fn(width as u32, height as u32, |x, y| {
        let pixel = image.pixels[y as usize * width + x as usize];
        let alpha = pixel.a() as f32 / 255.0;
        Rgb([
            blend(pixel.r(), background.r(), alpha),
            blend(pixel.g(), background.g(), alpha),
            blend(pixel.b(), background.b(), alpha),
        ])
    }))
}

pub fn encode_png(image: &RgbImage) -> ExportResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Cut the canvas out of a full-window screenshot.
///
/// `canvas` is in points and may be stale: the window can shrink between the
/// request and the screenshot, so the region is clamped to the image first.
pub fn crop_to_canvas(
    screenshot: &ColorImage,
    canvas: Rect,
    pixels_per_point: f32,
) -> ExportResult<ColorImage> {
    let [width, height] = screenshot.size;
    let to_pixels = |points: f32, limit: usize| {
        (points * pixels_per_point).round().clamp(0.0, limit as f32)
    };

    let min_x = to_pixels(canvas.min.x, width);
    let max_x = to_pixels(canvas.max.x, width);
    let min_y = to_pixels(canvas.min.y, height);
    let max_y = to_pixels(canvas.max.y, height);

    // Also rejects NaN bounds.
    if !(max_x > min_x && max_y > min_y) {
        return Err(ExportError::EmptyImage);
    }

    let region = Rect::from_min_max(pos2(min_x, min_y), pos2(max_x, max_y));
    Ok(screenshot.region(&region, None))
}

/// Flatten and encode a captured canvas in one go.
pub fn canvas_to_png(image: &ColorImage) -> ExportResult<Vec<u8>> {
    let flat = flatten_onto_background(image, EXPORT_BACKGROUND)?;
    encode_png(&flat)
}

/// Timestamped file name for a new export.
pub fn export_file_name() -> String {
    chrono::Local::now()
        .format("formation_%Y-%m-%d_%H-%M-%S.png")
        .to_string()
}

/// Where exports go when no directory is configured.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_export_dir() -> std::path::PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| std::path::PathBuf::from("."))
}

/// Write PNG bytes into `dir`, returning the full path.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_png(bytes: &[u8], dir: &std::path::Path) -> ExportResult<std::path::PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name());
    std::fs::write(&path, bytes)?;
    log::info!("Exported board to {}", path.display());
    Ok(path)
}

/// Offer PNG bytes to the browser as a file download.
#[cfg(target_arch = "wasm32")]
pub fn download_png(bytes: &[u8], file_name: &str) -> ExportResult<()> {
    use wasm_bindgen::JsCast as _;

    let js_err = |err: wasm_bindgen::JsValue| ExportError::Browser(format!("{err:?}"));

    let window = web_sys::window().ok_or_else(|| ExportError::Browser("no window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Browser("no document".to_owned()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Browser("anchor element has the wrong type".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
    log::info!("Downloaded board as {file_name}");
    Ok(())
}
