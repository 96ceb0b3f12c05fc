//! I/O helpers for RGBA images and JSON reports.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned RGBA buffer.
//! - `downscale_to_max_width`: apply the fixed max-width downscale rule.
//! - `save_rgba_png`: write an owned RGBA buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageRgba8;
use image::{imageops, DynamicImage, ImageBuffer, Rgba, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned RGBA buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbaBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaBuffer {
    /// Construct an owned RGBA buffer given raw interleaved bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageRgba8` view
    pub fn as_view(&self) -> ImageRgba8<'_> {
        ImageRgba8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to interleaved 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<RgbaBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(RgbaBuffer::new(width, height, data))
}

/// Downscale so the width does not exceed `max_width`, preserving aspect
/// ratio. Images at or below the cap are returned unchanged; upscaling never
/// happens.
pub fn downscale_to_max_width(buf: &RgbaBuffer, max_width: usize) -> RgbaBuffer {
    if max_width == 0 || buf.width <= max_width {
        return buf.clone();
    }
    let ratio = max_width as f32 / buf.width as f32;
    let new_w = max_width;
    let new_h = ((buf.height as f32 * ratio).round() as usize).max(1);
    let src: RgbaImage =
        ImageBuffer::from_raw(buf.width as u32, buf.height as u32, buf.data.clone())
            .expect("RgbaBuffer dimensions match its backing storage");
    let resized = imageops::resize(
        &src,
        new_w as u32,
        new_h as u32,
        imageops::FilterType::Triangle,
    );
    RgbaBuffer::new(new_w, new_h, resized.into_raw())
}

/// Save an owned RGBA buffer to a PNG.
pub fn save_rgba_png(buffer: &RgbaBuffer, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let data = buffer.data.clone();
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.width as u32, buffer.height as u32, data)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageRgba8(img)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: usize, height: usize) -> RgbaBuffer {
        RgbaBuffer::new(width, height, vec![128u8; width * height * 4])
    }

    #[test]
    fn downscale_leaves_small_images_untouched() {
        let buf = solid(400, 300);
        let out = downscale_to_max_width(&buf, 500);
        assert_eq!((out.width(), out.height()), (400, 300));
    }

    #[test]
    fn downscale_caps_width_and_preserves_aspect() {
        let buf = solid(1000, 750);
        let out = downscale_to_max_width(&buf, 500);
        assert_eq!(out.width(), 500);
        assert_eq!(out.height(), 375);
        assert_eq!(out.as_view().data.len(), 500 * 375 * 4);
    }

    #[test]
    fn downscale_never_produces_zero_height() {
        let buf = solid(1000, 1);
        let out = downscale_to_max_width(&buf, 500);
        assert_eq!(out.height(), 1);
    }
}
