//! Borrowed RGBA pixel view used by the scan core.
//!
//! Grayscale intensity of a pixel is the arithmetic mean of its red, green
//! and blue channels; alpha is ignored throughout.

/// Read-only view over an interleaved RGBA buffer, 4 bytes per pixel.
#[derive(Clone, Copy, Debug)]
pub struct ImageRgba8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [u8],
}

impl ImageRgba8<'_> {
    /// Borrow row `y` as raw RGBA bytes (`4 * w` bytes).
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride * 4;
        &self.data[start..start + self.w * 4]
    }

    /// Grayscale intensity at (x, y) in 0–255.
    #[inline]
    pub fn gray(&self, x: usize, y: usize) -> f32 {
        gray_at(self.row(y), x)
    }
}

/// Grayscale intensity of pixel `x` within an RGBA row slice.
#[inline]
pub fn gray_at(row: &[u8], x: usize) -> f32 {
    let i = x * 4;
    (row[i] as f32 + row[i + 1] as f32 + row[i + 2] as f32) / 3.0
}
