//! Overlay rendering: flagged crack pixels painted over a dimmed source.
//!
//! The source image is blended toward white at 30 % opacity so the alert
//! marks stand out, then each flagged pixel is drawn as a filled square whose
//! side grows with the edge strength (1–4 px).

use crate::image::{ImageRgba8, RgbaBuffer};
use crate::types::CrackPoint;

/// Alert colour for crack marks (#EF476F).
const MARK_RGBA: [u8; 4] = [0xEF, 0x47, 0x6F, 0xFF];
/// Opacity of the dimmed source image under the marks.
const BACKGROUND_ALPHA: f32 = 0.3;
/// Edge strength per pixel of mark side length.
const STRENGTH_PER_PX: f32 = 25.0;

/// Render flagged points onto a dimmed copy of the source image.
pub fn render_overlay(img: ImageRgba8<'_>, points: &[CrackPoint]) -> RgbaBuffer {
    let mut data = vec![255u8; img.w * img.h * 4];

    // Dim the source toward white.
    for y in 0..img.h {
        let src_row = img.row(y);
        let dst_row = &mut data[y * img.w * 4..(y + 1) * img.w * 4];
        for (dst, src) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(4)) {
            for c in 0..3 {
                dst[c] = (src[c] as f32 * BACKGROUND_ALPHA + 255.0 * (1.0 - BACKGROUND_ALPHA))
                    as u8;
            }
            dst[3] = 255;
        }
    }

    // Paint the marks, clipped to the buffer.
    for point in points {
        let side = (point.strength / STRENGTH_PER_PX).clamp(1.0, 4.0) as usize;
        let x0 = point.x as usize;
        let y0 = point.y as usize;
        for y in y0..(y0 + side).min(img.h) {
            for x in x0..(x0 + side).min(img.w) {
                let i = (y * img.w + x) * 4;
                data[i..i + 4].copy_from_slice(&MARK_RGBA);
            }
        }
    }

    RgbaBuffer::new(img.w, img.h, data)
}
