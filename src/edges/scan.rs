//! Cross-gradient crack scan.
//!
//! For every interior pixel (the 1-pixel border is excluded so neighbour
//! lookups never leave the buffer):
//!
//! - vertical gradient `v = |gray(above) − gray(below)|`
//! - horizontal gradient `h = |gray(left) − gray(right)|`
//! - edge strength `s = (v + h) / 2`
//!
//! A pixel is flagged as a crack pixel when `s` exceeds the edge threshold
//! and the pixel's own grayscale mean sits below the darkness threshold, i.e.
//! a strong boundary inside a dark region. Each flagged pixel contributes
//! `sqrt(v² + h²)` to the running total magnitude.
//!
//! Complexity: O(W·H) in a single pass; no allocations beyond the output.
use crate::image::rgba::gray_at;
use crate::image::ImageRgba8;
use crate::types::{CrackPoint, CrackScan};

/// Scan an RGBA buffer for crack pixels.
///
/// Buffers narrower or shorter than 3 pixels have no interior and yield an
/// empty scan. The function is deterministic and holds no state between
/// calls.
pub fn scan_cracks(img: ImageRgba8<'_>, edge_thresh: f32, darkness_thresh: f32) -> CrackScan {
    let w = img.w;
    let h = img.h;
    if w < 3 || h < 3 {
        return CrackScan::default();
    }

    let inner_pixels = (w - 2) * (h - 2);
    let mut points = Vec::with_capacity(inner_pixels / 8 + 1);
    let mut total_magnitude = 0.0f32;

    for y in 1..h - 1 {
        let above = img.row(y - 1);
        let row = img.row(y);
        let below = img.row(y + 1);

        for x in 1..w - 1 {
            let v = (gray_at(above, x) - gray_at(below, x)).abs();
            let hg = (gray_at(row, x - 1) - gray_at(row, x + 1)).abs();
            let strength = (v + hg) / 2.0;
            if strength <= edge_thresh {
                continue;
            }

            let intensity = gray_at(row, x);
            if intensity < darkness_thresh {
                points.push(CrackPoint {
                    x: x as u32,
                    y: y as u32,
                    strength,
                    intensity,
                });
                total_magnitude += (v * v + hg * hg).sqrt();
            }
        }
    }

    CrackScan {
        points,
        total_magnitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_rgba(w: usize, h: usize, gray: u8) -> Vec<u8> {
        let mut data = vec![gray; w * h * 4];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        data
    }

    fn view(w: usize, h: usize, data: &[u8]) -> ImageRgba8<'_> {
        ImageRgba8 {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Dark left half, light right half, boundary at `split`.
    fn split_rgba(w: usize, h: usize, split: usize, dark: u8, light: u8) -> Vec<u8> {
        let mut data = solid_rgba(w, h, light);
        for y in 0..h {
            for x in 0..split {
                let i = (y * w + x) * 4;
                data[i] = dark;
                data[i + 1] = dark;
                data[i + 2] = dark;
            }
        }
        data
    }

    #[test]
    fn uniform_buffer_yields_empty_scan() {
        let data = solid_rgba(16, 16, 90);
        let scan = scan_cracks(view(16, 16, &data), 20.0, 120.0);
        assert!(scan.points.is_empty());
        assert_eq!(scan.total_magnitude, 0.0);
    }

    #[test]
    fn buffers_without_interior_pixels_are_empty() {
        for (w, h) in [(1, 1), (2, 2), (2, 10), (10, 2)] {
            let data = split_rgba(w, h, w / 2, 10, 250);
            let scan = scan_cracks(view(w, h, &data), 20.0, 120.0);
            assert!(scan.points.is_empty(), "{w}x{h}");
            assert_eq!(scan.total_magnitude, 0.0, "{w}x{h}");
        }
    }

    #[test]
    fn dark_side_of_sharp_boundary_is_flagged() {
        let (w, h, split) = (20, 12, 10);
        let data = split_rgba(w, h, split, 40, 220);
        let scan = scan_cracks(view(w, h, &data), 20.0, 120.0);

        // Only the dark column touching the boundary sees a gradient and
        // passes the darkness cutoff; the light column next to it does not.
        assert_eq!(scan.points.len(), h - 2);
        for p in &scan.points {
            assert_eq!(p.x as usize, split - 1);
            assert_eq!(p.strength, 90.0);
            assert_eq!(p.intensity, 40.0);
        }
        // Horizontal-only gradient, so the norm equals the raw difference.
        let expected = 180.0 * (h - 2) as f32;
        assert!((scan.total_magnitude - expected).abs() < 1e-3);
    }

    #[test]
    fn bright_edges_are_not_flagged() {
        // Contrast between two light grays: strong edge, but neither side is
        // below the darkness cutoff.
        let data = split_rgba(20, 12, 10, 140, 250);
        let scan = scan_cracks(view(20, 12, &data), 20.0, 120.0);
        assert!(scan.points.is_empty());
    }

    #[test]
    fn low_contrast_boundary_is_ignored() {
        let data = split_rgba(20, 12, 10, 80, 110);
        let scan = scan_cracks(view(20, 12, &data), 20.0, 120.0);
        assert!(scan.points.is_empty());
    }

    #[test]
    fn scan_is_idempotent() {
        let data = split_rgba(32, 24, 13, 30, 210);
        let img = view(32, 24, &data);
        let first = scan_cracks(img, 20.0, 120.0);
        let second = scan_cracks(img, 20.0, 120.0);
        assert_eq!(first.points, second.points);
        assert_eq!(first.total_magnitude, second.total_magnitude);
    }
}
