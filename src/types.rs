//! Result types shared between the scan core and the detector pipeline.

use serde::Serialize;

/// Bucket counts above this map to [`Severity::Medium`].
pub const MEDIUM_BUCKET_THRESH: usize = 5;
/// Bucket counts above this map to [`Severity::High`].
pub const HIGH_BUCKET_THRESH: usize = 10;

/// A flagged crack pixel: a strong edge in a dark region.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrackPoint {
    /// X coordinate in pixels
    pub x: u32,
    /// Y coordinate in pixels
    pub y: u32,
    /// Edge strength at (x, y): mean of the absolute vertical and horizontal
    /// grayscale gradients
    pub strength: f32,
    /// Grayscale intensity of the pixel itself (0–255)
    pub intensity: f32,
}

/// Raw output of a single crack scan over a pixel buffer.
///
/// Deterministic function of the input buffer and the two thresholds; carries
/// no state between calls.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrackScan {
    /// All flagged pixels in row-major scan order.
    pub points: Vec<CrackPoint>,
    /// Sum of the Euclidean gradient norms over the flagged pixels, a proxy
    /// for total crack length in pixels.
    pub total_magnitude: f32,
}

impl CrackScan {
    /// Group raw flagged pixels into an approximate number of distinct
    /// cracks.
    ///
    /// Zero points always map to bucket 0. Any non-zero point count maps to a
    /// bucket of at least 1, even where plain rounding of `n / factor` would
    /// give 0.
    pub fn bucket_count(&self, grouping_factor: usize) -> usize {
        if self.points.is_empty() || grouping_factor == 0 {
            return 0;
        }
        let rounded = (self.points.len() as f32 / grouping_factor as f32).round() as usize;
        rounded.max(1)
    }
}

/// Three-level crack severity derived from the bucketed count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// No cracks flagged at all.
    None,
    Low,
    Medium,
    High,
}

impl Severity {
    /// Map a bucketed crack count onto a severity level.
    pub fn from_bucket_count(bucket_count: usize) -> Self {
        if bucket_count == 0 {
            Severity::None
        } else if bucket_count > HIGH_BUCKET_THRESH {
            Severity::High
        } else if bucket_count > MEDIUM_BUCKET_THRESH {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

/// Aggregate crack analysis for one image.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrackResult {
    /// Bucketed number of distinct cracks.
    pub crack_count: usize,
    /// Raw number of flagged pixels.
    pub flagged_pixels: usize,
    /// Sum of gradient norms over flagged pixels.
    pub total_magnitude: f32,
    /// Estimated physical crack length, `total_magnitude` divided by the
    /// pixels-per-centimetre calibration constant.
    pub estimated_length_cm: f32,
    pub severity: Severity,
    /// Display confidence in [0, 1], saturating with the crack count.
    pub confidence: f32,
    pub latency_ms: f64,
}

impl CrackResult {
    /// Deterministic canned summary substituted by callers when image
    /// decoding fails upstream. Matches the fixed values the reference
    /// front end displayed in its fallback path.
    pub fn fallback() -> Self {
        Self {
            crack_count: 8,
            flagged_pixels: 150,
            total_magnitude: 245.67,
            estimated_length_cm: 245.67 / 80.0,
            severity: Severity::from_bucket_count(8),
            confidence: 0.96,
            latency_ms: 0.0,
        }
    }
}
