//! Parameter types configuring the detector.
//!
//! Defaults carry the fixed constants of the reference analysis: thresholds
//! on a 0–255 grayscale, a grouping factor of 50 flagged pixels per crack,
//! and an 80 px/cm length calibration at the 500-pixel working width.

/// Detector-wide parameters.
#[derive(Clone, Debug)]
pub struct CrackParams {
    /// Minimum edge strength (0–255 scale) before a pixel can be flagged.
    pub edge_threshold: f32,
    /// Maximum grayscale intensity for a flagged pixel; cracks are dark.
    pub darkness_threshold: f32,
    /// Flagged pixels per bucketed crack.
    pub grouping_factor: usize,
    /// Calibration constant converting total gradient magnitude to
    /// centimetres.
    pub px_per_cm: f32,
    /// Maximum working width; callers downscale wider inputs before the
    /// scan.
    pub max_width: usize,
}

impl Default for CrackParams {
    fn default() -> Self {
        Self {
            edge_threshold: 20.0,
            darkness_threshold: 120.0,
            grouping_factor: 50,
            px_per_cm: 80.0,
            max_width: 500,
        }
    }
}
