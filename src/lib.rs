#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod image;
pub mod types;

// Lower-level building blocks – public, but considered unstable internals.
pub mod edges;
pub mod quality;
pub mod render;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{AnalysisReport, CrackDetector, CrackParams};
pub use crate::types::{CrackPoint, CrackResult, CrackScan, Severity};

// Capture-quality assessment returned alongside the crack analysis.
pub use crate::quality::{assess_capture, CaptureRisk, QualityReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use crack_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (500usize, 375usize);
/// let rgba = vec![255u8; w * h * 4];
/// let img = ImageRgba8 { w, h, stride: w, data: &rgba };
///
/// let detector = CrackDetector::new(CrackParams::default());
/// let result = detector.process(img);
/// println!("cracks={} severity={:?}", result.crack_count, result.severity);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageRgba8;
    pub use crate::{CrackDetector, CrackParams, CrackResult, Severity};
}
