//! Detector pipeline driving the crack analysis end-to-end.
//!
//! The [`CrackDetector`] exposes a simple API: feed an RGBA buffer and get an
//! aggregate result, or a full report with the flagged points and stage
//! timings.
//!
//! Typical usage:
//! ```no_run
//! use crack_detector::image::ImageRgba8;
//! use crack_detector::{CrackDetector, CrackParams};
//!
//! # fn example(img: ImageRgba8<'_>) {
//! let detector = CrackDetector::new(CrackParams::default());
//! let report = detector.process_with_report(img);
//! println!(
//!     "cracks={} severity={:?}",
//!     report.result.crack_count, report.result.severity
//! );
//! # }
//! ```
use super::params::CrackParams;
use crate::edges::scan_cracks;
use crate::image::ImageRgba8;
use crate::types::{CrackPoint, CrackResult, Severity};
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Confidence contributed by each bucketed crack, saturating at 1.
const CONFIDENCE_PER_BUCKET: f32 = 0.12;

/// Dimensions of the buffer the detector actually scanned.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Wall-clock timings of the pipeline stages, in milliseconds.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub scan_ms: f64,
    pub total_ms: f64,
}

/// Full analysis output: aggregate result plus per-pixel detail.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub input: InputDescriptor,
    pub result: CrackResult,
    /// Every flagged pixel, for overlay rendering.
    pub points: Vec<CrackPoint>,
    pub timing: StageTiming,
}

/// Crack detector: pure scan plus aggregation under fixed parameters.
pub struct CrackDetector {
    params: CrackParams,
}

impl CrackDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: CrackParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CrackParams {
        &self.params
    }

    /// Run the detector on an RGBA buffer, returning a compact result.
    pub fn process(&self, img: ImageRgba8<'_>) -> CrackResult {
        self.process_with_report(img).result
    }

    /// Run the detector and return both the result and the flagged points.
    pub fn process_with_report(&self, img: ImageRgba8<'_>) -> AnalysisReport {
        let (width, height) = (img.w, img.h);
        debug!(
            "CrackDetector::process start w={} h={} edge_thresh={} darkness_thresh={}",
            width, height, self.params.edge_threshold, self.params.darkness_threshold
        );
        let total_start = Instant::now();

        let scan_start = Instant::now();
        let scan = scan_cracks(img, self.params.edge_threshold, self.params.darkness_threshold);
        let scan_ms = scan_start.elapsed().as_secs_f64() * 1000.0;

        let bucket_count = scan.bucket_count(self.params.grouping_factor);
        let severity = Severity::from_bucket_count(bucket_count);
        let estimated_length_cm = scan.total_magnitude / self.params.px_per_cm;
        let confidence = (bucket_count as f32 * CONFIDENCE_PER_BUCKET).min(1.0);

        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "CrackDetector::process done flagged={} buckets={} severity={:?} scan_ms={:.3}",
            scan.points.len(),
            bucket_count,
            severity,
            scan_ms
        );

        let result = CrackResult {
            crack_count: bucket_count,
            flagged_pixels: scan.points.len(),
            total_magnitude: scan.total_magnitude,
            estimated_length_cm,
            severity,
            confidence,
            latency_ms: total_ms,
        };

        AnalysisReport {
            input: InputDescriptor { width, height },
            result,
            points: scan.points,
            timing: StageTiming { scan_ms, total_ms },
        }
    }
}
