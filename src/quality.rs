//! Photo capture-quality assessment.
//!
//! Independent of the crack scan, this judges whether the photograph itself
//! is usable: resolution (by encoded file size), brightness, and framing
//! (aspect ratio). Each failed check produces a finding pairing the issue
//! with a concrete recommendation, and the number of findings maps onto a
//! coarse capture-risk level.

use crate::image::rgba::gray_at;
use crate::image::ImageRgba8;
use serde::Serialize;

/// Encoded files below this size are treated as low resolution.
const LOW_RES_BYTES: u64 = 100_000;
/// Mean brightness (0–100) below this is treated as too dark.
const DARK_BRIGHTNESS: f32 = 50.0;
/// Acceptable width/height ratio range for a facade photo.
const MIN_ASPECT: f32 = 0.5;
const MAX_ASPECT: f32 = 2.0;

/// One capture-quality issue with its recommendation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityFinding {
    pub issue: String,
    pub recommendation: String,
}

/// Coarse risk that the capture conditions distort the analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CaptureRisk {
    Low,
    Moderate,
    High,
}

impl CaptureRisk {
    fn from_score(score: usize) -> Self {
        match score {
            0 => CaptureRisk::Low,
            1 => CaptureRisk::Moderate,
            _ => CaptureRisk::High,
        }
    }
}

/// Capture-quality assessment for one photo.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    /// Mean grayscale brightness scaled to 0–100.
    pub brightness: f32,
    pub aspect_ratio: f32,
    pub file_size_bytes: u64,
    /// Number of failed checks.
    pub risk_score: usize,
    pub risk: CaptureRisk,
    pub findings: Vec<QualityFinding>,
}

/// Mean grayscale brightness of the buffer, scaled to 0–100.
///
/// Empty buffers report 0.
pub fn mean_brightness(img: ImageRgba8<'_>) -> f32 {
    if img.w == 0 || img.h == 0 {
        return 0.0;
    }
    let mut sum = 0.0f64;
    for y in 0..img.h {
        let row = img.row(y);
        for x in 0..img.w {
            sum += gray_at(row, x) as f64;
        }
    }
    let mean = sum / (img.w * img.h) as f64;
    (mean / 255.0 * 100.0) as f32
}

/// Assess the capture quality of a decoded photo.
///
/// `file_size_bytes` is the size of the encoded source file, a cheap stand-in
/// for resolution and compression quality.
pub fn assess_capture(img: ImageRgba8<'_>, file_size_bytes: u64) -> QualityReport {
    let brightness = mean_brightness(img);
    let aspect_ratio = if img.h == 0 {
        0.0
    } else {
        img.w as f32 / img.h as f32
    };

    let mut findings = Vec::new();
    if file_size_bytes < LOW_RES_BYTES {
        findings.push(QualityFinding {
            issue: "Low resolution or low quality image".to_string(),
            recommendation: "Take a photo at a higher resolution for a more precise analysis"
                .to_string(),
        });
    }
    if brightness < DARK_BRIGHTNESS {
        findings.push(QualityFinding {
            issue: "Image is too dark".to_string(),
            recommendation: "Take the photo with better natural lighting".to_string(),
        });
    }
    if !(MIN_ASPECT..=MAX_ASPECT).contains(&aspect_ratio) {
        findings.push(QualityFinding {
            issue: "Unusual image composition".to_string(),
            recommendation: "Take the photo showing the full front facade".to_string(),
        });
    }

    let risk_score = findings.len();
    let risk = CaptureRisk::from_score(risk_score);

    if findings.is_empty() {
        findings.push(QualityFinding {
            issue: "No evident problems detected in the provided image".to_string(),
            recommendation: "For a more detailed analysis, provide multiple angles of the property"
                .to_string(),
        });
    }

    QualityReport {
        brightness,
        aspect_ratio,
        file_size_bytes,
        risk_score,
        risk,
        findings,
    }
}
