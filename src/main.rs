use crack_detector::config::load_config;
use crack_detector::image::io::{
    downscale_to_max_width, load_rgba_image, save_rgba_png, write_json_file,
};
use crack_detector::quality::{assess_capture, QualityReport};
use crack_detector::render::render_overlay;
use crack_detector::types::CrackResult;
use crack_detector::{AnalysisReport, CrackDetector};
use serde::Serialize;
use std::env;
use std::fs;
use std::path::Path;

/// Uploads larger than this are rejected outright.
const MAX_INPUT_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisSummary {
    analysis: AnalysisReport,
    quality: QualityReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FallbackSummary {
    decode_error: String,
    result: CrackResult,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let file_size = fs::metadata(&config.input)
        .map_err(|e| format!("Failed to stat {}: {e}", config.input.display()))?
        .len();
    if file_size > MAX_INPUT_BYTES {
        return Err(format!(
            "Input {} is too large ({file_size} bytes, limit {MAX_INPUT_BYTES})",
            config.input.display()
        ));
    }

    // Decode failures produce the deterministic fallback summary instead of
    // aborting, so consumers always receive a report.
    let decoded = match load_rgba_image(&config.input) {
        Ok(buf) => buf,
        Err(err) => {
            eprintln!("Warning: {err}; writing fallback report");
            let fallback = FallbackSummary {
                decode_error: err,
                result: CrackResult::fallback(),
            };
            write_json_file(&config.output.report_json, &fallback)?;
            println!(
                "cracks={} severity={:?} (fallback)",
                fallback.result.crack_count, fallback.result.severity
            );
            return Ok(());
        }
    };

    let params = config.detector.to_params();
    let frame = downscale_to_max_width(&decoded, params.max_width);

    let detector = CrackDetector::new(params);
    let report = detector.process_with_report(frame.as_view());
    let quality = assess_capture(frame.as_view(), file_size);

    let overlay = render_overlay(frame.as_view(), &report.points);
    save_rgba_png(&overlay, &config.output.overlay_image)?;

    println!(
        "cracks={} severity={:?} est_length={:.1}cm capture_risk={:?} latency_ms={:.3}",
        report.result.crack_count,
        report.result.severity,
        report.result.estimated_length_cm,
        quality.risk,
        report.result.latency_ms
    );

    let summary = AnalysisSummary {
        analysis: report,
        quality,
    };
    write_json_file(&config.output.report_json, &summary)?;

    Ok(())
}

fn usage() -> String {
    "Usage: crack-analyze <config.json>".to_string()
}
