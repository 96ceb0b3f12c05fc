//! JSON configuration for the `crack-analyze` CLI tool.

use crate::detector::CrackParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct AnalyzeConfig {
    /// Photo to analyse.
    pub input: PathBuf,
    #[serde(default)]
    pub detector: DetectorConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub edge_threshold: f32,
    pub darkness_threshold: f32,
    pub max_width: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        let params = CrackParams::default();
        Self {
            edge_threshold: params.edge_threshold,
            darkness_threshold: params.darkness_threshold,
            max_width: params.max_width,
        }
    }
}

impl DetectorConfig {
    pub fn to_params(&self) -> CrackParams {
        CrackParams {
            edge_threshold: self.edge_threshold,
            darkness_threshold: self.darkness_threshold,
            max_width: self.max_width,
            ..CrackParams::default()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(rename = "overlay_image")]
    pub overlay_image: PathBuf,
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<AnalyzeConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_detector_section_uses_defaults() {
        let json = r#"{
            "input": "photo.jpg",
            "output": {
                "overlay_image": "out/overlay.png",
                "report_json": "out/report.json"
            }
        }"#;
        let config: AnalyzeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.detector.edge_threshold, 20.0);
        assert_eq!(config.detector.darkness_threshold, 120.0);
        assert_eq!(config.detector.max_width, 500);
    }

    #[test]
    fn detector_overrides_are_applied() {
        let json = r#"{
            "input": "photo.jpg",
            "detector": { "edge_threshold": 30.0 },
            "output": {
                "overlay_image": "out/overlay.png",
                "report_json": "out/report.json"
            }
        }"#;
        let config: AnalyzeConfig = serde_json::from_str(json).unwrap();
        let params = config.detector.to_params();
        assert_eq!(params.edge_threshold, 30.0);
        assert_eq!(params.darkness_threshold, 120.0);
    }
}
