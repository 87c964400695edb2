//! JSON configuration and report types for a scan run.

use std::fs;
use std::path::Path;

use markscan_checkbox::{CheckboxDetection, CheckboxParams, ReadingOrder};
use markscan_core::PreprocessParams;
use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// Configuration of one document scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Source image path. Required.
    #[serde(default)]
    pub in_file: String,
    /// Annotated output image path. Required.
    #[serde(default)]
    pub out_file: String,
    /// Known skew angle in degrees, counter-clockwise positive; 0 when the
    /// scan is already straight.
    #[serde(default)]
    pub skew_deg: f64,
    /// Optional debug dump of the binarized intermediate image.
    #[serde(default)]
    pub binarized_path: Option<String>,
    /// Optional JSON report path; the CLI prints to stdout when unset.
    #[serde(default)]
    pub report_path: Option<String>,
    #[serde(default)]
    pub reading_order: ReadingOrder,
    #[serde(default)]
    pub preprocess: PreprocessParams,
    #[serde(default)]
    pub checkbox: CheckboxParams,
}

impl ScanConfig {
    pub fn new(in_file: impl Into<String>, out_file: impl Into<String>) -> Self {
        Self {
            in_file: in_file.into(),
            out_file: out_file.into(),
            ..Self::default()
        }
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ScanError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Check the required fields are present. Missing required
    /// configuration is a fatal startup error.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.in_file.trim().is_empty() {
            return Err(ScanError::Config("in_file"));
        }
        if self.out_file.trim().is_empty() {
            return Err(ScanError::Config("out_file"));
        }
        Ok(())
    }
}

/// Per-checkbox line of the scan report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckboxReport {
    /// 1-based reading-order label.
    pub index: usize,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub fill_percentage: f64,
    pub marked: bool,
}

/// Machine-readable result of a scan run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub in_file: String,
    pub out_file: String,
    pub skew_deg: f64,
    pub contours_found: usize,
    pub checkboxes: Vec<CheckboxReport>,
}

impl ScanReport {
    pub fn from_detection(config: &ScanConfig, skew_deg: f64, det: &CheckboxDetection) -> Self {
        let checkboxes = det
            .checkboxes
            .iter()
            .zip(&det.scores)
            .map(|(checkbox, score)| CheckboxReport {
                index: checkbox.index,
                x: checkbox.bounds.x,
                y: checkbox.bounds.y,
                width: checkbox.bounds.width,
                height: checkbox.bounds.height,
                fill_percentage: score.percentage,
                marked: score.marked,
            })
            .collect();
        Self {
            in_file: config.in_file.clone(),
            out_file: config.out_file.clone(),
            skew_deg,
            contours_found: det.contours_found,
            checkboxes,
        }
    }

    /// Write the report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ScanError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
