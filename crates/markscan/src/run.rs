//! The configured end-to-end scan driver.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::detect::detect_checkboxes;
use crate::error::ScanError;
use crate::io::{ScanConfig, ScanReport};
use crate::skew::SkewEstimator;
use crate::source::load_color;

/// Run a full scan from configuration: load the image, obtain the skew
/// angle, detect and score checkboxes, write the annotated output (and the
/// optional binarized dump), and return the report.
///
/// Linear and single-attempt: the first failing stage aborts the run. If
/// the write stage is never reached, no output file exists.
pub fn run_scan(config: &ScanConfig, skew: &dyn SkewEstimator) -> Result<ScanReport, ScanError> {
    config.validate()?;

    let in_path = Path::new(&config.in_file);
    debug!("reading {}", config.in_file);
    let image = load_color(in_path)?;

    let skew_deg = skew.estimate(in_path)?;
    debug!("deskewing {} by {skew_deg} degrees", config.in_file);

    let detection = detect_checkboxes(
        &image,
        skew_deg,
        &config.preprocess,
        &config.checkbox,
        config.reading_order,
    );
    info!(
        "found {} contours, {} are checkboxes",
        detection.contours_found,
        detection.checkboxes.len()
    );
    for (checkbox, score) in detection.checkboxes.iter().zip(&detection.scores) {
        debug!(
            "checkbox {} at ({}, {}): {:.1}% filled, marked = {}",
            checkbox.index, checkbox.bounds.x, checkbox.bounds.y, score.percentage, score.marked
        );
    }

    if let Some(path) = &config.binarized_path {
        detection
            .binarized
            .save(path)
            .map_err(|source| ScanError::OutputWrite {
                path: PathBuf::from(path),
                source,
            })?;
        debug!("wrote binarized dump to {path}");
    }

    detection
        .annotated
        .save(&config.out_file)
        .map_err(|source| ScanError::OutputWrite {
            path: PathBuf::from(&config.out_file),
            source,
        })?;
    info!("wrote annotated output to {}", config.out_file);

    Ok(ScanReport::from_detection(config, skew_deg, &detection))
}
