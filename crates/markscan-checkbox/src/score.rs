//! Fill-ratio scoring of checkbox interiors.

use image::GrayImage;
use serde::{Deserialize, Serialize};

use crate::params::CheckboxParams;

/// Fill measurement for one checkbox interior.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillScore {
    /// Ink fraction of the interior, 0 to 100.
    pub percentage: f64,
    /// True when `percentage` reaches the marked threshold.
    pub marked: bool,
}

/// Measure the ink fraction of a binarized interior crop.
///
/// The crop polarity is inverted first so that ink counts as non-zero
/// regardless of the binarizer's background convention, then non-zero
/// pixels are ratioed against the crop area. Marked means the percentage
/// reaches `fill_threshold_pct` (inclusive).
pub fn score(interior: &GrayImage, params: &CheckboxParams) -> FillScore {
    let total = (interior.width() * interior.height()) as f64;
    let mut inverted = interior.clone();
    image::imageops::invert(&mut inverted);
    let ink = inverted.pixels().filter(|p| p[0] != 0).count() as f64;
    let percentage = if total == 0.0 {
        0.0
    } else {
        ink / total * 100.0
    };
    FillScore {
        percentage,
        marked: percentage >= params.fill_threshold_pct,
    }
}
