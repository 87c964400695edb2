//! The linear checkbox detection pipeline.

use image::{GrayImage, RgbImage};
use log::debug;
use markscan_core::{
    extract_contours, order_top_to_bottom, preprocess, reading_order, rotate_deskew,
    PreprocessParams,
};
use serde::{Deserialize, Serialize};

use crate::annotate::annotate;
use crate::classify::{classify, Checkbox};
use crate::params::CheckboxParams;
use crate::score::{score, FillScore};

/// Ordering imposed on contours before classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingOrder {
    /// Top edge ascending only; horizontal order within a row is left as
    /// traced. The shipped default.
    #[default]
    TopToBottom,
    /// Row-banded reading order: top to bottom, left to right within a band.
    RowMajor,
}

/// Checkbox detector running the full linear pipeline:
/// deskew → binarize → trace → order → classify → score → annotate.
///
/// A detector holds no mutable state; independent documents can be
/// processed in parallel with one detector per run, or by sharing one
/// detector across threads.
pub struct CheckboxDetector {
    preprocess: PreprocessParams,
    checkbox: CheckboxParams,
    order: ReadingOrder,
}

/// Everything one pipeline run produces.
pub struct CheckboxDetection {
    /// Deskewed color image with detection rectangles drawn on it.
    pub annotated: RgbImage,
    /// Binarized image the contours and interior crops came from.
    pub binarized: GrayImage,
    /// Accepted checkboxes in reading order, indices 1-based.
    pub checkboxes: Vec<Checkbox>,
    /// Fill scores, index-aligned with `checkboxes`.
    pub scores: Vec<FillScore>,
    /// Number of contours traced before classification.
    pub contours_found: usize,
}

impl CheckboxDetector {
    pub fn new(preprocess: PreprocessParams, checkbox: CheckboxParams) -> Self {
        Self {
            preprocess,
            checkbox,
            order: ReadingOrder::default(),
        }
    }

    pub fn with_reading_order(mut self, order: ReadingOrder) -> Self {
        self.order = order;
        self
    }

    #[inline]
    pub fn params(&self) -> &CheckboxParams {
        &self.checkbox
    }

    /// Run the pipeline on a color scan with a known skew angle (degrees,
    /// counter-clockwise positive).
    ///
    /// Stages run strictly in sequence with no retries; the in-memory
    /// stages cannot fail, so the fallible edges (decoding, skew
    /// estimation, output writing) stay with the caller.
    pub fn detect(&self, image: &RgbImage, skew_deg: f64) -> CheckboxDetection {
        let mut deskewed = rotate_deskew(image, skew_deg);
        debug!("deskewed by {skew_deg} degrees");

        let binarized = preprocess(&deskewed, &self.preprocess);

        let mut contours = extract_contours(&binarized);
        let contours_found = contours.len();
        debug!("traced {contours_found} contours");

        match self.order {
            ReadingOrder::TopToBottom => order_top_to_bottom(&mut contours),
            ReadingOrder::RowMajor => reading_order(&mut contours, self.checkbox.row_band_px),
        }

        let checkboxes = classify(&contours, &binarized, &self.checkbox);
        debug!(
            "of those {contours_found} contours, {} are checkboxes",
            checkboxes.len()
        );

        let scores: Vec<FillScore> = checkboxes
            .iter()
            .map(|checkbox| score(&checkbox.interior, &self.checkbox))
            .collect();

        annotate(&mut deskewed, &checkboxes, &self.checkbox);

        CheckboxDetection {
            annotated: deskewed,
            binarized,
            checkboxes,
            scores,
            contours_found,
        }
    }
}

impl Default for CheckboxDetector {
    fn default() -> Self {
        Self::new(PreprocessParams::default(), CheckboxParams::default())
    }
}
