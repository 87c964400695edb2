use serde::{Deserialize, Serialize};

/// Calibration constants for checkbox classification and scoring.
///
/// The size window and insets encode the checkbox glyph footprint at the
/// scan resolution the system was calibrated on; they are the most
/// deployment-sensitive numbers in the pipeline and must be re-derived when
/// the scan DPI changes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CheckboxParams {
    /// Exclusive lower bound on both bounding-box dimensions, px.
    /// The default window (27, 32) accepts 28–31 px boxes.
    pub min_side_exclusive: i32,
    /// Exclusive upper bound on both bounding-box dimensions, px.
    pub max_side_exclusive: i32,
    /// Interior crop inset from the left and top edges, px. Together with
    /// `inset_far` this keeps the drawn border out of the scored region.
    pub inset_near: i32,
    /// Interior crop inset from the right and bottom edges, px.
    pub inset_far: i32,
    /// Ink percentage at or above which an interior counts as marked.
    /// A fixed heuristic, not learned.
    pub fill_threshold_pct: f64,
    /// Row-band tolerance for the optional row-major reading order, px.
    pub row_band_px: i32,
}

impl Default for CheckboxParams {
    fn default() -> Self {
        Self {
            min_side_exclusive: 27,
            max_side_exclusive: 32,
            inset_near: 7,
            inset_far: 8,
            fill_threshold_pct: 30.0,
            row_band_px: 16,
        }
    }
}
