//! Optical mark recognition for scanned checkbox forms.
//!
//! Given a scanned document image, `markscan` corrects page skew, locates
//! square checkbox glyphs, and measures the ink fraction inside each box to
//! decide whether it was marked. The heavy lifting lives in
//! [`markscan_core`] (image primitives) and [`markscan_checkbox`] (shape
//! semantics); this crate adds the end-to-end surface: image loading with a
//! fallback decode path, the skew-estimator boundary, JSON config/report IO,
//! and the CLI binary (feature `cli`, on by default).
//!
//! ```no_run
//! use markscan::detect_checkboxes_default;
//!
//! let img = image::open("scan.png").unwrap().to_rgb8();
//! let detection = detect_checkboxes_default(&img, 0.0);
//! for (checkbox, score) in detection.checkboxes.iter().zip(&detection.scores) {
//!     println!("#{}: {:.1}% -> {}", checkbox.index, score.percentage, score.marked);
//! }
//! ```

mod detect;
mod error;
mod io;
mod run;
mod skew;
mod source;

pub use detect::{detect_checkboxes, detect_checkboxes_default};
pub use error::ScanError;
pub use io::{CheckboxReport, ScanConfig, ScanReport};
pub use run::run_scan;
pub use skew::{FixedSkew, SkewError, SkewEstimator};
pub use source::load_color;

pub use markscan_checkbox::{
    Checkbox, CheckboxDetection, CheckboxDetector, CheckboxParams, FillScore, ReadingOrder,
};
#[cfg(feature = "tracing")]
pub use markscan_core::init_tracing;
pub use markscan_core::{init_with_level, BoundingBox, PreprocessParams};
