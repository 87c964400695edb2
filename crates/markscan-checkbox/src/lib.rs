//! Checkbox detection for scanned forms.
//!
//! Consumes the image primitives from `markscan-core` and adds the
//! shape-level semantics: which contours are checkboxes, what their interior
//! ink fraction is, and whether that counts as a human mark. The pipeline is
//! strictly linear — deskew, binarize, trace, order, classify, score,
//! annotate — with each stage handing a fresh image to the next; the only
//! in-place mutation is the annotation overlay on the deskewed color image.

mod annotate;
mod classify;
mod detector;
mod params;
mod score;

pub use annotate::{annotate, ANNOTATION_COLOR};
pub use classify::{classify, crop_rect, Checkbox};
pub use detector::{CheckboxDetection, CheckboxDetector, ReadingOrder};
pub use params::CheckboxParams;
pub use score::{score, FillScore};
