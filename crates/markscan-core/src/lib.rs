//! Image-level building blocks for optical mark recognition.
//!
//! This crate composes `imageproc` primitives into the stages a checkbox
//! pipeline needs: adaptive binarization of a scanned page, skew-correcting
//! rotation, contour tracing with bounding boxes, and deterministic contour
//! ordering. It knows nothing about checkboxes; the shape-level semantics
//! live one crate up.

mod contour;
mod logger;
mod order;
mod preprocess;
mod rotate;

pub use contour::{extract_contours, BoundingBox};
pub use order::{by_area_desc, contour_area, order_top_to_bottom, reading_order};
pub use preprocess::{
    adaptive_mean_threshold, preprocess, PreprocessParams, BLUR_SIGMA, THRESHOLD_BLOCK_RADIUS,
    THRESHOLD_OFFSET,
};
pub use rotate::rotate_deskew;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;
pub use logger::init_with_level;

// Downstream crates handle contours without naming imageproc directly.
pub use imageproc::contours::{BorderType, Contour};
