//! End-to-end detection helpers over `image` buffers.

use image::RgbImage;
use markscan_checkbox::{CheckboxDetection, CheckboxDetector, CheckboxParams, ReadingOrder};
use markscan_core::PreprocessParams;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Run the checkbox pipeline with explicit parameters.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(img, preprocess, checkbox),
        fields(width = img.width(), height = img.height())
    )
)]
pub fn detect_checkboxes(
    img: &RgbImage,
    skew_deg: f64,
    preprocess: &PreprocessParams,
    checkbox: &CheckboxParams,
    order: ReadingOrder,
) -> CheckboxDetection {
    CheckboxDetector::new(*preprocess, *checkbox)
        .with_reading_order(order)
        .detect(img, skew_deg)
}

/// Convenience overload using the default calibration parameters and the
/// shipped top-to-bottom ordering.
pub fn detect_checkboxes_default(img: &RgbImage, skew_deg: f64) -> CheckboxDetection {
    detect_checkboxes(
        img,
        skew_deg,
        &PreprocessParams::default(),
        &CheckboxParams::default(),
        ReadingOrder::TopToBottom,
    )
}
