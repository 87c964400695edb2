//! Contour classification into checkboxes.

use image::imageops::crop_imm;
use image::GrayImage;
use log::debug;
use markscan_core::{BoundingBox, Contour};

use crate::params::CheckboxParams;

/// A classified checkbox: its bounding box, 1-based reading index, and the
/// binarized interior crop used for fill scoring.
#[derive(Clone, Debug)]
pub struct Checkbox {
    pub index: usize,
    pub bounds: BoundingBox,
    pub interior: GrayImage,
}

/// Filter ordered contours down to checkbox-sized shapes.
///
/// Classification is a filter, not a re-sort: the input order is preserved
/// and indices are assigned densely (1-based) over the accepted boxes only.
/// A box whose interior crop would leave the image is dropped rather than
/// clamped, so every returned crop is valid.
pub fn classify(
    contours: &[Contour<i32>],
    binarized: &GrayImage,
    params: &CheckboxParams,
) -> Vec<Checkbox> {
    let mut checkboxes: Vec<Checkbox> = Vec::new();
    for contour in contours {
        let Some(bounds) = BoundingBox::of(contour) else {
            continue;
        };
        if !size_matches(&bounds, params) {
            continue;
        }
        match interior_crop(&bounds, binarized, params) {
            Some(interior) => checkboxes.push(Checkbox {
                index: checkboxes.len() + 1,
                bounds,
                interior,
            }),
            None => debug!(
                "dropping checkbox candidate at ({}, {}): interior crop out of bounds",
                bounds.x, bounds.y
            ),
        }
    }
    checkboxes
}

fn size_matches(bounds: &BoundingBox, params: &CheckboxParams) -> bool {
    bounds.width > params.min_side_exclusive
        && bounds.width < params.max_side_exclusive
        && bounds.height > params.min_side_exclusive
        && bounds.height < params.max_side_exclusive
}

/// Interior rectangle of a checkbox as `(x0, y0, x1, y1)` with exclusive
/// far corner: `(x + near, y + near)` to `(x + w - far, y + h - far)`.
/// The same offsets position the annotation rectangle.
pub fn crop_rect(bounds: &BoundingBox, params: &CheckboxParams) -> (i32, i32, i32, i32) {
    (
        bounds.x + params.inset_near,
        bounds.y + params.inset_near,
        bounds.x + bounds.width - params.inset_far,
        bounds.y + bounds.height - params.inset_far,
    )
}

fn interior_crop(
    bounds: &BoundingBox,
    binarized: &GrayImage,
    params: &CheckboxParams,
) -> Option<GrayImage> {
    let (x0, y0, x1, y1) = crop_rect(bounds, params);
    if x0 < 0 || y0 < 0 || x1 <= x0 || y1 <= y0 {
        return None;
    }
    if x1 > binarized.width() as i32 || y1 > binarized.height() as i32 {
        return None;
    }
    let crop = crop_imm(
        binarized,
        x0 as u32,
        y0 as u32,
        (x1 - x0) as u32,
        (y1 - y0) as u32,
    );
    Some(crop.to_image())
}
