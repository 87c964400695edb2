//! Detection overlay on the deskewed color image.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::classify::{crop_rect, Checkbox};
use crate::params::CheckboxParams;

/// Marker color for detected checkboxes.
pub const ANNOTATION_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Draw a hollow rectangle over each accepted checkbox.
///
/// This mutates the color image in place — the one documented in-place
/// mutation in the pipeline. Rectangles use the same offsets as the scoring
/// crop, so the overlay shows exactly the region that was measured. The
/// checkbox's 1-based index is its running label and travels with the
/// result and report rather than being rasterized onto the image.
pub fn annotate(image: &mut RgbImage, checkboxes: &[Checkbox], params: &CheckboxParams) {
    for checkbox in checkboxes {
        let (x0, y0, x1, y1) = crop_rect(&checkbox.bounds, params);
        let rect = Rect::at(x0, y0).of_size((x1 - x0) as u32, (y1 - y0) as u32);
        draw_hollow_rect_mut(image, rect, ANNOTATION_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use markscan_core::BoundingBox;

    #[test]
    fn draws_the_crop_rectangle_outline() {
        let mut image = RgbImage::from_pixel(200, 200, Rgb([255, 255, 255]));
        let checkbox = Checkbox {
            index: 1,
            bounds: BoundingBox {
                x: 50,
                y: 50,
                width: 30,
                height: 30,
            },
            interior: GrayImage::from_pixel(15, 15, Luma([255])),
        };
        annotate(&mut image, &[checkbox], &CheckboxParams::default());
        assert_eq!(image.get_pixel(57, 57), &ANNOTATION_COLOR);
        assert_eq!(image.get_pixel(71, 71), &ANNOTATION_COLOR);
        // Interior and exterior stay untouched.
        assert_eq!(image.get_pixel(64, 64), &Rgb([255, 255, 255]));
        assert_eq!(image.get_pixel(45, 45), &Rgb([255, 255, 255]));
    }
}
