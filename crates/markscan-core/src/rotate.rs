//! Skew correction by rotation about a half-diagonal pivot.

use image::{Rgb, RgbImage};
use imageproc::geometric_transformations::{rotate, Interpolation};

/// Rotate a scanned page to undo in-plane skew.
///
/// The output canvas is a square of side `max(width, height)` with the
/// source placed at the top-left, and the pivot sits at `(len/2, len/2)` —
/// deliberately not the image center for non-square inputs. This keeps the
/// full page content inside the canvas for any angle, at the cost of
/// off-center placement. Angles are degrees, positive = counter-clockwise;
/// uncovered canvas is left black.
///
/// The rotation runs on a canvas padded by one pixel on every side: the
/// inverse-mapped bilinear sampler otherwise reads past the last row and
/// column and substitutes the fill color, corrupting edge pixels even at 0
/// degrees. A 0-degree angle skips the resampling entirely.
pub fn rotate_deskew(image: &RgbImage, angle_deg: f64) -> RgbImage {
    let len = image.width().max(image.height());
    let mut canvas = RgbImage::from_pixel(len + 2, len + 2, Rgb([0, 0, 0]));
    image::imageops::replace(&mut canvas, image, 1, 1);

    if angle_deg == 0.0 {
        return image::imageops::crop_imm(&canvas, 1, 1, len, len).to_image();
    }

    let pivot = ((len / 2 + 1) as f32, (len / 2 + 1) as f32);
    // imageproc rotates clockwise for positive theta.
    let theta = -(angle_deg as f32).to_radians();
    let rotated = rotate(&canvas, pivot, theta, Interpolation::Bilinear, Rgb([0, 0, 0]));
    image::imageops::crop_imm(&rotated, 1, 1, len, len).to_image()
}
