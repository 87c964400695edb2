//! Scan preprocessing: grayscale conversion, noise blur, and adaptive
//! binarization ahead of contour tracing.

use image::{GrayImage, Luma, RgbImage};
use imageproc::filter::{box_filter, gaussian_blur_f32};
use serde::{Deserialize, Serialize};

/// Blur sigma equivalent to a 5x5 Gaussian kernel with auto-derived sigma
/// (`0.3 * ((k - 1) * 0.5 - 1) + 0.8` for `k = 5`).
pub const BLUR_SIGMA: f32 = 1.1;

/// Local-mean window radius of the adaptive threshold (block size 7).
pub const THRESHOLD_BLOCK_RADIUS: u32 = 3;

/// Constant subtracted from the local mean before comparison.
pub const THRESHOLD_OFFSET: i16 = 5;

/// Binarization settings.
///
/// The defaults encode the scan resolution the pipeline is calibrated for
/// and are expected to be re-tuned per deployment.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PreprocessParams {
    /// Gaussian blur sigma applied before thresholding.
    pub blur_sigma: f32,
    /// Radius of the local-mean window; window side is `2 * radius + 1`.
    pub block_radius: u32,
    /// Offset subtracted from the local mean.
    pub offset: i16,
}

impl Default for PreprocessParams {
    fn default() -> Self {
        Self {
            blur_sigma: BLUR_SIGMA,
            block_radius: THRESHOLD_BLOCK_RADIUS,
            offset: THRESHOLD_OFFSET,
        }
    }
}

/// Binarize a color scan: grayscale, Gaussian blur, adaptive mean threshold.
///
/// The blur suppresses scanner noise and dithering before the threshold;
/// thresholding against the local neighborhood mean (rather than one global
/// cutoff) tolerates uneven illumination across the page. Output polarity
/// is page = 255, ink = 0.
pub fn preprocess(image: &RgbImage, params: &PreprocessParams) -> GrayImage {
    let gray = image::imageops::grayscale(image);
    let blurred = gaussian_blur_f32(&gray, params.blur_sigma);
    adaptive_mean_threshold(&blurred, params.block_radius, params.offset)
}

/// Threshold each pixel against its local-mean neighborhood minus `offset`:
/// `out = 255 if src > mean - offset else 0`.
pub fn adaptive_mean_threshold(gray: &GrayImage, block_radius: u32, offset: i16) -> GrayImage {
    let means = box_filter(gray, block_radius, block_radius);
    let mut out = GrayImage::new(gray.width(), gray.height());
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let src = gray.get_pixel(x, y)[0] as i16;
        let mean = means.get_pixel(x, y)[0] as i16;
        *pixel = if src > mean - offset {
            Luma([255])
        } else {
            Luma([0])
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotate::rotate_deskew;
    use image::Rgb;

    fn page_with_bar() -> RgbImage {
        let mut img = RgbImage::from_pixel(200, 200, Rgb([255, 255, 255]));
        for y in 90..93 {
            for x in 40..160 {
                img.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
        img
    }

    #[test]
    fn page_stays_white_ink_stays_black() {
        let binarized = preprocess(&page_with_bar(), &PreprocessParams::default());
        assert_eq!(binarized.get_pixel(100, 91)[0], 0);
        assert_eq!(binarized.get_pixel(100, 40)[0], 255);
        assert_eq!(binarized.get_pixel(10, 180)[0], 255);
    }

    #[test]
    fn uniform_page_binarizes_to_background() {
        let img = RgbImage::from_pixel(64, 64, Rgb([230, 230, 230]));
        let binarized = preprocess(&img, &PreprocessParams::default());
        assert!(binarized.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn zero_rotation_does_not_change_the_binarization() {
        let img = page_with_bar();
        let direct = preprocess(&img, &PreprocessParams::default());
        let rotated = preprocess(&rotate_deskew(&img, 0.0), &PreprocessParams::default());
        assert_eq!(direct.dimensions(), rotated.dimensions());
        for (a, b) in direct.pixels().zip(rotated.pixels()) {
            assert!(a[0].abs_diff(b[0]) <= 1);
        }
    }

    #[test]
    fn threshold_uses_the_local_mean() {
        // A gradient background must not flip to foreground anywhere, even
        // though a global cutoff would split it.
        let mut gray = GrayImage::new(128, 32);
        for (x, _, p) in gray.enumerate_pixels_mut() {
            *p = Luma([(64 + x) as u8]);
        }
        let out = adaptive_mean_threshold(&gray, THRESHOLD_BLOCK_RADIUS, THRESHOLD_OFFSET);
        assert!(out.pixels().all(|p| p[0] == 255));
    }
}
