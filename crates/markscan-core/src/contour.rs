//! Contour tracing over binarized scans.

use image::GrayImage;
use imageproc::contours::{find_contours, Contour};

/// Axis-aligned bounding rectangle of a contour, in pixel extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    /// Bounding rectangle of a contour's points, or `None` for an empty
    /// contour. A boundary spanning columns 50..=79 has width 30.
    pub fn of(contour: &Contour<i32>) -> Option<Self> {
        let first = contour.points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &contour.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        })
    }
}

/// Trace the closed ink boundaries of a binarized image.
///
/// The input has page = 255 and ink = 0; tracing runs on an inverted copy so
/// that drawn shapes are the traced foreground and a contour's bounding box
/// measures the glyph itself. All borders are returned, outer and hole
/// alike, with parent links left on the contours but unused downstream.
/// The output order is tracer order and carries no meaning for callers.
pub fn extract_contours(binarized: &GrayImage) -> Vec<Contour<i32>> {
    let mut ink = binarized.clone();
    image::imageops::invert(&mut ink);
    find_contours::<i32>(&ink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use imageproc::contours::BorderType;
    use imageproc::point::Point;

    #[test]
    fn bounding_box_spans_point_extents() {
        let contour = Contour::new(
            vec![Point::new(50, 50), Point::new(79, 60), Point::new(60, 79)],
            BorderType::Outer,
            None,
        );
        assert_eq!(
            BoundingBox::of(&contour),
            Some(BoundingBox {
                x: 50,
                y: 50,
                width: 30,
                height: 30
            })
        );
    }

    #[test]
    fn bounding_box_of_empty_contour_is_none() {
        let contour: Contour<i32> = Contour::new(Vec::new(), BorderType::Outer, None);
        assert_eq!(BoundingBox::of(&contour), None);
    }

    #[test]
    fn traces_ink_as_foreground() {
        let mut binarized = GrayImage::from_pixel(100, 100, Luma([255]));
        for y in 30..50 {
            for x in 20..40 {
                binarized.put_pixel(x, y, Luma([0]));
            }
        }
        let contours = extract_contours(&binarized);
        assert_eq!(contours.len(), 1);
        assert_eq!(
            BoundingBox::of(&contours[0]),
            Some(BoundingBox {
                x: 20,
                y: 30,
                width: 20,
                height: 20
            })
        );
    }

    #[test]
    fn outline_yields_outer_and_hole_borders() {
        let mut binarized = GrayImage::from_pixel(100, 100, Luma([255]));
        for y in 10..40 {
            for x in 10..40 {
                let border = x < 12 || x >= 38 || y < 12 || y >= 38;
                if border {
                    binarized.put_pixel(x, y, Luma([0]));
                }
            }
        }
        let contours = extract_contours(&binarized);
        let boxes: Vec<_> = contours.iter().filter_map(BoundingBox::of).collect();
        assert!(boxes.iter().any(|b| b.width == 30 && b.height == 30));
        assert!(boxes.iter().any(|b| b.width < 30 && b.height < 30));
    }
}
