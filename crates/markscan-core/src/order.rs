//! Deterministic contour ordering.

use std::cmp::Ordering;

use imageproc::contours::Contour;

use crate::contour::BoundingBox;

fn top_edge(contour: &Contour<i32>) -> i32 {
    BoundingBox::of(contour).map(|b| b.y).unwrap_or(i32::MAX)
}

fn left_edge(contour: &Contour<i32>) -> i32 {
    BoundingBox::of(contour).map(|b| b.x).unwrap_or(i32::MAX)
}

/// Order contours top to bottom by bounding-box top edge.
///
/// Stable: ties keep their incoming order, so repeated application is a
/// no-op. This is the canonical pipeline ordering; horizontal order within
/// a row is left as traced.
pub fn order_top_to_bottom(contours: &mut [Contour<i32>]) {
    contours.sort_by_key(top_edge);
}

/// Row-major reading order: top to bottom, left to right within a row band.
///
/// Contours are first ordered by top edge, then grouped into bands. A band
/// grows while the next contour's top edge stays within `row_band_px` of the
/// band's first contour; each band is then sorted by left edge. Pick a
/// tolerance around half the expected glyph height so slightly skewed rows
/// still land in one band.
pub fn reading_order(contours: &mut [Contour<i32>], row_band_px: i32) {
    contours.sort_by_key(top_edge);
    let mut start = 0;
    while start < contours.len() {
        let band_top = top_edge(&contours[start]);
        let mut end = start + 1;
        while end < contours.len() && top_edge(&contours[end]) - band_top <= row_band_px {
            end += 1;
        }
        contours[start..end].sort_by_key(left_edge);
        start = end;
    }
}

/// Signed shoelace area of a contour's boundary polygon, in px^2.
pub fn contour_area(contour: &Contour<i32>) -> f64 {
    let points = &contour.points;
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0i64;
    for (a, b) in points.iter().zip(points.iter().cycle().skip(1)) {
        twice_area += a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64;
    }
    (twice_area.abs() as f64) / 2.0
}

/// Largest-first comparator on contour area, for callers wanting the
/// dominant shapes up front. Not used by the default pipeline.
pub fn by_area_desc(a: &Contour<i32>, b: &Contour<i32>) -> Ordering {
    contour_area(b)
        .partial_cmp(&contour_area(a))
        .unwrap_or(Ordering::Equal)
}
