use super::{Point2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise (y-axis up).
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Whether `area` is zero at the scale of `points`.
///
/// The cutoff is `TOLERANCE` times the squared extent of the bounding box,
/// so the answer does not change when the points are uniformly scaled.
#[must_use]
pub fn area_is_negligible(points: &[Point2], area: f64) -> bool {
    let Some(first) = points.first() else {
        return true;
    };
    let (lo, hi) = points
        .iter()
        .fold((*first, *first), |(lo, hi), v| (lo.inf(v), hi.sup(v)));
    let extent = (hi - lo).max();
    area.abs() <= TOLERANCE * extent * extent
}

/// Barycentric coordinates of `p` with respect to the triangle `(a, b, c)`.
///
/// Each weight is the signed area of the sub-triangle opposite the
/// corresponding vertex of the returned triple `[abp, bcp, cap]`, divided by
/// the area of `(a, b, c)`; the three weights sum to one.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateInput` if the triangle has zero area.
pub fn barycentric(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> Result<[f64; 3]> {
    let area = signed_area_2d(&[*a, *b, *c]);
    if area_is_negligible(&[*a, *b, *c], area) {
        return Err(GeometryError::DegenerateInput(format!(
            "zero-area triangle ({}, {}), ({}, {}), ({}, {})",
            a.x, a.y, b.x, b.y, c.x, c.y
        ))
        .into());
    }
    Ok([
        signed_area_2d(&[*a, *b, *p]) / area,
        signed_area_2d(&[*b, *c, *p]) / area,
        signed_area_2d(&[*c, *a, *p]) / area,
    ])
}
