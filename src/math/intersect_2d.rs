use super::orient_2d::orient;
use super::{Point2, Vector2, TOLERANCE};

/// Returns `true` if segments `a-b` and `c-d` cross or touch.
///
/// Two segments intersect when the endpoints of each lie on different sides
/// of (or on) the other's supporting line. Collinear segments always report
/// `false`, whether they overlap or not: orientation alone cannot tell the
/// two cases apart.
#[must_use]
pub fn segments_intersect(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> bool {
    orient(a, b, c) != orient(a, b, d) && orient(c, d, a) != orient(c, d, b)
}

/// Returns `true` if segments `a-b` and `c-d` cross at a single point that
/// is interior to both of them.
///
/// Touching at an endpoint and collinear configurations are rejected.
#[must_use]
pub fn segments_intersect_proper(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> bool {
    orient(a, b, c).is_opposite(orient(a, b, d)) && orient(c, d, a).is_opposite(orient(c, d, b))
}

/// Intersection of the lines `p1 + t * v1` and `p2 + u * v2`.
///
/// Returns `None` if the lines are parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    v1: &Vector2,
    p2: &Point2,
    v2: &Vector2,
) -> Option<Point2> {
    let cross = v1.perp(v2);
    if cross.abs() < TOLERANCE {
        return None;
    }
    let t = (p2 - p1).perp(v2) / cross;
    Some(p1 + v1 * t)
}

/// Intersection of the line through `p1, p2` with the line through `p3, p4`.
///
/// Returns `None` if the lines are parallel.
#[must_use]
pub fn line_intersection(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> Option<Point2> {
    let d = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if d.abs() < TOLERANCE {
        return None;
    }
    let a = p1.x * p2.y - p1.y * p2.x;
    let b = p3.x * p4.y - p3.y * p4.x;
    Some(Point2::new(
        (a * (p3.x - p4.x) - (p1.x - p2.x) * b) / d,
        (a * (p3.y - p4.y) - (p1.y - p2.y) * b) / d,
    ))
}
