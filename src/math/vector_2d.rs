use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Euclidean distance between two points.
#[must_use]
pub fn dist(a: &Point2, b: &Point2) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Linear interpolation between `a` (at `t = 0`) and `b` (at `t = 1`).
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

/// Orthogonal projection of `u` onto the direction of `v`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `v` has zero length.
pub fn vector_proj(u: &Vector2, v: &Vector2) -> Result<Vector2> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    let dir = v / len;
    Ok(dir * dir.dot(u))
}

/// Distance from `q` to the infinite line through `p` with direction `v`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `v` has zero length.
pub fn dist_to_line(q: &Point2, p: &Point2, v: &Vector2) -> Result<f64> {
    let pq = q - p;
    let proj = vector_proj(&pq, v)?;
    Ok((pq - proj).norm())
}

/// Distance from `p` to the segment `a-b`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `a` and `b` coincide.
pub fn dist_to_segment(p: &Point2, a: &Point2, b: &Point2) -> Result<f64> {
    let v = b - a;
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    let dir = v / len;
    let ap = p - a;
    let t = dir.dot(&ap);
    if t < 0.0 {
        return Ok(dist(p, a));
    }
    if t > len {
        return Ok(dist(p, b));
    }
    Ok((ap - dir * t).norm())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanixError;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn dist_3_4_5() {
        assert!((dist(&p(1.0, 1.0), &p(4.0, 5.0)) - 5.0).abs() < TOL);
    }

    #[test]
    fn lerp_midpoint_and_ends() {
        let (a, b) = (p(0.0, 2.0), p(4.0, -2.0));
        assert_relative_eq!(lerp(&a, &b, 0.5), p(2.0, 0.0));
        assert_relative_eq!(lerp(&a, &b, 0.0), a);
        assert_relative_eq!(lerp(&a, &b, 1.0), b);
    }

    #[test]
    fn projection_onto_axis() {
        let proj = vector_proj(&Vector2::new(3.0, 7.0), &Vector2::new(5.0, 0.0)).unwrap();
        assert_relative_eq!(proj, Vector2::new(3.0, 0.0));
    }

    #[test]
    fn projection_ignores_direction_length() {
        let u = Vector2::new(2.0, 1.0);
        let a = vector_proj(&u, &Vector2::new(1.0, 1.0)).unwrap();
        let b = vector_proj(&u, &Vector2::new(-10.0, -10.0)).unwrap();
        assert_relative_eq!(a, b, epsilon = TOL);
        assert_relative_eq!(a, Vector2::new(1.5, 1.5), epsilon = TOL);
    }

    #[test]
    fn projection_onto_zero_vector_fails() {
        let r = vector_proj(&Vector2::new(1.0, 0.0), &Vector2::zeros());
        assert!(matches!(
            r,
            Err(PlanixError::Geometry(GeometryError::ZeroVector))
        ));
    }

    #[test]
    fn line_distance() {
        let d = dist_to_line(&p(2.0, 3.0), &p(-5.0, 1.0), &Vector2::new(1.0, 0.0)).unwrap();
        assert!((d - 2.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_distance_perpendicular() {
        let d = dist_to_segment(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0)).unwrap();
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_distance_before_start() {
        let d = dist_to_segment(&p(-3.0, 4.0), &p(0.0, 0.0), &p(2.0, 0.0)).unwrap();
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_distance_past_end() {
        let d = dist_to_segment(&p(3.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0)).unwrap();
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_distance_degenerate() {
        assert!(dist_to_segment(&p(3.0, 4.0), &p(0.0, 0.0), &p(0.0, 0.0)).is_err());
    }
}
