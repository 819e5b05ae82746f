use crate::error::Result;
use crate::geometry::{Circle, Polygon};
use crate::math::vector_2d::dist;
use crate::operations::query::{ClosestPolyPoint, PointInConvexPolygon};

/// Tests whether a convex polygon and a circle overlap.
///
/// A circle that only touches the boundary (tangency) does not intersect.
/// The center test is `PointInConvexPolygon`, so a center on the extension
/// of an edge line counts as inside and the shapes are reported to overlap.
pub struct ConvexPolyCircleIntersect<'a> {
    polygon: &'a Polygon,
    circle: &'a Circle,
}

impl<'a> ConvexPolyCircleIntersect<'a> {
    /// Creates a new `ConvexPolyCircleIntersect` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon, circle: &'a Circle) -> Self {
        Self { polygon, circle }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateInput` if the center is outside
    /// and the polygon has a zero-length edge.
    pub fn execute(&self) -> Result<bool> {
        let center = self.circle.center();
        if PointInConvexPolygon::new(*center, self.polygon).execute() {
            tracing::trace!(?center, "circle center inside polygon");
            return Ok(true);
        }
        let closest = ClosestPolyPoint::new(*center, self.polygon).execute()?;
        Ok(dist(center, &closest.point) < self.circle.radius())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn square() -> Polygon {
        Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap()
    }

    fn intersects(poly: &Polygon, x: f64, y: f64, r: f64) -> bool {
        let circle = Circle::new(Point2::new(x, y), r).unwrap();
        ConvexPolyCircleIntersect::new(poly, &circle).execute().unwrap()
    }

    #[test]
    fn circle_beside_square() {
        let sq = square();
        assert!(!intersects(&sq, 20.0, 5.0, 9.0));
        assert!(intersects(&sq, 20.0, 5.0, 11.0));
    }

    #[test]
    fn tangent_circle_does_not_intersect() {
        assert!(!intersects(&square(), 20.0, 5.0, 10.0));
    }

    #[test]
    fn center_inside_always_intersects() {
        assert!(intersects(&square(), 5.0, 5.0, 0.0));
        assert!(intersects(&square(), 9.5, 0.5, 0.1));
    }

    #[test]
    fn near_corner() {
        let sq = square();
        // (13, 14) is 5 away from the corner (10, 10).
        assert!(!intersects(&sq, 13.0, 14.0, 4.9));
        assert!(intersects(&sq, 13.0, 14.0, 5.1));
    }

    #[test]
    fn center_on_edge_line_extension() {
        let tri = Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]).unwrap();
        assert!(intersects(&tri, 20.0, 0.0, 0.5));
        assert!(!intersects(&tri, 20.0, 1.0, 0.5));
    }

    #[test]
    fn large_circle_around_polygon() {
        assert!(intersects(&square(), 5.0, -50.0, 100.0));
    }
}
