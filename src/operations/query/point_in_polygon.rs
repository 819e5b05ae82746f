use crate::geometry::Polygon;
use crate::math::{orient, Orientation, Point2};

/// Tests whether a point lies strictly inside a simple polygon, which may be
/// non-convex.
///
/// Counts the crossings of a horizontal ray from the point towards `+x` with
/// the boundary; an odd count means inside. Points on the boundary get an
/// unspecified answer. A ray running along a horizontal edge is handled like
/// a ray through a single vertex: it crosses when the boundary enters and
/// leaves the edge on opposite sides of the ray's line.
pub struct PointInPolygon<'a> {
    point: Point2,
    polygon: &'a Polygon,
}

impl<'a> PointInPolygon<'a> {
    /// Creates a new `PointInPolygon` query.
    #[must_use]
    pub fn new(point: Point2, polygon: &'a Polygon) -> Self {
        Self { point, polygon }
    }

    /// Executes the query.
    ///
    /// When the ray passes exactly through a vertex, the crossing is
    /// counted once, at that vertex, and only if the boundary actually goes
    /// from one side of the ray's line to the other there. A vertex where
    /// the boundary touches the line and turns back is not a crossing.
    /// Vertices lying on the line one after another count as one such vertex.
    #[must_use]
    pub fn execute(&self) -> bool {
        let p = &self.point;
        let y_orient = |v: &Point2| Orientation::from_value(v.y - p.y);

        let n = self.polygon.vertex_count();
        let mut prev_y = y_orient(self.polygon.vertex(n - 1));
        let mut count = 0_usize;

        for (i, prev, q) in self.polygon.edges() {
            let q_y = y_orient(q);
            if q_y != prev_y {
                // The edge reaches the ray's line; place a point on that line
                // strictly to the right of the edge.
                let max_x = prev.x.max(q.x);
                let far = Point2::new(max_x + max_x.abs().max(1.0), p.y);
                if orient(prev, q, p).is_opposite(orient(prev, q, &far)) {
                    if q_y == Orientation::Collinear {
                        // First vertex after q that leaves the ray's line.
                        let next_y = (1..n)
                            .map(|k| y_orient(self.polygon.vertex(i + k)))
                            .find(|y| *y != Orientation::Collinear)
                            .unwrap_or(Orientation::Collinear);
                        if next_y.is_opposite(prev_y) {
                            count += 1;
                        }
                    } else if prev_y != Orientation::Collinear {
                        count += 1;
                    }
                }
            }
            prev_y = q_y;
        }

        count % 2 == 1
    }
}
