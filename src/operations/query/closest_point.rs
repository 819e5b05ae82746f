use crate::error::{GeometryError, Result};
use crate::geometry::Polygon;
use crate::math::vector_2d::{dist, vector_proj};
use crate::math::{Point2, TOLERANCE};

/// Boundary feature on which a closest point lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryFeature {
    /// Vertex `i` of the polygon.
    Vertex(usize),
    /// Interior of the edge ending at vertex `i`.
    Edge(usize),
}

/// Result of a closest point query.
#[derive(Debug, Clone, Copy)]
pub struct ClosestPointResult {
    /// The closest point on the polygon boundary.
    pub point: Point2,
    /// The distance from the query point to the closest point.
    pub distance: f64,
    /// The vertex or edge the closest point lies on.
    pub feature: BoundaryFeature,
}

/// Finds the point on a polygon's boundary closest to a given point.
pub struct ClosestPolyPoint<'a> {
    point: Point2,
    polygon: &'a Polygon,
}

impl<'a> ClosestPolyPoint<'a> {
    /// Creates a new `ClosestPolyPoint` query.
    #[must_use]
    pub fn new(point: Point2, polygon: &'a Polygon) -> Self {
        Self { point, polygon }
    }

    /// Executes the query.
    ///
    /// Each vertex is a candidate, and so is the foot of the perpendicular on
    /// each edge when it falls strictly between the edge's endpoints. A
    /// candidate replaces the current best only if it is strictly closer, so
    /// exact ties keep the first one found in circulation order.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateInput` if the polygon has a
    /// zero-length edge.
    pub fn execute(&self) -> Result<ClosestPointResult> {
        let p = &self.point;
        let mut closest = ClosestPointResult {
            point: *self.polygon.vertex(0),
            distance: f64::INFINITY,
            feature: BoundaryFeature::Vertex(0),
        };

        for (i, prev, q) in self.polygon.edges() {
            let d = dist(p, q);
            if d < closest.distance {
                closest = ClosestPointResult {
                    point: *q,
                    distance: d,
                    feature: BoundaryFeature::Vertex(i),
                };
            }

            let u = prev - q;
            if u.norm() < TOLERANCE {
                return Err(GeometryError::DegenerateInput(format!(
                    "zero-length edge ending at vertex {i} ({}, {})",
                    q.x, q.y
                ))
                .into());
            }
            let pq = p - q;
            let proj = vector_proj(&pq, &u)?;
            let d = (pq - proj).norm();
            if d < closest.distance
                && proj.dot(&u) > 0.0
                && proj.norm_squared() < u.norm_squared()
            {
                closest = ClosestPointResult {
                    point: q + proj,
                    distance: d,
                    feature: BoundaryFeature::Edge(i),
                };
            }
        }

        Ok(closest)
    }
}
