use crate::error::{Result, ShapeError};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::vector_2d::lerp;
use crate::math::Point2;

/// A closed polygon given by its vertex circulation.
///
/// The last vertex connects back to the first. Construction checks the
/// vertex count and that every coordinate is finite; it does not check
/// simplicity or convexity. Queries that need a convex polygon produce
/// unspecified results on other input.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its vertices in circulation order.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::InvalidShape` for fewer than 3 vertices and
    /// `ShapeError::NonFinite` if any coordinate is NaN or infinite.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            tracing::debug!(vertices = vertices.len(), "rejecting polygon");
            return Err(ShapeError::InvalidShape {
                vertices: vertices.len(),
            }
            .into());
        }
        if vertices.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
            tracing::debug!("rejecting polygon with non-finite vertex");
            return Err(ShapeError::NonFinite("polygon vertex").into());
        }
        Ok(Self { vertices })
    }

    /// Creates a polygon from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`Polygon::new`].
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Returns the vertices in circulation order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the number of vertices (always at least 3).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns vertex `i`, wrapping around the circulation.
    #[must_use]
    pub fn vertex(&self, i: usize) -> &Point2 {
        &self.vertices[i % self.vertices.len()]
    }

    /// Iterates the edges as `(i, prev, q)` where `q` is vertex `i` and
    /// `prev` the vertex before it. The first edge is the closing edge
    /// from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (usize, &Point2, &Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (i, &self.vertices[(i + n - 1) % n], &self.vertices[i]))
    }

    /// Signed area; positive for counter-clockwise circulation (y-axis up).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Midpoint of every edge, in the order of [`Polygon::edges`].
    #[must_use]
    pub fn mid_points(&self) -> Vec<Point2> {
        self.edges().map(|(_, prev, q)| lerp(prev, q, 0.5)).collect()
    }
}
