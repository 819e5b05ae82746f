use crate::error::{GeometryError, Result};
use crate::geometry::Polygon;
use crate::math::polygon_2d::area_is_negligible;
use crate::math::{orient, Orientation};

/// Tests whether two convex polygons overlap, using the separating axis
/// theorem on the polygons' edges.
///
/// The test is closed: polygons that only touch along an edge or at a
/// vertex intersect.
pub struct ConvexPolysIntersect<'a> {
    a: &'a Polygon,
    b: &'a Polygon,
}

impl<'a> ConvexPolysIntersect<'a> {
    /// Creates a new `ConvexPolysIntersect` query.
    #[must_use]
    pub fn new(a: &'a Polygon, b: &'a Polygon) -> Self {
        Self { a, b }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateInput` if either polygon has zero
    /// area, since its interior side is then undefined.
    pub fn execute(&self) -> Result<bool> {
        if let Some(edge) = find_separation(self.a, self.b)? {
            tracing::trace!(edge, "separating edge on first polygon");
            return Ok(false);
        }
        if let Some(edge) = find_separation(self.b, self.a)? {
            tracing::trace!(edge, "separating edge on second polygon");
            return Ok(false);
        }
        Ok(true)
    }
}

/// Returns the index of an edge of `poly` that has every vertex of `other`
/// strictly on its outer side.
///
/// A vertex on the edge's supporting line is not separated.
fn find_separation(poly: &Polygon, other: &Polygon) -> Result<Option<usize>> {
    let winding = winding(poly)?;
    for (i, prev, p) in poly.edges() {
        let mut interior = orient(prev, p, poly.vertex(i + 1));
        if interior == Orientation::Collinear {
            interior = winding;
        }
        let exterior = interior.reversed();
        if other.vertices().iter().all(|q| orient(prev, p, q) == exterior) {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

/// Orientation of the polygon's interior relative to its edges.
///
/// The zero-area cutoff scales with the square of the bounding box extent,
/// so tiny but well-formed polygons keep a winding.
fn winding(poly: &Polygon) -> Result<Orientation> {
    let area = poly.signed_area();
    if area_is_negligible(poly.vertices(), area) {
        return Err(GeometryError::DegenerateInput("polygon has zero area".into()).into());
    }
    Ok(Orientation::from_value(area))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanixError;

    fn poly(coords: &[(f64, f64)]) -> Polygon {
        Polygon::from_coords(coords).unwrap()
    }

    fn square(x0: f64, y0: f64, size: f64) -> Polygon {
        poly(&[(x0, y0), (x0 + size, y0), (x0 + size, y0 + size), (x0, y0 + size)])
    }

    fn intersects(a: &Polygon, b: &Polygon) -> bool {
        ConvexPolysIntersect::new(a, b).execute().unwrap()
    }

    #[test]
    fn disjoint_squares() {
        assert!(!intersects(&square(0.0, 0.0, 10.0), &square(20.0, 0.0, 10.0)));
    }

    #[test]
    fn overlapping_squares() {
        assert!(intersects(&square(0.0, 0.0, 10.0), &square(5.0, 0.0, 10.0)));
    }

    #[test]
    fn containment() {
        assert!(intersects(&square(0.0, 0.0, 10.0), &square(2.0, 2.0, 3.0)));
        assert!(intersects(&square(2.0, 2.0, 3.0), &square(0.0, 0.0, 10.0)));
    }

    #[test]
    fn shared_edge_touches() {
        assert!(intersects(&square(0.0, 0.0, 10.0), &square(10.0, 0.0, 10.0)));
    }

    #[test]
    fn shared_corner_touches() {
        assert!(intersects(&square(0.0, 0.0, 10.0), &square(10.0, 10.0, 10.0)));
    }

    #[test]
    fn separated_only_by_second_polygon_edge() {
        // No edge of the axis-aligned square separates, but the diagonal
        // edge of the triangle does.
        let sq = square(0.0, 0.0, 10.0);
        let tri = poly(&[(5.0, 16.0), (16.0, 5.0), (20.0, 20.0)]);
        assert!(!intersects(&sq, &tri));
        assert!(!intersects(&tri, &sq));
    }

    #[test]
    fn mixed_windings() {
        let ccw = square(0.0, 0.0, 10.0);
        let cw = poly(&[(5.0, 15.0), (15.0, 15.0), (15.0, 5.0), (5.0, 5.0)]);
        assert!(intersects(&ccw, &cw));
        let cw_far = poly(&[(25.0, 15.0), (35.0, 15.0), (35.0, 5.0), (25.0, 5.0)]);
        assert!(!intersects(&ccw, &cw_far));
    }

    #[test]
    fn collinear_vertex_uses_winding() {
        // (5, 0) sits in the middle of the bottom edge.
        let with_mid = poly(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        assert!(!intersects(&with_mid, &square(0.0, -20.0, 10.0)));
        assert!(intersects(&with_mid, &square(3.0, -2.0, 4.0)));
    }

    #[test]
    fn tiny_polygons_keep_their_winding() {
        let tri = poly(&[(0.0, 0.0), (1e-5, 0.0), (0.0, 1e-5)]);
        let beside = poly(&[(3e-5, 0.0), (4e-5, 0.0), (3e-5, 1e-5)]);
        let over = poly(&[(2e-6, 2e-6), (1.2e-5, 2e-6), (2e-6, 1.2e-5)]);
        assert!(intersects(&tri, &tri));
        assert!(intersects(&tri, &over));
        assert!(!intersects(&tri, &beside));
    }

    #[test]
    fn zero_area_polygon() {
        let flat = poly(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
        let r = ConvexPolysIntersect::new(&flat, &square(0.0, 0.0, 1.0)).execute();
        assert!(matches!(
            r,
            Err(PlanixError::Geometry(GeometryError::DegenerateInput(_)))
        ));
    }
}
