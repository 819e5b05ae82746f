use crate::error::{GeometryError, Result};
use crate::geometry::Polygon;
use crate::math::{Point2, Vector2, TOLERANCE};

/// Creates an isosceles triangle from the midpoint of its base and its apex.
///
/// The base is perpendicular to the height and twice as long, so the
/// triangle is right-angled at the apex.
pub struct MakeIsosceles {
    base_point: Point2,
    opposite_vertex: Point2,
}

impl MakeIsosceles {
    /// Creates a new `MakeIsosceles` operation.
    #[must_use]
    pub fn new(base_point: Point2, opposite_vertex: Point2) -> Self {
        Self {
            base_point,
            opposite_vertex,
        }
    }

    /// Executes the operation, returning `[apex, base + v, base - v]` where
    /// `v` is the left normal of `base - apex`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateInput` if the two points coincide.
    pub fn execute(&self) -> Result<Polygon> {
        let u = self.base_point - self.opposite_vertex;
        if u.norm() < TOLERANCE {
            return Err(GeometryError::DegenerateInput(
                "isosceles base point and apex coincide".into(),
            )
            .into());
        }
        let v = Vector2::new(-u.y, u.x);
        Polygon::new(vec![
            self.opposite_vertex,
            self.base_point + v,
            self.base_point - v,
        ])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::vector_2d::dist;
    use approx::assert_relative_eq;

    #[test]
    fn vertical_height() {
        let tri = MakeIsosceles::new(Point2::new(0.0, 0.0), Point2::new(0.0, 3.0))
            .execute()
            .unwrap();
        let v = tri.vertices();
        assert_relative_eq!(v[0], Point2::new(0.0, 3.0));
        assert_relative_eq!(v[1], Point2::new(3.0, 0.0));
        assert_relative_eq!(v[2], Point2::new(-3.0, 0.0));
        assert!((tri.signed_area().abs() - 9.0).abs() < 1e-12);
    }

    #[test]
    fn legs_are_equal() {
        let tri = MakeIsosceles::new(Point2::new(270.0, 350.0), Point2::new(300.0, 200.0))
            .execute()
            .unwrap();
        let v = tri.vertices();
        assert!((dist(&v[0], &v[1]) - dist(&v[0], &v[2])).abs() < 1e-9);
    }

    #[test]
    fn coincident_points() {
        let p = Point2::new(1.0, 1.0);
        assert!(MakeIsosceles::new(p, p).execute().is_err());
    }
}
