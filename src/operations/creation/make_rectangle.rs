use crate::error::{GeometryError, Result};
use crate::geometry::Polygon;
use crate::math::{Point2, Vector2, TOLERANCE};

/// Creates an oriented rectangle.
///
/// The rectangle is centered at `center`, extends `u` to either side along
/// the direction of `u` and `size / 2` to either side across it.
pub struct MakeRectangle {
    center: Point2,
    u: Vector2,
    size: f64,
}

impl MakeRectangle {
    /// Creates a new `MakeRectangle` operation.
    #[must_use]
    pub fn new(center: Point2, u: Vector2, size: f64) -> Self {
        Self { center, u, size }
    }

    /// Executes the operation.
    ///
    /// Vertices are `center + (u + v)`, `center + (u - v)`,
    /// `center + (-u - v)` and `center + (-u + v)`, where `v` is the left
    /// normal of `u` scaled to `size / 2`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if `u` has zero length and
    /// `GeometryError::DegenerateInput` if `size` is not positive.
    pub fn execute(&self) -> Result<Polygon> {
        let len = self.u.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        if self.size < TOLERANCE {
            return Err(GeometryError::DegenerateInput(format!(
                "rectangle size must be positive, got {}",
                self.size
            ))
            .into());
        }
        let u = self.u;
        let v = Vector2::new(-u.y, u.x) / len * (self.size / 2.0);
        let c = self.center;
        Polygon::new(vec![c + (u + v), c + (u - v), c + (-u - v), c + (-u + v)])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn axis_aligned() {
        let rect = MakeRectangle::new(Point2::new(100.0, 250.0), Vector2::new(50.0, 0.0), 40.0)
            .execute()
            .unwrap();
        let v = rect.vertices();
        assert_relative_eq!(v[0], Point2::new(150.0, 270.0));
        assert_relative_eq!(v[1], Point2::new(150.0, 230.0));
        assert_relative_eq!(v[2], Point2::new(50.0, 230.0));
        assert_relative_eq!(v[3], Point2::new(50.0, 270.0));
        assert!((rect.signed_area().abs() - 100.0 * 40.0).abs() < 1e-9);
    }

    #[test]
    fn rotated_keeps_area() {
        let rect = MakeRectangle::new(Point2::new(0.0, 0.0), Vector2::new(3.0, 4.0), 2.0)
            .execute()
            .unwrap();
        // Full length along u is 10, across is 2.
        assert!((rect.signed_area().abs() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn zero_axis() {
        assert!(MakeRectangle::new(Point2::origin(), Vector2::zeros(), 1.0)
            .execute()
            .is_err());
    }

    #[test]
    fn non_positive_size() {
        assert!(MakeRectangle::new(Point2::origin(), Vector2::x(), 0.0)
            .execute()
            .is_err());
        assert!(MakeRectangle::new(Point2::origin(), Vector2::x(), -2.0)
            .execute()
            .is_err());
    }
}
