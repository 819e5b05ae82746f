use crate::error::{Result, ShapeError};
use crate::math::Point2;

/// A circle in the plane.
///
/// A zero radius is allowed and describes a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::InvalidRadius` if the radius is negative and
    /// `ShapeError::NonFinite` if the center or radius is NaN or infinite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !center.x.is_finite() || !center.y.is_finite() || !radius.is_finite() {
            tracing::debug!(?center, radius, "rejecting non-finite circle");
            return Err(ShapeError::NonFinite("circle").into());
        }
        if radius < 0.0 {
            tracing::debug!(radius, "rejecting negative radius");
            return Err(ShapeError::InvalidRadius(radius).into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}
