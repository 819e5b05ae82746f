use crate::geometry::Circle;
use crate::math::vector_2d::dist;

/// Tests whether two circles overlap.
///
/// Circles are disjoint when the distance between their centers equals the
/// sum of their radii (external tangency).
pub struct CircleCircleIntersect<'a> {
    a: &'a Circle,
    b: &'a Circle,
}

impl<'a> CircleCircleIntersect<'a> {
    /// Creates a new `CircleCircleIntersect` query.
    #[must_use]
    pub fn new(a: &'a Circle, b: &'a Circle) -> Self {
        Self { a, b }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        dist(self.a.center(), self.b.center()) < self.a.radius() + self.b.radius()
    }
}
