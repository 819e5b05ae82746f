use super::{Circle, Polygon};
use crate::error::Result;
use crate::operations::intersect::{
    CircleCircleIntersect, ConvexPolyCircleIntersect, ConvexPolysIntersect,
};

/// A shape taking part in an intersection scene.
///
/// Polygons are treated as convex.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon(Polygon),
    Circle(Circle),
}

impl Shape {
    /// Tests whether two shapes intersect, dispatching on their kinds.
    ///
    /// Polygon pairs use closed semantics (touching intersects); any pair
    /// involving a circle treats tangency as disjoint.
    ///
    /// # Errors
    ///
    /// Propagates degenerate-input errors from the underlying test.
    pub fn intersects(&self, other: &Shape) -> Result<bool> {
        match (self, other) {
            (Shape::Polygon(a), Shape::Polygon(b)) => ConvexPolysIntersect::new(a, b).execute(),
            (Shape::Polygon(poly), Shape::Circle(circle))
            | (Shape::Circle(circle), Shape::Polygon(poly)) => {
                ConvexPolyCircleIntersect::new(poly, circle).execute()
            }
            (Shape::Circle(a), Shape::Circle(b)) => Ok(CircleCircleIntersect::new(a, b).execute()),
        }
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
