mod closest_point;
mod point_in_convex_polygon;
mod point_in_polygon;

pub use closest_point::{BoundaryFeature, ClosestPointResult, ClosestPolyPoint};
pub use point_in_convex_polygon::PointInConvexPolygon;
pub use point_in_polygon::PointInPolygon;
