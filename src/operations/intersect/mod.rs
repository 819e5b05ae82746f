mod circle_circle;
mod pairs;
mod polygon_circle;
mod polygon_polygon;

pub use circle_circle::CircleCircleIntersect;
pub use pairs::IntersectingPairs;
pub use polygon_circle::ConvexPolyCircleIntersect;
pub use polygon_polygon::ConvexPolysIntersect;
