mod circle;
mod polygon;
mod segment;
mod shape;

pub use circle::Circle;
pub use polygon::Polygon;
pub use segment::Segment;
pub use shape::Shape;
