pub mod intersect_2d;
pub mod orient_2d;
pub mod polygon_2d;
pub mod vector_2d;

pub use orient_2d::{orient, Orientation};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for zero-length and zero-area checks.
pub const TOLERANCE: f64 = 1e-10;
