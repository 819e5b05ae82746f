mod make_isosceles;
mod make_rectangle;

pub use make_isosceles::MakeIsosceles;
pub use make_rectangle::MakeRectangle;
