use super::Point2;

/// Rotational arrangement of three points.
///
/// The sign convention is fixed by the coordinate system: `Positive` is
/// counter-clockwise with the y-axis pointing up, and clockwise on screen
/// coordinates where it points down. Callers compare orientations with each
/// other and never rely on an absolute turn direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Negative,
    Collinear,
    Positive,
}

impl Orientation {
    /// Returns `-1`, `0` or `1`.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Orientation::Negative => -1,
            Orientation::Collinear => 0,
            Orientation::Positive => 1,
        }
    }

    /// Returns the orientation of the reversed triple.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Negative => Orientation::Positive,
            Orientation::Collinear => Orientation::Collinear,
            Orientation::Positive => Orientation::Negative,
        }
    }

    /// Returns `true` if both orientations are non-zero and of different sign.
    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        (self.sign() - other.sign()).abs() == 2
    }

    /// Maps the sign of a real number to an orientation.
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        if value > 0.0 {
            Orientation::Positive
        } else if value < 0.0 {
            Orientation::Negative
        } else {
            Orientation::Collinear
        }
    }
}

/// Orientation of the triangle `(a, b, c)`.
///
/// This is the sign of `det [[1, ax, ay], [1, bx, by], [1, cx, cy]]`, which
/// expands to the cross product `(b - a) x (c - a)`. No tolerance is applied:
/// nearly collinear points may report either sign depending on rounding.
#[must_use]
pub fn orient(a: &Point2, b: &Point2, c: &Point2) -> Orientation {
    Orientation::from_value((b - a).perp(&(c - a)))
}
