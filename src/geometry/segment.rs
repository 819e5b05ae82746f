use crate::math::intersect_2d::{segments_intersect, segments_intersect_proper};
use crate::math::vector_2d::dist;
use crate::math::Point2;

/// A directed line segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        dist(&self.start, &self.end)
    }

    /// See [`segments_intersect`].
    #[must_use]
    pub fn intersects(&self, other: &Segment) -> bool {
        segments_intersect(&self.start, &self.end, &other.start, &other.end)
    }

    /// See [`segments_intersect_proper`].
    #[must_use]
    pub fn intersects_proper(&self, other: &Segment) -> bool {
        segments_intersect_proper(&self.start, &self.end, &other.start, &other.end)
    }
}
