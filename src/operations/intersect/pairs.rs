use crate::error::Result;
use crate::geometry::Shape;

/// Finds every pair of intersecting shapes in a scene.
pub struct IntersectingPairs<'a> {
    shapes: &'a [Shape],
}

impl<'a> IntersectingPairs<'a> {
    /// Creates a new `IntersectingPairs` query.
    #[must_use]
    pub fn new(shapes: &'a [Shape]) -> Self {
        Self { shapes }
    }

    /// Executes the query, returning index pairs `(i, j)` with `i < j` in
    /// lexicographic order.
    ///
    /// # Errors
    ///
    /// Returns the first degenerate-input error met by a pairwise test.
    pub fn execute(&self) -> Result<Vec<(usize, usize)>> {
        let mut pairs = Vec::new();
        for (i, a) in self.shapes.iter().enumerate() {
            for (j, b) in self.shapes.iter().enumerate().skip(i + 1) {
                if a.intersects(b)? {
                    pairs.push((i, j));
                }
            }
        }
        tracing::debug!(shapes = self.shapes.len(), pairs = pairs.len(), "scene checked");
        Ok(pairs)
    }

    /// Executes the query and marks each shape that intersects at least one
    /// other shape.
    ///
    /// # Errors
    ///
    /// Same as [`IntersectingPairs::execute`].
    pub fn flags(&self) -> Result<Vec<bool>> {
        let mut flags = vec![false; self.shapes.len()];
        for (i, j) in self.execute()? {
            flags[i] = true;
            flags[j] = true;
        }
        Ok(flags)
    }
}
