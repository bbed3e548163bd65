//! Pta - Point arrays
//!
//! Ordered lists of coordinate pairs. Rendering code builds a `Pta` for a
//! shape and then paints every point in it.

/// Array of points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pta {
    points: Vec<(f32, f32)>,
}

impl Pta {
    /// Create a new empty Pta.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a Pta with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get a point by index.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<(f32, f32)> {
        self.points.get(index).copied()
    }

    /// Add a point.
    pub fn push(&mut self, x: f32, y: f32) {
        self.points.push((x, y));
    }

    /// Append every point of `other`.
    pub fn join(&mut self, other: &Pta) {
        self.points.extend_from_slice(&other.points);
    }

    /// Iterate over the points in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (f32, f32)> + '_ {
        self.points.iter().copied()
    }
}

impl FromIterator<(f32, f32)> for Pta {
    fn from_iter<T: IntoIterator<Item = (f32, f32)>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
