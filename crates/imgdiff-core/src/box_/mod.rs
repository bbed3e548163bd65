//! Box - Rectangle regions
//!
//! Rectangles are stored as origin plus size; region bounds are usually
//! produced from inclusive min/max corners with [`Box::from_inclusive`].

use crate::error::{Error, Result};

/// A rectangle region
///
/// A simple Copy type since it's small and frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Box {
    /// Create a new box
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "box dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a box without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a box spanning inclusive corners `(min_x, min_y)`-`(max_x, max_y)`.
    ///
    /// The corners may be given in either order.
    pub fn from_inclusive(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        let (x0, x1) = (min_x.min(max_x), min_x.max(max_x));
        let (y0, y1) = (min_y.min(max_y), min_y.max(max_y));
        Self {
            x: x0,
            y: y0,
            w: x1 - x0 + 1,
            h: y1 - y0 + 1,
        }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Last column inside the box
    #[inline]
    pub fn max_x(&self) -> i32 {
        self.x + self.w - 1
    }

    /// Last row inside the box
    #[inline]
    pub fn max_y(&self) -> i32 {
        self.y + self.h - 1
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Check if the box is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check if a point is inside the box
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this box contains another box
    pub fn contains_box(&self, other: &Box) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check if this box overlaps with another
    pub fn overlaps(&self, other: &Box) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

impl std::fmt::Display for Box {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.x,
            self.y,
            self.max_x(),
            self.max_y()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_inclusive() {
        let b = Box::from_inclusive(1, 1, 1, 2);
        assert_eq!(b, Box::new_unchecked(1, 1, 1, 2));
        assert_eq!((b.max_x(), b.max_y()), (1, 2));
        assert_eq!(Box::from_inclusive(5, 7, 2, 3), Box::new_unchecked(2, 3, 4, 5));
        assert_eq!(b.to_string(), "(1, 1)-(1, 2)");
    }

    #[test]
    fn test_new_rejects_negative() {
        assert!(Box::new(0, 0, -1, 3).is_err());
        assert!(Box::new(0, 0, 0, 3).unwrap().is_empty());
    }

    #[test]
    fn test_containment() {
        let outer = Box::new_unchecked(0, 0, 10, 10);
        let inner = Box::new_unchecked(2, 2, 3, 3);
        assert!(outer.contains_box(&inner));
        assert!(!inner.contains_box(&outer));
        assert!(outer.overlaps(&inner));
        assert!(inner.contains_point(4, 4));
        assert!(!inner.contains_point(5, 4));
        assert!(!inner.overlaps(&Box::new_unchecked(5, 5, 2, 2)));
        assert_eq!(inner.area(), 9);
    }
}
