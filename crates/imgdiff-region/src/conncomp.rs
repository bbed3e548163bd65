//! Connectivity rules and region descriptors
//!
//! Difference pixels are grouped with 4-way connectivity. [`Adjacency`]
//! decides which neighbouring pixels may join a region; [`Region`]
//! describes one labeled region.

use imgdiff_core::Box;

/// Which neighbours of a region pixel may join the region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Adjacency {
    /// Only pixels that are themselves in the difference set
    #[default]
    Strict,
    /// Any pixel within Chebyshev distance `radius` of a difference pixel
    ///
    /// Regions separated by gaps narrower than `2 * radius + 1` pixels
    /// merge. A radius of 0 behaves like [`Adjacency::Strict`].
    Tolerant {
        /// Tolerance radius in pixels
        radius: u32,
    },
}

impl Adjacency {
    /// Default radius for [`Adjacency::Tolerant`]
    pub const DEFAULT_RADIUS: u32 = 1;

    /// Tolerant adjacency with the default radius
    pub const fn tolerant() -> Self {
        Adjacency::Tolerant {
            radius: Self::DEFAULT_RADIUS,
        }
    }

    /// Tolerance radius; 0 for strict adjacency
    pub fn radius(self) -> u32 {
        match self {
            Adjacency::Strict => 0,
            Adjacency::Tolerant { radius } => radius,
        }
    }
}

/// 4-way neighbour offsets: left, down, right, up
pub(crate) const NEIGHBORS_4: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// In-bounds 4-way neighbours of `(x, y)`.
pub(crate) fn neighbors_4(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> impl Iterator<Item = (u32, u32)> {
    NEIGHBORS_4.into_iter().filter_map(move |(dx, dy)| {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < width && ny < height).then_some((nx, ny))
    })
}

/// A labeled region of a difference image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Label in the label grid
    pub label: u32,
    /// Number of pixels carrying the label
    pub pixel_count: u32,
    /// Bounding box of the region
    pub bounds: Box,
}

impl Region {
    /// Create a new region
    pub fn new(label: u32, pixel_count: u32, bounds: Box) -> Self {
        Self {
            label,
            pixel_count,
            bounds,
        }
    }

    /// Inclusive corners `(min_x, min_y, max_x, max_y)`.
    pub fn corners(&self) -> (i32, i32, i32, i32) {
        (
            self.bounds.x,
            self.bounds.y,
            self.bounds.max_x(),
            self.bounds.max_y(),
        )
    }
}
