//! Image comparison operations
//!
//! This module finds the pixels where two images disagree:
//!
//! - [`DiffSet`] - ordered coordinates plus a 1 bpp membership mask
//! - Pixel equality checks
//!
//! Pixels are compared as raw packed values; for 32 bpp images that is
//! the full `0xRRGGBBAA` word, so alpha takes part in the comparison.

use super::{Pix, PixelDepth};
use crate::error::{Error, Result};

/// The set of coordinates where two equally-sized images differ.
///
/// Coordinates are kept in row-major order (y first, then x). A 1 bpp
/// mask of the same size gives constant-time membership tests.
/// The set is immutable once built.
#[derive(Debug, Clone)]
pub struct DiffSet {
    width: u32,
    height: u32,
    coords: Vec<(u32, u32)>,
    mask: Pix,
}

impl DiffSet {
    /// Compare two images pixel-by-pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if width or height differ. This
    /// is checked before any pixel is read. Returns
    /// [`Error::IncompatibleDepths`] if the pixel depths differ.
    pub fn scan(pix1: &Pix, pix2: &Pix) -> Result<Self> {
        pix1.check_same_size(pix2)?;
        if pix1.depth() != pix2.depth() {
            return Err(Error::IncompatibleDepths(
                pix1.depth().bits(),
                pix2.depth().bits(),
            ));
        }

        let width = pix1.width();
        let height = pix1.height();
        let mut mask = Pix::new(width, height, PixelDepth::Bit1)?
            .try_into_mut()
            .unwrap_or_else(|p| p.to_mut());
        let mut coords = Vec::new();

        for y in 0..height {
            for x in 0..width {
                if pix1.get_pixel_unchecked(x, y) != pix2.get_pixel_unchecked(x, y) {
                    coords.push((x, y));
                    mask.set_pixel_unchecked(x, y, 1);
                }
            }
        }

        log::debug!(
            "pixel scan {}x{}: {} differing pixels",
            width,
            height,
            coords.len()
        );

        Ok(DiffSet {
            width,
            height,
            coords,
            mask: mask.into(),
        })
    }

    /// Build a difference set directly from coordinates.
    ///
    /// Duplicates are removed and the coordinates are put into row-major
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if a coordinate lies outside
    /// `width` x `height`, or [`Error::InvalidDimension`] for an empty size.
    pub fn from_coords<I>(width: u32, height: u32, coords: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut mask = Pix::new(width, height, PixelDepth::Bit1)?
            .try_into_mut()
            .unwrap_or_else(|p| p.to_mut());
        for (x, y) in coords {
            mask.set_pixel(x, y, 1)?;
        }

        let mut ordered = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if mask.get_pixel_unchecked(x, y) != 0 {
                    ordered.push((x, y));
                }
            }
        }

        Ok(DiffSet {
            width,
            height,
            coords: ordered,
            mask: mask.into(),
        })
    }

    /// Width of the compared images.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the compared images.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of differing pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// True if the images were identical.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Differing coordinates in row-major order.
    #[inline]
    pub fn coords(&self) -> &[(u32, u32)] {
        &self.coords
    }

    /// 1 bpp mask with a 1 at every differing pixel.
    #[inline]
    pub fn mask(&self) -> &Pix {
        &self.mask
    }

    /// Membership test. Out-of-bounds coordinates are never members.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.mask.get_pixel(x, y).is_some_and(|v| v != 0)
    }
}

impl Pix {
    /// Scan for differing pixels; see [`DiffSet::scan`].
    pub fn diff_set(&self, other: &Pix) -> Result<DiffSet> {
        DiffSet::scan(self, other)
    }

    /// Check if two images are exactly equal.
    ///
    /// Images with different sizes or depths are never equal.
    pub fn equals(&self, other: &Pix) -> bool {
        if !self.sizes_equal(other) {
            return false;
        }
        (0..self.height()).all(|y| {
            (0..self.width())
                .all(|x| self.get_pixel_unchecked(x, y) == other.get_pixel_unchecked(x, y))
        })
    }
}
