//! Synthetic test images
//!
//! All builders produce opaque 32 bpp images so that any two fixtures of
//! the same size can be compared directly.

use crate::TestResult;
use imgdiff_core::{Pix, color};

/// Create a `width` x `height` image filled with one opaque color.
pub fn solid_image(width: u32, height: u32, rgb: (u8, u8, u8)) -> TestResult<Pix> {
    let (r, g, b) = rgb;
    Ok(Pix::new_filled(width, height, color::compose_rgb(r, g, b))?)
}

/// Return a copy of `pix` with the rectangle `(x, y, w, h)` painted.
///
/// The rectangle is clipped to the image.
pub fn paint_block(pix: &Pix, x: u32, y: u32, w: u32, h: u32, rgb: (u8, u8, u8)) -> Pix {
    let (r, g, b) = rgb;
    let value = color::compose_rgb(r, g, b);
    let mut pm = pix.to_mut();
    let x_end = x.saturating_add(w).min(pix.width());
    let y_end = y.saturating_add(h).min(pix.height());
    for py in y..y_end {
        for px in x..x_end {
            pm.set_pixel_unchecked(px, py, value);
        }
    }
    pm.into()
}

/// Return a copy of `pix` with each listed pixel painted.
///
/// Coordinates outside the image are ignored.
pub fn paint_pixels(pix: &Pix, coords: &[(u32, u32)], rgb: (u8, u8, u8)) -> Pix {
    let (r, g, b) = rgb;
    let value = color::compose_rgb(r, g, b);
    let mut pm = pix.to_mut();
    for &(x, y) in coords {
        if x < pix.width() && y < pix.height() {
            pm.set_pixel_unchecked(x, y, value);
        }
    }
    pm.into()
}

/// Create a checkerboard of `cell` x `cell` squares alternating between
/// `even` and `odd`, starting with `even` at the origin.
pub fn checkerboard(
    width: u32,
    height: u32,
    cell: u32,
    even: (u8, u8, u8),
    odd: (u8, u8, u8),
) -> TestResult<Pix> {
    let cell = cell.max(1);
    let base = solid_image(width, height, even)?;
    let mut pm = base.to_mut();
    let odd = color::compose_rgb(odd.0, odd.1, odd.2);
    for y in 0..height {
        for x in 0..width {
            if ((x / cell) + (y / cell)) % 2 == 1 {
                pm.set_pixel_unchecked(x, y, odd);
            }
        }
    }
    Ok(pm.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_block_clips() {
        let pix = solid_image(4, 4, (255, 255, 255)).unwrap();
        let out = paint_block(&pix, 2, 2, 10, 10, (0, 0, 0));
        assert_eq!(out.get_rgb(3, 3), Some((0, 0, 0)));
        assert_eq!(out.get_rgb(1, 1), Some((255, 255, 255)));
        // source is untouched
        assert_eq!(pix.get_rgb(3, 3), Some((255, 255, 255)));
    }

    #[test]
    fn test_checkerboard_cells() {
        let pix = checkerboard(4, 4, 2, (0, 0, 0), (255, 255, 255)).unwrap();
        assert_eq!(pix.get_rgb(0, 0), Some((0, 0, 0)));
        assert_eq!(pix.get_rgb(2, 0), Some((255, 255, 255)));
        assert_eq!(pix.get_rgb(2, 2), Some((0, 0, 0)));
    }
}
