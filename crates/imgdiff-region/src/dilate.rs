//! Square dilation of binary masks
//!
//! Grows a 1 bpp mask so that every pixel within Chebyshev distance
//! `radius` of a set pixel becomes set. The square structuring element is
//! separable, so the work is one horizontal and one vertical pass, each
//! using a sliding window count.

use crate::error::{RegionError, RegionResult};
use imgdiff_core::{Pix, PixelDepth};

/// Dilate a 1 bpp mask with a `(2 * radius + 1)` square.
///
/// A radius of 0 returns a copy of the mask.
///
/// # Errors
///
/// Returns [`RegionError::UnsupportedDepth`] if the mask is not 1 bpp.
pub fn dilate_chebyshev(mask: &Pix, radius: u32) -> RegionResult<Pix> {
    if mask.depth() != PixelDepth::Bit1 {
        return Err(RegionError::UnsupportedDepth {
            expected: "1-bit",
            actual: mask.depth().bits(),
        });
    }
    if radius == 0 {
        return Ok(mask.clone());
    }

    let width = mask.width();
    let height = mask.height();

    let mut horiz = mask.create_template().to_mut();
    for y in 0..height {
        let row: Vec<bool> = (0..width)
            .map(|x| mask.get_pixel_unchecked(x, y) != 0)
            .collect();
        for (x, on) in window_any(&row, radius).into_iter().enumerate() {
            if on {
                horiz.set_pixel_unchecked(x as u32, y, 1);
            }
        }
    }

    let mut out = mask.create_template().to_mut();
    for x in 0..width {
        let col: Vec<bool> = (0..height)
            .map(|y| horiz.get_pixel_unchecked(x, y) != 0)
            .collect();
        for (y, on) in window_any(&col, radius).into_iter().enumerate() {
            if on {
                out.set_pixel_unchecked(x, y as u32, 1);
            }
        }
    }

    let out: Pix = out.into();
    log::trace!(
        "dilated {}x{} mask by radius {}: {} -> {} pixels",
        width,
        height,
        radius,
        count_on(mask),
        count_on(&out)
    );
    Ok(out)
}

/// For each index, whether any element within `radius` of it is set.
fn window_any(line: &[bool], radius: u32) -> Vec<bool> {
    let n = line.len();
    let r = radius as usize;
    let mut result = vec![false; n];
    // number of set elements in the window [i - r, i + r]
    let mut count: usize = line.iter().take(r.min(n)).filter(|&&b| b).count();
    for (i, out) in result.iter_mut().enumerate() {
        if let Some(&entering) = line.get(i + r)
            && entering
        {
            count += 1;
        }
        if i > r && line[i - r - 1] {
            count -= 1;
        }
        *out = count > 0;
    }
    result
}

fn count_on(pix: &Pix) -> u32 {
    pix.data().iter().map(|w| w.count_ones()).sum()
}
