//! Image compositing
//!
//! Source-over compositing of a 32 bpp RGBA overlay onto a 32 bpp base.

use super::{Pix, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

impl Pix {
    /// Composite `overlay` on top of this image with the "over" operator.
    ///
    /// Opaque overlay pixels replace the base and transparent ones leave it
    /// unchanged. The output alpha is `a + ba * (255 - a) / 255`. A base
    /// with spp 3 is treated as opaque. The result keeps the base's spp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the images differ in size and
    /// [`Error::UnsupportedDepth`] if either is not 32 bpp.
    pub fn composite_over(&self, overlay: &Pix) -> Result<Pix> {
        self.check_same_size(overlay)?;
        for pix in [self, overlay] {
            if pix.depth() != PixelDepth::Bit32 {
                return Err(Error::UnsupportedDepth(pix.depth().bits()));
            }
        }

        let base_has_alpha = self.spp() == 4;
        let mut out = self.to_mut();
        for (dst, &src) in out.data_mut().iter_mut().zip(overlay.data()) {
            if color::alpha(src) == 0 {
                continue;
            }
            let base = if base_has_alpha {
                *dst
            } else {
                *dst | 0xff
            };
            *dst = blend_pixel(base, src);
        }

        Ok(out.into())
    }
}

fn blend_pixel(base: u32, over: u32) -> u32 {
    let (br, bg, bb, ba) = color::extract_rgba(base);
    let (or, og, ob, oa) = color::extract_rgba(over);
    let (a, ba) = (oa as u32, ba as u32);

    let out_a = a + (ba * (255 - a) + 127) / 255;
    if out_a == 0 {
        return 0;
    }
    // premultiplied sum scaled by 255, divided back by the output alpha
    let denom = out_a * 255;
    let mix = |b: u8, o: u8| {
        let num = o as u32 * a * 255 + b as u32 * ba * (255 - a);
        ((num + denom / 2) / denom).min(255) as u8
    };
    color::compose_rgba(mix(br, or), mix(bg, og), mix(bb, ob), out_a as u8)
}
