//! Graphics rendering functions
//!
//! Point-array generation for lines and rectangle outlines, and rendering
//! of those point arrays onto images in a solid color.

use super::{PixMut, PixelDepth};
use crate::box_::Box;
use crate::error::{Error, Result};
use crate::pta::Pta;

/// RGBA color for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new opaque color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color with explicit alpha
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Black color
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// White color
    pub const WHITE: Color = Color::new(255, 255, 255);
    /// Red color
    pub const RED: Color = Color::new(255, 0, 0);
    /// Green color
    pub const GREEN: Color = Color::new(0, 255, 0);
    /// Blue color
    pub const BLUE: Color = Color::new(0, 0, 255);

    /// Convert to grayscale value (0-255)
    pub fn to_gray(&self) -> u8 {
        ((self.r as u32 + self.g as u32 + self.b as u32) / 3) as u8
    }

    /// Compose as 32-bit RGBA pixel
    pub fn to_pixel32(&self) -> u32 {
        crate::color::compose_rgba(self.r, self.g, self.b, self.a)
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Some(Color::with_alpha(byte(0)?, byte(2)?, byte(4)?, a))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// =============================================================================
// Point array generation helpers
// =============================================================================

/// Generate a point array for a line using Bresenham's integer algorithm.
///
/// The line connects `(x1, y1)` to `(x2, y2)` with 8-connectivity.
pub fn generate_line_pta(x1: i32, y1: i32, x2: i32, y2: i32) -> Pta {
    if x1 == x2 && y1 == y2 {
        let mut pta = Pta::with_capacity(1);
        pta.push(x1 as f32, y1 as f32);
        return pta;
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 > x1 { 1i32 } else { -1 };
    let sy = if y2 > y1 { 1i32 } else { -1 };

    let npts = dx.max(dy) + 1;
    let mut pta = Pta::with_capacity(npts as usize);

    let mut x = x1;
    let mut y = y1;

    if dx >= dy {
        // Step along x (more horizontal)
        let mut err = dx / 2;
        for _ in 0..npts {
            pta.push(x as f32, y as f32);
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
        }
    } else {
        // Step along y (more vertical)
        let mut err = dy / 2;
        for _ in 0..npts {
            pta.push(x as f32, y as f32);
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
        }
    }

    pta
}

/// Generate a point array for a box outline.
///
/// The first ring lies exactly on the box's edge pixels; each extra unit of
/// `width` adds a ring one pixel further out. Every pixel appears once, so
/// boxes one pixel wide or tall do not leak outside their edges.
pub fn generate_box_pta(b: &Box, width: u32) -> Pta {
    if b.w <= 0 || b.h <= 0 {
        return Pta::new();
    }

    let width = width.max(1) as i32;
    let mut result = Pta::with_capacity((2 * (b.w + b.h) * width) as usize);

    for ring in 0..width {
        let x0 = b.x - ring;
        let y0 = b.y - ring;
        let x1 = b.max_x() + ring;
        let y1 = b.max_y() + ring;

        result.join(&generate_line_pta(x0, y0, x1, y0));
        if y1 > y0 {
            result.join(&generate_line_pta(x0, y1, x1, y1));
        }
        if y1 - y0 >= 2 {
            result.join(&generate_line_pta(x0, y0 + 1, x0, y1 - 1));
            if x1 > x0 {
                result.join(&generate_line_pta(x1, y0 + 1, x1, y1 - 1));
            }
        }
    }

    result
}

// =============================================================================
// PixMut rendering implementations
// =============================================================================

impl PixMut {
    /// Render a point array with a specific color.
    ///
    /// Points outside the image bounds are clipped. For 32 bpp images the
    /// RGBA value is written verbatim, 8 bpp images receive the gray level
    /// and 1 bpp images are set wherever the gray level is nonzero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] for any other depth.
    pub fn render_pta_color(&mut self, pta: &Pta, color: Color) -> Result<()> {
        let w = self.width() as i32;
        let h = self.height() as i32;

        let pixel_val = match self.depth() {
            PixelDepth::Bit1 => u32::from(color.to_gray() > 0),
            PixelDepth::Bit8 => color.to_gray() as u32,
            PixelDepth::Bit32 => color.to_pixel32(),
            other => return Err(Error::UnsupportedDepth(other.bits())),
        };

        for (x, y) in pta.iter() {
            let xi = x as i32;
            let yi = y as i32;
            if xi < 0 || xi >= w || yi < 0 || yi >= h {
                continue;
            }
            self.set_pixel_unchecked(xi as u32, yi as u32, pixel_val);
        }

        Ok(())
    }

    /// Render a box outline with a specific color.
    pub fn render_box_color(&mut self, b: &Box, width: u32, color: Color) -> Result<()> {
        let pta = generate_box_pta(b, width.max(1));
        self.render_pta_color(&pta, color)
    }
}
