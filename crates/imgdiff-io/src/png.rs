//! PNG image format support
//!
//! Every PNG is decoded to a 32 bpp `Pix`: palettes are expanded, gray is
//! replicated into the color channels, and 16-bit samples are reduced to
//! 8 bits. Images with an alpha channel (or a tRNS chunk) get spp 4.

use crate::{IoError, IoResult};
use imgdiff_core::{ImageFormat, Pix, PixelDepth, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let width = reader.info().width;
    let height = reader.info().height;
    let (color_type, bit_depth) = reader.output_color_type();

    let samples = match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight) => 1,
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => 2,
        (ColorType::Rgb, BitDepth::Eight) => 3,
        (ColorType::Rgba, BitDepth::Eight) => 4,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let mut pix_mut = Pix::new(width, height, PixelDepth::Bit32)?
        .try_into_mut()
        .unwrap_or_else(|p| p.to_mut());
    pix_mut.set_informat(ImageFormat::Png);
    if samples == 2 || samples == 4 {
        pix_mut.set_spp(4);
    }

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for x in 0..width {
            let idx = row_start + x as usize * samples;
            let px = &data[idx..idx + samples];
            let pixel = match samples {
                1 => color::compose_rgb(px[0], px[0], px[0]),
                2 => color::compose_rgba(px[0], px[0], px[0], px[1]),
                3 => color::compose_rgb(px[0], px[1], px[2]),
                _ => color::compose_rgba(px[0], px[1], px[2], px[3]),
            };
            pix_mut.set_pixel_unchecked(x, y, pixel);
        }
    }

    Ok(pix_mut.into())
}

/// Write a PNG image
///
/// 32 bpp images are written as RGBA when spp is 4 and as RGB otherwise.
/// 8 bpp and 1 bpp images are written as grayscale at their own depth.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();

    let (color_type, bit_depth, bytes_per_row) = match pix.depth() {
        PixelDepth::Bit1 => (ColorType::Grayscale, BitDepth::One, width.div_ceil(8)),
        PixelDepth::Bit8 => (ColorType::Grayscale, BitDepth::Eight, width),
        PixelDepth::Bit32 if pix.spp() == 4 => (ColorType::Rgba, BitDepth::Eight, width * 4),
        PixelDepth::Bit32 => (ColorType::Rgb, BitDepth::Eight, width * 3),
        depth => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNG output of {} bpp images",
                depth.bits()
            )));
        }
    };
    let bytes_per_row = bytes_per_row as usize;

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(bit_depth);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = vec![0u8; bytes_per_row * height as usize];

    for y in 0..height {
        let row = &mut data[y as usize * bytes_per_row..(y as usize + 1) * bytes_per_row];
        for x in 0..width {
            let val = pix.get_pixel_unchecked(x, y);
            let xi = x as usize;
            match color_type {
                ColorType::Grayscale if bit_depth == BitDepth::One => {
                    if val != 0 {
                        row[xi / 8] |= 1 << (7 - (xi % 8));
                    }
                }
                ColorType::Grayscale => row[xi] = val as u8,
                ColorType::Rgba => {
                    let (r, g, b, a) = color::extract_rgba(val);
                    row[xi * 4..xi * 4 + 4].copy_from_slice(&[r, g, b, a]);
                }
                _ => {
                    let (r, g, b) = color::extract_rgb(val);
                    row[xi * 3..xi * 3 + 3].copy_from_slice(&[r, g, b]);
                }
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn roundtrip(pix: &Pix) -> Pix {
        let mut buffer = Vec::new();
        write_png(pix, &mut buffer).unwrap();
        read_png(Cursor::new(buffer)).unwrap()
    }

    #[test]
    fn test_png_roundtrip_rgb() {
        let pix = Pix::new(5, 5, PixelDepth::Bit32).unwrap();
        let mut pix_mut = pix.try_into_mut().unwrap();
        pix_mut.set_rgb(0, 0, 255, 0, 0).unwrap();
        pix_mut.set_rgb(1, 1, 0, 255, 0).unwrap();
        pix_mut.set_rgb(2, 2, 0, 0, 255).unwrap();
        let pix: Pix = pix_mut.into();

        let pix2 = roundtrip(&pix);
        assert_eq!(pix2.depth(), PixelDepth::Bit32);
        assert_eq!(pix2.informat(), ImageFormat::Png);
        assert_eq!(pix2.get_rgb(0, 0), Some((255, 0, 0)));
        assert_eq!(pix2.get_rgb(1, 1), Some((0, 255, 0)));
        assert_eq!(pix2.get_rgb(2, 2), Some((0, 0, 255)));
        // RGB output is opaque
        assert_eq!(pix2.get_rgba(3, 3), Some((0, 0, 0, 255)));
    }

    #[test]
    fn test_png_roundtrip_rgba_keeps_alpha() {
        let mut pix_mut = Pix::new(2, 1, PixelDepth::Bit32).unwrap().to_mut();
        pix_mut.set_spp(4);
        pix_mut.set_rgba(0, 0, 10, 20, 30, 40).unwrap();
        let pix2 = roundtrip(&pix_mut.into());
        assert_eq!(pix2.spp(), 4);
        assert_eq!(pix2.get_rgba(0, 0), Some((10, 20, 30, 40)));
    }

    #[test]
    fn test_png_gray_decodes_to_rgb() {
        let mut pix_mut = Pix::new(10, 10, PixelDepth::Bit8).unwrap().to_mut();
        for y in 0..10 {
            for x in 0..10 {
                pix_mut.set_pixel(x, y, (x + y) * 10).unwrap();
            }
        }
        let pix2 = roundtrip(&pix_mut.into());
        assert_eq!(pix2.depth(), PixelDepth::Bit32);
        assert_eq!(pix2.get_rgb(3, 4), Some((70, 70, 70)));
    }

    #[test]
    fn test_png_binary_expands() {
        let mut pix_mut = Pix::new(9, 2, PixelDepth::Bit1).unwrap().to_mut();
        pix_mut.set_pixel(8, 1, 1).unwrap();
        let pix2 = roundtrip(&pix_mut.into());
        assert_eq!(pix2.get_rgb(8, 1), Some((255, 255, 255)));
        assert_eq!(pix2.get_rgb(7, 1), Some((0, 0, 0)));
    }

    #[test]
    fn test_png_rejects_other_depths() {
        let pix = Pix::new(4, 4, PixelDepth::Bit4).unwrap();
        assert!(matches!(
            write_png(&pix, Vec::new()),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_png_garbage() {
        assert!(read_png(Cursor::new(b"\x89PNG\r\n\x1a\nnot really".to_vec())).is_err());
    }
}
