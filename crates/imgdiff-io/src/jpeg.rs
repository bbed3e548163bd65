//! JPEG image format support
//!
//! Reads baseline and progressive JPEG with `jpeg-decoder` and writes
//! baseline JPEG with `jpeg-encoder`. Decoded images are always 32 bpp.

use crate::{DEFAULT_JPEG_QUALITY, IoError, IoResult};
use imgdiff_core::{ImageFormat, Pix, PixelDepth, color};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use std::io::{Read, Write};

/// Options for writing JPEG images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegOptions {
    /// Quality from 1 (worst) to 100 (best)
    pub quality: u8,
}

impl Default for JpegOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl JpegOptions {
    /// Set the quality
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }
}

/// Read a JPEG image from a reader.
///
/// Grayscale input is replicated into the color channels; CMYK input is
/// converted to RGB. Samples deeper than 8 bits are scaled down by the
/// frame's precision.
pub fn read_jpeg<R: Read>(mut reader: R) -> IoResult<Pix> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut decoder = Decoder::new(bytes.as_slice());
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG frame info".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let samples = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::L16 => 2,
        PixelFormat::RGB24 => 3,
        PixelFormat::CMYK32 => 4,
    };
    let needed = width as usize * height as usize * samples;
    if data.len() < needed {
        return Err(IoError::InvalidData(format!(
            "JPEG data too short: {} < {}",
            data.len(),
            needed
        )));
    }

    let precision = match info.pixel_format {
        PixelFormat::L16 => frame_precision(&bytes).unwrap_or(16),
        _ => 8,
    };

    let mut pix_mut = Pix::new(width, height, PixelDepth::Bit32)?
        .try_into_mut()
        .unwrap_or_else(|p| p.to_mut());
    pix_mut.set_informat(ImageFormat::Jpeg);

    for (i, px) in data.chunks_exact(samples).take(needed / samples).enumerate() {
        let pixel = match info.pixel_format {
            PixelFormat::L8 => color::compose_rgb(px[0], px[0], px[0]),
            PixelFormat::L16 => {
                let v = gray16_to_u8(u16::from_ne_bytes([px[0], px[1]]), precision);
                color::compose_rgb(v, v, v)
            }
            PixelFormat::RGB24 => color::compose_rgb(px[0], px[1], px[2]),
            PixelFormat::CMYK32 => {
                let k = 255 - px[3] as u32;
                let ch = |c: u8| ((255 - c as u32) * k / 255) as u8;
                color::compose_rgb(ch(px[0]), ch(px[1]), ch(px[2]))
            }
        };
        let x = (i % width as usize) as u32;
        let y = (i / width as usize) as u32;
        pix_mut.set_pixel_unchecked(x, y, pixel);
    }

    Ok(pix_mut.into())
}

/// Find the sample precision in the first start-of-frame segment.
fn frame_precision(data: &[u8]) -> Option<u8> {
    if data.get(..2)? != [0xFF, 0xD8] {
        return None;
    }
    let mut i = 2;
    while i + 1 < data.len() {
        if data[i] != 0xFF {
            return None;
        }
        let marker = data[i + 1];
        match marker {
            // fill byte
            0xFF => i += 1,
            0x01 | 0xD0..=0xD7 => i += 2,
            0xDA | 0xD9 => return None,
            _ => {
                let len = u16::from_be_bytes([*data.get(i + 2)?, *data.get(i + 3)?]) as usize;
                if matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC) {
                    return data.get(i + 4).copied();
                }
                i += 2 + len;
            }
        }
    }
    None
}

/// Scale a gray sample of `precision` bits (9..=16) down to 8 bits.
fn gray16_to_u8(sample: u16, precision: u8) -> u8 {
    let shift = precision.clamp(9, 16) - 8;
    (sample >> shift).min(255) as u8
}

/// Write a JPEG image.
///
/// 32 bpp images are written as RGB (alpha is dropped) and 8 bpp images
/// as grayscale.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] for quality outside 1..=100 or for
/// images wider or taller than 65535 pixels.
pub fn write_jpeg<W: Write>(pix: &Pix, writer: W, options: &JpegOptions) -> IoResult<()> {
    if !(1..=100).contains(&options.quality) {
        return Err(IoError::EncodeError(format!(
            "JPEG quality must be 1..=100, got {}",
            options.quality
        )));
    }
    let (width, height) = match (u16::try_from(pix.width()), u16::try_from(pix.height())) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(IoError::EncodeError(format!(
                "image too large for JPEG: {}x{}",
                pix.width(),
                pix.height()
            )));
        }
    };

    let (data, color_type) = match pix.depth() {
        PixelDepth::Bit32 => {
            let mut data = Vec::with_capacity(width as usize * height as usize * 3);
            for y in 0..pix.height() {
                for x in 0..pix.width() {
                    let (r, g, b) = color::extract_rgb(pix.get_pixel_unchecked(x, y));
                    data.extend_from_slice(&[r, g, b]);
                }
            }
            (data, ColorType::Rgb)
        }
        PixelDepth::Bit8 => {
            let mut data = Vec::with_capacity(width as usize * height as usize);
            for y in 0..pix.height() {
                for x in 0..pix.width() {
                    data.push(pix.get_pixel_unchecked(x, y) as u8);
                }
            }
            (data, ColorType::Luma)
        }
        depth => {
            return Err(IoError::UnsupportedFormat(format!(
                "JPEG output of {} bpp images",
                depth.bits()
            )));
        }
    };

    let encoder = Encoder::new(writer, options.quality);
    encoder
        .encode(&data, width, height, color_type)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn within(a: u8, b: u8, tol: u8) -> bool {
        a.abs_diff(b) <= tol
    }

    #[test]
    fn test_jpeg_roundtrip_solid() {
        let pix = Pix::new_filled(16, 16, color::compose_rgb(200, 40, 40)).unwrap();
        let mut buf = Vec::new();
        write_jpeg(&pix, &mut buf, &JpegOptions::default()).unwrap();
        assert_eq!(&buf[..3], &[0xFF, 0xD8, 0xFF]);

        let back = read_jpeg(Cursor::new(buf)).unwrap();
        assert_eq!((back.width(), back.height()), (16, 16));
        assert_eq!(back.depth(), PixelDepth::Bit32);
        assert_eq!(back.informat(), ImageFormat::Jpeg);
        let (r, g, b) = back.get_rgb(8, 8).unwrap();
        assert!(within(r, 200, 8) && within(g, 40, 8) && within(b, 40, 8));
    }

    #[test]
    fn test_jpeg_gray_decodes_to_rgb() {
        let mut pm = Pix::new(8, 8, PixelDepth::Bit8).unwrap().to_mut();
        pm.data_mut().fill(0x8080_8080);
        let mut buf = Vec::new();
        write_jpeg(&pm.into(), &mut buf, &JpegOptions::default()).unwrap();
        let back = read_jpeg(Cursor::new(buf)).unwrap();
        let (r, g, b) = back.get_rgb(3, 3).unwrap();
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert!(within(r, 128, 4));
    }

    #[test]
    fn test_frame_precision() {
        let mut buf = Vec::new();
        let pix = Pix::new(4, 4, PixelDepth::Bit32).unwrap();
        write_jpeg(&pix, &mut buf, &JpegOptions::default()).unwrap();
        assert_eq!(frame_precision(&buf), Some(8));

        // SOI, APP0 with two payload bytes, then a lossless SOF3 at 12 bits
        let lossless = [
            0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x04, 0x00, 0x00, 0xFF, 0xC3, 0x00, 0x0B, 12,
        ];
        assert_eq!(frame_precision(&lossless), Some(12));
        // a DHT segment is skipped, not mistaken for a frame header
        let dht_first = [0xFF, 0xD8, 0xFF, 0xC4, 0x00, 0x03, 0x00, 0xFF, 0xC1, 0x00, 0x0B, 8];
        assert_eq!(frame_precision(&dht_first), Some(8));
        assert_eq!(frame_precision(&[0x89, 0x50]), None);
        assert_eq!(frame_precision(&[0xFF, 0xD8, 0xFF, 0xDA]), None);
    }

    #[test]
    fn test_gray16_scaling() {
        assert_eq!(gray16_to_u8(4095, 12), 255);
        assert_eq!(gray16_to_u8(2048, 12), 128);
        assert_eq!(gray16_to_u8(0xFFFF, 16), 255);
        assert_eq!(gray16_to_u8(0x8000, 16), 128);
        assert_eq!(gray16_to_u8(511, 9), 255);
    }

    #[test]
    fn test_jpeg_rejects_bad_quality() {
        let pix = Pix::new(2, 2, PixelDepth::Bit32).unwrap();
        let opts = JpegOptions::default().with_quality(0);
        assert!(matches!(
            write_jpeg(&pix, Vec::new(), &opts),
            Err(IoError::EncodeError(_))
        ));
    }

    #[test]
    fn test_jpeg_rejects_oversized() {
        let pix = Pix::new(70_000, 1, PixelDepth::Bit8).unwrap();
        assert!(matches!(
            write_jpeg(&pix, Vec::new(), &JpegOptions::default()),
            Err(IoError::EncodeError(_))
        ));
    }
}
