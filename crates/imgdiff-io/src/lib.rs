//! imgdiff-io - Image I/O for imgdiff
//!
//! Reads PNG and JPEG files into 32 bpp [`Pix`] images and writes them
//! back out. Formats are detected from magic numbers, never from file
//! extensions.
//!
//! # Features
//!
//! - `png-format` (default): PNG via the `png` crate
//! - `jpeg` (default): JPEG via `jpeg-decoder` / `jpeg-encoder`

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes, format_from_extension};
pub use imgdiff_core::ImageFormat;
#[cfg(feature = "jpeg")]
pub use jpeg::JpegOptions;

use imgdiff_core::Pix;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// JPEG quality used when none is given
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Read an image from a file path.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be opened,
/// [`IoError::UnsupportedFormat`] if the content is neither PNG nor JPEG
/// (or that format is disabled), and a decode error for corrupt data.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    log::debug!("reading {} as {:?}", path.display(), format);
    let reader = BufReader::new(File::open(path)?);
    read_image_format(reader, format)
}

/// Read an image from memory.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

#[allow(unused_variables)]
fn read_image_format<R>(reader: R, format: ImageFormat) -> IoResult<Pix>
where
    R: std::io::BufRead + std::io::Seek,
{
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        _ => Err(IoError::UnsupportedFormat(format!(
            "reading {:?} is not enabled",
            format
        ))),
    }
}

/// Write an image to a file path.
///
/// JPEG output uses [`DEFAULT_JPEG_QUALITY`]; use [`write_image_with_quality`]
/// to choose another.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    write_image_with_quality(pix, path, format, DEFAULT_JPEG_QUALITY)
}

/// Write an image to a file path with an explicit JPEG quality.
///
/// `quality` is ignored for PNG.
pub fn write_image_with_quality<P: AsRef<Path>>(
    pix: &Pix,
    path: P,
    format: ImageFormat,
    quality: u8,
) -> IoResult<()> {
    let path = path.as_ref();
    log::debug!(
        "writing {}x{} image to {} as {:?}",
        pix.width(),
        pix.height(),
        path.display(),
        format
    );
    let mut writer = BufWriter::new(File::create(path)?);
    write_image_format(pix, &mut writer, format, quality)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into memory.
pub fn write_image_mem(pix: &Pix, format: ImageFormat, quality: u8) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_image_format(pix, &mut buf, format, quality)?;
    Ok(buf)
}

#[allow(unused_variables)]
fn write_image_format<W: Write>(
    pix: &Pix,
    writer: W,
    format: ImageFormat,
    quality: u8,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => {
            jpeg::write_jpeg(pix, writer, &JpegOptions::default().with_quality(quality))
        }
        _ => Err(IoError::UnsupportedFormat(format!(
            "writing {:?} is not enabled",
            format
        ))),
    }
}
