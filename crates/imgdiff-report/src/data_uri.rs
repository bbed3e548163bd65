//! Base64 data URIs for inline images

use crate::error::{ReportError, ReportResult};
use base64::{Engine as _, engine::general_purpose};
use imgdiff_core::{ImageFormat, Pix};

/// Image format used for embedded images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedFormat {
    /// Lossy JPEG
    #[default]
    Jpeg,
    /// Lossless PNG
    Png,
}

impl EmbedFormat {
    /// The image format used for encoding.
    pub fn image_format(self) -> ImageFormat {
        match self {
            EmbedFormat::Jpeg => ImageFormat::Jpeg,
            EmbedFormat::Png => ImageFormat::Png,
        }
    }

    /// MIME type placed in the data URI.
    pub fn mime_type(self) -> &'static str {
        self.image_format().mime_type()
    }
}

impl std::str::FromStr for EmbedFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(EmbedFormat::Jpeg),
            "png" => Ok(EmbedFormat::Png),
            other => Err(format!("unknown embed format '{}'", other)),
        }
    }
}

/// Encode an image as `data:<mime>;base64,<payload>`.
///
/// `quality` applies to JPEG only.
pub fn encode_data_uri(pix: &Pix, format: EmbedFormat, quality: u8) -> ReportResult<String> {
    let bytes = imgdiff_io::write_image_mem(pix, format.image_format(), quality)?;
    log::debug!(
        "embedding {}x{} image as {} ({} bytes)",
        pix.width(),
        pix.height(),
        format.mime_type(),
        bytes.len()
    );
    Ok(format!(
        "data:{};base64,{}",
        format.mime_type(),
        general_purpose::STANDARD.encode(bytes)
    ))
}

/// Decode a Base64 image data URI back into an image.
pub fn decode_data_uri(uri: &str) -> ReportResult<Pix> {
    if !uri.starts_with("data:image/") {
        return Err(ReportError::InvalidDataUri(
            "missing data:image/ prefix".to_string(),
        ));
    }
    let start = uri
        .find(";base64,")
        .ok_or_else(|| ReportError::InvalidDataUri("missing ;base64, marker".to_string()))?;
    let bytes = general_purpose::STANDARD
        .decode(&uri[start + 8..])
        .map_err(|e| ReportError::InvalidDataUri(format!("Base64 decode failed: {}", e)))?;
    Ok(imgdiff_io::read_image_mem(&bytes)?)
}
