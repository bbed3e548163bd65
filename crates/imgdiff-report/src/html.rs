//! HTML report rendering
//!
//! The report shows the original and the annotated image side by side,
//! both inlined as data URIs, followed by a summary line.

use crate::data_uri::{EmbedFormat, encode_data_uri};
use crate::error::ReportResult;
use imgdiff_core::Pix;
use std::path::Path;

/// Heading shown when no difference regions were found
pub const IDENTICAL_MESSAGE: &str = "Images are identical!";

const STYLE: &str = "\
.container { display: flex; flex-direction: column; align-items: center; }
.images { display: flex; justify-content: center; }
.images img { margin: 10px; border: 1px solid black; max-width: 45%; }";

/// Options for report rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Document title
    pub title: String,
    /// Format of the embedded images
    pub format: EmbedFormat,
    /// JPEG quality for embedded images
    pub quality: u8,
    /// Alt text of the original image
    pub original_label: String,
    /// Alt text of the annotated image
    pub annotated_label: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "Image Comparison".to_string(),
            format: EmbedFormat::Jpeg,
            quality: imgdiff_io::DEFAULT_JPEG_QUALITY,
            original_label: "Image 1".to_string(),
            annotated_label: "Image 2".to_string(),
        }
    }
}

impl ReportOptions {
    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the embedded image format
    pub fn with_format(mut self, format: EmbedFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the JPEG quality
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Set the alt text of both images
    pub fn with_labels(
        mut self,
        original: impl Into<String>,
        annotated: impl Into<String>,
    ) -> Self {
        self.original_label = original.into();
        self.annotated_label = annotated.into();
        self
    }
}

/// Summary line for `count` difference regions.
pub fn summary_html(count: u32) -> String {
    if count == 0 {
        format!("<h1>{}</h1>", IDENTICAL_MESSAGE)
    } else {
        format!("<p>Number of different areas: {}.</p>", count)
    }
}

/// Render the complete HTML document.
pub fn render_report(
    original: &Pix,
    annotated: &Pix,
    count: u32,
    options: &ReportOptions,
) -> ReportResult<String> {
    let original_uri = encode_data_uri(original, options.format, options.quality)?;
    let annotated_uri = encode_data_uri(annotated, options.format, options.quality)?;

    let html = format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <title>{title}</title>\n\
         <style>\n{style}\n</style>\n\
         </head>\n\
         <body>\n\
         <div class=\"container\">\n\
         <div class=\"images\">\n\
         <img src=\"{original_uri}\" alt=\"{original_alt}\">\n\
         <img src=\"{annotated_uri}\" alt=\"{annotated_alt}\">\n\
         </div>\n\
         {summary}\n\
         </div>\n\
         </body>\n\
         </html>\n",
        title = escape_html(&options.title),
        style = STYLE,
        original_alt = escape_html(&options.original_label),
        annotated_alt = escape_html(&options.annotated_label),
        summary = summary_html(count),
    );
    Ok(html)
}

/// Render the report and write it to `path`, replacing any existing file.
pub fn write_report<P: AsRef<Path>>(
    path: P,
    original: &Pix,
    annotated: &Pix,
    count: u32,
    options: &ReportOptions,
) -> ReportResult<()> {
    let path = path.as_ref();
    let html = render_report(original, annotated, count, options)?;
    std::fs::write(path, &html)?;
    log::info!("wrote report {} ({} bytes)", path.display(), html.len());
    Ok(())
}

/// Escape text for use in HTML content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
