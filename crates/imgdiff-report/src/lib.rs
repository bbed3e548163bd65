//! imgdiff-report - HTML comparison reports
//!
//! Builds a self-contained HTML page showing two images side by side,
//! each embedded as a Base64 data URI, with a line stating how many
//! difference regions were found.
//!
//! # Examples
//!
//! ```
//! use imgdiff_core::{Pix, color};
//! use imgdiff_report::{ReportOptions, render_report};
//!
//! let pix = Pix::new_filled(8, 8, color::compose_rgb(255, 255, 255)).unwrap();
//! let html = render_report(&pix, &pix, 0, &ReportOptions::default()).unwrap();
//! assert!(html.contains("<h1>Images are identical!</h1>"));
//! ```

pub mod data_uri;
pub mod error;
pub mod html;

pub use data_uri::{EmbedFormat, decode_data_uri, encode_data_uri};
pub use error::{ReportError, ReportResult};
pub use html::{
    IDENTICAL_MESSAGE, ReportOptions, escape_html, render_report, summary_html, write_report,
};
