//! Error types for imgdiff-report

use imgdiff_io::IoError;
use thiserror::Error;

/// Errors that can occur while building or writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing the report file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding an embedded image failed
    #[error("image error: {0}")]
    Image(#[from] IoError),

    /// A string is not a Base64 image data URI
    #[error("invalid data URI: {0}")]
    InvalidDataUri(String),
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;
