//! Error type for the comparison pipeline

use imgdiff_io::IoError;
use imgdiff_region::RegionError;
use imgdiff_report::ReportError;
use thiserror::Error;

/// Errors from any stage of a comparison
#[derive(Debug, Error)]
pub enum CompareError {
    /// Scanning failed, e.g. the images differ in size
    #[error(transparent)]
    Core(#[from] imgdiff_core::Error),

    /// Labeling or outlining failed
    #[error(transparent)]
    Region(#[from] RegionError),

    /// Reading an input image or writing the annotated image failed
    #[error(transparent)]
    Io(#[from] IoError),

    /// Rendering or writing the report failed
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl CompareError {
    /// True if the two images had different dimensions.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(
            self,
            CompareError::Core(imgdiff_core::Error::DimensionMismatch { .. })
                | CompareError::Region(RegionError::Core(
                    imgdiff_core::Error::DimensionMismatch { .. }
                ))
        )
    }
}

/// Result type for comparison operations
pub type CompareResult<T> = Result<T, CompareError>;
