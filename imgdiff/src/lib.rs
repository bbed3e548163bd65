//! imgdiff - Pixel-exact image comparison
//!
//! Compares two equally-sized images pixel by pixel, groups the differing
//! pixels into connected regions, outlines every region that is large
//! enough, and writes a side-by-side HTML report.
//!
//! # Example
//!
//! ```
//! use imgdiff::{DiffOptions, Pix, color, compare_images};
//! use imgdiff::report::ReportOptions;
//!
//! let a = Pix::new_filled(20, 20, color::compose_rgb(255, 255, 255)).unwrap();
//! let result = compare_images(&a, &a, &DiffOptions::default()).unwrap();
//! assert!(result.is_identical());
//!
//! let html = result.render_report(&ReportOptions::default()).unwrap();
//! assert!(html.contains("Images are identical!"));
//! ```

mod compare;
mod error;

// Re-export core types (primary data structures used everywhere)
pub use imgdiff_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use imgdiff_io as io;
pub use imgdiff_region as region;
pub use imgdiff_report as report;

pub use compare::{Comparison, DiffOptions, compare_files, compare_images};
pub use error::{CompareError, CompareResult};
