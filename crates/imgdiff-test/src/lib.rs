//! imgdiff-test - Regression test framework for imgdiff
//!
//! Every crate's `tests/*_reg.rs` files drive their checks through
//! [`RegParams`], which supports three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! The [`fixtures`] module builds the small synthetic images the tests
//! compare against each other.
//!
//! # Usage
//!
//! ```ignore
//! use imgdiff_test::RegParams;
//!
//! let mut rp = RegParams::new("label");
//! rp.compare_values(2.0, labels.num_regions() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{checkerboard, paint_block, paint_pixels, solid_image};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // imgdiff-test is at crates/imgdiff-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
