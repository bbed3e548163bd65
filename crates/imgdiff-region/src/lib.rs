//! imgdiff-region - Difference region processing
//!
//! This crate turns a [`DiffSet`](imgdiff_core::DiffSet) into outlined
//! regions:
//!
//! - **Labeling** - 4-connected flood fill with strict or tolerant adjacency
//! - **Dilation** - square (Chebyshev) growth of binary masks
//! - **Selection** - dropping regions below a minimum pixel count
//! - **Outlines** - bounding boxes drawn over a base image
//!
//! # Examples
//!
//! ```
//! use imgdiff_core::{DiffSet, Pix, color};
//! use imgdiff_region::{
//!     Adjacency, OutlineOptions, label_differences, render_outlines, select_by_min_size,
//! };
//!
//! let a = Pix::new_filled(20, 20, color::compose_rgb(255, 255, 255)).unwrap();
//! let mut b = a.to_mut();
//! for y in 0..3 {
//!     for x in 0..3 {
//!         b.set_rgb(x, y, 0, 0, 0).unwrap();
//!         b.set_rgb(17 + x, 17 + y, 0, 0, 0).unwrap();
//!     }
//! }
//! let b: Pix = b.into();
//!
//! let diff = DiffSet::scan(&a, &b).unwrap();
//! let labels = label_differences(&diff, Adjacency::Strict).unwrap();
//! assert_eq!(labels.sizes(), &[9, 9]);
//!
//! let keep = select_by_min_size(labels.sizes(), 1);
//! let result = render_outlines(&b, &labels, &keep, &OutlineOptions::default()).unwrap();
//! assert_eq!(result.count, 2);
//! ```

pub mod conncomp;
pub mod dilate;
pub mod error;
pub mod label;
pub mod outline;
pub mod select;

// Re-export core types
pub use imgdiff_core;

pub use conncomp::{Adjacency, Region};
pub use dilate::dilate_chebyshev;
pub use error::{RegionError, RegionResult};
pub use label::{RegionLabels, label_differences};
pub use outline::{OutlineOptions, OutlineResult, component_bounds, render_outlines};
pub use select::select_by_min_size;
