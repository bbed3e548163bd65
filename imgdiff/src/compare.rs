//! End-to-end image comparison
//!
//! Scans two images for differing pixels, groups them into regions,
//! drops regions below the size threshold, and outlines the survivors on
//! a copy of the second image.

use crate::error::CompareResult;
use imgdiff_core::{DiffSet, Pix};
use imgdiff_region::{
    Adjacency, OutlineOptions, Region, RegionLabels, label_differences, render_outlines,
    select_by_min_size,
};
use imgdiff_report::ReportOptions;
use std::path::Path;

/// Options for a comparison run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Which neighbours may join a region
    pub adjacency: Adjacency,
    /// Regions with fewer pixels are dropped
    pub min_region_size: u32,
    /// How the surviving regions are outlined
    pub outline: OutlineOptions,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            adjacency: Adjacency::Strict,
            min_region_size: 1,
            outline: OutlineOptions::default(),
        }
    }
}

impl DiffOptions {
    /// Tolerant adjacency with the given radius, other options default
    pub fn tolerant(radius: u32) -> Self {
        Self::default().with_adjacency(Adjacency::Tolerant { radius })
    }

    /// Set the adjacency rule
    pub fn with_adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Set the minimum region size
    pub fn with_min_region_size(mut self, min_region_size: u32) -> Self {
        self.min_region_size = min_region_size;
        self
    }

    /// Set the outline options
    pub fn with_outline(mut self, outline: OutlineOptions) -> Self {
        self.outline = outline;
        self
    }
}

/// Everything produced by one comparison
#[derive(Debug, Clone)]
pub struct Comparison {
    /// The first image, as given
    pub original: Pix,
    /// The second image with the surviving regions outlined
    pub annotated: Pix,
    /// Pixels where the images differ
    pub diff: DiffSet,
    /// All regions before size filtering
    pub labels: RegionLabels,
    /// Surviving regions, ordered by label
    pub regions: Vec<Region>,
    /// Number of surviving regions
    pub count: u32,
}

impl Comparison {
    /// True if no region survived.
    pub fn is_identical(&self) -> bool {
        self.count == 0
    }

    /// Render the HTML report for this comparison.
    pub fn render_report(&self, options: &ReportOptions) -> CompareResult<String> {
        Ok(imgdiff_report::render_report(
            &self.original,
            &self.annotated,
            self.count,
            options,
        )?)
    }

    /// Write the HTML report for this comparison to `path`.
    pub fn write_report<P: AsRef<Path>>(
        &self,
        path: P,
        options: &ReportOptions,
    ) -> CompareResult<()> {
        imgdiff_report::write_report(path, &self.original, &self.annotated, self.count, options)?;
        Ok(())
    }
}

/// Compare two images.
///
/// # Errors
///
/// Fails with a dimension mismatch (see
/// [`CompareError::is_dimension_mismatch`](crate::CompareError::is_dimension_mismatch))
/// before any labeling if the images differ in size.
///
/// # Examples
///
/// ```
/// use imgdiff::{DiffOptions, Pix, color, compare_images};
///
/// let a = Pix::new_filled(4, 4, color::compose_rgb(255, 255, 255)).unwrap();
/// let mut b = a.to_mut();
/// b.set_rgb(1, 1, 0, 0, 0).unwrap();
/// b.set_rgb(1, 2, 0, 0, 0).unwrap();
///
/// let result = compare_images(&a, &b.into(), &DiffOptions::default()).unwrap();
/// assert_eq!(result.count, 1);
/// assert_eq!(result.regions[0].corners(), (1, 1, 1, 2));
/// ```
pub fn compare_images(a: &Pix, b: &Pix, options: &DiffOptions) -> CompareResult<Comparison> {
    let diff = DiffSet::scan(a, b)?;
    let labels = label_differences(&diff, options.adjacency)?;
    let keep = select_by_min_size(labels.sizes(), options.min_region_size);
    let outlined = render_outlines(b, &labels, &keep, &options.outline)?;

    log::info!(
        "{} differing pixels, {} regions, {} after size filter",
        diff.len(),
        labels.num_regions(),
        outlined.count
    );

    Ok(Comparison {
        original: a.clone(),
        annotated: outlined.annotated,
        diff,
        labels,
        regions: outlined.regions,
        count: outlined.count,
    })
}

/// Read two image files and compare them.
pub fn compare_files<P, Q>(
    path_a: P,
    path_b: Q,
    options: &DiffOptions,
) -> CompareResult<Comparison>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let a = imgdiff_io::read_image(path_a)?;
    let b = imgdiff_io::read_image(path_b)?;
    compare_images(&a, &b, options)
}
