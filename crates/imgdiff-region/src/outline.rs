//! Region bounds and outline rendering
//!
//! Computes bounding boxes for selected labels and draws them onto a copy
//! of a base image through a transparent overlay.

use crate::conncomp::Region;
use crate::error::{RegionError, RegionResult};
use crate::label::RegionLabels;
use imgdiff_core::{Box, Color, Pix, PixelDepth};
use std::collections::BTreeMap;

/// Options for outline rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineOptions {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels; extra width grows outward from the box
    pub width: u32,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            color: Color::RED,
            width: 1,
        }
    }
}

impl OutlineOptions {
    /// Set the stroke color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the stroke width
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }
}

/// Result of outlining regions on an image
#[derive(Debug, Clone)]
pub struct OutlineResult {
    /// The base image with outlines composited on top
    pub annotated: Pix,
    /// The outlined regions, ordered by label
    pub regions: Vec<Region>,
    /// Number of outlined regions
    pub count: u32,
}

/// Bounding boxes of the requested labels.
///
/// One scan of the label grid accumulates the inclusive min/max corners
/// and pixel count of each requested label. Labels that never occur in
/// the grid are omitted; the result is ordered by label.
///
/// # Errors
///
/// Returns [`RegionError::UnsupportedDepth`] if `labeled` is not 32 bpp.
pub fn component_bounds(labeled: &Pix, labels: &[u32]) -> RegionResult<Vec<Region>> {
    if labeled.depth() != PixelDepth::Bit32 {
        return Err(RegionError::UnsupportedDepth {
            expected: "32-bit (labeled image)",
            actual: labeled.depth().bits(),
        });
    }

    struct Accum {
        count: u32,
        min_x: u32,
        min_y: u32,
        max_x: u32,
        max_y: u32,
    }

    let mut wanted: BTreeMap<u32, Option<Accum>> =
        labels.iter().filter(|&&l| l > 0).map(|&l| (l, None)).collect();
    if wanted.is_empty() {
        return Ok(Vec::new());
    }

    for y in 0..labeled.height() {
        for (x, &label) in labeled.row_data(y).iter().enumerate() {
            if label == 0 {
                continue;
            }
            let Some(slot) = wanted.get_mut(&label) else {
                continue;
            };
            let x = x as u32;
            match slot {
                Some(acc) => {
                    acc.count += 1;
                    acc.min_x = acc.min_x.min(x);
                    acc.max_x = acc.max_x.max(x);
                    acc.max_y = y;
                }
                None => {
                    *slot = Some(Accum {
                        count: 1,
                        min_x: x,
                        min_y: y,
                        max_x: x,
                        max_y: y,
                    });
                }
            }
        }
    }

    Ok(wanted
        .into_iter()
        .filter_map(|(label, acc)| {
            let acc = acc?;
            let bounds = Box::from_inclusive(
                acc.min_x as i32,
                acc.min_y as i32,
                acc.max_x as i32,
                acc.max_y as i32,
            );
            Some(Region::new(label, acc.count, bounds))
        })
        .collect())
}

/// Outline the kept regions on a copy of `base`.
///
/// Each kept region's inclusive bounding box is stroked onto a fully
/// transparent RGBA overlay the size of the image, which is then
/// composited over `base`. Pixels away from the outlines keep their
/// original values.
///
/// # Errors
///
/// Returns [`RegionError::Core`] wrapping a dimension mismatch if `base`
/// and the label grid differ in size, [`RegionError::UnsupportedDepth`]
/// if `base` is not 32 bpp, and [`RegionError::InvalidParameters`] for a
/// zero stroke width or a label that does not exist.
pub fn render_outlines(
    base: &Pix,
    labels: &RegionLabels,
    keep: &[u32],
    options: &OutlineOptions,
) -> RegionResult<OutlineResult> {
    base.check_same_size(labels.labeled())?;
    if base.depth() != PixelDepth::Bit32 {
        return Err(RegionError::UnsupportedDepth {
            expected: "32-bit",
            actual: base.depth().bits(),
        });
    }
    if options.width == 0 {
        return Err(RegionError::InvalidParameters(
            "outline width must be at least 1".to_string(),
        ));
    }
    if let Some(&bad) = keep
        .iter()
        .find(|&&l| l == 0 || l > labels.num_regions())
    {
        return Err(RegionError::InvalidParameters(format!(
            "label {} not in 1..={}",
            bad,
            labels.num_regions()
        )));
    }

    let regions = component_bounds(labels.labeled(), keep)?;

    let mut overlay = Pix::new(base.width(), base.height(), PixelDepth::Bit32)?
        .try_into_mut()
        .unwrap_or_else(|p| p.to_mut());
    overlay.set_spp(4);
    for region in &regions {
        log::trace!(
            "outline region {} ({} px) at {}",
            region.label,
            region.pixel_count,
            region.bounds
        );
        overlay.render_box_color(&region.bounds, options.width, options.color)?;
    }
    let overlay: Pix = overlay.into();

    let annotated = base.composite_over(&overlay)?;
    let count = regions.len() as u32;

    if count == 0 && labels.num_regions() > 0 {
        log::warn!(
            "all {} difference regions were filtered out",
            labels.num_regions()
        );
    }
    log::debug!("outlined {} regions", count);

    Ok(OutlineResult {
        annotated,
        regions,
        count,
    })
}
