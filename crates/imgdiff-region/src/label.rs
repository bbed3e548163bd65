//! Difference region labeling
//!
//! Groups the pixels of a [`DiffSet`] into 4-connected regions with a
//! breadth-first flood fill. Seeds are visited in the difference set's
//! row-major order, so the labeling is reproducible for fixed input.

use crate::conncomp::{Adjacency, neighbors_4};
use crate::dilate::dilate_chebyshev;
use crate::error::RegionResult;
use imgdiff_core::{DiffSet, Pix, PixelDepth};
use std::collections::VecDeque;

/// The outcome of labeling a difference set
#[derive(Debug, Clone)]
pub struct RegionLabels {
    labeled: Pix,
    sizes: Vec<u32>,
    adjacency: Adjacency,
}

impl RegionLabels {
    /// 32 bpp label grid; 0 means unlabeled.
    pub fn labeled(&self) -> &Pix {
        &self.labeled
    }

    /// Pixel count per region, indexed by `label - 1`.
    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    /// Number of regions found.
    pub fn num_regions(&self) -> u32 {
        self.sizes.len() as u32
    }

    /// Pixel count of one region, if the label exists.
    pub fn size_of(&self, label: u32) -> Option<u32> {
        let index = label.checked_sub(1)?;
        self.sizes.get(index as usize).copied()
    }

    /// Label at `(x, y)`; `Some(0)` for unlabeled pixels, `None` out of
    /// bounds.
    pub fn label_at(&self, x: u32, y: u32) -> Option<u32> {
        self.labeled.get_pixel(x, y)
    }

    /// Total number of labeled pixels.
    pub fn total_labeled(&self) -> u64 {
        self.sizes.iter().map(|&s| s as u64).sum()
    }

    /// The adjacency rule used to build these labels.
    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }
}

/// Label the connected regions of a difference set.
///
/// Each unlabeled seed (taken in row-major order) starts a new region and
/// a breadth-first fill claims every reachable admissible pixel. With
/// [`Adjacency::Strict`] only difference pixels are admissible; with
/// [`Adjacency::Tolerant`] any pixel within the radius of a difference
/// pixel is, so tolerant regions may include pixels that did not differ.
///
/// Every difference pixel ends up with exactly one positive label.
///
/// # Examples
///
/// ```
/// use imgdiff_core::DiffSet;
/// use imgdiff_region::{Adjacency, label_differences};
///
/// let diff = DiffSet::from_coords(4, 4, [(1, 1), (1, 2)]).unwrap();
/// let labels = label_differences(&diff, Adjacency::Strict).unwrap();
/// assert_eq!(labels.sizes(), &[2]);
/// ```
pub fn label_differences(diff: &DiffSet, adjacency: Adjacency) -> RegionResult<RegionLabels> {
    let width = diff.width();
    let height = diff.height();

    let admissible = match adjacency {
        Adjacency::Strict => diff.mask().clone(),
        Adjacency::Tolerant { radius } => dilate_chebyshev(diff.mask(), radius)?,
    };

    let mut labeled = Pix::new(width, height, PixelDepth::Bit32)?
        .try_into_mut()
        .unwrap_or_else(|p| p.to_mut());
    labeled.set_spp(1);

    let mut sizes: Vec<u32> = Vec::new();
    let mut queue = VecDeque::new();

    for &(sx, sy) in diff.coords() {
        if labeled.get_pixel_unchecked(sx, sy) != 0 {
            continue;
        }

        let label = sizes.len() as u32 + 1;
        labeled.set_pixel_unchecked(sx, sy, label);
        queue.push_back((sx, sy));
        let mut count = 0u32;

        while let Some((x, y)) = queue.pop_front() {
            debug_assert!(x < width && y < height, "({x}, {y}) escaped the image");
            count += 1;

            for (nx, ny) in neighbors_4(x, y, width, height) {
                if labeled.get_pixel_unchecked(nx, ny) == 0
                    && admissible.get_pixel_unchecked(nx, ny) != 0
                {
                    labeled.set_pixel_unchecked(nx, ny, label);
                    queue.push_back((nx, ny));
                }
            }
        }

        log::trace!("region {} seeded at ({}, {}): {} pixels", label, sx, sy, count);
        sizes.push(count);
    }

    log::debug!(
        "labeled {} difference pixels into {} regions ({:?})",
        diff.len(),
        sizes.len(),
        adjacency
    );

    Ok(RegionLabels {
        labeled: labeled.into(),
        sizes,
        adjacency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels_for(width: u32, height: u32, coords: &[(u32, u32)], adj: Adjacency) -> RegionLabels {
        let diff = DiffSet::from_coords(width, height, coords.iter().copied()).unwrap();
        label_differences(&diff, adj).unwrap()
    }

    #[test]
    fn test_empty_diff() {
        let labels = labels_for(5, 5, &[], Adjacency::Strict);
        assert_eq!(labels.num_regions(), 0);
        assert_eq!(labels.total_labeled(), 0);
        assert!(labels.labeled().data().iter().all(|&w| w == 0));
    }

    #[test]
    fn test_vertical_pair() {
        let labels = labels_for(4, 4, &[(1, 1), (1, 2)], Adjacency::Strict);
        assert_eq!(labels.sizes(), &[2]);
        assert_eq!(labels.label_at(1, 1), Some(1));
        assert_eq!(labels.label_at(1, 2), Some(1));
        assert_eq!(labels.label_at(0, 0), Some(0));
        assert_eq!(labels.label_at(4, 0), None);
    }

    #[test]
    fn test_diagonal_is_not_connected() {
        let labels = labels_for(3, 3, &[(0, 0), (1, 1)], Adjacency::Strict);
        assert_eq!(labels.sizes(), &[1, 1]);
        assert_eq!(labels.label_at(0, 0), Some(1));
        assert_eq!(labels.label_at(1, 1), Some(2));
    }

    #[test]
    fn test_labels_follow_row_major_seeds() {
        // U shape: the right arm is reached through the bottom row
        let coords = [(0, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)];
        let labels = labels_for(3, 3, &coords, Adjacency::Strict);
        assert_eq!(labels.sizes(), &[7]);
        assert_eq!(labels.label_at(2, 0), Some(1));
        assert_eq!(labels.label_at(1, 0), Some(0));
    }

    #[test]
    fn test_tolerant_bridges_gap() {
        let coords = [(1, 2), (3, 2)];
        let strict = labels_for(6, 5, &coords, Adjacency::Strict);
        assert_eq!(strict.num_regions(), 2);

        let tolerant = labels_for(6, 5, &coords, Adjacency::tolerant());
        assert_eq!(tolerant.num_regions(), 1);
        // the dilated area is columns 0..=4, rows 1..=3
        assert_eq!(tolerant.sizes(), &[15]);
        assert_eq!(tolerant.label_at(2, 2), Some(1));
        assert_eq!(tolerant.label_at(5, 2), Some(0));
    }

    #[test]
    fn test_tolerant_keeps_distant_regions_apart() {
        // a three-pixel gap is not narrower than 2 * radius + 1
        let coords = [(0, 0), (4, 0)];
        let tolerant = labels_for(5, 1, &coords, Adjacency::tolerant());
        assert_eq!(tolerant.num_regions(), 2);
    }

    #[test]
    fn test_tolerant_radius_zero_is_strict() {
        let coords = [(0, 0), (2, 0), (2, 1)];
        let strict = labels_for(4, 4, &coords, Adjacency::Strict);
        let zero = labels_for(4, 4, &coords, Adjacency::Tolerant { radius: 0 });
        assert_eq!(strict.sizes(), zero.sizes());
        assert!(strict.labeled().equals(zero.labeled()));
    }

    #[test]
    fn test_size_of() {
        let labels = labels_for(4, 1, &[(0, 0), (2, 0), (3, 0)], Adjacency::Strict);
        assert_eq!(labels.size_of(1), Some(1));
        assert_eq!(labels.size_of(2), Some(2));
        assert_eq!(labels.size_of(0), None);
        assert_eq!(labels.size_of(3), None);
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::select::select_by_min_size;
    use proptest::prelude::*;

    fn diff_strategy() -> impl Strategy<Value = DiffSet> {
        (1u32..24, 1u32..24).prop_flat_map(|(w, h)| {
            proptest::collection::vec((0..w, 0..h), 0..80)
                .prop_map(move |coords| DiffSet::from_coords(w, h, coords).unwrap())
        })
    }

    proptest! {
        #[test]
        fn prop_strict_sizes_sum_to_diff_len(diff in diff_strategy()) {
            let labels = label_differences(&diff, Adjacency::Strict).unwrap();
            prop_assert_eq!(labels.total_labeled(), diff.len() as u64);
            for &(x, y) in diff.coords() {
                prop_assert!(labels.label_at(x, y).unwrap() > 0);
            }
        }

        #[test]
        fn prop_tolerant_covers_every_diff_pixel(diff in diff_strategy(), radius in 0u32..3) {
            let strict = label_differences(&diff, Adjacency::Strict).unwrap();
            let tolerant = label_differences(&diff, Adjacency::Tolerant { radius }).unwrap();
            for &(x, y) in diff.coords() {
                prop_assert!(tolerant.label_at(x, y).unwrap() > 0);
            }
            prop_assert!(tolerant.total_labeled() >= diff.len() as u64);
            prop_assert!(tolerant.num_regions() <= strict.num_regions());
        }

        #[test]
        fn prop_labeling_is_deterministic(diff in diff_strategy()) {
            let a = label_differences(&diff, Adjacency::tolerant()).unwrap();
            let b = label_differences(&diff, Adjacency::tolerant()).unwrap();
            prop_assert_eq!(a.sizes(), b.sizes());
            prop_assert!(a.labeled().equals(b.labeled()));
        }

        #[test]
        fn prop_filter_is_monotonic(diff in diff_strategy(), t1 in 0u32..12, t2 in 0u32..12) {
            let labels = label_differences(&diff, Adjacency::Strict).unwrap();
            let (lo, hi) = (t1.min(t2), t1.max(t2));
            let kept_lo = select_by_min_size(labels.sizes(), lo);
            let kept_hi = select_by_min_size(labels.sizes(), hi);
            prop_assert!(kept_hi.len() <= kept_lo.len());
            prop_assert!(kept_hi.iter().all(|l| kept_lo.contains(l)));
        }
    }
}
