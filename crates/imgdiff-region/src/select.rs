//! Region selection by size
//!
//! Drops regions whose pixel count falls below a threshold. Dropped
//! regions are neither outlined nor counted.

/// Labels whose pixel count is at least `min_size`, in ascending order.
///
/// `sizes` is indexed by `label - 1`. A `min_size` of 0 or 1 keeps every
/// region. Raising `min_size` never adds labels.
///
/// # Examples
///
/// ```
/// use imgdiff_region::select_by_min_size;
///
/// assert_eq!(select_by_min_size(&[2, 9, 1, 9], 3), vec![2, 4]);
/// assert_eq!(select_by_min_size(&[2, 9], 0), vec![1, 2]);
/// ```
pub fn select_by_min_size(sizes: &[u32], min_size: u32) -> Vec<u32> {
    let kept: Vec<u32> = (1u32..)
        .zip(sizes)
        .filter(|&(_, &size)| size >= min_size)
        .map(|(label, _)| label)
        .collect();

    log::debug!(
        "size filter >= {}: kept {} of {} regions",
        min_size,
        kept.len(),
        sizes.len()
    );
    kept
}
