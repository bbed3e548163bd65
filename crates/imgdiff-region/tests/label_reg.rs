//! Region labeling regression test
//!
//! Builds pairs of synthetic images, scans their differences and checks
//! region counts, sizes and bounding boxes under strict and tolerant
//! adjacency.

use imgdiff_core::{Box, DiffSet};
use imgdiff_region::{Adjacency, component_bounds, label_differences, select_by_min_size};
use imgdiff_test::{RegParams, paint_block, paint_pixels, solid_image};

const WHITE: (u8, u8, u8) = (255, 255, 255);
const BLACK: (u8, u8, u8) = (0, 0, 0);

#[test]
fn label_reg() {
    let mut rp = RegParams::new("label");

    // --- Two pixels stacked vertically ---
    eprintln!("=== 4x4 vertical pair ===");
    let a = solid_image(4, 4, WHITE).unwrap();
    let b = paint_pixels(&a, &[(1, 1), (1, 2)], BLACK);
    let diff = DiffSet::scan(&a, &b).expect("scan");
    rp.compare_values(2.0, diff.len() as f64, 0.0);
    let labels = label_differences(&diff, Adjacency::Strict).expect("label");
    rp.compare_values(1.0, labels.num_regions() as f64, 0.0);
    rp.compare_values(2.0, labels.sizes()[0] as f64, 0.0);
    let regions = component_bounds(labels.labeled(), &[1]).expect("bounds");
    rp.compare_values(1.0, (regions[0].corners() == (1, 1, 1, 2)) as u8 as f64, 0.0);
    rp.compare_values(1.0, select_by_min_size(labels.sizes(), 1).len() as f64, 0.0);
    rp.compare_values(0.0, select_by_min_size(labels.sizes(), 3).len() as f64, 0.0);

    // --- Two 3x3 blocks in opposite corners ---
    eprintln!("=== 20x20 corner blocks ===");
    let a = solid_image(20, 20, WHITE).unwrap();
    let b = paint_block(&paint_block(&a, 0, 0, 3, 3, BLACK), 17, 17, 3, 3, BLACK);
    let diff = a.diff_set(&b).expect("scan");
    let labels = label_differences(&diff, Adjacency::Strict).expect("label");
    rp.compare_values(2.0, labels.num_regions() as f64, 0.0);
    for &size in labels.sizes() {
        rp.compare_values(9.0, size as f64, 0.0);
    }
    let regions = component_bounds(labels.labeled(), &[1, 2]).expect("bounds");
    rp.compare_values(
        1.0,
        (regions[0].bounds == Box::new_unchecked(0, 0, 3, 3)) as u8 as f64,
        0.0,
    );
    rp.compare_values(
        1.0,
        (regions[1].bounds == Box::new_unchecked(17, 17, 3, 3)) as u8 as f64,
        0.0,
    );
    for threshold in 0..=9 {
        rp.compare_values(
            2.0,
            select_by_min_size(labels.sizes(), threshold).len() as f64,
            0.0,
        );
    }
    rp.compare_values(0.0, select_by_min_size(labels.sizes(), 10).len() as f64, 0.0);

    // --- Isolated 5x5 block: box is exactly the block ---
    eprintln!("=== 5x5 block ===");
    let a = solid_image(32, 24, WHITE).unwrap();
    let b = paint_block(&a, 11, 7, 5, 5, (10, 200, 10));
    let diff = DiffSet::scan(&a, &b).expect("scan");
    let labels = label_differences(&diff, Adjacency::Strict).expect("label");
    rp.compare_values(1.0, labels.num_regions() as f64, 0.0);
    rp.compare_values(25.0, labels.total_labeled() as f64, 0.0);
    let regions = component_bounds(labels.labeled(), &[1]).expect("bounds");
    rp.compare_values(
        1.0,
        (regions[0].bounds == Box::new_unchecked(11, 7, 5, 5)) as u8 as f64,
        0.0,
    );

    // --- Tolerant adjacency bridges a one-pixel gap ---
    eprintln!("=== tolerant gap ===");
    let a = solid_image(10, 5, WHITE).unwrap();
    let b = paint_pixels(&a, &[(3, 2), (5, 2)], BLACK);
    let diff = DiffSet::scan(&a, &b).expect("scan");
    let strict = label_differences(&diff, Adjacency::Strict).expect("strict");
    let tolerant = label_differences(&diff, Adjacency::tolerant()).expect("tolerant");
    eprintln!(
        "strict: {} regions, tolerant: {} regions",
        strict.num_regions(),
        tolerant.num_regions()
    );
    rp.compare_values(2.0, strict.num_regions() as f64, 0.0);
    rp.compare_values(1.0, tolerant.num_regions() as f64, 0.0);

    // --- Reruns are identical ---
    eprintln!("=== idempotence ===");
    let again = label_differences(&diff, Adjacency::tolerant()).expect("tolerant");
    rp.compare_pix(tolerant.labeled(), again.labeled());
    rp.compare_values(
        1.0,
        (tolerant.sizes() == again.sizes()) as u8 as f64,
        0.0,
    );

    // --- Identical images ---
    let a = solid_image(7, 7, WHITE).unwrap();
    let diff = DiffSet::scan(&a, &a.deep_clone()).expect("scan");
    let labels = label_differences(&diff, Adjacency::Strict).expect("label");
    rp.compare_values(0.0, labels.num_regions() as f64, 0.0);

    assert!(rp.cleanup(), "label regression test failed");
}
