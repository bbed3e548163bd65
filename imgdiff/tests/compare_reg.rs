//! End-to-end comparison regression test
//!
//! Runs whole comparisons on synthetic image pairs: identical inputs,
//! mismatched sizes, size filtering, disjoint and merged regions, and the
//! file-based entry point with its HTML report.

use imgdiff::io::write_image;
use imgdiff::report::{EmbedFormat, IDENTICAL_MESSAGE, ReportOptions};
use imgdiff::{Box, DiffOptions, ImageFormat, compare_files, compare_images};
use imgdiff_test::{RegParams, paint_block, paint_pixels, regout_dir, solid_image};

const WHITE: (u8, u8, u8) = (255, 255, 255);
const BLACK: (u8, u8, u8) = (0, 0, 0);

#[test]
fn compare_reg() {
    let mut rp = RegParams::new("compare");

    // --- Identical images ---
    let blank = solid_image(20, 20, WHITE).unwrap();
    let result = compare_images(&blank, &blank, &DiffOptions::default()).expect("identical");
    rp.compare_values(0.0, result.count as f64, 0.0);
    rp.compare_values(0.0, result.diff.len() as f64, 0.0);
    rp.compare_pix(&blank, &result.annotated);
    let html = result
        .render_report(&ReportOptions::default())
        .expect("report");
    rp.compare_values(1.0, html.contains(IDENTICAL_MESSAGE) as u8 as f64, 0.0);

    // --- Size mismatch is rejected ---
    let square = solid_image(10, 10, WHITE).unwrap();
    let tall = solid_image(10, 11, WHITE).unwrap();
    let err = compare_images(&square, &tall, &DiffOptions::default()).unwrap_err();
    rp.compare_values(1.0, err.is_dimension_mismatch() as u8 as f64, 0.0);

    // --- Two vertical pixels, threshold 1 and 3 ---
    let small = solid_image(4, 4, WHITE).unwrap();
    let pair = paint_pixels(&small, &[(1, 1), (1, 2)], BLACK);
    let result = compare_images(&small, &pair, &DiffOptions::default()).expect("pair");
    rp.compare_values(1.0, result.count as f64, 0.0);
    rp.compare_values(
        1.0,
        (result.regions[0].bounds == Box::from_inclusive(1, 1, 1, 2)) as u8 as f64,
        0.0,
    );
    let opts = DiffOptions::default().with_min_region_size(3);
    let result = compare_images(&small, &pair, &opts).expect("pair filtered");
    rp.compare_values(0.0, result.count as f64, 0.0);
    rp.compare_pix(&pair, &result.annotated);

    // --- Opposite corners are separate regions ---
    let corners = paint_pixels(&blank, &[(0, 0), (19, 19)], BLACK);
    let result = compare_images(&blank, &corners, &DiffOptions::default()).expect("corners");
    rp.compare_values(2.0, result.count as f64, 0.0);
    let red = Some((255u8, 0u8, 0u8));
    rp.compare_values(1.0, (result.annotated.get_rgb(0, 0) == red) as u8 as f64, 0.0);
    rp.compare_values(1.0, (result.annotated.get_rgb(19, 19) == red) as u8 as f64, 0.0);

    // --- Solid block gives one region of 25 pixels ---
    let block = paint_block(&blank, 5, 5, 5, 5, BLACK);
    let result = compare_images(&blank, &block, &DiffOptions::default()).expect("block");
    rp.compare_values(1.0, result.count as f64, 0.0);
    rp.compare_values(25.0, result.regions[0].pixel_count as f64, 0.0);
    rp.compare_values(
        1.0,
        (result.regions[0].corners() == (5, 5, 9, 9)) as u8 as f64,
        0.0,
    );
    // interior keeps the second image's pixels
    rp.compare_values(
        1.0,
        (result.annotated.get_rgb(7, 7) == Some(BLACK)) as u8 as f64,
        0.0,
    );
    rp.write_pix_and_check(&result.annotated, ImageFormat::Png)
        .expect("write block");

    // --- A one-pixel gap splits strict regions but not tolerant ones ---
    let gap = paint_pixels(&blank, &[(3, 3), (5, 3)], BLACK);
    let strict = compare_images(&blank, &gap, &DiffOptions::default()).expect("strict");
    rp.compare_values(2.0, strict.count as f64, 0.0);
    let tolerant = compare_images(&blank, &gap, &DiffOptions::tolerant(1)).expect("tolerant");
    rp.compare_values(1.0, tolerant.count as f64, 0.0);

    // --- Re-running gives the same result ---
    let first = compare_images(&blank, &block, &DiffOptions::default()).expect("first");
    let again = compare_images(&blank, &block, &DiffOptions::default()).expect("again");
    rp.compare_values(first.count as f64, again.count as f64, 0.0);
    rp.compare_pix(&first.annotated, &again.annotated);

    // --- From files, with a written report ---
    let path_a = format!("{}/compare_a.png", regout_dir());
    let path_b = format!("{}/compare_b.png", regout_dir());
    write_image(&blank, &path_a, ImageFormat::Png).expect("write a");
    write_image(&block, &path_b, ImageFormat::Png).expect("write b");
    let result = compare_files(&path_a, &path_b, &DiffOptions::default()).expect("files");
    rp.compare_values(1.0, result.count as f64, 0.0);

    let report = format!("{}/compare_report.html", regout_dir());
    let opts = ReportOptions::default().with_format(EmbedFormat::Png);
    result.write_report(&report, &opts).expect("write report");
    let html = std::fs::read_to_string(&report).expect("read report");
    rp.compare_values(
        1.0,
        html.contains("<p>Number of different areas: 1.</p>") as u8 as f64,
        0.0,
    );
    rp.compare_values(
        2.0,
        html.matches("src=\"data:image/png;base64,").count() as f64,
        0.0,
    );

    let missing = format!("{}/compare_missing.png", regout_dir());
    let unreadable = compare_files(&path_a, &missing, &DiffOptions::default());
    rp.compare_values(1.0, unreadable.is_err() as u8 as f64, 0.0);

    assert!(rp.cleanup(), "compare regression test failed");
}
