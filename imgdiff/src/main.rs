use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use imgdiff::region::Adjacency;
use imgdiff::report::{EmbedFormat, ReportOptions};
use imgdiff::{DiffOptions, ImageFormat, compare_files};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Compare two images and write an HTML report outlining the regions that differ"
)]
struct Args {
    /// First image (shown unmarked in the report)
    image_a: PathBuf,

    /// Second image (differences are outlined on it)
    image_b: PathBuf,

    /// Path of the HTML report
    #[arg(short, long, default_value = "comparison.html")]
    output: PathBuf,

    /// Merge regions separated by gaps narrower than 2 * R + 1 pixels
    #[arg(long, value_name = "R")]
    tolerance: Option<u32>,

    /// Ignore regions with fewer pixels than this
    #[arg(long, value_name = "N", default_value_t = 1)]
    min_region_size: u32,

    /// Format of the images embedded in the report
    #[arg(long, value_enum, default_value_t = Format::Jpeg)]
    format: Format,

    /// JPEG quality of the embedded images
    #[arg(long, default_value_t = 75, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Also save the annotated second image here (format from extension)
    #[arg(long, value_name = "PATH")]
    annotated: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Jpeg,
    Png,
}

impl From<Format> for EmbedFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Jpeg => EmbedFormat::Jpeg,
            Format::Png => EmbedFormat::Png,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run(&Args::parse())
}

fn run(args: &Args) -> Result<()> {
    let adjacency = match args.tolerance {
        Some(radius) => Adjacency::Tolerant { radius },
        None => Adjacency::Strict,
    };
    let options = DiffOptions::default()
        .with_adjacency(adjacency)
        .with_min_region_size(args.min_region_size);
    let annotated = args
        .annotated
        .as_deref()
        .map(|path| annotated_format(path).map(|format| (path, format)))
        .transpose()?;

    let comparison = compare_files(&args.image_a, &args.image_b, &options).with_context(|| {
        format!(
            "Failed to compare {} with {}",
            args.image_a.display(),
            args.image_b.display()
        )
    })?;

    let report_options = ReportOptions::default()
        .with_format(args.format.into())
        .with_quality(args.quality);
    comparison
        .write_report(&args.output, &report_options)
        .with_context(|| format!("Failed to write report: {}", args.output.display()))?;

    if let Some((path, format)) = annotated {
        imgdiff::io::write_image_with_quality(&comparison.annotated, path, format, args.quality)
            .with_context(|| format!("Failed to save annotated image: {}", path.display()))?;
        println!("Annotated: {}", path.display());
    }

    if comparison.is_identical() {
        println!("Images are identical");
    } else {
        println!("Different areas: {}", comparison.count);
    }
    println!("Wrote: {}", args.output.display());
    Ok(())
}

/// Pick the output format of the annotated image from its extension.
fn annotated_format(path: &Path) -> Result<ImageFormat> {
    let format = imgdiff::io::format_from_extension(path);
    if format == ImageFormat::Unknown {
        bail!(
            "Cannot tell the image format of {}; use a .png or .jpg extension",
            path.display()
        );
    }
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotated_format() {
        assert_eq!(
            annotated_format(Path::new("out/diff.png")).unwrap(),
            ImageFormat::Png
        );
        assert_eq!(
            annotated_format(Path::new("diff.JPG")).unwrap(),
            ImageFormat::Jpeg
        );
        assert!(annotated_format(Path::new("diff.txt")).is_err());
        assert!(annotated_format(Path::new("diff")).is_err());
    }

    #[test]
    fn test_bad_annotated_path_rejected_before_comparing() {
        let report = std::env::temp_dir().join("imgdiff_bad_annotated.html");
        let _ = std::fs::remove_file(&report);
        let output = report.to_string_lossy().into_owned();
        let args = Args::try_parse_from([
            "imgdiff",
            "missing_a.png",
            "missing_b.png",
            "-o",
            output.as_str(),
            "--annotated",
            "diff.txt",
        ])
        .unwrap();

        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("Cannot tell the image format"));
        assert!(!report.exists());
    }
}
