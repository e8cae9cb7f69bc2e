//! The squarify pipeline driver: scan → transform → write.
//!
//! Takes every image under the input folder through the same steps:
//!
//! ```text
//! decode + EXIF orient
//!   → center-crop to square        (skipped when already square)
//!   → downscale to max × max      (only when --max-size is set and exceeded)
//!   → write square variant         (only when a crop or downscale happened)
//!   → derive bounded thumbnail     (always, from the square result)
//!   → write thumbnail under THUMBS/, mirroring the relative subpath
//! ```
//!
//! ## Output structure
//!
//! ```text
//! Top Images (square)/
//! ├── knight_01.png              # square variant (only if changed)
//! ├── solos/
//! │   └── gun_mage_02.webp
//! └── THUMBS/
//!     ├── knight_01.png          # thumbnail, mirrors the subpath
//!     └── solos/
//!         └── gun_mage_02.webp
//! ```
//!
//! ## Failure isolation
//!
//! A corrupt or undecodable file is logged with its relative path, counted,
//! and skipped; the batch keeps going. The caller turns a nonzero failure
//! count into exit code 1 so scripts can detect partial failure.
//!
//! Dry-run mode computes and prints exactly the same decisions but performs
//! zero filesystem writes.

use crate::imaging::{
    self, ImagingError, center_crop_region, load_oriented, make_thumbnail, needs_downscale,
    save_image,
};
use crate::output;
use crate::scan::{self, ScanError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Thumbnail output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ThumbFormat {
    /// Keep the square output's own extension.
    Same,
    Png,
    Jpg,
    Webp,
}

impl ThumbFormat {
    /// The extension thumbnails get, given the square output path.
    fn extension(self, square_path: &Path) -> String {
        match self {
            ThumbFormat::Same => square_path
                .extension()
                .map(|e| e.to_string_lossy().to_string())
                .unwrap_or_else(|| "png".to_string()),
            ThumbFormat::Png => "png".to_string(),
            ThumbFormat::Jpg => "jpg".to_string(),
            ThumbFormat::Webp => "webp".to_string(),
        }
    }
}

/// Everything the pipeline needs, resolved by the CLI layer.
///
/// `square_root` equals `input` for in-place runs; the driver itself does not
/// distinguish — `square_root.join(rel)` lands on the source file either way.
#[derive(Debug, Clone)]
pub struct SquarifyConfig {
    pub input: PathBuf,
    pub square_root: PathBuf,
    pub recursive: bool,
    pub max_size: Option<u32>,
    pub thumb_size: u32,
    pub thumb_format: ThumbFormat,
    pub dry_run: bool,
}

/// What happened to a single file, for display and counting.
#[derive(Debug, Clone, Copy)]
pub struct FileOutcome {
    pub original: (u32, u32),
    pub square: (u32, u32),
    /// True when a crop or downscale changed the image (square gets written).
    pub square_written: bool,
    pub thumb: (u32, u32),
}

/// Batch totals for the final summary and the exit code.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SquarifySummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Run the full pipeline over the input folder.
///
/// Per-file failures are printed and counted, never fatal. The only fatal
/// error is an unscannable input folder.
pub fn run(config: &SquarifyConfig) -> Result<SquarifySummary, ProcessError> {
    let files = scan::scan_images(&config.input, config.recursive)?;
    let thumbs_root = config.square_root.join(scan::THUMBS_DIR);

    let mut summary = SquarifySummary::default();
    for src in &files {
        let rel = src.strip_prefix(&config.input).unwrap_or(src);
        match process_one(src, rel, config, &thumbs_root) {
            Ok(outcome) => {
                println!("{}", output::format_square_line(rel, &outcome));
                if outcome.square_written {
                    summary.written += 1;
                } else {
                    summary.skipped += 1;
                }
            }
            Err(e) => {
                summary.failed += 1;
                println!("{}", output::format_square_failure(rel, &e));
            }
        }
    }
    Ok(summary)
}

/// Transform one image and write its outputs (unless dry-run).
fn process_one(
    src: &Path,
    rel: &Path,
    config: &SquarifyConfig,
    thumbs_root: &Path,
) -> Result<FileOutcome, ImagingError> {
    let img = load_oriented(src)?;
    let original = (img.width(), img.height());

    let cropped = center_crop_region(original.0, original.1).is_some();
    let img = imaging::center_crop_square(img);

    let downscaled = needs_downscale(img.width(), img.height(), config.max_size);
    let img = imaging::downscale_square(img, config.max_size);
    let square = (img.width(), img.height());

    let square_path = config.square_root.join(rel);
    let thumb_path = thumbs_root
        .join(rel)
        .with_extension(config.thumb_format.extension(&square_path));

    let thumb = make_thumbnail(&img, config.thumb_size);
    let thumb_dims = (thumb.width(), thumb.height());

    let square_written = cropped || downscaled;
    if !config.dry_run {
        if square_written {
            save_image(&img, &square_path)?;
        }
        save_image(&thumb, &thumb_path)?;
    }

    Ok(FileOutcome {
        original,
        square,
        square_written,
        thumb: thumb_dims,
    })
}
