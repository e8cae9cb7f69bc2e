//! # art-prep
//!
//! Batch tools for preparing a tabletop-model art library: a square-crop
//! normalizer with thumbnail generation, and a fuzzy matcher that pairs
//! spreadsheet-listed model names with image files on disk.
//!
//! # Two Independent Pipelines
//!
//! The crate ships two binaries that share nothing but this library:
//!
//! ```text
//! squarify    folder/  →  folder (square)/ + THUMBS/    (crop, downscale, thumbnail)
//! match-art   units.xlsx + art/  →  renamed copies + report.csv
//! ```
//!
//! **squarify** walks an image folder, corrects EXIF orientation,
//! center-crops anything non-square, optionally downscales, and derives a
//! bounded thumbnail for every image. It is best-effort: corrupt files are
//! logged and counted, the batch finishes, and the exit code reports partial
//! failure.
//!
//! **match-art** reads model names from a spreadsheet's `Name` column, scores
//! every art file against each name with a composite of string-similarity
//! metrics, and copies the best match under a deterministic filename — never
//! overwriting, always leaving a CSV audit row. It is deliberately a one-shot
//! batch tool configured by constants in its own source.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | walks the input tree, yields image files in deterministic order |
//! | [`imaging`] | pure-Rust pixel work: EXIF orientation, center crop, resize, encode |
//! | [`process`] | squarify driver — per-file isolation, dry-run, THUMBS mirroring |
//! | [`matching`] | loader, normalizer, composite scorer, resolution policy, CSV report |
//! | [`output`] | console formatting — pure `format_*` functions, print wrappers |
//!
//! # Design Decisions
//!
//! ## Decisions Are Data
//!
//! The matcher's five-way outcome (`Copied`, `DryRunCopy`, `SkippedExists`,
//! `AlreadyCorrect`, `NoMatch`) is a closed enum, not a string. Exhaustive
//! matches keep the console icons, CSV labels, and summary counts from ever
//! drifting apart.
//!
//! ## Pure Functions at the Core
//!
//! Crop geometry, name normalization, and similarity scoring are pure
//! functions with no I/O, so the interesting logic is unit tested without
//! touching the filesystem or encoding a single pixel. The drivers around
//! them stay thin.
//!
//! ## Dry-Run Means Zero Writes
//!
//! Both pipelines compute and print exactly the same decisions in dry-run
//! mode but create no files and no directories — not even the report. A
//! preview that is also a write is not a preview.

pub mod imaging;
pub mod matching;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
