//! Image discovery for the squarify pipeline.
//!
//! Stage 1 of the pipeline. Walks an input directory (optionally recursive)
//! and yields every file whose extension is in the known image set, in a
//! deterministic sorted order so repeated runs process files identically.
//!
//! ## What gets picked up
//!
//! ```text
//! Top Images/
//! ├── knight_01.png            # yes
//! ├── warcaster.JPG            # yes — extension match is case-insensitive
//! ├── notes.txt                # no  — not an image extension
//! ├── .DS_Store                # no  — hidden files are skipped
//! ├── THUMBS/                  # no  — previous pipeline output is skipped
//! │   └── knight_01.png
//! └── solos/
//!     └── gun_mage_02.webp     # yes (unless --no-recursive)
//! ```
//!
//! Skipping `THUMBS/` matters for `--inplace` runs: the thumbnail tree lives
//! inside the input directory there, and rescanning it would shrink every
//! thumbnail again on the next run.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Extensions the pipeline will pick up (lowercase; matched case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "webp", "bmp", "gif", "tif", "tiff"];

/// Name of the thumbnail subtree created by the writer; excluded from scans.
pub const THUMBS_DIR: &str = "THUMBS";

/// Whether a path has a known image extension.
pub fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Collect all image files under `root`, sorted for deterministic order.
///
/// With `recursive` false, only the top level of `root` is scanned.
/// Hidden entries and the `THUMBS` output subtree are always skipped.
pub fn scan_images(root: &Path, recursive: bool) -> Result<Vec<PathBuf>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(root)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            // The root itself always passes, whatever it is named
            e.depth() == 0 || (!is_hidden(&name) && name != THUMBS_DIR)
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_image(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }
    Ok(files)
}
