//! Input loading for the matcher: spreadsheet names and candidate images.
//!
//! The spreadsheet side reads the first worksheet with `calamine`, requires a
//! `Name` header, and collects non-empty unique names in row order. The image
//! side indexes the top level of the art directory (no recursion — the art
//! folder is flat) and pre-computes each file's normalized stem once, since
//! every spreadsheet name is scored against every candidate.

use super::MatchError;
use super::normalize::normalize;
use calamine::{Reader, open_workbook_auto};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions considered candidate artwork.
pub const CANDIDATE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// A candidate image file, with its stem pre-normalized for scoring.
#[derive(Debug, Clone)]
pub struct MatchCandidate {
    pub path: PathBuf,
    /// Filename stem as it appears on disk (no extension).
    pub raw_stem: String,
    /// Normalized stem, computed once at index time.
    pub norm_stem: String,
}

/// Load model names from the `Name` column of the first worksheet.
///
/// Blank cells are skipped and duplicates are dropped, keeping first-seen
/// order so report rows line up with the spreadsheet.
pub fn load_model_names(excel_path: &Path) -> Result<Vec<String>, MatchError> {
    let mut workbook = open_workbook_auto(excel_path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(MatchError::EmptyWorkbook)??;

    let mut rows = range.rows();
    let header = rows.next().ok_or(MatchError::MissingNameColumn)?;
    let name_col = header
        .iter()
        .position(|cell| cell.to_string().trim() == "Name")
        .ok_or(MatchError::MissingNameColumn)?;

    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for row in rows {
        let Some(cell) = row.get(name_col) else {
            continue;
        };
        let value = cell.to_string().trim().to_string();
        if value.is_empty() || !seen.insert(value.clone()) {
            continue;
        }
        names.push(value);
    }
    Ok(names)
}

/// Index all candidate images in `dir` (top level only), sorted by filename.
///
/// The sort fixes the enumeration order that later breaks score ties, so
/// runs are deterministic regardless of directory iteration order.
pub fn index_images(dir: &Path) -> Result<Vec<MatchCandidate>, MatchError> {
    if !dir.is_dir() {
        return Err(MatchError::ImageDirNotFound(dir.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.to_string_lossy().to_lowercase())
                    .is_some_and(|ext| CANDIDATE_EXTENSIONS.contains(&ext.as_str()))
        })
        .collect();
    paths.sort();

    Ok(paths
        .into_iter()
        .map(|path| {
            let raw_stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            MatchCandidate {
                norm_stem: normalize(&raw_stem),
                raw_stem,
                path,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::TempDir;

    fn write_sheet(path: &Path, header: &str, names: &[&str]) {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write(0, 0, "Faction").unwrap();
        sheet.write(0, 1, header).unwrap();
        for (i, name) in names.iter().enumerate() {
            sheet.write(i as u32 + 1, 0, "Khador").unwrap();
            sheet.write(i as u32 + 1, 1, *name).unwrap();
        }
        workbook.save(path).unwrap();
    }

    #[test]
    fn loads_names_in_row_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("units.xlsx");
        write_sheet(&path, "Name", &["Iron Fang Pathfinder", "Knight", "Gun Mage"]);

        let names = load_model_names(&path).unwrap();
        assert_eq!(names, vec!["Iron Fang Pathfinder", "Knight", "Gun Mage"]);
    }

    #[test]
    fn duplicates_and_blanks_are_dropped() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("units.xlsx");
        write_sheet(&path, "Name", &["Knight", "", "Knight", "  ", "Archer"]);

        let names = load_model_names(&path).unwrap();
        assert_eq!(names, vec!["Knight", "Archer"]);
    }

    #[test]
    fn missing_name_column_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("units.xlsx");
        write_sheet(&path, "Unit", &["Knight"]);

        let result = load_model_names(&path);
        assert!(matches!(result, Err(MatchError::MissingNameColumn)));
    }

    #[test]
    fn index_filters_by_extension_and_sorts() {
        let tmp = TempDir::new().unwrap();
        for name in ["b.png", "a.jpg", "c.webp", "readme.txt", "d.tiff"] {
            std::fs::write(tmp.path().join(name), b"x").unwrap();
        }

        let candidates = index_images(tmp.path()).unwrap();
        let stems: Vec<&str> = candidates.iter().map(|c| c.raw_stem.as_str()).collect();
        // .tiff is fine for squarify but not candidate artwork; .txt never
        assert_eq!(stems, vec!["a", "b", "c"]);
    }

    #[test]
    fn index_precomputes_normalized_stems() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("Iron_Fang_Pathfinder_01.png"), b"x").unwrap();

        let candidates = index_images(tmp.path()).unwrap();
        assert_eq!(candidates[0].raw_stem, "Iron_Fang_Pathfinder_01");
        assert_eq!(candidates[0].norm_stem, "iron fang pathfinder");
    }

    #[test]
    fn missing_dir_is_error() {
        let result = index_images(Path::new("/nonexistent/art"));
        assert!(matches!(result, Err(MatchError::ImageDirNotFound(_))));
    }
}
