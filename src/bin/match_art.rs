//! Fuzzy model-name → image matcher.
//!
//! Reads model names from a spreadsheet's `Name` column, finds the closest
//! matching image file in the art folder by composite fuzzy score, copies it
//! under the sanitized model name, and writes a CSV report of every decision.
//!
//! There is no CLI — this is a one-shot batch tool. Edit the constants below,
//! then:
//!
//! ```text
//! cargo run --bin match-art
//! ```
//!
//! Matching logic:
//! 1. Normalize both sides: lowercase, strip extensions and trailing numbers,
//!    collapse separators (`Knight_02.png` → `knight`).
//! 2. Score every candidate with a max over ratio / partial / token-sort /
//!    token-set metrics, plus a raw-string comparison.
//! 3. Accept the best score at or above `MIN_SCORE`.
//! 4. Never overwrite: an existing target under a different source is skipped.
//! 5. Review the CSV report afterwards — it lists the top 3 candidates per name.

use art_prep::matching::{self, MatcherConfig};
use art_prep::output;
use std::path::PathBuf;
use std::process::ExitCode;

// ---------------------------------------------------------------------------
// Configuration — edit these paths
// ---------------------------------------------------------------------------

/// Input spreadsheet; must have a `Name` column.
const EXCEL_FILE: &str = "model_units.xlsx";
/// Folder of candidate artwork.
const IMAGE_DIR: &str = "ModelArtOld";
/// Where renamed copies go (the same folder as `IMAGE_DIR` is fine).
const OUTPUT_DIR: &str = "ModelArt";
/// CSV audit trail of every match made / skipped.
const REPORT_FILE: &str = "image_match_report.csv";
/// Preview only: print every decision, write nothing.
const DRY_RUN: bool = false;
/// Minimum composite score (0–100) to accept a match.
const MIN_SCORE: u32 = 60;

fn main() -> ExitCode {
    let config = MatcherConfig {
        excel_file: PathBuf::from(EXCEL_FILE),
        image_dir: PathBuf::from(IMAGE_DIR),
        output_dir: PathBuf::from(OUTPUT_DIR),
        report_file: PathBuf::from(REPORT_FILE),
        dry_run: DRY_RUN,
        min_score: MIN_SCORE,
    };

    match matching::run(&config) {
        Ok((_decisions, summary)) => {
            let report = (!DRY_RUN).then(|| config.report_file.as_path());
            output::print_match_summary(&summary, DRY_RUN, report);
            if summary.no_match > 0 {
                output::print_match_tip(summary.no_match, MIN_SCORE);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
