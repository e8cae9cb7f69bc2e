//! Console output formatting for both pipelines.
//!
//! # Output Format
//!
//! ## Squarify
//!
//! One line per file, identical in dry-run and real runs, then a summary:
//!
//! ```text
//! solos/gun_mage_02.png: SQUARE 100x60 -> 60x60, THUMB -> 60x60
//! knight_01.png: SQUARE skip (already OK), THUMB -> 256x256
//! FAILED: broken.png (image error: ...)
//!
//! Done. Square written: 1, Square skipped: 1, Failed: 1
//! Square output root: Top Images (square)
//! Thumbs output root: Top Images (square)/THUMBS
//! ```
//!
//! ## Match
//!
//! One status line per spreadsheet name, icon keyed to the action
//! (`✓` copied, `~` dry-run copy, `=` already correct, `→` skipped because
//! the target exists, `✗` no match), then a boxed summary:
//!
//! ```text
//!   [✓] 'Iron Fang Pathfinder 01'       'iron_fang_pathfinder.png' → 'Iron Fang Pathfinder 01.png'  (score 100)
//!   [✗] 'Scrapjack Mk II'               Best candidate 'gun_mage.png' scored 41 (below threshold 60)
//!
//! ============================================================
//!   Would copy / Copied : 1
//!   Already correct     : 0
//!   Skipped (exists)    : 0
//!   No match found      : 1
//!   Total models        : 2
//! ============================================================
//! ```
//!
//! # Architecture
//!
//! Each piece has a `format_*` function (pure, returns `String`s, unit
//! testable) and the callers print. Only the multi-line summaries get
//! `print_*` wrappers here.

use crate::matching::{MatchDecision, MatchSummary};
use crate::process::{FileOutcome, SquarifySummary};
use std::path::Path;

// ============================================================================
// Squarify
// ============================================================================

/// Per-file progress line. Same text for dry-run and real runs.
pub fn format_square_line(rel: &Path, outcome: &FileOutcome) -> String {
    let square_part = if outcome.square_written {
        format!(
            "SQUARE {}x{} -> {}x{}",
            outcome.original.0, outcome.original.1, outcome.square.0, outcome.square.1
        )
    } else {
        "SQUARE skip (already OK)".to_string()
    };
    format!(
        "{}: {}, THUMB -> {}x{}",
        rel.display(),
        square_part,
        outcome.thumb.0,
        outcome.thumb.1
    )
}

/// Per-file failure line; the batch continues after printing this.
pub fn format_square_failure(rel: &Path, error: &impl std::fmt::Display) -> String {
    format!("FAILED: {} ({})", rel.display(), error)
}

/// Final counts plus output roots (roots are only shown for real runs —
/// in a dry run they were never created).
pub fn format_square_summary(
    summary: &SquarifySummary,
    dry_run: bool,
    square_root: &Path,
    thumbs_root: &Path,
) -> Vec<String> {
    let mut lines = vec![format!(
        "Done. Square written: {}, Square skipped: {}, Failed: {}",
        summary.written, summary.skipped, summary.failed
    )];
    if dry_run {
        lines.push("Dry run — no files were written".to_string());
    } else {
        lines.push(format!("Square output root: {}", square_root.display()));
        lines.push(format!("Thumbs output root: {}", thumbs_root.display()));
    }
    lines
}

pub fn print_square_summary(
    summary: &SquarifySummary,
    dry_run: bool,
    square_root: &Path,
    thumbs_root: &Path,
) {
    println!();
    for line in format_square_summary(summary, dry_run, square_root, thumbs_root) {
        println!("{line}");
    }
}

// ============================================================================
// Match
// ============================================================================

/// Per-name status line: icon, quoted name padded for alignment, message.
pub fn format_match_line(decision: &MatchDecision) -> String {
    format!(
        "  [{}] {:<45}  {}",
        decision.action.icon(),
        format!("'{}'", decision.name),
        decision.message
    )
}

/// The boxed per-action totals.
pub fn format_match_summary(summary: &MatchSummary, dry_run: bool) -> Vec<String> {
    let mut lines = vec!["=".repeat(60)];
    if dry_run {
        lines.push("DRY RUN — no files were written".to_string());
    }
    lines.push(format!("  Would copy / Copied : {}", summary.copied));
    lines.push(format!("  Already correct     : {}", summary.already_correct));
    lines.push(format!("  Skipped (exists)    : {}", summary.skipped_exists));
    lines.push(format!("  No match found      : {}", summary.no_match));
    lines.push(format!("  Total models        : {}", summary.total));
    lines.push("=".repeat(60));
    lines
}

/// Follow-up hint shown when some names found no match.
pub fn format_match_tip(no_match: usize, min_score: u32) -> Vec<String> {
    vec![
        format!("TIP: {no_match} model(s) had no match above score {min_score}."),
        "     Lower MIN_SCORE or add images manually for those entries.".to_string(),
        "     Check the report CSV for the closest candidates found.".to_string(),
    ]
}

pub fn print_match_summary(summary: &MatchSummary, dry_run: bool, report_file: Option<&Path>) {
    println!();
    for line in format_match_summary(summary, dry_run) {
        println!("{line}");
    }
    if let Some(path) = report_file {
        println!("\nReport saved to: {}", path.display());
    }
}

pub fn print_match_tip(no_match: usize, min_score: u32) {
    println!();
    for line in format_match_tip(no_match, min_score) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{MatchAction, ScoredCandidate};
    use std::path::PathBuf;

    #[test]
    fn square_line_shows_dimensions_when_written() {
        let outcome = FileOutcome {
            original: (100, 60),
            square: (60, 60),
            square_written: true,
            thumb: (60, 60),
        };
        assert_eq!(
            format_square_line(Path::new("solos/a.png"), &outcome),
            "solos/a.png: SQUARE 100x60 -> 60x60, THUMB -> 60x60"
        );
    }

    #[test]
    fn square_line_marks_skips() {
        let outcome = FileOutcome {
            original: (256, 256),
            square: (256, 256),
            square_written: false,
            thumb: (64, 64),
        };
        assert_eq!(
            format_square_line(Path::new("b.png"), &outcome),
            "b.png: SQUARE skip (already OK), THUMB -> 64x64"
        );
    }

    #[test]
    fn square_summary_hides_roots_in_dry_run() {
        let summary = SquarifySummary { written: 2, skipped: 1, failed: 0 };
        let real = format_square_summary(&summary, false, Path::new("out"), Path::new("out/THUMBS"));
        assert!(real.iter().any(|l| l.contains("Square output root: out")));

        let dry = format_square_summary(&summary, true, Path::new("out"), Path::new("out/THUMBS"));
        assert!(dry.iter().any(|l| l.contains("no files were written")));
        assert!(!dry.iter().any(|l| l.contains("output root")));
    }

    #[test]
    fn match_line_carries_icon_and_message() {
        let decision = MatchDecision {
            name: "Knight".to_string(),
            action: MatchAction::NoMatch,
            source: None,
            target: PathBuf::from("/out/Knight.png"),
            score: 12,
            top3: vec![ScoredCandidate {
                path: PathBuf::from("/art/zzz.png"),
                score: 12,
            }],
            message: "Best candidate 'zzz.png' scored 12 (below threshold 60)".to_string(),
        };
        let line = format_match_line(&decision);
        assert!(line.starts_with("  [✗] 'Knight'"));
        assert!(line.ends_with("(below threshold 60)"));
    }

    #[test]
    fn match_summary_counts_every_bucket() {
        let summary = MatchSummary {
            copied: 3,
            already_correct: 2,
            skipped_exists: 1,
            no_match: 4,
            total: 10,
        };
        let lines = format_match_summary(&summary, false);
        assert_eq!(lines.first().unwrap(), &"=".repeat(60));
        assert!(lines.iter().any(|l| l == "  Would copy / Copied : 3"));
        assert!(lines.iter().any(|l| l == "  Total models        : 10"));
        assert!(!lines.iter().any(|l| l.contains("DRY RUN")));
    }

    #[test]
    fn match_summary_flags_dry_run() {
        let lines = format_match_summary(&MatchSummary::default(), true);
        assert_eq!(lines[1], "DRY RUN — no files were written");
    }

    #[test]
    fn tip_mentions_count_and_threshold() {
        let lines = format_match_tip(4, 60);
        assert!(lines[0].contains("4 model(s)"));
        assert!(lines[0].contains("score 60"));
    }
}
