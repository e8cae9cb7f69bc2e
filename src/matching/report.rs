//! CSV audit report for the matcher.
//!
//! Every spreadsheet name produces exactly one row, whatever the outcome, so
//! the report doubles as a review checklist: filter on the Action column and
//! eyeball the Top 3 Candidates for anything suspicious.

use super::MatchError;
use super::resolve::{MatchDecision, ScoredCandidate};
use serde::Serialize;
use std::path::Path;

/// One report row. Field order defines the CSV column order.
#[derive(Debug, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Model Name")]
    pub model_name: String,
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "Source File")]
    pub source_file: String,
    #[serde(rename = "Target File")]
    pub target_file: String,
    #[serde(rename = "Score")]
    pub score: u32,
    #[serde(rename = "Top 3 Candidates")]
    pub top3: String,
    #[serde(rename = "Message")]
    pub message: String,
}

impl ReportRow {
    pub fn from_decision(decision: &MatchDecision) -> Self {
        Self {
            model_name: decision.name.clone(),
            action: decision.action.label().to_string(),
            source_file: decision
                .source
                .as_deref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            target_file: decision
                .target
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            score: decision.score,
            top3: format_top3(&decision.top3),
            message: decision.message.clone(),
        }
    }
}

/// `"knight_02.png (100) | knight_guard.png (87) | gun_mage.png (41)"`
fn format_top3(candidates: &[ScoredCandidate]) -> String {
    candidates
        .iter()
        .map(|c| format!("{} ({})", c.file_name(), c.score))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Write the full report, header row included.
pub fn write_report(path: &Path, decisions: &[MatchDecision]) -> Result<(), MatchError> {
    let mut writer = csv::Writer::from_path(path)?;
    for decision in decisions {
        writer.serialize(ReportRow::from_decision(decision))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::resolve::MatchAction;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn decision() -> MatchDecision {
        MatchDecision {
            name: "Iron Fang Pathfinder 01".to_string(),
            action: MatchAction::Copied,
            source: Some(PathBuf::from("/art/iron_fang_pathfinder.png")),
            target: PathBuf::from("/out/Iron Fang Pathfinder 01.png"),
            score: 100,
            top3: vec![
                ScoredCandidate {
                    path: PathBuf::from("/art/iron_fang_pathfinder.png"),
                    score: 100,
                },
                ScoredCandidate {
                    path: PathBuf::from("/art/gun_mage.png"),
                    score: 38,
                },
            ],
            message: "'iron_fang_pathfinder.png' → 'Iron Fang Pathfinder 01.png'  (score 100)"
                .to_string(),
        }
    }

    #[test]
    fn row_uses_file_names_not_full_paths() {
        let row = ReportRow::from_decision(&decision());
        assert_eq!(row.source_file, "iron_fang_pathfinder.png");
        assert_eq!(row.target_file, "Iron Fang Pathfinder 01.png");
        assert_eq!(row.action, "COPIED");
    }

    #[test]
    fn no_match_leaves_source_empty() {
        let mut d = decision();
        d.action = MatchAction::NoMatch;
        d.source = None;

        let row = ReportRow::from_decision(&d);
        assert_eq!(row.source_file, "");
        assert_eq!(row.action, "NO_MATCH");
    }

    #[test]
    fn top3_joined_with_pipes() {
        let row = ReportRow::from_decision(&decision());
        assert_eq!(
            row.top3,
            "iron_fang_pathfinder.png (100) | gun_mage.png (38)"
        );
    }

    #[test]
    fn written_report_has_fixed_header() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.csv");
        write_report(&path, &[decision()]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(
            header,
            "Model Name,Action,Source File,Target File,Score,Top 3 Candidates,Message"
        );
        assert_eq!(content.lines().count(), 2);
    }
}
