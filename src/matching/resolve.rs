//! Candidate ranking and the copy/skip decision.
//!
//! One-shot classification per spreadsheet name: rank every candidate by
//! composite score, look only at the winner, and decide. There is no retry
//! and no backtracking to the second-best candidate — a wrong decision is
//! meant to be caught in the CSV report, not papered over automatically.

use super::MatchError;
use super::loader::MatchCandidate;
use super::normalize::{normalize, safe_filename};
use super::score::composite;
use std::fs;
use std::path::{Path, PathBuf};

/// What the resolver did for one spreadsheet name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Copied,
    DryRunCopy,
    SkippedExists,
    AlreadyCorrect,
    NoMatch,
}

impl MatchAction {
    /// Stable label used in the CSV report.
    pub fn label(self) -> &'static str {
        match self {
            MatchAction::Copied => "COPIED",
            MatchAction::DryRunCopy => "DRY_RUN_COPY",
            MatchAction::SkippedExists => "SKIPPED_EXISTS",
            MatchAction::AlreadyCorrect => "ALREADY_CORRECT",
            MatchAction::NoMatch => "NO_MATCH",
        }
    }

    /// One-character status icon for console progress lines.
    pub fn icon(self) -> char {
        match self {
            MatchAction::Copied => '✓',
            MatchAction::DryRunCopy => '~',
            MatchAction::SkippedExists => '→',
            MatchAction::AlreadyCorrect => '=',
            MatchAction::NoMatch => '✗',
        }
    }
}

/// A candidate with its composite score against one spreadsheet name.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub path: PathBuf,
    pub score: u32,
}

impl ScoredCandidate {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// The audit record for one spreadsheet name.
#[derive(Debug, Clone)]
pub struct MatchDecision {
    pub name: String,
    pub action: MatchAction,
    /// Best-scoring source file; `None` when the score fell below threshold.
    pub source: Option<PathBuf>,
    pub target: PathBuf,
    pub score: u32,
    /// Top three candidates, best first, for the report.
    pub top3: Vec<ScoredCandidate>,
    pub message: String,
}

/// Threshold/existence policy applied after ranking.
#[derive(Debug, Clone)]
pub struct ResolvePolicy {
    pub output_dir: PathBuf,
    pub min_score: u32,
    pub dry_run: bool,
}

/// Score every candidate against `name`, best first.
///
/// The sort is stable, so equal scores keep the index enumeration order.
pub fn rank_candidates(name: &str, candidates: &[MatchCandidate]) -> Vec<ScoredCandidate> {
    let name_norm = normalize(name);
    let mut ranked: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|c| ScoredCandidate {
            path: c.path.clone(),
            score: composite(&name_norm, &c.norm_stem, name, &c.raw_stem),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Classify one spreadsheet name and perform the copy when called for.
///
/// The target filename derives deterministically from the name:
/// `safe_filename(name) + ".png"` under the policy's output directory. An
/// existing target under a different source is never overwritten.
pub fn resolve(
    name: &str,
    candidates: &[MatchCandidate],
    policy: &ResolvePolicy,
) -> Result<MatchDecision, MatchError> {
    let mut ranked = rank_candidates(name, candidates);
    let best = ranked.first().cloned().ok_or(MatchError::NoCandidates)?;
    ranked.truncate(3);

    let target = policy
        .output_dir
        .join(format!("{}.png", safe_filename(name)));
    let best_name = best.file_name();
    let target_name = target
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let (action, source, message) = if best.score < policy.min_score {
        (
            MatchAction::NoMatch,
            None,
            format!(
                "Best candidate '{}' scored {} (below threshold {})",
                best_name, best.score, policy.min_score
            ),
        )
    } else if target.exists() && is_same_file(&target, &best.path) {
        (
            MatchAction::AlreadyCorrect,
            Some(best.path.clone()),
            "Target file already exists and matches".to_string(),
        )
    } else if target.exists() {
        (
            MatchAction::SkippedExists,
            Some(best.path.clone()),
            format!(
                "Target '{}' already exists (source: '{}', score {})",
                target_name, best_name, best.score
            ),
        )
    } else {
        let message = format!("'{}' → '{}'  (score {})", best_name, target_name, best.score);
        if policy.dry_run {
            (MatchAction::DryRunCopy, Some(best.path.clone()), message)
        } else {
            fs::copy(&best.path, &target)?;
            (MatchAction::Copied, Some(best.path.clone()), message)
        }
    };

    Ok(MatchDecision {
        name: name.to_string(),
        action,
        source,
        target,
        score: best.score,
        top3: ranked,
        message,
    })
}

/// Whether two paths resolve to the same file on disk.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => false,
    }
}
