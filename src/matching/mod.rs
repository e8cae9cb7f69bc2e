//! Fuzzy spreadsheet-name → image-file matching.
//!
//! The match pipeline is a straight line through small submodules:
//!
//! | Module | Role |
//! |--------|------|
//! | [`loader`] | read the `Name` column, index candidate images by normalized stem |
//! | [`normalize`] | canonical lowercase/punctuation-free/number-free text form |
//! | [`score`] | composite similarity: max over five 0–100 metrics |
//! | [`resolve`] | rank candidates, apply the threshold/existence policy, copy |
//! | [`report`] | one CSV audit row per name |
//!
//! Unlike the squarify pipeline there is no per-item failure isolation here:
//! bad inputs are pre-validated fatally up front, and an I/O error mid-run
//! aborts the batch. The blast radius is one manually reviewed folder of
//! copies, and the CSV report shows exactly how far the run got.

pub mod loader;
pub mod normalize;
pub mod report;
pub mod resolve;
pub mod score;

pub use loader::{CANDIDATE_EXTENSIONS, MatchCandidate, index_images, load_model_names};
pub use normalize::{normalize, safe_filename};
pub use resolve::{MatchAction, MatchDecision, ResolvePolicy, ScoredCandidate, resolve};
pub use score::composite;

use crate::output;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("spreadsheet not found: {0}")]
    SpreadsheetNotFound(PathBuf),
    #[error("image directory not found: {0}")]
    ImageDirNotFound(PathBuf),
    #[error("spreadsheet has no worksheets")]
    EmptyWorkbook,
    #[error("no 'Name' column found in the spreadsheet")]
    MissingNameColumn,
    #[error("no image files found in {0}")]
    NoImagesFound(PathBuf),
    #[error("no candidate images to score")]
    NoCandidates,
    #[error("spreadsheet error: {0}")]
    Excel(#[from] calamine::Error),
    #[error("report error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run configuration. The `match-art` binary fills this from its source
/// constants; tests build it directly.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    pub excel_file: PathBuf,
    pub image_dir: PathBuf,
    pub output_dir: PathBuf,
    pub report_file: PathBuf,
    pub dry_run: bool,
    pub min_score: u32,
}

/// Per-action totals for the summary block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    /// `Copied` and `DryRunCopy` together — "would copy / copied".
    pub copied: usize,
    pub already_correct: usize,
    pub skipped_exists: usize,
    pub no_match: usize,
    pub total: usize,
}

impl MatchSummary {
    fn record(&mut self, action: MatchAction) {
        self.total += 1;
        match action {
            MatchAction::Copied | MatchAction::DryRunCopy => self.copied += 1,
            MatchAction::AlreadyCorrect => self.already_correct += 1,
            MatchAction::SkippedExists => self.skipped_exists += 1,
            MatchAction::NoMatch => self.no_match += 1,
        }
    }
}

/// Run the whole match pipeline: load, score, resolve, report.
///
/// Inputs are validated up front so a typo in the source constants fails
/// before anything is copied. In dry-run mode nothing is written at all —
/// not even the report; the decisions still print identically.
pub fn run(config: &MatcherConfig) -> Result<(Vec<MatchDecision>, MatchSummary), MatchError> {
    if !config.excel_file.exists() {
        return Err(MatchError::SpreadsheetNotFound(config.excel_file.clone()));
    }
    if !config.image_dir.is_dir() {
        return Err(MatchError::ImageDirNotFound(config.image_dir.clone()));
    }

    let names = load_model_names(&config.excel_file)?;
    println!(
        "Loaded {} unique model names from {}",
        names.len(),
        config.excel_file.display()
    );

    let candidates = index_images(&config.image_dir)?;
    println!(
        "Found {} image files in {}",
        candidates.len(),
        config.image_dir.display()
    );
    if candidates.is_empty() {
        return Err(MatchError::NoImagesFound(config.image_dir.clone()));
    }

    if !config.dry_run {
        std::fs::create_dir_all(&config.output_dir)?;
    }

    let policy = ResolvePolicy {
        output_dir: config.output_dir.clone(),
        min_score: config.min_score,
        dry_run: config.dry_run,
    };

    let mut decisions = Vec::with_capacity(names.len());
    let mut summary = MatchSummary::default();
    for name in &names {
        let decision = resolve(name, &candidates, &policy)?;
        println!("{}", output::format_match_line(&decision));
        summary.record(decision.action);
        decisions.push(decision);
    }

    if !config.dry_run {
        report::write_report(&config.report_file, &decisions)?;
    }

    Ok((decisions, summary))
}
