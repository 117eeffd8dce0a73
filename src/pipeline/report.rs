/*!
 * Per-file outcomes and batch summaries.
 *
 * Every processed document produces exactly one [`FileReport`]. Only a failure
 * of the directory walk itself aborts a batch; everything else ends up here.
 */

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use super::schema_check::SchemaViolation;

/// Expected conditions that leave a document untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The localized document already starts with frontmatter
    AlreadySynchronized,

    /// No source-locale document exists at the same relative path
    MissingCounterpart,

    /// The source document has no parsable frontmatter block
    UnparsableFrontmatter,

    /// The frontmatter carries no usable title
    MissingTitle,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::AlreadySynchronized => "already has frontmatter",
            Self::MissingCounterpart => "no source-language equivalent",
            Self::UnparsableFrontmatter => "no source frontmatter",
            Self::MissingTitle => "no title found",
        };
        f.write_str(text)
    }
}

/// What happened to one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Content changed (and was written unless this is a dry run)
    Updated,

    /// Nothing to change
    Unchanged,

    /// Left untouched for an expected reason
    Skipped(SkipReason),

    /// Document breaks the site's frontmatter schema
    Violation(SchemaViolation),

    /// Unexpected failure, with its cause
    Failed(String),
}

impl FileOutcome {
    /// Whether the outcome deserves a line in the issues log
    pub fn is_issue(&self) -> bool {
        !matches!(self, Self::Updated | Self::Unchanged | Self::Skipped(SkipReason::AlreadySynchronized))
    }
}

/// Outcome of one document, keyed by its path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn new(path: impl Into<PathBuf>, outcome: FileOutcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }

    pub fn updated(path: &Path) -> Self {
        Self::new(path, FileOutcome::Updated)
    }

    pub fn unchanged(path: &Path) -> Self {
        Self::new(path, FileOutcome::Unchanged)
    }

    pub fn skipped(path: &Path, reason: SkipReason) -> Self {
        Self::new(path, FileOutcome::Skipped(reason))
    }

    pub fn failed(path: &Path, cause: impl fmt::Display) -> Self {
        Self::new(path, FileOutcome::Failed(cause.to_string()))
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            FileOutcome::Updated => write!(f, "updated: {}", self.path.display()),
            FileOutcome::Unchanged => write!(f, "unchanged: {}", self.path.display()),
            FileOutcome::Skipped(reason) => write!(f, "skipped ({}): {}", reason, self.path.display()),
            FileOutcome::Violation(violation) => write!(f, "invalid ({}): {}", violation, self.path.display()),
            FileOutcome::Failed(cause) => write!(f, "failed: {}: {}", self.path.display(), cause),
        }
    }
}

/// Aggregate result of one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub modified: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub violations: usize,
    pub failed: usize,
    pub dry_run: bool,
    /// Every report that is not a plain update or no-op, sorted by path
    pub issues: Vec<FileReport>,
}

impl BatchSummary {
    /// Build a summary from the reports of a batch
    pub fn from_reports(reports: Vec<FileReport>, dry_run: bool) -> Self {
        let mut summary = Self {
            dry_run,
            ..Self::default()
        };

        for report in reports {
            summary.record(report);
        }
        summary.issues.sort_by(|a, b| a.path.cmp(&b.path));
        summary
    }

    fn record(&mut self, report: FileReport) {
        self.processed += 1;
        match report.outcome {
            FileOutcome::Updated => {
                self.modified += 1;
                return;
            }
            FileOutcome::Unchanged => {
                self.unchanged += 1;
                return;
            }
            FileOutcome::Skipped(_) => self.skipped += 1,
            FileOutcome::Violation(_) => self.violations += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
        self.issues.push(report);
    }

    /// No failures and no schema violations
    pub fn is_clean(&self) -> bool {
        self.failed == 0 && self.violations == 0
    }

    /// One-line human readable summary
    pub fn summary_line(&self) -> String {
        let mut line = format!(
            "Processed {} files, modified {}, skipped {}, failed {}",
            self.processed, self.modified, self.skipped, self.failed
        );
        if self.violations > 0 {
            line.push_str(&format!(", invalid {}", self.violations));
        }
        if self.dry_run {
            line.push_str(" (dry run, nothing written)");
        }
        line
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary_line())
    }
}
