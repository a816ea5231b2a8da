//! Report and progress sinks for batch runs.

use crate::batch::{RenameSummary, RunSummary};
use serde::{Deserialize, Serialize};

/// Severity level for report entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Skipped assets, successful renames.
    Info,
    /// Assets with no known naming convention.
    Warning,
    /// Naming violations and failed renames.
    Error,
}

/// One line of the naming report, about a single asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub severity: Severity,

    /// Package name of the asset, e.g. `/Game/Props/Cube`.
    pub asset_path: String,

    /// Short outcome text, e.g. "does not match naming convention."
    pub message: String,

    /// Extra context: the violated constraint, the new name, the class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ReportEntry {
    pub fn new(
        severity: Severity,
        asset_path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            asset_path: asset_path.into(),
            message: message.into(),
            detail: None,
        }
    }

    /// Builder method to set the detail text.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Totals emitted once per batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Summary {
    Validation(RunSummary),
    Rename(RenameSummary),
}

impl Summary {
    pub fn has_failed(&self) -> bool {
        match self {
            Summary::Validation(s) => s.has_failed(),
            Summary::Rename(s) => s.has_failed(),
        }
    }

    /// "Naming convention validation FAILED." and similar.
    pub fn headline(&self) -> String {
        let result = if self.has_failed() { "FAILED" } else { "SUCCEEDED" };
        match self {
            Summary::Validation(_) => format!("Naming convention validation {}.", result),
            Summary::Rename(_) => format!("Renaming following naming convention {}.", result),
        }
    }

    /// Per-category counts as a single line.
    pub fn counts(&self) -> String {
        match self {
            Summary::Validation(s) => format!(
                "Files Checked: {}, Passed: {}, Failed: {}, Skipped: {}, Unable to validate: {}",
                s.checked, s.valid, s.invalid, s.skipped, s.unable_to_validate
            ),
            Summary::Rename(s) => format!(
                "Files Checked: {}, Renamed: {}, Failed: {}, Skipped: {}",
                s.checked, s.renamed, s.failed, s.skipped
            ),
        }
    }
}

/// Consumer of per-asset results and batch summaries.
pub trait ReportSink {
    /// Receives one per-asset entry.
    fn record(&mut self, entry: ReportEntry);

    /// Receives the batch summary.
    fn summary(&mut self, summary: &Summary);

    /// Receives a one-off notification (e.g. a failed save validation).
    fn notify(&mut self, _severity: Severity, _message: &str) {}
}

/// Consumer of progress updates.
pub trait ProgressSink {
    /// `fraction` is in `0.0..=1.0`.
    fn progress(&mut self, fraction: f32, label: &str);
}

impl<F> ProgressSink for F
where
    F: FnMut(f32, &str),
{
    fn progress(&mut self, fraction: f32, label: &str) {
        self(fraction, label)
    }
}

/// Progress sink that discards updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn progress(&mut self, _fraction: f32, _label: &str) {}
}

/// A notification forwarded to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

/// Report sink that keeps everything in memory, grouped by severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingReport {
    /// Naming violations and failed renames.
    pub errors: Vec<ReportEntry>,
    /// Assets with no known naming convention.
    pub warnings: Vec<ReportEntry>,
    /// Skipped assets and successful renames.
    pub info: Vec<ReportEntry>,
    /// Summaries in the order they were emitted.
    pub summaries: Vec<Summary>,
    /// Notifications in the order they were emitted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<Notification>,
}

impl NamingReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any error-level entry was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the total entry count.
    pub fn total_entries(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.info.len()
    }

    /// Last summary emitted, if any.
    pub fn last_summary(&self) -> Option<&Summary> {
        self.summaries.last()
    }
}

impl ReportSink for NamingReport {
    fn record(&mut self, entry: ReportEntry) {
        match entry.severity {
            Severity::Info => self.info.push(entry),
            Severity::Warning => self.warnings.push(entry),
            Severity::Error => self.errors.push(entry),
        }
    }

    fn summary(&mut self, summary: &Summary) {
        self.summaries.push(*summary);
    }

    fn notify(&mut self, severity: Severity, message: &str) {
        self.notifications.push(Notification {
            severity,
            message: message.to_string(),
        });
    }
}
