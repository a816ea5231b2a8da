//! Batch validation and renaming.
//!
//! Assets are processed one at a time, in order. Each asset is classified
//! independently, so the order only affects progress reporting and the order
//! of report entries. Neither function fails: a summary is always returned.

use crate::asset::AssetDescriptor;
use crate::classify::{Classification, Classifier, Verdict};
use crate::host::RenameExecutor;
use crate::rename::{self, RenameInstruction};
use crate::report::{ProgressSink, ReportEntry, ReportSink, Severity, Summary};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Counts for a validation batch.
///
/// `checked + skipped` is the number of assets processed, and
/// `checked == valid + invalid + unable_to_validate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub checked: usize,
    pub valid: usize,
    pub invalid: usize,
    pub skipped: usize,
    pub unable_to_validate: usize,
}

impl RunSummary {
    /// Adds one verdict to the counts.
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Excluded => self.skipped += 1,
            Verdict::Valid => {
                self.valid += 1;
                self.checked += 1;
            }
            Verdict::Invalid => {
                self.invalid += 1;
                self.checked += 1;
            }
            Verdict::Unknown => {
                self.unable_to_validate += 1;
                self.checked += 1;
            }
        }
    }

    /// The batch fails if any asset is misnamed.
    pub fn has_failed(&self) -> bool {
        self.invalid > 0
    }

    /// Number of assets processed.
    pub fn total(&self) -> usize {
        self.checked + self.skipped
    }
}

/// Counts for a rename batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameSummary {
    pub checked: usize,
    pub renamed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RenameSummary {
    /// The batch fails if any rename was rejected by the executor.
    pub fn has_failed(&self) -> bool {
        self.failed > 0
    }

    /// Number of assets processed.
    pub fn total(&self) -> usize {
        self.checked + self.skipped
    }
}

/// Reporting options shared by both batch modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Report assets with no known convention and always emit the summary.
    /// When false, only failures are reported.
    pub verbose: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self { verbose: true }
    }
}

impl BatchOptions {
    /// Options for background runs such as validation on save.
    pub fn quiet() -> Self {
        Self { verbose: false }
    }
}

/// Classification of one asset in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetVerdict {
    pub object_path: String,
    #[serde(flatten)]
    pub classification: Classification,
}

/// Result of [`validate_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub summary: RunSummary,
    pub verdicts: Vec<AssetVerdict>,
}

/// One rename attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRecord {
    pub instruction: RenameInstruction,
    /// Executor error, if the rename was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RenameRecord {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of [`rename_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameOutcome {
    pub summary: RenameSummary,
    pub renames: Vec<RenameRecord>,
}

impl RenameOutcome {
    /// Every instruction emitted, whether or not the executor accepted it.
    pub fn instructions(&self) -> impl Iterator<Item = &RenameInstruction> {
        self.renames.iter().map(|r| &r.instruction)
    }
}

const EXCLUDED_MESSAGE: &str = "has not been tested based on the configuration.";
const INVALID_MESSAGE: &str = "does not match naming convention.";
const UNKNOWN_MESSAGE: &str = "has no known naming convention.";
const RENAMED_MESSAGE: &str = "has been renamed to";
const RENAME_FAILED_MESSAGE: &str = "could not be renamed.";

fn unknown_entry(asset: &AssetDescriptor, classification: &Classification) -> ReportEntry {
    let mut detail = format!("Class = {}", asset.asset_class);
    if let Some(message) = &classification.message {
        detail.push_str(&format!(" ({})", message));
    }
    ReportEntry::new(Severity::Warning, asset.package_name(), UNKNOWN_MESSAGE).with_detail(detail)
}

fn fraction(done: usize, total: usize) -> f32 {
    if total == 0 {
        1.0
    } else {
        done as f32 / total as f32
    }
}

/// Classifies every asset and reports the results.
pub fn validate_all(
    classifier: &Classifier<'_>,
    assets: &[AssetDescriptor],
    report: &mut dyn ReportSink,
    progress: &mut dyn ProgressSink,
    options: BatchOptions,
) -> ValidationOutcome {
    let mut outcome = ValidationOutcome {
        summary: RunSummary::default(),
        verdicts: Vec::with_capacity(assets.len()),
    };

    for (i, asset) in assets.iter().enumerate() {
        let object_path = asset.object_path();
        let classification = classifier.classify(asset);

        match classification.verdict {
            Verdict::Excluded => {
                report.record(ReportEntry::new(
                    Severity::Info,
                    asset.package_name(),
                    EXCLUDED_MESSAGE,
                ));
            }
            Verdict::Valid => {}
            Verdict::Invalid => {
                let mut entry =
                    ReportEntry::new(Severity::Error, asset.package_name(), INVALID_MESSAGE);
                if let Some(message) = &classification.message {
                    entry = entry.with_detail(message.clone());
                }
                report.record(entry);
            }
            Verdict::Unknown => {
                if options.verbose {
                    report.record(unknown_entry(asset, &classification));
                }
            }
        }

        outcome.summary.record(classification.verdict);
        outcome.verdicts.push(AssetVerdict {
            object_path: object_path.clone(),
            classification,
        });

        progress.progress(
            fraction(i + 1, assets.len()),
            &format!("Validating naming convention {}", object_path),
        );
    }

    let summary = outcome.summary;
    info!(
        checked = summary.checked,
        valid = summary.valid,
        invalid = summary.invalid,
        skipped = summary.skipped,
        unable_to_validate = summary.unable_to_validate,
        "naming convention validation finished"
    );

    if summary.has_failed() || options.verbose {
        report.summary(&Summary::Validation(summary));
    }

    outcome
}

fn execute_rename(
    asset: &AssetDescriptor,
    new_name: &str,
    executor: &mut dyn RenameExecutor,
    report: &mut dyn ReportSink,
) -> RenameRecord {
    let instruction = RenameInstruction::new(asset, new_name);
    match executor.execute(&instruction) {
        Ok(()) => {
            let new_package = crate::asset::package_name(&asset.package_path, new_name);
            report.record(
                ReportEntry::new(Severity::Info, asset.package_name(), RENAMED_MESSAGE)
                    .with_detail(new_package),
            );
            RenameRecord {
                instruction,
                error: None,
            }
        }
        Err(e) => {
            report.record(
                ReportEntry::new(Severity::Error, asset.package_name(), RENAME_FAILED_MESSAGE)
                    .with_detail(e.to_string()),
            );
            RenameRecord {
                instruction,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Computes a conforming name for every misnamed asset and hands the rename
/// to `executor`.
///
/// Only Invalid assets produce instructions. Executor failures are counted
/// and reported; the remaining assets are still processed.
pub fn rename_all(
    classifier: &Classifier<'_>,
    assets: &[AssetDescriptor],
    executor: &mut dyn RenameExecutor,
    report: &mut dyn ReportSink,
    progress: &mut dyn ProgressSink,
    options: BatchOptions,
) -> RenameOutcome {
    let mut outcome = RenameOutcome::default();

    for (i, asset) in assets.iter().enumerate() {
        let classification = classifier.classify(asset);

        match classification.verdict {
            Verdict::Excluded => {
                report.record(ReportEntry::new(
                    Severity::Info,
                    asset.package_name(),
                    "has been excluded based on the configuration.",
                ));
                outcome.summary.skipped += 1;
            }
            Verdict::Valid => outcome.summary.checked += 1,
            Verdict::Invalid => {
                outcome.summary.checked += 1;
                let proposed = rename::proposed_name(classifier.table(), asset, &classification);
                if let Some(new_name) = proposed {
                    let record = execute_rename(asset, &new_name, executor, report);
                    if record.succeeded() {
                        outcome.summary.renamed += 1;
                    } else {
                        outcome.summary.failed += 1;
                    }
                    outcome.renames.push(record);
                }
            }
            Verdict::Unknown => {
                outcome.summary.checked += 1;
                if options.verbose {
                    report.record(unknown_entry(asset, &classification));
                }
            }
        }

        progress.progress(
            fraction(i + 1, assets.len()),
            &format!("Renaming following naming convention {}", asset.object_path()),
        );
    }

    let summary = outcome.summary;
    info!(
        checked = summary.checked,
        renamed = summary.renamed,
        failed = summary.failed,
        skipped = summary.skipped,
        "naming convention rename finished"
    );

    if summary.has_failed() || options.verbose {
        report.summary(&Summary::Rename(summary));
    }

    outcome
}
