//! Coalescing queue for validation on save.
//!
//! Hosts call [`SaveQueue::enqueue`] from their save hook and
//! [`SaveQueue::flush`] from their own scheduling loop (or right after the
//! save completes). Each package is validated once per flush no matter how
//! many times it was saved in between.

use crate::batch::RunSummary;
use crate::error::HostError;
use crate::host::AssetEnumerator;
use crate::report::{ReportEntry, ReportSink, Severity};
use crate::validator::NamingValidator;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveQueue {
    pending: Vec<String>,
}

/// A queued package the enumerator could not list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFailure {
    pub package: String,
    pub error: HostError,
}

/// Result of [`SaveQueue::flush`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlushOutcome {
    /// Summary of the validation run. `None` when no asset was found.
    pub summary: Option<RunSummary>,
    /// Packages that could not be listed, in queue order.
    pub failures: Vec<PackageFailure>,
}

impl FlushOutcome {
    /// True if some asset is misnamed or some package could not be listed.
    pub fn has_failed(&self) -> bool {
        !self.failures.is_empty() || self.summary.is_some_and(|s| s.has_failed())
    }
}

impl SaveQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a saved package for validation.
    ///
    /// Returns false (and queues nothing) when validation on save is
    /// disabled or the save is an autosave.
    pub fn enqueue(
        &mut self,
        validator: &NamingValidator,
        package_name: &str,
        autosaving: bool,
    ) -> bool {
        if !validator.validates_on_save() || autosaving {
            return false;
        }
        if !self.pending.iter().any(|p| p == package_name) {
            self.pending.push(package_name.to_string());
        }
        true
    }

    /// Packages waiting for the next flush, in first-saved order.
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Validates every queued package and empties the queue.
    ///
    /// A package the enumerator cannot list is recorded on the sink as an
    /// error and returned in [`FlushOutcome::failures`]; the remaining
    /// packages are still validated.
    pub fn flush(
        &mut self,
        validator: &NamingValidator,
        enumerator: &dyn AssetEnumerator,
        report: &mut dyn ReportSink,
    ) -> FlushOutcome {
        let packages = std::mem::take(&mut self.pending);
        let mut outcome = FlushOutcome::default();
        if packages.is_empty() {
            return outcome;
        }

        let mut assets = Vec::new();
        for package in packages {
            match enumerator.assets_in_package(&package) {
                Ok(found) => assets.extend(found),
                Err(error) => {
                    warn!(package = %package, error = %error, "cannot list saved package");
                    report.record(
                        ReportEntry::new(
                            Severity::Error,
                            package.as_str(),
                            "could not be listed for naming validation.",
                        )
                        .with_detail(error.to_string()),
                    );
                    outcome.failures.push(PackageFailure { package, error });
                }
            }
        }
        debug!(
            assets = assets.len(),
            failures = outcome.failures.len(),
            "flushing saved packages"
        );

        if !assets.is_empty() {
            outcome.summary = validator.validate_on_save(&assets, report, false);
        }
        outcome
    }
}
