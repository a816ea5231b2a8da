//! Rename command implementation
//!
//! Computes conforming names for misnamed assets and records the renames as
//! a plan for the host to apply.

use super::reporting::{print_report, print_summary, ProgressBar};
use super::{prepare, EXIT_NAMING_FAILURE};
use anyhow::{Context, Result};
use colored::Colorize;
use nameguard_lint::{
    AssetDescriptor, BatchOptions, HostError, NamingReport, NoProgress, ProgressSink,
    RenameExecutor, RenameInstruction, RenameRecord, RenameSummary,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::process::ExitCode;

/// Executor that records renames instead of applying them.
///
/// Rejects an instruction whose proposed path is already taken, either by a
/// manifest asset or by an earlier accepted rename.
#[derive(Debug, Clone, Default)]
pub struct PlanExecutor {
    occupied: HashSet<String>,
    accepted: Vec<RenameInstruction>,
}

impl PlanExecutor {
    pub fn new(assets: &[AssetDescriptor]) -> Self {
        Self {
            occupied: assets.iter().map(AssetDescriptor::object_path).collect(),
            accepted: Vec::new(),
        }
    }

    pub fn accepted(&self) -> &[RenameInstruction] {
        &self.accepted
    }

    pub fn into_plan(self) -> RenamePlan {
        RenamePlan {
            renames: self.accepted,
        }
    }
}

impl RenameExecutor for PlanExecutor {
    fn execute(&mut self, instruction: &RenameInstruction) -> Result<(), HostError> {
        if self.occupied.contains(&instruction.proposed_path) {
            return Err(HostError::Rename {
                path: instruction.original_path.clone(),
                reason: format!("{} already exists", instruction.proposed_path),
            });
        }
        self.occupied.remove(&instruction.original_path);
        self.occupied.insert(instruction.proposed_path.clone());
        self.accepted.push(instruction.clone());
        Ok(())
    }
}

/// Accepted renames, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePlan {
    pub renames: Vec<RenameInstruction>,
}

/// JSON output for the rename command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameOutput {
    /// Whether every misnamed asset got an accepted rename.
    pub success: bool,
    pub summary: RenameSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_path: Option<String>,
    pub report: NamingReport,
    pub renames: Vec<RenameRecord>,
}

/// Runs the rename batch and writes the plan to `plan_path` if given.
pub fn execute(
    config_path: &Path,
    manifest_path: &Path,
    plan_path: Option<&Path>,
    progress: &mut dyn ProgressSink,
) -> Result<RenameOutput> {
    let (validator, assets) = prepare(config_path, manifest_path, &[])?;

    let mut executor = PlanExecutor::new(&assets);
    let mut report = NamingReport::new();
    let outcome = validator.rename_assets(
        &assets,
        &mut executor,
        &mut report,
        progress,
        BatchOptions::default(),
    );

    if let Some(path) = plan_path {
        let plan = executor.into_plan();
        let json = serde_json::to_string_pretty(&plan)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write rename plan: {}", path.display()))?;
    }

    Ok(RenameOutput {
        success: !outcome.summary.has_failed(),
        summary: outcome.summary,
        plan_path: plan_path.map(|p| p.display().to_string()),
        report,
        renames: outcome.renames,
    })
}

/// Run the rename command.
///
/// # Returns
/// Exit code: 0 if every rename was accepted, 2 otherwise
pub fn run(
    config_path: &str,
    manifest_path: &str,
    plan_path: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let config_path = Path::new(config_path);
    let manifest_path = Path::new(manifest_path);
    let plan_path = plan_path.map(Path::new);

    let output = if json {
        execute(config_path, manifest_path, plan_path, &mut NoProgress)?
    } else {
        println!("{} {}", "Renaming:".cyan().bold(), manifest_path.display());
        execute(config_path, manifest_path, plan_path, &mut ProgressBar::new())?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&output.report);
        if let Some(summary) = output.report.last_summary() {
            print_summary(summary);
        }
        if let Some(path) = &output.plan_path {
            println!("{} {}", "Plan written to".dimmed(), path);
        }
    }

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_NAMING_FAILURE))
    }
}
