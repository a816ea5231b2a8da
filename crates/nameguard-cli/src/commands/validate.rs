//! Validate command implementation
//!
//! Classifies every manifest asset and reports naming convention violations.

use super::reporting::{print_report, print_summary, ProgressBar};
use super::{prepare, EXIT_NAMING_FAILURE};
use anyhow::Result;
use colored::Colorize;
use nameguard_lint::{
    AssetVerdict, BatchOptions, DroppedEntry, NamingReport, NoProgress, ProgressSink, RunSummary,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::ExitCode;

/// JSON output for the validate command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether every checked asset follows the convention.
    pub success: bool,
    pub config_path: String,
    pub manifest_path: String,
    pub summary: RunSummary,
    /// Configuration entries that were ignored.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<DroppedEntry>,
    pub report: NamingReport,
    pub verdicts: Vec<AssetVerdict>,
}

/// Runs validation without printing anything but progress.
pub fn execute(
    config_path: &Path,
    manifest_path: &Path,
    scope: &[String],
    quiet: bool,
    progress: &mut dyn ProgressSink,
) -> Result<ValidateOutput> {
    let (validator, assets) = prepare(config_path, manifest_path, scope)?;

    let options = if quiet {
        BatchOptions::quiet()
    } else {
        BatchOptions::default()
    };
    let mut report = NamingReport::new();
    let outcome = validator.validate_assets(&assets, &mut report, progress, options);

    Ok(ValidateOutput {
        success: !outcome.summary.has_failed(),
        config_path: config_path.display().to_string(),
        manifest_path: manifest_path.display().to_string(),
        summary: outcome.summary,
        dropped: validator.dropped_entries().to_vec(),
        report,
        verdicts: outcome.verdicts,
    })
}

/// Run the validate command.
///
/// # Returns
/// Exit code: 0 if every asset passed, 2 if any asset is misnamed
pub fn run(
    config_path: &str,
    manifest_path: &str,
    scope: &[String],
    json: bool,
    quiet: bool,
) -> Result<ExitCode> {
    let output = if json {
        execute(Path::new(config_path), Path::new(manifest_path), scope, quiet, &mut NoProgress)?
    } else {
        println!("{} {}", "Validating:".cyan().bold(), manifest_path);
        execute(
            Path::new(config_path),
            Path::new(manifest_path),
            scope,
            quiet,
            &mut ProgressBar::new(),
        )?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_text_output(&output);
    }

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_NAMING_FAILURE))
    }
}

fn print_text_output(output: &ValidateOutput) {
    for dropped in &output.dropped {
        println!("  {} {}", "!".yellow(), dropped.to_string().dimmed());
    }

    print_report(&output.report);

    match output.report.last_summary() {
        Some(summary) => print_summary(summary),
        None if output.success => println!("\n{}", "PASSED".green().bold()),
        None => println!("\n{}", "FAILED".red().bold()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    const CONFIG: &str = r#"{
        "classes": [
            { "path": "Object" },
            { "path": "StaticMesh", "parent": "Object" },
            { "path": "Blueprint", "parent": "Object" }
        ],
        "rules": [
            { "class": "StaticMesh", "prefix": "SM_" },
            { "class": "SoundWave", "prefix": "S_" }
        ]
    }"#;

    const MANIFEST: &str = r#"{ "assets": [
        { "name": "SM_Cube", "class": "StaticMesh", "package_path": "/Game/Props" },
        { "name": "Cube", "class": "StaticMesh", "package_path": "/Game/Props" },
        { "name": "Sphere", "class": "StaticMesh", "package_path": "/Engine/Shapes" },
        { "name": "Door", "class": "Blueprint", "package_path": "/Plugins/Doors" }
    ] }"#;

    fn write_inputs(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
        let config = dir.join("naming.json");
        let manifest = dir.join("assets.json");
        fs::write(&config, CONFIG).unwrap();
        fs::write(&manifest, MANIFEST).unwrap();
        (config, manifest)
    }

    #[test]
    fn test_execute_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        let (config, manifest) = write_inputs(dir.path());

        let output = execute(&config, &manifest, &[], false, &mut NoProgress).unwrap();
        assert!(!output.success);
        assert_eq!(
            output.summary,
            RunSummary {
                checked: 3,
                valid: 1,
                invalid: 2,
                skipped: 1,
                unable_to_validate: 0,
            }
        );
        assert_eq!(output.dropped.len(), 1);
        assert_eq!(output.report.errors.len(), 2);
        assert_eq!(output.verdicts.len(), 4);
    }

    #[test]
    fn test_execute_with_scope() {
        let dir = tempfile::tempdir().unwrap();
        let (config, manifest) = write_inputs(dir.path());

        let scope = ["/Game".to_string()];
        let output = execute(&config, &manifest, &scope, false, &mut NoProgress).unwrap();
        assert_eq!(output.verdicts.len(), 2);
        assert_eq!(output.summary.invalid, 1);
    }

    #[test]
    fn test_run_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let (config, manifest) = write_inputs(dir.path());

        let code = run(
            config.to_str().unwrap(),
            manifest.to_str().unwrap(),
            &["/Game/Props".to_string()],
            true,
            true,
        )
        .unwrap();
        assert_eq!(code, ExitCode::from(EXIT_NAMING_FAILURE));
    }

    #[test]
    fn test_missing_manifest_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let (config, _) = write_inputs(dir.path());
        let missing = dir.path().join("missing.json");
        let result = execute(&config, &missing, &[], false, &mut NoProgress);
        assert!(result.is_err());
    }
}
