//! Temporary project directory for driving the CLI library end to end.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use nameguard_cli::commands::{rename, rules, validate};
use nameguard_cli::input::AssetManifest;
use nameguard_lint::{AssetDescriptor, NamingConfig, NoProgress};

/// A project with a naming config and an asset manifest on disk.
pub struct TestProject {
    pub root: TempDir,
    pub config_path: PathBuf,
    pub manifest_path: PathBuf,
}

impl TestProject {
    /// Writes `config` as YAML and `assets` as a JSON manifest.
    pub fn new(config: &NamingConfig, assets: Vec<AssetDescriptor>) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let config_path = root.path().join("naming.yaml");
        let manifest_path = root.path().join("assets.json");

        let yaml = serde_yaml::to_string(config).expect("config serializes");
        fs::write(&config_path, yaml).expect("Failed to write config");

        let manifest = AssetManifest { assets };
        let json = serde_json::to_string_pretty(&manifest).expect("manifest serializes");
        fs::write(&manifest_path, json).expect("Failed to write manifest");

        Self {
            root,
            config_path,
            manifest_path,
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn validate(&self, scope: &[&str]) -> validate::ValidateOutput {
        let scope: Vec<String> = scope.iter().map(|s| s.to_string()).collect();
        validate::execute(&self.config_path, &self.manifest_path, &scope, false, &mut NoProgress)
            .expect("validate should run")
    }

    /// Runs the rename batch, writing the plan to `plan.json` in the project.
    pub fn rename(&self) -> (rename::RenameOutput, rename::RenamePlan) {
        let plan_path = self.path().join("plan.json");
        let output = rename::execute(
            &self.config_path,
            &self.manifest_path,
            Some(&plan_path),
            &mut NoProgress,
        )
        .expect("rename should run");
        let plan = serde_json::from_str(&fs::read_to_string(&plan_path).expect("plan written"))
            .expect("plan parses");
        (output, plan)
    }

    pub fn rules(&self) -> rules::RulesOutput {
        rules::execute(&self.config_path).expect("rules should run")
    }
}
