//! Loading of naming configuration and asset manifests.

use anyhow::{bail, Context, Result};
use nameguard_lint::{AssetDescriptor, NamingConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Asset list exported by the host's asset registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub assets: Vec<AssetDescriptor>,
}

/// Loads a naming configuration (JSON or YAML).
pub fn load_config(path: &Path) -> Result<NamingConfig> {
    NamingConfig::load(path)
        .with_context(|| format!("Failed to load naming config: {}", path.display()))
}

/// Loads an asset manifest (JSON or YAML).
pub fn load_manifest(path: &Path) -> Result<AssetManifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let manifest = match ext.as_str() {
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON manifest: {}", path.display()))?,
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML manifest: {}", path.display()))?,
        other => bail!(
            "Unsupported manifest format '{}', expected .json, .yaml or .yml",
            other
        ),
    };

    Ok(manifest)
}
