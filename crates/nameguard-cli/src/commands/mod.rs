//! CLI command implementations

pub mod rename;
pub mod rules;
pub mod validate;

mod reporting;

use crate::input::{load_config, load_manifest};
use anyhow::{Context, Result};
use nameguard_lint::{AssetDescriptor, AssetEnumerator, AssetScope, InMemoryAssets, NamingValidator};
use std::path::Path;
use tracing::{debug, warn};

/// Exit code for a batch that found naming failures.
pub const EXIT_NAMING_FAILURE: u8 = 2;

/// Builds the validator and lists the manifest assets inside `scope`.
pub(crate) fn prepare(
    config_path: &Path,
    manifest_path: &Path,
    scope: &[String],
) -> Result<(NamingValidator, Vec<AssetDescriptor>)> {
    let config = load_config(config_path)?;
    let validator = NamingValidator::from_config(&config)
        .with_context(|| format!("Invalid class hierarchy in {}", config_path.display()))?;
    debug!(
        config = %config_path.display(),
        rules = validator.table().rules().len(),
        "loaded naming config"
    );
    if !validator.dropped_entries().is_empty() {
        warn!(
            config = %config_path.display(),
            dropped = validator.dropped_entries().len(),
            "some configuration entries were ignored"
        );
    }

    let manifest = load_manifest(manifest_path)?;
    let listed = manifest.assets.len();
    let assets = InMemoryAssets::new(manifest.assets)
        .list(&AssetScope::recursive(scope.iter().cloned()))
        .context("Failed to enumerate manifest assets")?;
    debug!(
        manifest = %manifest_path.display(),
        listed,
        in_scope = assets.len(),
        "loaded asset manifest"
    );

    Ok((validator, assets))
}
