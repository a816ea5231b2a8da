//! Conforming-name synthesis.

use crate::asset::{self, AssetDescriptor};
use crate::classify::{AppliedRule, Classification, Verdict};
use crate::table::RuleTable;
use serde::{Deserialize, Serialize};

/// A rename to be carried out by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenameInstruction {
    /// Current object path, e.g. `/Game/Props/Cube.Cube`.
    pub original_path: String,
    /// Object path after the rename, e.g. `/Game/Props/SM_Cube.SM_Cube`.
    pub proposed_path: String,
}

impl RenameInstruction {
    /// Instruction moving `asset` to `new_name` in the same container.
    pub fn new(asset: &AssetDescriptor, new_name: &str) -> Self {
        Self {
            original_path: asset.object_path(),
            proposed_path: asset::object_path(&asset.package_path, new_name),
        }
    }
}

/// Adds whatever of `prefix`/`suffix` the name lacks, leaving the rest of
/// the name unchanged.
pub fn conforming_name(name: &str, prefix: &str, suffix: &str) -> String {
    let mut renamed = String::with_capacity(prefix.len() + name.len() + suffix.len());
    if !name.starts_with(prefix) {
        renamed.push_str(prefix);
    }
    renamed.push_str(name);
    if !name.ends_with(suffix) {
        renamed.push_str(suffix);
    }
    renamed
}

/// Name the asset should have, for an Invalid classification.
///
/// Returns `None` for any other verdict.
pub fn proposed_name(
    table: &RuleTable,
    asset: &AssetDescriptor,
    classification: &Classification,
) -> Option<String> {
    if classification.verdict != Verdict::Invalid {
        return None;
    }
    match classification.applied? {
        AppliedRule::Table(index) => {
            let rule = table.rules().get(index)?;
            Some(conforming_name(&asset.name, &rule.prefix, &rule.suffix))
        }
        AppliedRule::DefaultCategory => Some(conforming_name(
            &asset.name,
            &table.default_category().prefix,
            "",
        )),
    }
}
