//! Per-asset classification.

use crate::asset::AssetDescriptor;
use crate::hierarchy::TypeHierarchy;
use crate::report::Severity;
use crate::resolve::TypeResolver;
use crate::table::RuleTable;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of classifying one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The name satisfies the applicable rule.
    Valid,
    /// The name violates the applicable rule.
    Invalid,
    /// The asset is exempt by path or class.
    Excluded,
    /// No rule applies, or the asset's type could not be resolved.
    Unknown,
}

impl Verdict {
    /// Severity used when reporting this verdict. Valid assets are silent.
    pub fn severity(self) -> Option<Severity> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid => Some(Severity::Error),
            Verdict::Excluded => Some(Severity::Info),
            Verdict::Unknown => Some(Severity::Warning),
        }
    }
}

/// Which convention decided the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum AppliedRule {
    /// Rule at this index of the rule table.
    Table(usize),
    /// The default-category fallback prefix.
    DefaultCategory,
}

/// Verdict plus explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub verdict: Verdict,
    /// Set for Invalid and Unknown verdicts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Set for Valid and Invalid verdicts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied: Option<AppliedRule>,
    /// Resolved real class, when resolution got that far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_path: Option<String>,
}

impl Classification {
    fn excluded(class_path: Option<String>) -> Self {
        Self {
            verdict: Verdict::Excluded,
            message: None,
            applied: None,
            class_path,
        }
    }

    fn unknown(message: impl Into<String>, class_path: Option<String>) -> Self {
        Self {
            verdict: Verdict::Unknown,
            message: Some(message.into()),
            applied: None,
            class_path,
        }
    }

    fn checked(applied: AppliedRule, violation: Option<String>, class_path: String) -> Self {
        Self {
            verdict: if violation.is_some() {
                Verdict::Invalid
            } else {
                Verdict::Valid
            },
            message: violation,
            applied: Some(applied),
            class_path: Some(class_path),
        }
    }
}

/// Classifies assets against a rule table.
///
/// Classification is a pure function of the table and the asset.
#[derive(Clone, Copy)]
pub struct Classifier<'a> {
    table: &'a RuleTable,
    hierarchy: &'a dyn TypeHierarchy,
    resolver: &'a TypeResolver,
}

impl<'a> Classifier<'a> {
    pub fn new(
        table: &'a RuleTable,
        hierarchy: &'a dyn TypeHierarchy,
        resolver: &'a TypeResolver,
    ) -> Self {
        Self {
            table,
            hierarchy,
            resolver,
        }
    }

    pub fn table(&self) -> &'a RuleTable {
        self.table
    }

    pub fn hierarchy(&self) -> &'a dyn TypeHierarchy {
        self.hierarchy
    }

    /// Classifies one asset.
    ///
    /// Path exclusion is checked first, then type resolution, class
    /// exclusion, the first matching table rule, and finally the
    /// default-category fallback.
    pub fn classify(&self, asset: &AssetDescriptor) -> Classification {
        let classification = self.classify_inner(asset);
        debug!(
            asset = %asset.package_name(),
            verdict = ?classification.verdict,
            "classified asset"
        );
        classification
    }

    fn classify_inner(&self, asset: &AssetDescriptor) -> Classification {
        if self.table.is_path_excluded(&container_dir(&asset.package_path)) {
            return Classification::excluded(None);
        }

        let resolved = match self.resolver.resolve(asset, self.hierarchy) {
            Ok(resolved) => resolved,
            Err(failure) => return Classification::unknown(failure.to_string(), None),
        };

        if self.table.is_excluded_type(resolved.type_id, self.hierarchy) {
            return Classification::excluded(Some(resolved.class_path));
        }

        if let Some(index) = self.table.find_rule_index(resolved.type_id, self.hierarchy) {
            let rule = &self.table.rules()[index];
            let violation =
                name_violation(&asset.name, &rule.prefix, &rule.suffix).map(|v| match v {
                    Violation::Prefix => format!(
                        "Assets of class '{}' must have a name which starts with {}",
                        rule.class_path, rule.prefix
                    ),
                    Violation::Suffix => format!(
                        "Assets of class '{}' must have a name which ends with {}",
                        rule.class_path, rule.suffix
                    ),
                });
            return Classification::checked(
                AppliedRule::Table(index),
                violation,
                resolved.class_path,
            );
        }

        let category = self.table.default_category();
        if category.is_enabled() && asset.asset_class == category.class_marker {
            let violation = name_violation(&asset.name, &category.prefix, "").map(|_| {
                format!(
                    "Generic {} assets must start with {}",
                    category.class_marker.to_lowercase(),
                    category.prefix
                )
            });
            return Classification::checked(
                AppliedRule::DefaultCategory,
                violation,
                resolved.class_path,
            );
        }

        Classification::unknown(
            format!("no naming convention for class '{}'", resolved.class_path),
            Some(resolved.class_path),
        )
    }
}

impl std::fmt::Debug for Classifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("rules", &self.table.rules().len())
            .finish_non_exhaustive()
    }
}

/// Which constraint a name violates. Prefix is checked first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Violation {
    Prefix,
    Suffix,
}

pub(crate) fn name_violation(name: &str, prefix: &str, suffix: &str) -> Option<Violation> {
    if !prefix.is_empty() && !name.starts_with(prefix) {
        return Some(Violation::Prefix);
    }
    if !suffix.is_empty() && !name.ends_with(suffix) {
        return Some(Violation::Suffix);
    }
    None
}

/// Container paths are matched as directories so `/Engine/` covers `/Engine`.
fn container_dir(path: &str) -> String {
    format!("{}/", path.trim_end_matches('/'))
}
