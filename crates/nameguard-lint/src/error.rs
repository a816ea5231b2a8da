//! Error types for configuration loading and host collaborators.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent a naming configuration from being built.
///
/// Unresolvable classes in the rule or exclusion lists are *not* errors:
/// they are dropped while building the [`RuleTable`](crate::RuleTable).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON.
    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration is not valid YAML.
    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension is neither JSON nor YAML.
    #[error("unsupported config format '{0}', expected .json, .yaml or .yml")]
    UnsupportedFormat(String),

    /// The same class path is declared twice in the hierarchy.
    #[error("class '{0}' is declared more than once")]
    DuplicateClass(String),

    /// A class names a parent that is not declared.
    #[error("class '{class}' has unknown parent '{parent}'")]
    UnknownParent { class: String, parent: String },

    /// Following parent links from this class never reaches a root.
    #[error("class '{0}' is part of an inheritance cycle")]
    InheritanceCycle(String),
}

/// Failures reported by host collaborators (enumerators, rename executors).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The asset enumerator could not list assets.
    #[error("asset enumeration failed: {0}")]
    Enumeration(String),

    /// The rename executor refused or failed to apply a rename.
    #[error("rename of '{path}' failed: {reason}")]
    Rename { path: String, reason: String },
}
