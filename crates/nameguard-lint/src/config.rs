//! Naming configuration loaded once at startup.
//!
//! The configuration is format-agnostic: the same structure is read from
//! JSON or YAML depending on the file extension.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete naming-convention configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Class hierarchy used to answer descendant queries.
    #[serde(default)]
    pub classes: Vec<ClassConfig>,

    /// Ordered rules. Order is lookup priority: the first rule whose class is
    /// an ancestor of the asset's class wins.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,

    /// Classes (and their descendants) that are never validated.
    #[serde(default)]
    pub excluded_classes: Vec<String>,

    /// Path fragments; any asset whose container path contains one is skipped.
    #[serde(default)]
    pub excluded_paths: Vec<String>,

    /// Fallback convention for generic assets with no explicit rule.
    #[serde(default)]
    pub default_category: DefaultCategory,

    /// Validate assets when the host saves them.
    #[serde(default = "default_true")]
    pub validate_on_save: bool,

    /// Append `/Engine/` to the excluded paths.
    #[serde(default = "default_true")]
    pub exclude_engine_content: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            classes: Vec::new(),
            rules: Vec::new(),
            excluded_classes: Vec::new(),
            excluded_paths: Vec::new(),
            default_category: DefaultCategory::default(),
            validate_on_save: true,
            exclude_engine_content: true,
        }
    }
}

impl NamingConfig {
    /// Loads a configuration file, choosing the parser from its extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Parses a JSON configuration.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parses a YAML configuration.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// One class in the type hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassConfig {
    /// Full class path, e.g. `/Script/Engine.StaticMesh`.
    pub path: String,
    /// Parent class path; `None` for a root class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl ClassConfig {
    pub fn root(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            parent: None,
        }
    }

    pub fn child(path: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            parent: Some(parent.into()),
        }
    }
}

/// A prefix/suffix rule for a class and its descendants.
///
/// An empty prefix or suffix means the constraint is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Class path the rule applies to.
    pub class: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl RuleConfig {
    pub fn new(
        class: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            class: class.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Rule requiring only a prefix.
    pub fn prefix(class: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self::new(class, prefix, "")
    }

    /// Rule requiring only a suffix.
    pub fn suffix(class: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::new(class, "", suffix)
    }
}

/// Fallback convention for the generic "default-named" category.
///
/// Membership is decided by the asset's marker class (the class recorded on
/// the asset itself), not by the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultCategory {
    /// Marker class name, compared verbatim with the asset's class.
    #[serde(default = "default_class_marker")]
    pub class_marker: String,
    /// Prefix required for members of the category.
    #[serde(default = "default_category_prefix")]
    pub prefix: String,
}

fn default_class_marker() -> String {
    "Blueprint".to_string()
}

fn default_category_prefix() -> String {
    "BP_".to_string()
}

impl Default for DefaultCategory {
    fn default() -> Self {
        Self {
            class_marker: default_class_marker(),
            prefix: default_category_prefix(),
        }
    }
}

impl DefaultCategory {
    /// Returns true if the fallback can apply at all.
    pub fn is_enabled(&self) -> bool {
        !self.class_marker.is_empty() && !self.prefix.is_empty()
    }
}
