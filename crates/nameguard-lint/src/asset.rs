//! Asset descriptors supplied by the host.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named, typed asset subject to naming validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// Asset name without any path, e.g. `SM_Cube`.
    pub name: String,

    /// Class recorded on the asset itself (e.g. `Blueprint` for blueprint
    /// assets, whose real type lives in their tags).
    #[serde(rename = "class")]
    pub asset_class: String,

    /// Container path (package folder), e.g. `/Game/Props/Meshes`.
    pub package_path: String,

    /// Metadata tags used for cheap type lookup.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

impl AssetDescriptor {
    pub fn new(
        name: impl Into<String>,
        asset_class: impl Into<String>,
        package_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            asset_class: asset_class.into(),
            package_path: package_path.into(),
            tags: BTreeMap::new(),
        }
    }

    /// Builder method to add a metadata tag.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Looks up a metadata tag.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Long package name: `{package_path}/{name}`.
    pub fn package_name(&self) -> String {
        package_name(&self.package_path, &self.name)
    }

    /// Object path: `{package_path}/{name}.{name}`.
    pub fn object_path(&self) -> String {
        object_path(&self.package_path, &self.name)
    }

    /// Returns a copy of this descriptor under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

/// Joins a container path and an asset name.
pub fn package_name(package_path: &str, name: &str) -> String {
    format!("{}/{}", package_path.trim_end_matches('/'), name)
}

/// Builds the object path of an asset named `name` in `package_path`.
pub fn object_path(package_path: &str, name: &str) -> String {
    format!("{}.{}", package_name(package_path, name), name)
}
