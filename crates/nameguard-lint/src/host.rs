//! Collaborators supplied by the host application.

use crate::asset::AssetDescriptor;
use crate::error::HostError;
use crate::rename::RenameInstruction;

/// Which container paths an enumeration covers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetScope {
    /// Container paths, e.g. `/Game`. Empty means every path.
    pub paths: Vec<String>,
    /// Include assets in sub-folders of `paths`.
    pub recursive: bool,
}

impl AssetScope {
    /// Scope covering every asset.
    pub fn everything() -> Self {
        Self {
            paths: Vec::new(),
            recursive: true,
        }
    }

    /// Recursive scope over the given container paths.
    pub fn recursive<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            recursive: true,
        }
    }

    /// Returns true if `package_path` falls inside the scope.
    pub fn contains(&self, package_path: &str) -> bool {
        if self.paths.is_empty() {
            return true;
        }
        let package_path = package_path.trim_end_matches('/');
        self.paths.iter().any(|root| {
            let root = root.trim_end_matches('/');
            if package_path == root {
                return true;
            }
            self.recursive
                && package_path
                    .strip_prefix(root)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

/// Lists assets known to the host.
pub trait AssetEnumerator {
    /// Assets whose container path is inside `scope`.
    fn list(&self, scope: &AssetScope) -> Result<Vec<AssetDescriptor>, HostError>;

    /// Assets stored in the package `package_name` (`{path}/{name}`).
    fn assets_in_package(&self, package_name: &str) -> Result<Vec<AssetDescriptor>, HostError> {
        Ok(self
            .list(&AssetScope::everything())?
            .into_iter()
            .filter(|asset| asset.package_name() == package_name)
            .collect())
    }
}

/// Applies renames on behalf of the rename batch.
pub trait RenameExecutor {
    fn execute(&mut self, instruction: &RenameInstruction) -> Result<(), HostError>;
}

/// Enumerator over a fixed list of assets, e.g. a loaded manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryAssets {
    assets: Vec<AssetDescriptor>,
}

impl InMemoryAssets {
    pub fn new(assets: Vec<AssetDescriptor>) -> Self {
        Self { assets }
    }

    pub fn assets(&self) -> &[AssetDescriptor] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetEnumerator for InMemoryAssets {
    fn list(&self, scope: &AssetScope) -> Result<Vec<AssetDescriptor>, HostError> {
        Ok(self
            .assets
            .iter()
            .filter(|asset| scope.contains(&asset.package_path))
            .cloned()
            .collect())
    }
}
