//! Resolution of an asset's real class.
//!
//! The class recorded on an asset is not always its real type: blueprint
//! assets record `Blueprint` and keep the native class they extend in their
//! metadata tags. Resolution tries an ordered list of strategies, cheapest
//! first, and only falls back to inspecting the loaded asset when no tag is
//! present.

use crate::asset::AssetDescriptor;
use crate::hierarchy::{TypeHierarchy, TypeId};
use thiserror::Error;

/// Tag holding the native parent class of blueprint assets.
pub const NATIVE_PARENT_CLASS_TAG: &str = "NativeParentClass";

/// Tag holding the native class of an asset.
pub const NATIVE_CLASS_TAG: &str = "NativeClass";

/// Determines the class of a loaded asset. This is the expensive fallback.
pub trait ClassInspector: Send + Sync {
    fn loaded_class(&self, asset: &AssetDescriptor) -> Option<String>;
}

/// Inspector that reports the class recorded on the descriptor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredClass;

impl ClassInspector for DeclaredClass {
    fn loaded_class(&self, asset: &AssetDescriptor) -> Option<String> {
        (!asset.asset_class.is_empty()).then(|| asset.asset_class.clone())
    }
}

/// One step of the resolution chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassStrategy {
    /// Read the class path from a metadata tag.
    Tag(String),
    /// Ask the [`ClassInspector`].
    Loaded,
}

/// Why an asset's type could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionFailure {
    /// No strategy produced a class path.
    #[error("type unresolved: no class information")]
    NoClassInformation,
    /// A class path was found but the hierarchy does not know it.
    #[error("type unresolved: class '{0}' cannot be loaded")]
    UnknownClass(String),
}

/// A successfully resolved class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedClass {
    pub class_path: String,
    pub type_id: TypeId,
}

/// Ordered list of class resolution strategies.
pub struct TypeResolver {
    strategies: Vec<ClassStrategy>,
    inspector: Box<dyn ClassInspector>,
}

impl TypeResolver {
    /// Default chain: native parent tag, native class tag, loaded class.
    pub fn new(inspector: Box<dyn ClassInspector>) -> Self {
        Self::with_strategies(
            vec![
                ClassStrategy::Tag(NATIVE_PARENT_CLASS_TAG.to_string()),
                ClassStrategy::Tag(NATIVE_CLASS_TAG.to_string()),
                ClassStrategy::Loaded,
            ],
            inspector,
        )
    }

    pub fn with_strategies(
        strategies: Vec<ClassStrategy>,
        inspector: Box<dyn ClassInspector>,
    ) -> Self {
        Self {
            strategies,
            inspector,
        }
    }

    pub fn strategies(&self) -> &[ClassStrategy] {
        &self.strategies
    }

    /// First class path produced by the strategy chain.
    pub fn real_class(&self, asset: &AssetDescriptor) -> Option<String> {
        self.strategies.iter().find_map(|strategy| {
            let class = match strategy {
                ClassStrategy::Tag(key) => asset.tag(key).map(str::to_string),
                ClassStrategy::Loaded => self.inspector.loaded_class(asset),
            };
            class.filter(|c| !c.is_empty())
        })
    }

    /// Resolves the asset's real class to a type in `hierarchy`.
    pub fn resolve(
        &self,
        asset: &AssetDescriptor,
        hierarchy: &dyn TypeHierarchy,
    ) -> Result<ResolvedClass, ResolutionFailure> {
        let class_path = self
            .real_class(asset)
            .ok_or(ResolutionFailure::NoClassInformation)?;
        match hierarchy.resolve(&class_path) {
            Some(type_id) => Ok(ResolvedClass {
                class_path,
                type_id,
            }),
            None => Err(ResolutionFailure::UnknownClass(class_path)),
        }
    }
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self::new(Box::new(DeclaredClass))
    }
}

impl std::fmt::Debug for TypeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeResolver")
            .field("strategies", &self.strategies)
            .finish_non_exhaustive()
    }
}
