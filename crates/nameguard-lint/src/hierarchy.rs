//! Single-inheritance type hierarchy.

use crate::config::ClassConfig;
use crate::error::ConfigError;
use std::collections::HashMap;

/// Handle to a class known by a [`TypeHierarchy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    /// Handle for the class at `index`. Hierarchies other than [`ClassTree`]
    /// use this to mint their own ids.
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of the class in its hierarchy.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Answers descendant queries over the asset type system.
///
/// `is_descendant_of` must be reflexive and transitive.
pub trait TypeHierarchy: Send + Sync {
    /// Resolves a class path to a type. `None` if the class is not loadable.
    fn resolve(&self, class_path: &str) -> Option<TypeId>;

    /// True if `candidate` is `ancestor` or inherits from it.
    fn is_descendant_of(&self, candidate: TypeId, ancestor: TypeId) -> bool;

    /// Class path for a resolved type.
    fn class_path(&self, id: TypeId) -> Option<&str>;
}

/// Class tree stored as parent links.
#[derive(Debug, Clone, Default)]
pub struct ClassTree {
    paths: Vec<String>,
    parents: Vec<Option<TypeId>>,
    index: HashMap<String, TypeId>,
}

impl ClassTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from configuration. Classes may be declared in any order.
    pub fn from_config(classes: &[ClassConfig]) -> Result<Self, ConfigError> {
        let mut declared: HashMap<&str, Option<&str>> = HashMap::new();
        for class in classes {
            if declared
                .insert(class.path.as_str(), class.parent.as_deref())
                .is_some()
            {
                return Err(ConfigError::DuplicateClass(class.path.clone()));
            }
        }

        let mut tree = Self::new();
        for class in classes {
            // Walk up until we hit a root or a class that is already inserted,
            // then insert the chain top-down.
            let mut chain: Vec<&str> = Vec::new();
            let mut cursor = Some(class.path.as_str());
            while let Some(path) = cursor {
                if tree.index.contains_key(path) {
                    break;
                }
                if chain.contains(&path) {
                    return Err(ConfigError::InheritanceCycle(path.to_string()));
                }
                let parent = match declared.get(path) {
                    Some(parent) => *parent,
                    None => {
                        let child = chain.last().copied().unwrap_or(path);
                        return Err(ConfigError::UnknownParent {
                            class: child.to_string(),
                            parent: path.to_string(),
                        });
                    }
                };
                chain.push(path);
                cursor = parent;
            }

            for path in chain.into_iter().rev() {
                let parent = declared
                    .get(path)
                    .copied()
                    .flatten()
                    .and_then(|p| tree.index.get(p).copied());
                tree.insert(path, parent);
            }
        }

        Ok(tree)
    }

    /// Adds a class under `parent`. Fails if the path is already present.
    pub fn add_class(
        &mut self,
        path: impl Into<String>,
        parent: Option<TypeId>,
    ) -> Result<TypeId, ConfigError> {
        let path = path.into();
        if self.index.contains_key(&path) {
            return Err(ConfigError::DuplicateClass(path));
        }
        Ok(self.insert(&path, parent))
    }

    fn insert(&mut self, path: &str, parent: Option<TypeId>) -> TypeId {
        let id = TypeId(self.paths.len() as u32);
        self.paths.push(path.to_string());
        self.parents.push(parent);
        self.index.insert(path.to_string(), id);
        id
    }

    /// Direct parent of a class.
    pub fn parent(&self, id: TypeId) -> Option<TypeId> {
        self.parents.get(id.index()).copied().flatten()
    }

    /// Iterates a class and its ancestors, nearest first.
    pub fn ancestors(&self, id: TypeId) -> impl Iterator<Item = TypeId> + '_ {
        let start = (id.index() < self.paths.len()).then_some(id);
        std::iter::successors(start, move |current| self.parent(*current))
    }

    /// Number of classes in the tree.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if the tree has no classes.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl TypeHierarchy for ClassTree {
    fn resolve(&self, class_path: &str) -> Option<TypeId> {
        self.index.get(class_path).copied()
    }

    fn is_descendant_of(&self, candidate: TypeId, ancestor: TypeId) -> bool {
        self.ancestors(candidate).any(|id| id == ancestor)
    }

    fn class_path(&self, id: TypeId) -> Option<&str> {
        self.paths.get(id.index()).map(String::as_str)
    }
}
