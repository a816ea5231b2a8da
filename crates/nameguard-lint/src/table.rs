//! Ordered rule table with class and path exclusions.

use crate::config::{DefaultCategory, NamingConfig};
use crate::hierarchy::{TypeHierarchy, TypeId};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Path fragment excluded unless `exclude_engine_content` is turned off.
pub const ENGINE_CONTENT_PATH: &str = "/Engine/";

/// A resolved naming rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleEntry {
    #[serde(skip)]
    pub type_id: TypeId,
    /// Class path as written in the configuration.
    pub class_path: String,
    /// Required prefix; empty when absent.
    pub prefix: String,
    /// Required suffix; empty when absent.
    pub suffix: String,
}

impl RuleEntry {
    pub fn requires_prefix(&self) -> bool {
        !self.prefix.is_empty()
    }

    pub fn requires_suffix(&self) -> bool {
        !self.suffix.is_empty()
    }

    /// A rule with neither prefix nor suffix accepts every name.
    pub fn is_vacuous(&self) -> bool {
        !self.requires_prefix() && !self.requires_suffix()
    }
}

/// Which configuration list a dropped entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DroppedKind {
    Rule,
    ExcludedClass,
    ExcludedPath,
}

/// A configuration entry that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedEntry {
    pub kind: DroppedKind,
    /// Offending value (class path, or the raw path fragment).
    pub value: String,
}

impl std::fmt::Display for DroppedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            DroppedKind::Rule => write!(f, "no valid class for rule class path '{}'", self.value),
            DroppedKind::ExcludedClass => {
                write!(f, "no valid class for excluded class path '{}'", self.value)
            }
            DroppedKind::ExcludedPath => write!(f, "empty excluded path '{}'", self.value),
        }
    }
}

/// Rules, exclusions and the default-category fallback.
///
/// Built once from configuration and read-only afterwards. Rule order is the
/// lookup priority and is never re-sorted: when rules for an ancestor and a
/// descendant class both exist, whichever comes first in the table wins.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<RuleEntry>,
    excluded_types: Vec<TypeId>,
    excluded_paths: Vec<String>,
    default_category: DefaultCategory,
    dropped: Vec<DroppedEntry>,
}

impl RuleTable {
    /// Resolves the configured rules and exclusions against `hierarchy`.
    ///
    /// Entries naming a class the hierarchy cannot resolve are dropped and
    /// recorded in [`dropped`](Self::dropped); the rest of the table is kept.
    pub fn build(config: &NamingConfig, hierarchy: &dyn TypeHierarchy) -> Self {
        let mut dropped = Vec::new();

        let mut rules = Vec::with_capacity(config.rules.len());
        for rule in &config.rules {
            match hierarchy.resolve(&rule.class) {
                Some(type_id) => rules.push(RuleEntry {
                    type_id,
                    class_path: rule.class.clone(),
                    prefix: rule.prefix.clone(),
                    suffix: rule.suffix.clone(),
                }),
                None => {
                    warn!(class = %rule.class, "dropping naming rule: class cannot be resolved");
                    dropped.push(DroppedEntry {
                        kind: DroppedKind::Rule,
                        value: rule.class.clone(),
                    });
                }
            }
        }

        let mut excluded_types = Vec::with_capacity(config.excluded_classes.len());
        for class in &config.excluded_classes {
            match hierarchy.resolve(class) {
                Some(type_id) => excluded_types.push(type_id),
                None => {
                    warn!(class = %class, "dropping excluded class: class cannot be resolved");
                    dropped.push(DroppedEntry {
                        kind: DroppedKind::ExcludedClass,
                        value: class.clone(),
                    });
                }
            }
        }

        let mut excluded_paths = Vec::with_capacity(config.excluded_paths.len() + 1);
        for path in &config.excluded_paths {
            // An empty fragment would match every path.
            if path.trim().is_empty() {
                warn!("dropping empty excluded path");
                dropped.push(DroppedEntry {
                    kind: DroppedKind::ExcludedPath,
                    value: path.clone(),
                });
                continue;
            }
            excluded_paths.push(path.clone());
        }
        if config.exclude_engine_content
            && !excluded_paths.iter().any(|p| p == ENGINE_CONTENT_PATH)
        {
            excluded_paths.push(ENGINE_CONTENT_PATH.to_string());
        }

        Self {
            rules,
            excluded_types,
            excluded_paths,
            default_category: config.default_category.clone(),
            dropped,
        }
    }

    /// Rules in lookup order.
    pub fn rules(&self) -> &[RuleEntry] {
        &self.rules
    }

    /// Excluded types.
    pub fn excluded_types(&self) -> &[TypeId] {
        &self.excluded_types
    }

    /// Excluded path fragments, including the engine path when enabled.
    pub fn excluded_paths(&self) -> &[String] {
        &self.excluded_paths
    }

    /// Default-category fallback.
    pub fn default_category(&self) -> &DefaultCategory {
        &self.default_category
    }

    /// Configuration entries dropped while building.
    pub fn dropped(&self) -> &[DroppedEntry] {
        &self.dropped
    }

    /// True if `path` contains any excluded fragment (unanchored).
    pub fn is_path_excluded(&self, path: &str) -> bool {
        self.excluded_paths
            .iter()
            .any(|fragment| path.contains(fragment.as_str()))
    }

    /// True if `type_id` is, or descends from, an excluded type.
    pub fn is_excluded_type(&self, type_id: TypeId, hierarchy: &dyn TypeHierarchy) -> bool {
        self.excluded_types
            .iter()
            .any(|excluded| hierarchy.is_descendant_of(type_id, *excluded))
    }

    /// Index of the first rule, in table order, whose class is an ancestor
    /// of (or equal to) `type_id`.
    pub fn find_rule_index(&self, type_id: TypeId, hierarchy: &dyn TypeHierarchy) -> Option<usize> {
        self.rules
            .iter()
            .position(|rule| hierarchy.is_descendant_of(type_id, rule.type_id))
    }

    /// First matching rule in table order, not the most specific one.
    pub fn find_rule(&self, type_id: TypeId, hierarchy: &dyn TypeHierarchy) -> Option<&RuleEntry> {
        self.find_rule_index(type_id, hierarchy)
            .map(|index| &self.rules[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClassConfig, RuleConfig};
    use crate::hierarchy::ClassTree;
    use pretty_assertions::assert_eq;

    fn tree() -> ClassTree {
        ClassTree::from_config(&[
            ClassConfig::root("Object"),
            ClassConfig::child("Texture", "Object"),
            ClassConfig::child("Texture2D", "Texture"),
            ClassConfig::child("StaticMesh", "Object"),
            ClassConfig::child("World", "Object"),
        ])
        .unwrap()
    }

    #[test]
    fn test_first_match_wins_over_specificity() {
        let tree = tree();
        let mut config = NamingConfig::default();
        config.rules = vec![
            RuleConfig::prefix("Texture", "T_"),
            RuleConfig::prefix("Texture2D", "T2D_"),
        ];
        let table = RuleTable::build(&config, &tree);

        let texture_2d = tree.resolve("Texture2D").unwrap();
        let rule = table.find_rule(texture_2d, &tree).unwrap();
        assert_eq!(rule.class_path, "Texture");
        assert_eq!(rule.prefix, "T_");
        assert_eq!(table.find_rule_index(texture_2d, &tree), Some(0));
    }

    #[test]
    fn test_specific_rule_first_is_used() {
        let tree = tree();
        let mut config = NamingConfig::default();
        config.rules = vec![
            RuleConfig::prefix("Texture2D", "T2D_"),
            RuleConfig::prefix("Texture", "T_"),
        ];
        let table = RuleTable::build(&config, &tree);

        let texture_2d = tree.resolve("Texture2D").unwrap();
        let texture = tree.resolve("Texture").unwrap();
        assert_eq!(table.find_rule(texture_2d, &tree).unwrap().prefix, "T2D_");
        assert_eq!(table.find_rule(texture, &tree).unwrap().prefix, "T_");
    }

    #[test]
    fn test_no_rule_for_unrelated_class() {
        let tree = tree();
        let mut config = NamingConfig::default();
        config.rules = vec![RuleConfig::prefix("Texture", "T_")];
        let table = RuleTable::build(&config, &tree);

        let mesh = tree.resolve("StaticMesh").unwrap();
        assert!(table.find_rule(mesh, &tree).is_none());
    }

    #[test]
    fn test_unresolvable_entries_dropped() {
        let tree = tree();
        let mut config = NamingConfig::default();
        config.rules = vec![
            RuleConfig::prefix("SoundWave", "S_"),
            RuleConfig::prefix("StaticMesh", "SM_"),
        ];
        config.excluded_classes = vec!["Level".to_string(), "World".to_string()];
        let table = RuleTable::build(&config, &tree);

        assert_eq!(table.rules().len(), 1);
        assert_eq!(table.rules()[0].class_path, "StaticMesh");
        assert_eq!(table.excluded_types().len(), 1);
        assert_eq!(
            table.dropped(),
            &[
                DroppedEntry {
                    kind: DroppedKind::Rule,
                    value: "SoundWave".to_string()
                },
                DroppedEntry {
                    kind: DroppedKind::ExcludedClass,
                    value: "Level".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_excluded_type_covers_descendants() {
        let tree = tree();
        let mut config = NamingConfig::default();
        config.excluded_classes = vec!["Texture".to_string()];
        let table = RuleTable::build(&config, &tree);

        assert!(table.is_excluded_type(tree.resolve("Texture").unwrap(), &tree));
        assert!(table.is_excluded_type(tree.resolve("Texture2D").unwrap(), &tree));
        assert!(!table.is_excluded_type(tree.resolve("Object").unwrap(), &tree));
    }

    #[test]
    fn test_path_exclusion_is_substring_match() {
        let tree = tree();
        let mut config = NamingConfig::default();
        config.excluded_paths = vec!["/Developers/".to_string()];
        let table = RuleTable::build(&config, &tree);

        assert!(table.is_path_excluded("/Engine/Basic/Shapes"));
        assert!(table.is_path_excluded("/Game/Developers/jdoe"));
        assert!(table.is_path_excluded("/Game/Team/Developers/Sandbox"));
        assert!(!table.is_path_excluded("/Game/Props"));
        assert_eq!(table.excluded_paths(), &["/Developers/".to_string(), "/Engine/".to_string()]);
    }

    #[test]
    fn test_engine_exclusion_can_be_disabled() {
        let tree = tree();
        let mut config = NamingConfig::default();
        config.exclude_engine_content = false;
        let table = RuleTable::build(&config, &tree);
        assert!(!table.is_path_excluded("/Engine/Basic/Shapes"));
        assert!(table.excluded_paths().is_empty());
    }

    #[test]
    fn test_empty_excluded_path_dropped() {
        let tree = tree();
        let mut config = NamingConfig::default();
        config.excluded_paths = vec![String::new()];
        config.exclude_engine_content = false;
        let table = RuleTable::build(&config, &tree);
        assert!(!table.is_path_excluded("/Game/Props"));
        assert_eq!(table.dropped()[0].kind, DroppedKind::ExcludedPath);
    }

    #[test]
    fn test_vacuous_rule() {
        let tree = tree();
        let mut config = NamingConfig::default();
        config.rules = vec![RuleConfig::new("Object", "", "")];
        let table = RuleTable::build(&config, &tree);
        assert!(table.rules()[0].is_vacuous());
    }
}
