//! Validator built once from configuration and passed by reference.

use crate::asset::AssetDescriptor;
use crate::batch::{self, BatchOptions, RenameOutcome, RunSummary, ValidationOutcome};
use crate::classify::{Classification, Classifier};
use crate::config::NamingConfig;
use crate::error::ConfigError;
use crate::hierarchy::{ClassTree, TypeHierarchy};
use crate::host::RenameExecutor;
use crate::rename;
use crate::report::{NoProgress, ProgressSink, ReportSink, Severity};
use crate::resolve::TypeResolver;
use crate::table::{DroppedEntry, RuleTable};

/// Hierarchy, rule table and type resolver for one configuration.
///
/// Immutable once built. On configuration reload, build a new one.
pub struct NamingValidator {
    hierarchy: Box<dyn TypeHierarchy>,
    table: RuleTable,
    resolver: TypeResolver,
    validate_on_save: bool,
}

impl NamingValidator {
    /// Builds the class hierarchy from `config.classes`, then the rule table.
    pub fn from_config(config: &NamingConfig) -> Result<Self, ConfigError> {
        let tree = ClassTree::from_config(&config.classes)?;
        Ok(Self::with_hierarchy(config, Box::new(tree)))
    }

    /// Uses an externally supplied hierarchy; `config.classes` is ignored.
    pub fn with_hierarchy(config: &NamingConfig, hierarchy: Box<dyn TypeHierarchy>) -> Self {
        let table = RuleTable::build(config, hierarchy.as_ref());
        Self {
            hierarchy,
            table,
            resolver: TypeResolver::default(),
            validate_on_save: config.validate_on_save,
        }
    }

    /// Replaces the default type resolution chain.
    pub fn with_resolver(mut self, resolver: TypeResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn hierarchy(&self) -> &dyn TypeHierarchy {
        self.hierarchy.as_ref()
    }

    /// Configuration entries dropped because their class did not resolve.
    pub fn dropped_entries(&self) -> &[DroppedEntry] {
        self.table.dropped()
    }

    pub fn validates_on_save(&self) -> bool {
        self.validate_on_save
    }

    pub fn classifier(&self) -> Classifier<'_> {
        Classifier::new(&self.table, self.hierarchy.as_ref(), &self.resolver)
    }

    pub fn classify(&self, asset: &AssetDescriptor) -> Classification {
        self.classifier().classify(asset)
    }

    /// Conforming name for a misnamed asset; `None` if the asset is not Invalid.
    pub fn proposed_name(&self, asset: &AssetDescriptor) -> Option<String> {
        let classification = self.classify(asset);
        rename::proposed_name(&self.table, asset, &classification)
    }

    pub fn validate_assets(
        &self,
        assets: &[AssetDescriptor],
        report: &mut dyn ReportSink,
        progress: &mut dyn ProgressSink,
        options: BatchOptions,
    ) -> ValidationOutcome {
        batch::validate_all(&self.classifier(), assets, report, progress, options)
    }

    pub fn rename_assets(
        &self,
        assets: &[AssetDescriptor],
        executor: &mut dyn RenameExecutor,
        report: &mut dyn ReportSink,
        progress: &mut dyn ProgressSink,
        options: BatchOptions,
    ) -> RenameOutcome {
        batch::rename_all(&self.classifier(), assets, executor, report, progress, options)
    }

    /// Quiet validation of freshly saved assets.
    ///
    /// Does nothing (returns `None`) when validation on save is disabled or
    /// the host is autosaving. On failure the sink is notified once.
    pub fn validate_on_save(
        &self,
        assets: &[AssetDescriptor],
        report: &mut dyn ReportSink,
        autosaving: bool,
    ) -> Option<RunSummary> {
        if !self.validate_on_save || autosaving {
            return None;
        }

        let outcome = self.validate_assets(assets, report, &mut NoProgress, BatchOptions::quiet());
        if outcome.summary.has_failed() {
            let subject = match assets {
                [single] => single.name.clone(),
                _ => "multiple assets".to_string(),
            };
            report.notify(
                Severity::Warning,
                &format!(
                    "Naming convention validation failed when saving {}, check the naming convention log",
                    subject
                ),
            );
        }
        Some(outcome.summary)
    }
}

impl std::fmt::Debug for NamingValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamingValidator")
            .field("table", &self.table)
            .field("resolver", &self.resolver)
            .field("validate_on_save", &self.validate_on_save)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Verdict;
    use crate::config::{ClassConfig, RuleConfig};
    use crate::hierarchy::TypeId;
    use crate::report::NamingReport;
    use crate::resolve::{ClassInspector, ClassStrategy};

    fn config() -> NamingConfig {
        let mut config = NamingConfig::default();
        config.classes = vec![
            ClassConfig::root("Object"),
            ClassConfig::child("StaticMesh", "Object"),
        ];
        config.rules = vec![
            RuleConfig::prefix("StaticMesh", "SM_"),
            RuleConfig::prefix("SoundWave", "S_"),
        ];
        config
    }

    #[test]
    fn test_from_config() {
        let validator = NamingValidator::from_config(&config()).unwrap();
        assert_eq!(validator.table().rules().len(), 1);
        assert_eq!(validator.dropped_entries().len(), 1);
        assert!(validator.validates_on_save());

        let cube = AssetDescriptor::new("Cube", "StaticMesh", "/Game/Props");
        assert_eq!(validator.classify(&cube).verdict, Verdict::Invalid);
        assert_eq!(validator.proposed_name(&cube).as_deref(), Some("SM_Cube"));
        assert_eq!(validator.proposed_name(&cube.renamed("SM_Cube")), None);
    }

    #[test]
    fn test_broken_hierarchy_is_an_error() {
        let mut config = config();
        config.classes.push(ClassConfig::child("Texture", "Missing"));
        assert!(NamingValidator::from_config(&config).is_err());
    }

    /// Hierarchy where every class path is its own root.
    struct FlatHierarchy {
        classes: Vec<String>,
    }

    impl TypeHierarchy for FlatHierarchy {
        fn resolve(&self, class_path: &str) -> Option<TypeId> {
            self.classes
                .iter()
                .position(|c| c == class_path)
                .map(TypeId::from_index)
        }

        fn is_descendant_of(&self, candidate: TypeId, ancestor: TypeId) -> bool {
            candidate == ancestor
        }

        fn class_path(&self, id: TypeId) -> Option<&str> {
            self.classes.get(id.index()).map(String::as_str)
        }
    }

    #[test]
    fn test_external_hierarchy() {
        let hierarchy = FlatHierarchy {
            classes: vec!["Object".to_string(), "StaticMesh".to_string()],
        };
        let validator = NamingValidator::with_hierarchy(&config(), Box::new(hierarchy));
        let result = validator.classify(&AssetDescriptor::new("SM_Cube", "StaticMesh", "/Game"));
        assert_eq!(result.verdict, Verdict::Valid);
        let rule = &validator.table().rules()[0];
        assert_eq!(validator.hierarchy().class_path(rule.type_id), Some("StaticMesh"));
    }

    struct AlwaysMesh;

    impl ClassInspector for AlwaysMesh {
        fn loaded_class(&self, _asset: &AssetDescriptor) -> Option<String> {
            Some("StaticMesh".to_string())
        }
    }

    #[test]
    fn test_custom_resolver() {
        let validator = NamingValidator::from_config(&config())
            .unwrap()
            .with_resolver(TypeResolver::with_strategies(
                vec![ClassStrategy::Loaded],
                Box::new(AlwaysMesh),
            ));
        let result = validator.classify(&AssetDescriptor::new("Cube", "", "/Game"));
        assert_eq!(result.verdict, Verdict::Invalid);
    }

    #[test]
    fn test_validate_on_save_notifies_once() {
        let validator = NamingValidator::from_config(&config()).unwrap();
        let mut report = NamingReport::new();
        let saved = vec![
            AssetDescriptor::new("Cube", "StaticMesh", "/Game/Props"),
            AssetDescriptor::new("Cone", "StaticMesh", "/Game/Props"),
        ];

        let summary = validator.validate_on_save(&saved, &mut report, false).unwrap();
        assert_eq!(summary.invalid, 2);
        assert_eq!(report.notifications.len(), 1);
        assert_eq!(
            report.notifications[0].message,
            "Naming convention validation failed when saving multiple assets, check the naming convention log"
        );
    }

    #[test]
    fn test_validate_on_save_single_asset_named() {
        let validator = NamingValidator::from_config(&config()).unwrap();
        let mut report = NamingReport::new();
        let saved = vec![AssetDescriptor::new("Cube", "StaticMesh", "/Game/Props")];
        validator.validate_on_save(&saved, &mut report, false);
        assert!(report.notifications[0].message.contains("when saving Cube,"));
    }

    #[test]
    fn test_validate_on_save_skipped() {
        let validator = NamingValidator::from_config(&config()).unwrap();
        let saved = vec![AssetDescriptor::new("Cube", "StaticMesh", "/Game/Props")];
        let mut report = NamingReport::new();
        assert!(validator.validate_on_save(&saved, &mut report, true).is_none());

        let mut disabled = config();
        disabled.validate_on_save = false;
        let validator = NamingValidator::from_config(&disabled).unwrap();
        assert!(validator.validate_on_save(&saved, &mut report, false).is_none());
        assert_eq!(report.total_entries(), 0);
    }

    #[test]
    fn test_validate_on_save_success_is_silent() {
        let validator = NamingValidator::from_config(&config()).unwrap();
        let saved = vec![AssetDescriptor::new("SM_Cube", "StaticMesh", "/Game/Props")];
        let mut report = NamingReport::new();
        let summary = validator.validate_on_save(&saved, &mut report, false).unwrap();
        assert_eq!(summary.valid, 1);
        assert!(report.notifications.is_empty());
        assert!(report.summaries.is_empty());
    }
}
