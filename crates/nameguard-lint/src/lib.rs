//! Naming convention rule engine.
//!
//! Classifies assets against an ordered table of per-class prefix/suffix
//! rules, reports violations, and computes conforming names.
//!
//! # Example
//!
//! ```
//! use nameguard_lint::{AssetDescriptor, NamingConfig, NamingValidator, Verdict};
//! use nameguard_lint::config::{ClassConfig, RuleConfig};
//!
//! let mut config = NamingConfig::default();
//! config.classes = vec![
//!     ClassConfig::root("/Script/CoreUObject.Object"),
//!     ClassConfig::child("/Script/Engine.StaticMesh", "/Script/CoreUObject.Object"),
//! ];
//! config.rules = vec![RuleConfig::prefix("/Script/Engine.StaticMesh", "SM_")];
//!
//! let validator = NamingValidator::from_config(&config).unwrap();
//! let cube = AssetDescriptor::new("Cube", "/Script/Engine.StaticMesh", "/Game/Props");
//!
//! assert_eq!(validator.classify(&cube).verdict, Verdict::Invalid);
//! assert_eq!(validator.proposed_name(&cube).as_deref(), Some("SM_Cube"));
//! ```

pub mod asset;
pub mod batch;
pub mod classify;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod host;
pub mod queue;
pub mod rename;
pub mod report;
pub mod resolve;
pub mod table;
pub mod validator;

pub use asset::AssetDescriptor;
pub use batch::{
    rename_all, validate_all, AssetVerdict, BatchOptions, RenameOutcome, RenameRecord,
    RenameSummary, RunSummary, ValidationOutcome,
};
pub use classify::{AppliedRule, Classification, Classifier, Verdict};
pub use config::{DefaultCategory, NamingConfig};
pub use error::{ConfigError, HostError};
pub use hierarchy::{ClassTree, TypeHierarchy, TypeId};
pub use host::{AssetEnumerator, AssetScope, InMemoryAssets, RenameExecutor};
pub use queue::{FlushOutcome, PackageFailure, SaveQueue};
pub use rename::RenameInstruction;
pub use report::{
    NamingReport, NoProgress, ProgressSink, ReportEntry, ReportSink, Severity, Summary,
};
pub use resolve::{ClassInspector, ClassStrategy, DeclaredClass, ResolutionFailure, TypeResolver};
pub use table::{DroppedEntry, DroppedKind, RuleEntry, RuleTable};
pub use validator::NamingValidator;
