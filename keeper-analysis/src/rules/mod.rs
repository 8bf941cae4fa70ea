//! Naming rules: definitions, registry, resolution and validation.
//!
//! A rule targets one asset type. Resolving a rule for an object walks the
//! object's type chain (concrete type to root) and, for blueprints, the chain
//! of the blueprint's parent type, collecting every rule whose matcher accepts
//! the object. The candidate with the lowest priority value wins.

pub mod action;
pub mod conventions;
pub mod definition;
pub mod hierarchy;
pub mod matcher;
pub mod object;
pub mod registry;
pub mod type_tag;
pub mod validator;

pub use action::{Action, Severity, ValidationMessage};
pub use definition::{DroppedRule, LoadedRules, RuleDefinition, RuleLoader};
pub use hierarchy::TypeHierarchy;
pub use matcher::Matcher;
pub use object::AssetObject;
pub use registry::{Rule, RuleRegistry};
pub use type_tag::TypeTag;
pub use validator::{
    NamingValidator, ValidationReport, ValidationRun, ValidationStatus, ValidationSummary,
};
