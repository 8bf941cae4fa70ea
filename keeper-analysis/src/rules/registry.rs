//! Rule storage and rule resolution.

use keeper_core::errors::RuleError;
use keeper_core::traits::{ObjectView, TypeReflection};
use keeper_core::types::collections::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use super::action::Action;
use super::matcher::Matcher;
use super::type_tag::TypeTag;

/// Default rule priority. Lower values win.
pub const DEFAULT_PRIORITY: i32 = 100;

/// A compiled naming rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub id: String,
    pub asset_type: TypeTag,
    pub matcher: Matcher,
    pub action: Action,
    pub priority: i32,
    pub notes: String,
}

impl Rule {
    pub fn new(id: impl Into<String>, asset_type: TypeTag, action: Action) -> Self {
        Self {
            id: id.into(),
            asset_type,
            matcher: Matcher::Always,
            action,
            priority: DEFAULT_PRIORITY,
            notes: String::new(),
        }
    }

    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn matches(&self, object: &dyn ObjectView) -> bool {
        self.matcher.test(object)
    }
}

type Candidates<'a> = SmallVec<[&'a Rule; 4]>;

/// Rules keyed by asset type.
///
/// Built once, queried read-only, then discarded. Reloading rules means
/// building a new registry.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: FxHashMap<TypeTag, Vec<Rule>>,
    ids: FxHashSet<String>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Result<Self, RuleError> {
        let mut registry = Self::new();
        for rule in rules {
            registry.add(rule)?;
        }
        Ok(registry)
    }

    /// Register a rule. Rule ids are unique across the registry.
    pub fn add(&mut self, rule: Rule) -> Result<(), RuleError> {
        if !self.ids.insert(rule.id.clone()) {
            return Err(RuleError::DuplicateId { id: rule.id });
        }
        self.rules.entry(rule.asset_type).or_default().push(rule);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.rules.clear();
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Rules registered for `tag`, in insertion order.
    pub fn rules_for(&self, tag: TypeTag) -> &[Rule] {
        self.rules.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every rule, grouped by type in tag declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> + '_ {
        TypeTag::ALL.iter().flat_map(move |tag| self.rules_for(*tag).iter())
    }

    /// Every rule that applies to `object`, best first.
    ///
    /// Walks `chain` (concrete type to root), then `indirect`, collecting
    /// rules whose matcher accepts the object and `keep` allows. Equal
    /// priorities keep walk order.
    pub fn candidates<'a>(
        &'a self,
        object: &dyn ObjectView,
        chain: &[String],
        indirect: Option<&[String]>,
        keep: &dyn Fn(&Rule) -> bool,
    ) -> Candidates<'a> {
        let mut visited: SmallVec<[TypeTag; 8]> = SmallVec::new();
        let mut candidates = Candidates::new();

        let walk = chain.iter().chain(indirect.unwrap_or(&[]).iter());
        for type_name in walk {
            let Some(tag) = TypeTag::parse_str(type_name) else {
                continue;
            };
            if visited.contains(&tag) {
                continue;
            }
            visited.push(tag);
            for rule in self.rules_for(tag) {
                if keep(rule) && rule.matches(object) {
                    candidates.push(rule);
                }
            }
        }

        candidates.sort_by_key(|rule| rule.priority);
        candidates
    }

    /// The highest-priority rule for `object`, if any.
    pub fn find_matching_rule(
        &self,
        object: &dyn ObjectView,
        chain: &[String],
        indirect: Option<&[String]>,
    ) -> Option<&Rule> {
        self.candidates(object, chain, indirect, &|_| true).first().copied()
    }

    /// Resolve using chains supplied by `reflection`.
    pub fn resolve(
        &self,
        object: &dyn ObjectView,
        reflection: &dyn TypeReflection,
    ) -> Option<&Rule> {
        let chain = reflection.type_chain(object);
        let indirect = reflection.indirect_chain(object);
        self.find_matching_rule(object, &chain, indirect.as_deref())
    }
}
