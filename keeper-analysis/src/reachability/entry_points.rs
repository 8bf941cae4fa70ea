//! Entry points: assets that are used by definition.

use std::collections::BTreeMap;

use keeper_core::config::ReachabilityConfig;
use keeper_core::errors::ConfigError;
use regex::Regex;

use crate::graph::strip_object_name;

/// Where a literal entry point came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOrigin {
    /// Listed in configuration or on the command line.
    Configured,
    /// Class of an actor placed in the current map.
    CurrentMap,
}

/// Literal and pattern entry points. Immutable for one computation.
#[derive(Debug, Clone, Default)]
pub struct EntryPoints {
    literals: BTreeMap<String, EntryOrigin>,
    patterns: Vec<Regex>,
}

impl EntryPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exact asset path.
    pub fn with_literal(mut self, id: impl Into<String>) -> Self {
        self.add_literal(id.into(), EntryOrigin::Configured);
        self
    }

    /// Add a regex, matched anywhere in the asset path.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, ConfigError> {
        self.patterns.push(compile(pattern)?);
        Ok(self)
    }

    /// Classify a mixed list: specifiers containing `*` are patterns,
    /// everything else is a literal path.
    pub fn from_specifiers<I, S>(specifiers: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entry_points = Self::new();
        for specifier in specifiers {
            let specifier = specifier.as_ref();
            if specifier.contains('*') {
                entry_points.patterns.push(compile(specifier)?);
            } else {
                entry_points.add_literal(specifier.to_string(), EntryOrigin::Configured);
            }
        }
        Ok(entry_points)
    }

    /// Build from the `[reachability]` config section.
    pub fn from_config(config: &ReachabilityConfig) -> Result<Self, ConfigError> {
        let mut entry_points = Self::new();
        for literal in &config.entry_points {
            entry_points.add_literal(literal.clone(), EntryOrigin::Configured);
        }
        for pattern in &config.entry_patterns {
            entry_points.patterns.push(compile(pattern)?);
        }
        Ok(entry_points)
    }

    /// Add the classes of actors placed in the current map. Class paths have
    /// their object name stripped. Already-configured literals keep their origin.
    pub fn add_level_actor_classes<I, S>(&mut self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for class in classes {
            let id = strip_object_name(class.as_ref()).to_string();
            self.add_literal(id, EntryOrigin::CurrentMap);
        }
    }

    fn add_literal(&mut self, id: String, origin: EntryOrigin) {
        self.literals.entry(id).or_insert(origin);
    }

    pub fn is_literal(&self, id: &str) -> bool {
        self.literals.contains_key(id)
    }

    pub fn matches_pattern(&self, id: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(id))
    }

    /// Whether `id` is an entry point, by literal or by pattern.
    pub fn is_entry(&self, id: &str) -> bool {
        self.is_literal(id) || self.matches_pattern(id)
    }

    /// Literal entry points with their origin, sorted by path.
    pub fn literals(&self) -> impl Iterator<Item = (&str, EntryOrigin)> {
        self.literals.iter().map(|(id, origin)| (id.as_str(), *origin))
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty() && self.patterns.is_empty()
    }
}

fn compile(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}
