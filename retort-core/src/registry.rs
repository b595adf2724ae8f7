//! Ordered rule registries.

use crate::error::RegistryError;
use crate::pattern::Pattern;
use crate::rule::{HandlerTag, Rule};

/// An ordered, immutable sequence of rules.
///
/// Built once at startup via [`RegistryBuilder`] and never mutated for the
/// lifetime of a session. Registration order defines priority: where a
/// single winner is required, the earliest matching rule wins.
pub struct Registry {
    rules: Vec<Rule>,
}

impl Registry {
    /// Iterate rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// The rule at the given 1-based menu position.
    pub fn at_position(&self, position: u32) -> Option<&Rule> {
        let index = usize::try_from(position).ok()?.checked_sub(1)?;
        self.rules.get(index)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Builder for constructing a [`Registry`].
///
/// Validation happens in [`build`](RegistryBuilder::build): empty substring
/// patterns, empty keyword sets, blank keywords, and duplicate numeric codes
/// are rejected so a built registry cannot misbehave at resolution time.
pub struct RegistryBuilder {
    rules: Vec<Rule>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Register a canned reply.
    pub fn reply(self, pattern: Pattern, text: impl Into<String>) -> Self {
        self.rule(Rule::reply(pattern, text))
    }

    /// Register a tagged handler.
    pub fn invoke(self, pattern: Pattern, tag: HandlerTag) -> Self {
        self.rule(Rule::invoke(pattern, tag))
    }

    /// Validate and build the registry.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut codes = Vec::new();
        for rule in &self.rules {
            match &rule.pattern {
                Pattern::Code(code) => {
                    if codes.contains(code) {
                        return Err(RegistryError::DuplicateCode(*code));
                    }
                    codes.push(*code);
                }
                Pattern::Substring(needle) => {
                    if needle.trim().is_empty() {
                        return Err(RegistryError::EmptySubstring);
                    }
                }
                Pattern::Keywords(words) => {
                    if words.is_empty() {
                        return Err(RegistryError::EmptyKeywords);
                    }
                    if words.iter().any(|w| w.trim().is_empty()) {
                        return Err(RegistryError::BlankKeyword);
                    }
                }
            }
        }
        Ok(Registry { rules: self.rules })
    }
}
