//! compiler.rs - Compiles field rules into an immutable rule registry.
//!
//! This module converts a `RuleSet` into a `RuleRegistry`, resolving each
//! rule's type tag once and pre-compiling its `allowed_pattern` so no
//! pattern compilation happens on the sanitize path. The registry is
//! read-only after construction and safe to share across threads.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use regex::Regex;
use std::collections::HashMap;

use crate::config::{FieldRule, FieldType, MAX_PATTERN_LENGTH};
use crate::errors::FieldsanError;

/// A single field rule, compiled and ready for application.
///
/// Holds the resolved [`FieldType`] and the anchored single-character
/// whitelist regex alongside the source rule.
#[derive(Debug)]
pub struct CompiledRule {
    rule: FieldRule,
    field_type: FieldType,
    allowed: Option<Regex>,
}

impl CompiledRule {
    pub fn name(&self) -> &str {
        &self.rule.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn required(&self) -> bool {
        self.rule.required
    }

    pub fn max_length(&self) -> Option<usize> {
        self.rule.max_length
    }

    /// The source rule as declared in configuration.
    pub fn rule(&self) -> &FieldRule {
        &self.rule
    }

    /// Applies the whitelist filter: retains only characters individually
    /// matching `allowed_pattern`, in original order.
    ///
    /// Returns `None` when the rule carries no pattern.
    pub fn filter_allowed(&self, s: &str) -> Option<String> {
        let allowed = self.allowed.as_ref()?;
        let mut buf = [0u8; 4];
        Some(
            s.chars()
                .filter(|ch| allowed.is_match(ch.encode_utf8(&mut buf)))
                .collect(),
        )
    }
}

/// An immutable mapping from field name to its compiled rule.
///
/// Construction fails on duplicate names, empty names, and invalid or
/// over-long `allowed_pattern` sources. Iteration preserves declaration
/// order.
#[derive(Debug)]
pub struct RuleRegistry {
    rules: Vec<CompiledRule>,
    index: HashMap<String, usize>,
}

impl RuleRegistry {
    /// Compiles an ordered list of field rules into a registry.
    pub fn compile(rules_to_compile: Vec<FieldRule>) -> Result<Self, FieldsanError> {
        debug!("Starting compilation of {} field rules.", rules_to_compile.len());

        let mut rules = Vec::with_capacity(rules_to_compile.len());
        let mut index = HashMap::with_capacity(rules_to_compile.len());

        for rule in rules_to_compile {
            if rule.name.is_empty() {
                return Err(FieldsanError::EmptyRuleName);
            }
            if index.contains_key(&rule.name) {
                return Err(FieldsanError::DuplicateFieldRule(rule.name));
            }

            let allowed = match rule.allowed_pattern.as_deref() {
                Some(pattern) => {
                    if pattern.len() > MAX_PATTERN_LENGTH {
                        return Err(FieldsanError::PatternLengthExceeded(
                            rule.name,
                            pattern.len(),
                            MAX_PATTERN_LENGTH,
                        ));
                    }
                    // Anchor the source so it matches exactly one character,
                    // making the per-character whitelist semantics explicit.
                    let anchored = format!("^(?:{pattern})$");
                    match Regex::new(&anchored) {
                        Ok(regex) => Some(regex),
                        Err(e) => {
                            return Err(FieldsanError::RuleCompilationError(rule.name, e));
                        }
                    }
                }
                None => None,
            };

            let field_type = FieldType::from_tag(&rule.field_type);

            index.insert(rule.name.clone(), rules.len());
            rules.push(CompiledRule { rule, field_type, allowed });
        }

        debug!("Finished compiling rules. Total compiled: {}.", rules.len());
        Ok(Self { rules, index })
    }

    /// Looks up a compiled rule by field name.
    pub fn get(&self, name: &str) -> Option<&CompiledRule> {
        self.index.get(name).map(|&i| &self.rules[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates over all declared rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
