//! Configuration management for `fieldsan-core`.
//!
//! This module defines the core data structures for field rules and rule
//! sets. It handles serialization/deserialization of YAML rule files and
//! provides utilities for loading and validating them before they are
//! compiled into a registry.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Maximum allowed length for an `allowed_pattern` regex source string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// The declared type of a field, resolved once at registry construction.
///
/// The closed set keeps dispatch a simple match instead of a per-call
/// string comparison on the raw config tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Int,
    Email,
}

impl FieldType {
    /// Resolves a raw config tag into a `FieldType`.
    ///
    /// Unknown tags fall back to `String`: treat-as-string is the documented
    /// conservative default, not an error.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "string" => FieldType::String,
            "int" => FieldType::Int,
            "email" => FieldType::Email,
            other => {
                warn!("Unknown field_type '{}'; treating as 'string'.", other);
                FieldType::String
            }
        }
    }
}

/// Declarative sanitization/validation rule for a single named field.
///
/// Rules are created once, at engine construction, and are immutable
/// afterwards. `allowed_pattern` is a regex source describing one acceptable
/// character; the registry compiles it fully anchored so it can be applied
/// as a per-character whitelist filter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FieldRule {
    /// Unique identifier for the field (e.g., "username", "age").
    pub name: String,
    /// Raw type tag: "string" | "int" | "email". Unknown tags sanitize as strings.
    pub field_type: String,
    /// Human-readable description of what the field holds.
    pub description: Option<String>,
    /// Upper bound on the sanitized string length, in characters.
    pub max_length: Option<usize>,
    /// Regex source matching a single allowed character (e.g., `[a-zA-Z0-9_]`).
    pub allowed_pattern: Option<String>,
    /// Whether absence of the field is an error.
    pub required: bool,
}

impl Default for FieldRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            field_type: "string".to_string(),
            description: None,
            max_length: None,
            allowed_pattern: None,
            required: true,
        }
    }
}

/// Represents the top-level rule file structure for fieldsan.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct RuleSet {
    /// An ordered list of field rules.
    pub rules: Vec<FieldRule>,
}

impl RuleSet {
    /// Loads field rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading field rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule file {}", path.display()))?;
        let rule_set: RuleSet = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse rule file {}", path.display()))?;

        validate_rules(&rule_set.rules)?;
        info!("Loaded {} rules from file {}.", rule_set.rules.len(), path.display());

        Ok(rule_set)
    }
}

/// Validates rule integrity (unique names, pattern compilation).
///
/// All problems are collected and reported together so a rule file can be
/// fixed in one pass.
pub fn validate_rules(rules: &[FieldRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        if let Some(pattern) = &rule.allowed_pattern {
            if pattern.is_empty() {
                errors.push(format!("Rule '{}' has an empty `allowed_pattern` field.", rule.name));
            } else if pattern.len() > MAX_PATTERN_LENGTH {
                errors.push(format!(
                    "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                    rule.name,
                    pattern.len(),
                    MAX_PATTERN_LENGTH
                ));
            } else if let Err(e) = Regex::new(pattern) {
                errors.push(format!("Rule '{}' has an invalid allowed_pattern: {}", rule.name, e));
            }
        }

        if let Some(max) = rule.max_length {
            if max == 0 {
                errors.push(format!("Rule '{}' has a zero `max_length`.", rule.name));
            }
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Rule validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        debug!("Validated {} rules successfully.", rules.len());
        Ok(())
    }
}
