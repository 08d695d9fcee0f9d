// fieldsan-core/src/engine.rs
//! The correction engine: compiles a rule set once, then sanitizes input
//! batches against it.
//!
//! The engine is stateless across calls. The compiled registry is immutable
//! after construction, every `sanitize` call is a pure synchronous
//! computation over its own input, and concurrent calls share nothing
//! mutable, so an engine can be shared read-only across threads without
//! locking.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::debug;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::config::{FieldRule, RuleSet};
use crate::correction::{CorrectionBuilder, CorrectionResult, Violation};
use crate::errors::FieldsanError;
use crate::sanitizers::compiler::{CompiledRule, RuleRegistry};
use crate::sanitizers::sanitizer_for;

/// Sanitizes named, untrusted input values against a compiled rule set.
///
/// # Example
///
/// ```rust
/// use fieldsan_core::{CorrectionEngine, FieldRule, RuleSet};
/// use serde_json::json;
///
/// let rules = RuleSet {
///     rules: vec![FieldRule {
///         name: "username".to_string(),
///         max_length: Some(20),
///         allowed_pattern: Some("[a-zA-Z0-9_]".to_string()),
///         ..Default::default()
///     }],
/// };
/// let engine = CorrectionEngine::new(rules).unwrap();
///
/// let params = json!({ "username": "  admin'--  " });
/// let report = engine.sanitize(params.as_object().unwrap());
/// let result = &report["username"];
/// assert!(result.is_valid);
/// assert_eq!(result.sanitized_value, json!("admin"));
/// assert!(result.changes_made);
/// ```
#[derive(Debug)]
pub struct CorrectionEngine {
    registry: RuleRegistry,
}

impl CorrectionEngine {
    /// Compiles the rule set into an engine.
    ///
    /// Fails on duplicate or empty rule names and on invalid or over-long
    /// `allowed_pattern` sources; these signal configuration programming
    /// errors and are the only fatal conditions in the library.
    pub fn new(rule_set: RuleSet) -> Result<Self, FieldsanError> {
        Self::from_rules(rule_set.rules)
    }

    /// Compiles an ordered list of rules directly.
    pub fn from_rules(rules: Vec<FieldRule>) -> Result<Self, FieldsanError> {
        let registry = RuleRegistry::compile(rules)?;
        Ok(Self { registry })
    }

    /// Returns the compiled rule registry backing this engine.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Sanitizes one batch of input parameters.
    ///
    /// The report covers every declared field (absent ones included) plus a
    /// passthrough result for every input field not governed by any rule.
    /// Per-field failures never abort the batch; callers inspect `is_valid`
    /// per field to decide how to proceed.
    pub fn sanitize(&self, params: &Map<String, Value>) -> HashMap<String, CorrectionResult> {
        let mut results = HashMap::with_capacity(self.registry.len() + params.len());

        for rule in self.registry.iter() {
            let result = match params.get(rule.name()) {
                // JSON null is treated the same as an absent key.
                None | Some(Value::Null) => absent_field(rule),
                Some(raw) => sanitizer_for(rule.field_type()).sanitize(rule.name(), raw, rule),
            };
            results.insert(rule.name().to_string(), result);
        }

        for (name, value) in params {
            if self.registry.contains(name) {
                continue;
            }
            results.insert(name.clone(), passthrough_field(name, value));
        }

        debug!(
            "Sanitized batch of {} parameters against {} rules ({} results).",
            params.len(),
            self.registry.len(),
            results.len()
        );
        results
    }
}

/// Outcome for a declared field that is missing from the input.
fn absent_field(rule: &CompiledRule) -> CorrectionResult {
    let mut builder = CorrectionBuilder::new(rule.name(), Value::Null);
    if rule.required() {
        builder.reject(Violation::MissingRequiredField, Value::Null)
    } else {
        builder.note("optional field absent");
        builder.accept(Value::Null)
    }
}

/// Outcome for an input field with no matching rule: reported unchanged and
/// presumed valid, flagged as unvalidated.
fn passthrough_field(name: &str, value: &Value) -> CorrectionResult {
    let mut builder = CorrectionBuilder::new(name, value.clone());
    builder.note("not governed by rules; no sanitization applied");
    builder.accept(value.clone())
}

/// Compiles the rule set and sanitizes a single batch in one shot.
///
/// Convenience for callers that do not keep an engine around; repeated
/// batches should construct a [`CorrectionEngine`] once instead.
pub fn sanitize_once(
    rule_set: RuleSet,
    params: &Map<String, Value>,
) -> Result<HashMap<String, CorrectionResult>> {
    let engine = CorrectionEngine::new(rule_set).context("Failed to compile field rules")?;
    Ok(engine.sanitize(params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldRule;
    use serde_json::json;

    fn engine(rules: Vec<FieldRule>) -> CorrectionEngine {
        CorrectionEngine::from_rules(rules).unwrap()
    }

    #[test]
    fn required_absent_field_is_invalid_with_null() {
        let engine = engine(vec![FieldRule { name: "username".into(), ..Default::default() }]);
        let report = engine.sanitize(json!({}).as_object().unwrap());
        let result = &report["username"];
        assert!(!result.is_valid);
        assert_eq!(result.sanitized_value, Value::Null);
        assert_eq!(result.violation, Some(Violation::MissingRequiredField));
        assert!(!result.changes_made);
    }

    #[test]
    fn optional_absent_field_is_valid_with_null() {
        let engine = engine(vec![FieldRule {
            name: "nickname".into(),
            required: false,
            ..Default::default()
        }]);
        let report = engine.sanitize(json!({}).as_object().unwrap());
        let result = &report["nickname"];
        assert!(result.is_valid);
        assert_eq!(result.sanitized_value, Value::Null);
        assert!(!result.changes_made);
    }

    #[test]
    fn json_null_input_counts_as_absent() {
        let engine = engine(vec![FieldRule { name: "username".into(), ..Default::default() }]);
        let report = engine.sanitize(json!({ "username": null }).as_object().unwrap());
        assert_eq!(report["username"].violation, Some(Violation::MissingRequiredField));
    }

    #[test]
    fn undeclared_field_passes_through_unchanged() {
        let engine = engine(vec![FieldRule { name: "username".into(), ..Default::default() }]);
        let report = engine
            .sanitize(json!({ "username": "ok", "extra": "anything; DROP" }).as_object().unwrap());
        let extra = &report["extra"];
        assert!(extra.is_valid);
        assert!(!extra.changes_made);
        assert_eq!(extra.sanitized_value, json!("anything; DROP"));
        assert_eq!(extra.original_value, extra.sanitized_value);
        assert!(extra.messages[0].contains("not governed by rules"));
    }

    #[test]
    fn one_invalid_field_does_not_abort_the_batch() {
        let engine = engine(vec![
            FieldRule { name: "age".into(), field_type: "int".into(), ..Default::default() },
            FieldRule { name: "note".into(), ..Default::default() },
        ]);
        let report = engine
            .sanitize(json!({ "age": "not a number", "note": "fine" }).as_object().unwrap());
        assert!(!report["age"].is_valid);
        assert!(report["note"].is_valid);
    }

    #[test]
    fn sanitize_once_matches_engine_output() {
        let rule_set = RuleSet {
            rules: vec![FieldRule { name: "username".into(), ..Default::default() }],
        };
        let params = json!({ "username": "admin" });
        let report = sanitize_once(rule_set, params.as_object().unwrap()).unwrap();
        assert!(report["username"].is_valid);
    }
}
