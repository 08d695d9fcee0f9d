// fieldsan-core/src/correction.rs
//! Provides core data structures for reporting the outcome of sanitizing a
//! single field, together with the builder that accumulates the audit trail
//! while a sanitizer runs.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The per-field failure taxonomy.
///
/// Violations are reported, never thrown: a violation on one field does not
/// abort processing of the rest of the batch. The `Display` form is the
/// canonical audit message appended to the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    /// A required field was absent from the input.
    MissingRequiredField,
    /// An integer field's raw value could not be parsed.
    TypeConversionFailure,
    /// An email field failed structural validation.
    InvalidFormat,
    /// A required string field reduced to the empty string post-pipeline.
    EmptyAfterSanitization,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingRequiredField => write!(f, "required field missing"),
            Violation::TypeConversionFailure => write!(f, "could not convert to integer"),
            Violation::InvalidFormat => write!(f, "invalid email format"),
            Violation::EmptyAfterSanitization => write!(f, "empty after sanitization"),
        }
    }
}

/// The outcome of sanitizing one field.
///
/// Created fresh per sanitize call and owned by the caller afterwards.
/// `sanitized_value` is JSON null when the field was absent or rejected;
/// an invalid result never silently presents a value as safe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResult {
    pub field: String,
    pub is_valid: bool,
    pub original_value: Value,
    pub sanitized_value: Value,
    pub changes_made: bool,
    /// Ordered, human-readable audit notes describing every alteration.
    pub messages: Vec<String>,
    /// Typed violation, when the field was rejected. Lets callers branch
    /// without string-matching `messages`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violation: Option<Violation>,
}

/// Accumulates audit messages and the `changes_made` flag while a sanitizer
/// runs, then finalizes into an immutable [`CorrectionResult`].
#[derive(Debug)]
pub struct CorrectionBuilder {
    field: String,
    original_value: Value,
    changes_made: bool,
    messages: Vec<String>,
}

impl CorrectionBuilder {
    pub fn new(field: &str, original_value: Value) -> Self {
        Self {
            field: field.to_string(),
            original_value,
            changes_made: false,
            messages: Vec::new(),
        }
    }

    /// Records an audit note for a transformation that altered the value.
    pub fn note_change(&mut self, message: impl Into<String>) {
        self.changes_made = true;
        self.messages.push(message.into());
    }

    /// Records an audit note that does not imply an alteration.
    pub fn note(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Finalizes as a valid result carrying the sanitized value.
    pub fn accept(self, sanitized_value: Value) -> CorrectionResult {
        CorrectionResult {
            field: self.field,
            is_valid: true,
            original_value: self.original_value,
            sanitized_value,
            changes_made: self.changes_made,
            messages: self.messages,
            violation: None,
        }
    }

    /// Finalizes as an invalid result.
    ///
    /// `sanitized_value` is either null or the best-effort partial cleanup
    /// (e.g., the cleaned-but-empty string for a required field); the
    /// violation's canonical message is appended to the audit trail.
    pub fn reject(mut self, violation: Violation, sanitized_value: Value) -> CorrectionResult {
        self.messages.push(violation.to_string());
        CorrectionResult {
            field: self.field,
            is_valid: false,
            original_value: self.original_value,
            sanitized_value,
            changes_made: self.changes_made,
            messages: self.messages,
            violation: Some(violation),
        }
    }
}

/// Coerces a raw input value into its textual form for the string-like
/// sanitization paths.
///
/// Strings pass through as-is; everything else uses its JSON text (numbers
/// and booleans render bare, composites as their JSON source).
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
