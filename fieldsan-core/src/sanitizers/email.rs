// fieldsan-core/src/sanitizers/email.rs
//! The email path: trim, clamp, structural validation, whitelist filter.
//!
//! The whitelist filter runs after format validation, so an aggressive
//! `allowed_pattern` can corrupt an already-validated address without
//! re-validation. That ordering is preserved deliberately and pinned by
//! tests; callers wanting strict shape guarantees should leave
//! `allowed_pattern` unset on email fields.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::correction::{value_text, CorrectionBuilder, CorrectionResult, Violation};
use crate::sanitizers::compiler::CompiledRule;
use crate::sanitizers::FieldSanitizer;

/// Minimal structural shape: non-empty local part, a single `@`, a domain
/// containing at least one `.`, no embedded whitespace anywhere.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static email pattern must compile")
});

/// Sanitizer for `email`-typed fields.
#[derive(Debug)]
pub struct EmailSanitizer;

impl FieldSanitizer for EmailSanitizer {
    fn sanitize(&self, field: &str, raw: &Value, rule: &CompiledRule) -> CorrectionResult {
        // The original value is recorded post-trim on this path; trimming
        // alone never counts as a change for emails.
        let trimmed = value_text(raw).trim().to_string();
        let mut builder = CorrectionBuilder::new(field, Value::String(trimmed.clone()));

        let mut s = trimmed;
        if let Some(max) = rule.max_length() {
            if s.chars().count() > max {
                s = s.chars().take(max).collect();
                builder.note_change(format!("truncated email to {max} characters"));
            }
        }

        if !EMAIL_SHAPE.is_match(&s) {
            return builder.reject(Violation::InvalidFormat, Value::Null);
        }

        if let Some(filtered) = rule.filter_allowed(&s) {
            if filtered != s {
                s = filtered;
                builder.note_change("removed characters not allowed by the field pattern");
            }
        }

        builder.accept(Value::String(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldRule;
    use crate::sanitizers::compiler::RuleRegistry;

    fn email_rule() -> FieldRule {
        FieldRule {
            name: "email".into(),
            field_type: "email".into(),
            ..Default::default()
        }
    }

    fn sanitize_with(rule: FieldRule, raw: &str) -> CorrectionResult {
        let registry = RuleRegistry::compile(vec![rule]).unwrap();
        EmailSanitizer.sanitize("email", &Value::String(raw.into()), registry.get("email").unwrap())
    }

    #[test]
    fn well_formed_address_passes_unchanged() {
        let result = sanitize_with(email_rule(), " user@example.com ");
        assert!(result.is_valid);
        assert!(!result.changes_made);
        assert_eq!(result.sanitized_value, Value::String("user@example.com".into()));
        assert_eq!(result.original_value, Value::String("user@example.com".into()));
    }

    #[test]
    fn domain_without_dot_fails_structural_check() {
        let result = sanitize_with(email_rule(), "a@b");
        assert!(!result.is_valid);
        assert_eq!(result.violation, Some(Violation::InvalidFormat));
        assert_eq!(result.sanitized_value, Value::Null);
        assert_eq!(result.original_value, Value::String("a@b".into()));
    }

    #[test]
    fn embedded_whitespace_fails_structural_check() {
        let result = sanitize_with(email_rule(), "us er@example.com");
        assert!(!result.is_valid);
        assert_eq!(result.violation, Some(Violation::InvalidFormat));
    }

    #[test]
    fn double_at_fails_structural_check() {
        let result = sanitize_with(email_rule(), "a@b@example.com");
        assert!(!result.is_valid);
    }

    #[test]
    fn clamp_before_validation_can_break_shape() {
        let rule = FieldRule { max_length: Some(5), ..email_rule() };
        let result = sanitize_with(rule, "user@example.com");
        assert!(!result.is_valid);
        assert_eq!(result.violation, Some(Violation::InvalidFormat));
        // The clamp already ran and is audited even though validation failed.
        assert!(result.changes_made);
    }

    #[test]
    fn whitelist_after_validation_can_corrupt_a_valid_address() {
        // Documented ordering caveat: the filter runs after the structural
        // check and the result is not re-validated.
        let rule = FieldRule {
            allowed_pattern: Some("[a-z]".into()),
            ..email_rule()
        };
        let result = sanitize_with(rule, "user@example.com");
        assert!(result.is_valid);
        assert!(result.changes_made);
        assert_eq!(result.sanitized_value, Value::String("userexamplecom".into()));
    }
}
