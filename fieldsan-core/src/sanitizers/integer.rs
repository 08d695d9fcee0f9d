// fieldsan-core/src/sanitizers/integer.rs
//! The numeric path: trim and parse, no transformation pipeline.
//!
//! License: MIT OR Apache-2.0

use serde_json::Value;

use crate::correction::{value_text, CorrectionBuilder, CorrectionResult, Violation};
use crate::sanitizers::compiler::CompiledRule;
use crate::sanitizers::FieldSanitizer;

/// Sanitizer for `int`-typed fields.
///
/// Any parseable integer passes; there is no range policy. Trimming the
/// textual form does not count as a change, matching the numeric path's
/// contract of reporting the parsed value rather than an edited string.
#[derive(Debug)]
pub struct IntSanitizer;

impl FieldSanitizer for IntSanitizer {
    fn sanitize(&self, field: &str, raw: &Value, _rule: &CompiledRule) -> CorrectionResult {
        let builder = CorrectionBuilder::new(field, raw.clone());
        match value_text(raw).trim().parse::<i64>() {
            Ok(parsed) => builder.accept(Value::from(parsed)),
            Err(_) => builder.reject(Violation::TypeConversionFailure, Value::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldRule;
    use crate::sanitizers::compiler::RuleRegistry;

    fn registry() -> RuleRegistry {
        RuleRegistry::compile(vec![FieldRule {
            name: "age".into(),
            field_type: "int".into(),
            ..Default::default()
        }])
        .unwrap()
    }

    fn sanitize(raw: Value) -> CorrectionResult {
        let registry = registry();
        IntSanitizer.sanitize("age", &raw, registry.get("age").unwrap())
    }

    #[test]
    fn padded_integer_text_parses() {
        let result = sanitize(Value::String("  42 ".into()));
        assert!(result.is_valid);
        assert_eq!(result.sanitized_value, serde_json::json!(42));
        assert!(!result.changes_made);
    }

    #[test]
    fn json_number_passes_through_textual_coercion() {
        let result = sanitize(serde_json::json!(-7));
        assert!(result.is_valid);
        assert_eq!(result.sanitized_value, serde_json::json!(-7));
    }

    #[test]
    fn unparseable_value_is_invalid_with_null() {
        let result = sanitize(Value::String("12; DROP TABLE".into()));
        assert!(!result.is_valid);
        assert_eq!(result.sanitized_value, Value::Null);
        assert_eq!(result.violation, Some(Violation::TypeConversionFailure));
        assert_eq!(result.original_value, Value::String("12; DROP TABLE".into()));
    }

    #[test]
    fn float_text_does_not_parse_as_integer() {
        let result = sanitize(Value::String("4.2".into()));
        assert!(!result.is_valid);
        assert_eq!(result.violation, Some(Violation::TypeConversionFailure));
    }
}
