// fieldsan-core/src/sanitizers/string.rs
//! The string sanitization pipeline, the richest transformation path.
//!
//! Steps run in a fixed order: trim, strip SQL metacharacter sequences,
//! strip reserved SQL keywords, clamp to `max_length`, whitelist filter.
//! Stripping precedes clamping so the clamp operates on already-shortened
//! content, and the whitelist runs last as the strictest step. Each
//! altering step appends exactly one audit message.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde_json::Value;

use crate::correction::{value_text, CorrectionBuilder, CorrectionResult, Violation};
use crate::sanitizers::compiler::CompiledRule;
use crate::sanitizers::FieldSanitizer;

/// Comment and statement-terminator sequences stripped from string values.
static SQL_META: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(--|/\*|\*/|;)").expect("static SQL metacharacter pattern must compile")
});

/// Reserved SQL keywords stripped at word boundaries, case-insensitively.
///
/// Removal is textual substring deletion, not context-aware: it runs a
/// single pass and can leave residual tokens or fuse adjacent fragments
/// into new ones. That single-pass behavior is deliberate and pinned by
/// tests.
static SQL_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(
        r"\b(union|select|insert|update|delete|drop|truncate|shutdown|information_schema)\b",
    )
    .case_insensitive(true)
    .build()
    .expect("static SQL keyword pattern must compile")
});

/// Sanitizer for `string`-typed fields (and the fallback for unknown tags).
#[derive(Debug)]
pub struct StringSanitizer;

impl FieldSanitizer for StringSanitizer {
    fn sanitize(&self, field: &str, raw: &Value, rule: &CompiledRule) -> CorrectionResult {
        let original = value_text(raw);
        let mut builder = CorrectionBuilder::new(field, Value::String(original.clone()));

        let mut s = original.trim().to_string();
        if s != original {
            builder.note_change("trimmed leading/trailing whitespace");
        }

        if SQL_META.is_match(&s) {
            s = SQL_META.replace_all(&s, "").into_owned();
            builder.note_change("removed SQL metacharacter sequences (--, /*, */, ;)");
        }

        if SQL_KEYWORDS.is_match(&s) {
            s = SQL_KEYWORDS.replace_all(&s, "").into_owned();
            builder.note_change("removed reserved SQL keywords (UNION, SELECT, DROP, ...)");
        }

        if let Some(max) = rule.max_length() {
            if s.chars().count() > max {
                s = s.chars().take(max).collect();
                builder.note_change(format!("truncated to {max} characters"));
            }
        }

        if let Some(filtered) = rule.filter_allowed(&s) {
            if filtered != s {
                s = filtered;
                builder.note_change("removed characters not allowed by the field pattern");
            }
        }

        if rule.required() && s.is_empty() {
            // The cleaned, empty value is still reported.
            return builder.reject(Violation::EmptyAfterSanitization, Value::String(s));
        }

        builder.accept(Value::String(s))
    }
}
