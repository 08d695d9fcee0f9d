//! Per-type field sanitizers for fieldsan.
//!
//! Each sanitizer is a separate file within this directory and implements
//! the [`FieldSanitizer`] trait over the capability set
//! `sanitize(raw_value, rule) -> CorrectionResult`. Dispatch is a match on
//! the rule's resolved [`FieldType`](crate::config::FieldType), decided
//! once at registry construction, never by string comparison per call.
//!
//! This module works closely with `config` (for rule definitions),
//! `compiler` (for compiled rules), and `correction` (for result types).
//!
//! License: MIT OR Apache-2.0

pub mod compiler;
pub mod email;
pub mod integer;
pub mod string;

use serde_json::Value;

use crate::config::FieldType;
use crate::correction::CorrectionResult;
use crate::sanitizers::compiler::CompiledRule;

/// A trait that defines the capability of a per-type field sanitizer.
///
/// Implementations are stateless unit structs; the compiled rule carries
/// all per-field configuration.
pub trait FieldSanitizer: Send + Sync {
    /// Sanitizes one raw value against its rule, producing the per-field
    /// judgment, cleaned value, and audit trail.
    fn sanitize(&self, field: &str, raw: &Value, rule: &CompiledRule) -> CorrectionResult;
}

/// Selects the sanitizer implementation for a resolved field type.
pub fn sanitizer_for(field_type: FieldType) -> &'static dyn FieldSanitizer {
    match field_type {
        FieldType::String => &string::StringSanitizer,
        FieldType::Int => &integer::IntSanitizer,
        FieldType::Email => &email::EmailSanitizer,
    }
}
