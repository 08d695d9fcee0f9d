// fieldsan-core/src/lib.rs
//! # Fieldsan Core Library
//!
//! `fieldsan-core` provides the fundamental, platform-independent logic for
//! sanitizing and validating named, untrusted input values (form fields,
//! query parameters, JSON bodies) against declarative per-field rules. For
//! every field it produces a judgment of validity, a cleaned value, and an
//! ordered audit trail of what was altered and why.
//!
//! The engine shrinks the attack surface for injection-style
//! vulnerabilities at the boundary where untrusted data enters a system. It
//! does not parse any query language, does not abstract over a data store,
//! and is not a substitute for parameterized queries: it guarantees
//! structural hygiene of the values flowing through its rules, nothing
//! more.
//!
//! ## Modules
//!
//! * `config`: Defines `FieldRule`s and `RuleSet` for declaring per-field policy.
//! * `sanitizers`: Per-type sanitizer implementations and rule compilation.
//! * `correction`: Defines `CorrectionResult` and the audit-trail builder.
//! * `engine`: The `CorrectionEngine` that assembles per-field outcomes.
//! * `errors`: Construction-time error types.
//!
//! ## Usage Example
//!
//! ```rust
//! use fieldsan_core::{CorrectionEngine, FieldRule, RuleSet};
//! use serde_json::json;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Declare the rules once.
//!     let rules = RuleSet {
//!         rules: vec![
//!             FieldRule {
//!                 name: "username".to_string(),
//!                 max_length: Some(20),
//!                 allowed_pattern: Some("[a-zA-Z0-9_]".to_string()),
//!                 ..Default::default()
//!             },
//!             FieldRule {
//!                 name: "age".to_string(),
//!                 field_type: "int".to_string(),
//!                 required: false,
//!                 ..Default::default()
//!             },
//!         ],
//!     };
//!
//!     // 2. Compile the engine (the one fallible step).
//!     let engine = CorrectionEngine::new(rules)?;
//!
//!     // 3. Sanitize batches; each call is pure and infallible.
//!     let params = json!({ "username": "  admin'--  ", "age": " 42 " });
//!     let report = engine.sanitize(params.as_object().unwrap());
//!
//!     assert_eq!(report["username"].sanitized_value, json!("admin"));
//!     assert_eq!(report["age"].sanitized_value, json!(42));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The only fatal conditions are configuration errors at construction time,
//! reported as [`FieldsanError`]. Per-field problems (missing required
//! fields, unparseable integers, malformed emails, values emptied by
//! sanitization) are reported as [`CorrectionResult`] values with a typed
//! [`Violation`]; no outcome aborts the rest of a batch.
//!
//! ## Design Principles
//!
//! * **Declarative:** Callers describe fields; the engine owns the
//!   transformation order.
//! * **Stateless:** The compiled registry is immutable and every sanitize
//!   call is pure, so engines are freely shareable across threads.
//! * **Clean and flag:** Malformed input is cleaned best-effort and audited
//!   rather than rejected outright, except for the documented violations.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod correction;
pub mod engine;
pub mod errors;
pub mod sanitizers;

/// Re-exports the public configuration types and loaders for field rules.
pub use config::{validate_rules, FieldRule, FieldType, RuleSet, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::FieldsanError;

/// Re-exports the engine and its one-shot convenience wrapper.
pub use engine::{sanitize_once, CorrectionEngine};

/// Re-exports the per-field outcome types.
pub use correction::{CorrectionResult, Violation};

/// Re-exports the compiled-rule types for advanced usage.
pub use sanitizers::compiler::{CompiledRule, RuleRegistry};

/// Re-exports the sanitizer seam for callers plugging in custom dispatch.
pub use sanitizers::{sanitizer_for, FieldSanitizer};
