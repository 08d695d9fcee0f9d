//! errors.rs - Custom error types for the fieldsan-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! Every variant here is a construction-time failure: once an engine has
//! been built, per-field problems are reported as `CorrectionResult` values
//! rather than errors.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `fieldsan-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FieldsanError {
    #[error("Duplicate field rule name: '{0}'")]
    DuplicateFieldRule(String),

    #[error("A field rule has an empty `name` field")]
    EmptyRuleName,

    #[error("Failed to compile allowed_pattern for field '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Field '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}
