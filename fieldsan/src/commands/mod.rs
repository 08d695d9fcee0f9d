// fieldsan/src/commands/mod.rs
//! Command handlers for the fieldsan CLI.
//!
//! License: MIT OR Apache-2.0

pub mod check;
pub mod sanitize;
