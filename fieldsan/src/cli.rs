// fieldsan/src/cli.rs
//! This file defines the command-line interface (CLI) for the fieldsan
//! application, including all available commands and their arguments.
//!
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "fieldsan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sanitize untrusted field values against declarative rules",
    long_about = "Fieldsan is a command-line utility for sanitizing and validating named, \
untrusted input values (form fields, query parameters, JSON bodies) against a declarative \
per-field rule set. For every field it reports a validity judgment, the cleaned value, and \
an audit trail of what was altered and why.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all informational messages.
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `fieldsan` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes a JSON parameter object against a rule file.
    #[command(about = "Sanitizes a JSON parameter object against a rule file.")]
    Sanitize(SanitizeCommand),

    /// Validates a rule file and lists its compiled rules.
    #[command(about = "Validates a rule file and lists its compiled rules.")]
    Check(CheckCommand),
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Path to the YAML rule file.
    #[arg(long, short = 'r', value_name = "FILE", help = "Path to the YAML rule file.")]
    pub rules: PathBuf,

    /// Path to a JSON file holding the parameter object (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read the parameter object from a file instead of stdin.")]
    pub input: Option<PathBuf>,

    /// Emit the raw report as pretty-printed JSON instead of a table.
    #[arg(long, help = "Emit the raw report as pretty-printed JSON.")]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Path to the YAML rule file.
    #[arg(long, short = 'r', value_name = "FILE", help = "Path to the YAML rule file.")]
    pub rules: PathBuf,
}
