// fieldsan/src/main.rs
//! Fieldsan entry point.
//!
//! Parses the CLI, initializes logging, and dispatches to the command
//! handlers. Exit status: 0 when every field in the report is valid,
//! 1 when any field is invalid, 2 on operational errors (unreadable
//! files, malformed JSON, uncompilable rules).
//!
//! License: MIT OR Apache-2.0

mod cli;
mod commands;

use clap::Parser;
use std::process::ExitCode;

use crate::cli::{Cli, Commands};

fn init_logger(quiet: bool, debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if quiet {
        builder.filter_level(log::LevelFilter::Off);
    } else if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logger(args.quiet, args.debug);

    let outcome = match args.command {
        Commands::Sanitize(cmd) => commands::sanitize::run(&cmd),
        Commands::Check(cmd) => commands::check::run(&cmd),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
