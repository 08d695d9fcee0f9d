// fieldsan/src/commands/sanitize.rs
//! The `sanitize` command: load rules, read a JSON parameter object, run
//! the engine, and print the per-field report.
//!
//! License: MIT OR Apache-2.0

use anyhow::{bail, Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use is_terminal::IsTerminal;
use log::{debug, info};
use owo_colors::OwoColorize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Read;
use std::process::ExitCode;

use fieldsan_core::{CorrectionEngine, CorrectionResult, RuleSet};

use crate::cli::SanitizeCommand;

pub fn run(cmd: &SanitizeCommand) -> Result<ExitCode> {
    let rule_set = RuleSet::load_from_file(&cmd.rules)?;
    let engine = CorrectionEngine::new(rule_set).context("Failed to compile field rules")?;

    let raw_input = read_input(cmd)?;
    let value: Value = serde_json::from_str(&raw_input).context("Input is not valid JSON")?;
    let Some(params) = value.as_object() else {
        bail!("Input must be a JSON object mapping field names to values");
    };

    debug!("Sanitizing {} input fields.", params.len());
    // BTreeMap gives the report a stable field order for output.
    let report: BTreeMap<String, CorrectionResult> =
        engine.sanitize(params).into_iter().collect();
    let all_valid = report.values().all(|r| r.is_valid);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report);
    }

    if all_valid {
        info!("All {} fields valid.", report.len());
        Ok(ExitCode::SUCCESS)
    } else {
        info!("At least one field invalid.");
        Ok(ExitCode::FAILURE)
    }
}

fn read_input(cmd: &SanitizeCommand) -> Result<String> {
    match &cmd.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read parameter object from stdin")?;
            Ok(buf)
        }
    }
}

fn print_table(report: &BTreeMap<String, CorrectionResult>) {
    let color = std::io::stdout().is_terminal();
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Valid", "Sanitized", "Notes"]);

    for (field, result) in report {
        let verdict = if result.is_valid {
            if color { "yes".green().to_string() } else { "yes".to_string() }
        } else if color {
            "NO".red().bold().to_string()
        } else {
            "NO".to_string()
        };
        table.add_row(vec![
            Cell::new(field),
            Cell::new(verdict),
            Cell::new(render_value(&result.sanitized_value)),
            Cell::new(result.messages.join("; ")),
        ]);
    }

    println!("{table}");
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "(null)".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
