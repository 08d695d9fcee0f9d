// fieldsan/src/commands/check.rs
//! The `check` command: validate a rule file, compile it, and list the
//! resulting registry.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Table};
use log::info;
use std::process::ExitCode;

use fieldsan_core::{CorrectionEngine, RuleSet};

use crate::cli::CheckCommand;

pub fn run(cmd: &CheckCommand) -> Result<ExitCode> {
    let rule_set = RuleSet::load_from_file(&cmd.rules)?;
    let engine = CorrectionEngine::new(rule_set).context("Failed to compile field rules")?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Type", "Required", "Max length", "Allowed pattern"]);

    for compiled in engine.registry().iter() {
        let rule = compiled.rule();
        table.add_row(vec![
            rule.name.clone(),
            format!("{:?}", compiled.field_type()).to_lowercase(),
            rule.required.to_string(),
            rule.max_length.map_or_else(|| "-".to_string(), |n| n.to_string()),
            rule.allowed_pattern.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    println!("{table}");
    println!("{} rule(s) compiled successfully.", engine.registry().len());
    info!("Rule file {} is valid.", cmd.rules.display());
    Ok(ExitCode::SUCCESS)
}
