//! Rules command implementation
//!
//! Prints the resolved rule table, in lookup order.

use crate::input::load_config;
use anyhow::{Context, Result};
use colored::Colorize;
use nameguard_lint::{DefaultCategory, DroppedEntry, NamingValidator, RuleEntry};
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

/// JSON output for the rules command.
#[derive(Debug, Clone, Serialize)]
pub struct RulesOutput {
    pub rules: Vec<RuleEntry>,
    pub excluded_classes: Vec<String>,
    pub excluded_paths: Vec<String>,
    pub default_category: DefaultCategory,
    pub dropped: Vec<DroppedEntry>,
}

pub fn execute(config_path: &Path) -> Result<RulesOutput> {
    let config = load_config(config_path)?;
    let validator = NamingValidator::from_config(&config)
        .with_context(|| format!("Invalid class hierarchy in {}", config_path.display()))?;

    let table = validator.table();
    let excluded_classes = table
        .excluded_types()
        .iter()
        .filter_map(|id| validator.hierarchy().class_path(*id))
        .map(str::to_string)
        .collect();

    Ok(RulesOutput {
        rules: table.rules().to_vec(),
        excluded_classes,
        excluded_paths: table.excluded_paths().to_vec(),
        default_category: table.default_category().clone(),
        dropped: validator.dropped_entries().to_vec(),
    })
}

pub fn run(config_path: &str, json: bool) -> Result<ExitCode> {
    let output = execute(Path::new(config_path))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Rules:".cyan().bold(), config_path);
    for (i, rule) in output.rules.iter().enumerate() {
        let prefix = if rule.requires_prefix() { rule.prefix.as_str() } else { "-" };
        let suffix = if rule.requires_suffix() { rule.suffix.as_str() } else { "-" };
        println!(
            "  {:>3} {} {} {} {} {}",
            (i + 1).to_string().dimmed(),
            rule.class_path.cyan(),
            "prefix:".dimmed(),
            prefix,
            "suffix:".dimmed(),
            suffix
        );
    }

    if !output.excluded_classes.is_empty() {
        println!("\n{}", "Excluded classes:".blue().bold());
        for class in &output.excluded_classes {
            println!("  {}", class);
        }
    }

    if !output.excluded_paths.is_empty() {
        println!("\n{}", "Excluded paths:".blue().bold());
        for path in &output.excluded_paths {
            println!("  {}", path);
        }
    }

    let category = &output.default_category;
    if category.is_enabled() {
        println!(
            "\n{} {} {} {}",
            "Default category:".blue().bold(),
            category.class_marker,
            "prefix:".dimmed(),
            category.prefix
        );
    }

    if !output.dropped.is_empty() {
        println!("\n{}", "Dropped:".yellow().bold());
        for dropped in &output.dropped {
            println!("  {} {}", "!".yellow(), dropped);
        }
    }

    Ok(ExitCode::SUCCESS)
}
