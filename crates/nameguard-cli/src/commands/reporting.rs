use colored::Colorize;
use nameguard_lint::{NamingReport, ProgressSink, ReportEntry, Summary};
use std::io::Write;

const BAR_WIDTH: usize = 30;

/// Progress bar drawn on stderr, redrawn only when the percentage changes.
#[derive(Debug, Default)]
pub(crate) struct ProgressBar {
    last_pct: Option<u32>,
}

impl ProgressBar {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

pub(crate) fn render_bar(fraction: f32) -> String {
    let pct = (fraction.clamp(0.0, 1.0) * 100.0) as u32;
    let filled = (pct as usize * BAR_WIDTH) / 100;
    format!(
        "[{}{}] {}%",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        pct
    )
}

impl ProgressSink for ProgressBar {
    fn progress(&mut self, fraction: f32, _label: &str) {
        let pct = (fraction.clamp(0.0, 1.0) * 100.0) as u32;
        if self.last_pct == Some(pct) {
            return;
        }
        self.last_pct = Some(pct);

        let mut stderr = std::io::stderr().lock();
        let _ = write!(stderr, "\r  Progress: {}", render_bar(fraction).dimmed());
        if pct >= 100 {
            let _ = writeln!(stderr);
        }
        let _ = stderr.flush();
    }
}

/// Print a single report entry.
pub(crate) fn print_entry(entry: &ReportEntry, marker: colored::ColoredString) {
    println!("  {} {} {}", marker, entry.asset_path.cyan(), entry.message);
    if let Some(detail) = &entry.detail {
        println!("    {} {}", "->".dimmed(), detail);
    }
}

/// Print every entry grouped by severity, errors first.
pub(crate) fn print_report(report: &NamingReport) {
    if !report.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for entry in &report.errors {
            print_entry(entry, "x".red());
        }
    }

    if !report.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for entry in &report.warnings {
            print_entry(entry, "!".yellow());
        }
    }

    if !report.info.is_empty() {
        println!("\n{}", "Info:".blue().bold());
        for entry in &report.info {
            print_entry(entry, "i".blue());
        }
    }
}

pub(crate) fn print_summary(summary: &Summary) {
    let headline = summary.headline();
    if summary.has_failed() {
        println!("\n{}", headline.red().bold());
    } else {
        println!("\n{}", headline.green().bold());
    }
    println!("{}", summary.counts().dimmed());
}
