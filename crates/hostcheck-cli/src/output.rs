//! Formatted output helpers for CLI commands.

use std::fmt::Write as _;

use clap::ValueEnum;
use hostcheck_core::cgroup::CgroupTable;
use hostcheck_core::report::Report;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sections.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Renders a report in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_report(report: &Report, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Formats the subsystem table as a two-column listing.
#[must_use]
pub fn format_subsystems(table: &CgroupTable, enabled_only: bool) -> String {
    let mut out = format!("{:<12} {:<8}\n", "SUBSYSTEM", "ENABLED");
    for (name, enabled) in table.iter() {
        if enabled_only && enabled != 1 {
            continue;
        }
        let _ = writeln!(out, "{name:<12} {:<8}", if enabled == 1 { "yes" } else { "no" });
    }
    out
}
