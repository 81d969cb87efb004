//! Output formatting for CLI display
//!
//! stdout carries exactly one machine-readable line for the shell wrapper;
//! everything human-facing goes through the helpers here.

use byte_unit::{Byte, UnitType};
use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use std::path::Path;

/// Quote `text` for a POSIX shell using single quotes
#[must_use]
pub fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

/// The `cd` line evaluated by the shell wrapper
#[must_use]
pub fn cd_command(path: &Path) -> String {
    format!("cd {}", shell_quote(&path.to_string_lossy()))
}

/// Human-readable size using binary units
#[must_use]
pub fn format_size(bytes: u64) -> String {
    Byte::from_u64(bytes)
        .get_appropriate_unit(UnitType::Binary)
        .to_string()
}

/// Local date and time for display
#[must_use]
pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp.map_or_else(
        || "unknown".to_string(),
        |ts| ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// Section heading for the stats report
#[must_use]
pub fn heading(text: &str) -> String {
    text.bold().blue().to_string()
}

/// Label/value line for the stats report
#[must_use]
pub fn field(label: &str, value: &str) -> String {
    format!("  {} {value}", format!("{label}:").cyan())
}
