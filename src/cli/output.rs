//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (console respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints, entry names
//! - Bold: important values
//! - Dimmed: secondary info

use std::fmt::Display;

use chrono::{DateTime, Utc};
use console::style;

/// Print a success message with checkmark (green).
///
/// Example: `✓ test entry created`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ file not found`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning message to stderr (yellow).
///
/// Example: `⚠ variable values are retrievable via the API`
pub fn warn(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ run: gh auth login`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  name:  API_KEY`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value.to_string()).bold());
}

/// Format an entry name in cyan for inline use.
pub fn key(k: &str) -> String {
    style(k).cyan().to_string()
}

/// Format an optional timestamp, `N/A` when the remote omitted it.
pub fn timestamp(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(t) => t.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "N/A".to_string(),
    }
}
