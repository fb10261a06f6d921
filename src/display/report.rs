//! Report formatting utilities for terminal output
//!
//! Small helpers shared by the report tables and summaries.

use chrono::NaiveDate;
use std::fmt::Write;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

/// Placeholder for figures that have no value
pub const NOT_AVAILABLE: &str = "N/A";

/// Render rows as a rounded table with numeric columns right-aligned
pub fn render_table<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a section heading with an underline
pub fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, "=".repeat(title.chars().count()))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Format a date with a user-supplied strftime pattern
///
/// Patterns chrono cannot render for a plain date (bad specifiers, time
/// fields) fall back to ISO `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_ok() {
        return out;
    }
    log::warn!("Cannot format dates with {:?}, using ISO dates", pattern);
    date.format("%Y-%m-%d").to_string()
}

/// Value or "N/A"
pub fn or_not_available(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}
