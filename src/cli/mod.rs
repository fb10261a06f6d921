//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the analytics layer.

pub mod overview;
pub mod report;

pub use overview::{handle_budget_command, handle_dashboard_command, handle_insights_command};
pub use report::{handle_report_command, ReportCommands};

use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::YearMonth;
use crate::storage::Snapshot;

/// Everything a command needs to produce its output
pub struct CommandContext<'a> {
    pub snapshot: &'a Snapshot,
    pub settings: &'a Settings,
    /// Reference date for "current month" and trailing windows
    pub today: NaiveDate,
    /// Print JSON instead of tables
    pub json: bool,
}

impl CommandContext<'_> {
    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// The requested month, or the month containing `today`
    pub fn month_or_current(&self, month: Option<&str>) -> ExpenseResult<YearMonth> {
        match month {
            Some(s) => parse_month(s),
            None => Ok(YearMonth::from_date(self.today)),
        }
    }
}

/// Parse a `YYYY-MM` month argument
pub fn parse_month(s: &str) -> ExpenseResult<YearMonth> {
    YearMonth::parse(s).map_err(|e| {
        ExpenseError::Validation(format!("{}. Use YYYY-MM (e.g., 2025-10)", e))
    })
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
    })
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> ExpenseResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn create_export_file(path: &Path) -> ExpenseResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-10").unwrap(), YearMonth::new(2025, 10).unwrap());

        let err = parse_month("2025-13").unwrap_err();
        assert!(err.is_validation());
        assert!(parse_month("October").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-10-26").unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 26).unwrap()
        );
        assert!(parse_date("26/10/2025").unwrap_err().is_validation());
    }

    #[test]
    fn test_month_or_current() {
        let snapshot = Snapshot::default();
        let settings = Settings::default();
        let ctx = CommandContext {
            snapshot: &snapshot,
            settings: &settings,
            today: NaiveDate::from_ymd_opt(2025, 10, 26).unwrap(),
            json: false,
        };

        assert_eq!(ctx.month_or_current(None).unwrap(), YearMonth::new(2025, 10).unwrap());
        assert_eq!(
            ctx.month_or_current(Some("2024-02")).unwrap(),
            YearMonth::new(2024, 2).unwrap()
        );
        assert_eq!(ctx.symbol(), "$");
    }
}
