//! Export module for expense-cli
//!
//! Report rows can be written to CSV for use in a spreadsheet. JSON output
//! goes through the `--json` flag instead.

pub mod csv;

pub use csv::{export_categories_csv, export_monthly_csv, export_weekly_csv};
