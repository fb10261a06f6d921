//! Display formatting for terminal output
//!
//! Turns analytics results into tables and summaries for the terminal.

pub mod overview;
pub mod report;
pub mod tables;

pub use overview::{format_dashboard, format_insights};
pub use tables::{format_budget, format_categories, format_monthly, format_patterns, format_weekly};
