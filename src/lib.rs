//! expense-cli - spending analytics for a personal expense tracker
//!
//! This library turns a snapshot of expenses and budget categories into the
//! figures behind an expense app's dashboard and analytics screens: monthly
//! and weekly totals, per-category spending, weekday patterns, budget usage
//! and month-over-month insights.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money, months)
//! - `storage`: JSON snapshot loading
//! - `analytics`: Pure aggregation over a snapshot
//! - `display`: Terminal tables and summaries
//! - `export`: CSV export of report rows
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::analytics::category_totals;
//! use expense_cli::config::paths::ExpensePaths;
//! use expense_cli::storage::Snapshot;
//!
//! let paths = ExpensePaths::new()?;
//! let snapshot = Snapshot::load(&paths)?;
//! let totals = category_totals(&snapshot.expenses, &snapshot.categories);
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;

pub use error::ExpenseError;
