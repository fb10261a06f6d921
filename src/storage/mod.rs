//! Snapshot storage for expense-cli
//!
//! Expenses and categories are fetched elsewhere (the remote expense API) and
//! dropped into the data directory as JSON arrays. This module reads them
//! into a read-only [`Snapshot`] that the analytics layer aggregates.

pub mod file_io;

pub use file_io::{read_json, read_json_required, write_json_atomic};

use std::path::Path;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::{Category, Expense};

/// A point-in-time copy of the user's expenses and categories
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub expenses: Vec<Expense>,
    pub categories: Vec<Category>,
}

impl Snapshot {
    pub fn new(expenses: Vec<Expense>, categories: Vec<Category>) -> Self {
        Self {
            expenses,
            categories,
        }
    }

    /// Load the snapshot from the data directory
    ///
    /// Missing files are treated as empty collections.
    pub fn load(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let expenses: Vec<Expense> = read_json(paths.expenses_file())?;
        let categories: Vec<Category> = read_json(paths.categories_file())?;
        log::debug!(
            "Loaded {} expenses and {} categories from {}",
            expenses.len(),
            categories.len(),
            paths.data_dir().display()
        );
        Ok(Self::new(expenses, categories))
    }

    /// Load the snapshot, letting explicit files override the data directory
    ///
    /// An explicitly named file must exist.
    pub fn load_with_overrides(
        paths: &ExpensePaths,
        expenses_file: Option<&Path>,
        categories_file: Option<&Path>,
    ) -> Result<Self, ExpenseError> {
        let expenses: Vec<Expense> = match expenses_file {
            Some(path) => read_json_required(path)?,
            None => read_json(paths.expenses_file())?,
        };
        let categories: Vec<Category> = match categories_file {
            Some(path) => read_json_required(path)?,
            None => read_json(paths.categories_file())?,
        };
        Ok(Self::new(expenses, categories))
    }

    /// Create the data directory with empty snapshot files, keeping existing ones
    pub fn initialize(paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        if !paths.expenses_file().exists() {
            write_json_atomic(paths.expenses_file(), &Vec::<Expense>::new())?;
        }
        if !paths.categories_file().exists() {
            write_json_atomic(paths.categories_file(), &Vec::<Category>::new())?;
        }

        log::info!("Initialized snapshot files in {}", paths.data_dir().display());
        Ok(())
    }
}
