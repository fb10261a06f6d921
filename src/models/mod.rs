//! Core data models for expense-cli
//!
//! Expenses, categories, money amounts and calendar months. These mirror the
//! records the remote expense API returns.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use category::Category;
pub use expense::{CategoryRef, EmbeddedCategory, Expense};
pub use ids::{CategoryId, ExpenseId};
pub use money::Money;
pub use month::YearMonth;
