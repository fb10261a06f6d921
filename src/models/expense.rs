//! Expense model
//!
//! A single recorded outlay. Dates arrive as free-form strings from the remote
//! API and are kept verbatim; `parsed_date` interprets them on demand so that
//! one malformed record never prevents the rest of a snapshot from loading.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;

/// Category data embedded directly in an expense record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedCategory {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// How an expense refers to its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    /// Reference by id only
    Id(CategoryId),
    /// Populated category object
    Embedded(EmbeddedCategory),
}

impl CategoryRef {
    /// The referenced category id, if any
    pub fn id(&self) -> Option<&CategoryId> {
        match self {
            Self::Id(id) => Some(id),
            Self::Embedded(embedded) => embedded.id.as_ref(),
        }
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: ExpenseId,

    /// Category reference (id or embedded object)
    #[serde(
        rename = "expenseCategory",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<CategoryRef>,

    /// Description
    #[serde(rename = "expenseDesc", default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Date as delivered by the API
    #[serde(rename = "expenseDate", default, deserialize_with = "null_as_default")]
    pub date: String,

    /// Amount spent
    #[serde(rename = "expenseAmount", default)]
    pub amount: Money,
}

impl Expense {
    /// Create a new uncategorized expense
    pub fn new(amount: Money, date: impl Into<String>) -> Self {
        Self {
            id: ExpenseId::new(),
            category: None,
            description: String::new(),
            date: date.into(),
            amount,
        }
    }

    /// Builder-style helper to reference a category by id
    pub fn in_category(mut self, id: impl Into<CategoryId>) -> Self {
        self.category = Some(CategoryRef::Id(id.into()));
        self
    }

    /// Builder-style helper to embed a category object
    pub fn with_embedded_category(mut self, embedded: EmbeddedCategory) -> Self {
        self.category = Some(CategoryRef::Embedded(embedded));
        self
    }

    /// Builder-style helper to set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The calendar date of this expense, if the stored date is parseable
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_expense_date(&self.date)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.amount, self.description)
    }
}

/// Deserialize an explicit `null` as the field's default
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Interpret a date string from the API as a calendar date
///
/// Timestamps keep the calendar date of their own offset; no conversion to
/// the host time zone happens.
pub fn parse_expense_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(timestamp.date());
        }
    }

    for format in ["%Y/%m/%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }

    None
}
