//! Category model
//!
//! A user-defined spending bucket with a monthly budget. Field names follow
//! the REST payloads the snapshot files are exported from.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::null_as_default;
use super::ids::CategoryId;
use super::money::Money;

/// A budget category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: CategoryId,

    /// Category name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Display color (hex, e.g. "#1C69E3")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Monthly budget
    #[serde(default)]
    pub budget: Money,

    /// Spent-to-date as reported by the server. Reports derive spending from
    /// expenses instead; this is informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent: Option<Money>,
}

impl Category {
    /// Create a new category with a fresh id and no budget
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            color: None,
            description: None,
            budget: Money::zero(),
            spent: None,
        }
    }

    /// Builder-style helper to set the id
    pub fn with_id(mut self, id: impl Into<CategoryId>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder-style helper to set the monthly budget
    pub fn with_budget(mut self, budget: Money) -> Self {
        self.budget = budget;
        self
    }

    /// Builder-style helper to set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
