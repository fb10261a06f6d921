//! Strongly-typed ID wrappers for expenses and categories
//!
//! Remote records carry opaque string identifiers (document ids), so these
//! wrap a `String` rather than a parsed UUID. Newtypes still keep expense and
//! category ids from being mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().simple().to_string())
            }

            /// Wrap an existing identifier
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Get the underlying identifier
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Short form for terminal output
            pub fn short(&self) -> String {
                let head: String = self.0.chars().take(8).collect();
                format!("{}{}", $display_prefix, head)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(CategoryId, "cat-");
