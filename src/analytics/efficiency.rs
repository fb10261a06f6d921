//! Budget usage and month-over-month change

use serde::Serialize;
use std::fmt;

use crate::models::{Category, Money};

/// Percentage of the budget consumed, clamped to `0..=100`
///
/// A zero or negative budget yields 0.
pub fn budget_efficiency(total_spent: Money, total_budget: Money) -> f64 {
    total_spent
        .percent_of(total_budget)
        .map(|pct| pct.clamp(0.0, 100.0))
        .unwrap_or(0.0)
}

/// Sum of all monthly category budgets
pub fn total_budget(categories: &[Category]) -> Money {
    categories.iter().map(|c| c.budget).sum()
}

/// Direction of a change between two periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Percentage change of a metric from the previous period
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Change {
    pub percent: f64,
    pub trend: Trend,
}

impl Change {
    /// Change from `previous` to `current`
    ///
    /// With nothing to compare against (previous is zero) the change is
    /// reported as flat and upward.
    pub fn between(current: f64, previous: f64) -> Self {
        if previous == 0.0 || !previous.is_finite() || !current.is_finite() {
            return Self {
                percent: 0.0,
                trend: Trend::Up,
            };
        }

        let percent = (current - previous) / previous * 100.0;
        Self {
            percent,
            trend: if percent >= 0.0 { Trend::Up } else { Trend::Down },
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.percent >= 0.0 { "+" } else { "" };
        write!(f, "{}{:.1}%", sign, self.percent)
    }
}
