//! Monthly insights
//!
//! Headline figures for one month (average daily spend, peak weekday, top
//! category, budget usage) and how they moved since the previous month.

use serde::Serialize;

use super::category::{tally_categories, top_category};
use super::efficiency::{budget_efficiency, total_budget, Change, Trend};
use super::monthly::expenses_in_month;
use super::patterns::tally_weekdays;
use crate::models::{Category, Expense, Money, YearMonth};

/// Headline figures for a single month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthInsights {
    pub month: YearMonth,
    pub total: Money,
    pub expense_count: usize,
    /// Month total spread over every day of the month
    pub average_daily: Money,
    pub highest_spending_day: Option<&'static str>,
    pub most_spent_category: Option<String>,
    pub budget_efficiency: f64,
}

impl MonthInsights {
    fn empty(month: YearMonth) -> Self {
        Self {
            month,
            total: Money::zero(),
            expense_count: 0,
            average_daily: Money::zero(),
            highest_spending_day: None,
            most_spent_category: None,
            budget_efficiency: 0.0,
        }
    }
}

/// Compute the insights for one month
///
/// A month with no dated expenses yields zeros and no peak day or category.
pub fn month_insights(expenses: &[Expense], categories: &[Category], month: YearMonth) -> MonthInsights {
    let in_month: Vec<&Expense> = expenses_in_month(expenses, month).collect();
    if in_month.is_empty() {
        return MonthInsights::empty(month);
    }

    let total: Money = in_month.iter().map(|e| e.amount).sum();
    let average_daily =
        Money::from_decimal(total.to_decimal() / f64::from(month.days_in_month()));

    let highest_spending_day = tally_weekdays(in_month.iter().copied())
        .highest()
        .map(|day| day.name);

    let category_totals = tally_categories(in_month.iter().copied(), categories);
    let most_spent_category = top_category(&category_totals).map(|t| t.name.clone());

    MonthInsights {
        month,
        total,
        expense_count: in_month.len(),
        average_daily,
        highest_spending_day,
        most_spent_category,
        budget_efficiency: budget_efficiency(total, total_budget(categories)),
    }
}

/// Insights for a month side by side with the month before it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightComparison {
    pub current: MonthInsights,
    pub previous: MonthInsights,
    pub average_daily_change: Change,
    pub efficiency_change: Change,
    /// Whether the top category is the same as last month
    pub top_category_unchanged: bool,
}

impl InsightComparison {
    /// Direction shown next to the top category: up when it held its place
    pub fn top_category_trend(&self) -> Trend {
        if self.top_category_unchanged {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// Compare a month's insights with the previous month
pub fn compare_months(expenses: &[Expense], categories: &[Category], month: YearMonth) -> InsightComparison {
    let current = month_insights(expenses, categories, month);
    let previous = month_insights(expenses, categories, month.prev());

    let average_daily_change = Change::between(
        current.average_daily.to_decimal(),
        previous.average_daily.to_decimal(),
    );
    let efficiency_change = Change::between(current.budget_efficiency, previous.budget_efficiency);
    let top_category_unchanged = current.most_spent_category == previous.most_spent_category;

    InsightComparison {
        current,
        previous,
        average_daily_change,
        efficiency_change,
        top_category_unchanged,
    }
}
