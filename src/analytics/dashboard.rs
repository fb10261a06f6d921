//! Dashboard summary
//!
//! Everything the overview screen shows, recomputed from the snapshot on each
//! call: this month's spending against the total budget, the most recent
//! expenses, and the monthly trend.

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Reverse;

use super::efficiency::{budget_efficiency, total_budget};
use super::monthly::{month_total, monthly_totals, MonthlyTotal};
use super::resolve::CategoryIndex;
use crate::models::{Category, Expense, ExpenseId, Money, YearMonth};

/// A recent expense prepared for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentExpense {
    pub id: ExpenseId,
    pub description: String,
    pub category: String,
    pub amount: Money,
    /// `None` when the stored date could not be parsed
    pub date: Option<NaiveDate>,
}

/// Overview figures for the month containing the reference date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub month: YearMonth,
    pub month_total: Money,
    pub total_budget: Money,
    /// Budget left this month, never below zero
    pub remaining: Money,
    pub percentage_used: f64,
    pub recent: Vec<RecentExpense>,
    pub trend: Vec<MonthlyTotal>,
}

/// The `count` most recent expenses, newest first
///
/// Expenses without a parseable date sort after all dated ones. Equal dates
/// keep snapshot order.
pub fn recent_expenses(expenses: &[Expense], categories: &[Category], count: usize) -> Vec<RecentExpense> {
    let index = CategoryIndex::new(categories);

    let mut dated: Vec<(Option<NaiveDate>, &Expense)> =
        expenses.iter().map(|e| (e.parsed_date(), e)).collect();
    // Some(_) > None, so reversing puts undated expenses last
    dated.sort_by_key(|(date, _)| Reverse(*date));

    dated
        .into_iter()
        .take(count)
        .map(|(date, expense)| RecentExpense {
            id: expense.id.clone(),
            description: expense.description.clone(),
            category: index.resolve(expense.category.as_ref()).name().to_string(),
            amount: expense.amount,
            date,
        })
        .collect()
}

/// Build the dashboard for the month containing `today`
pub fn dashboard_summary(
    expenses: &[Expense],
    categories: &[Category],
    today: NaiveDate,
    trend_months: u32,
    recent_count: usize,
) -> DashboardSummary {
    let month = YearMonth::from_date(today);
    let spent = month_total(expenses, month);
    let budget = total_budget(categories);

    DashboardSummary {
        month,
        month_total: spent,
        total_budget: budget,
        remaining: (budget - spent).max(Money::zero()),
        percentage_used: budget_efficiency(spent, budget),
        recent: recent_expenses(expenses, categories, recent_count),
        trend: monthly_totals(expenses, trend_months, today),
    }
}
