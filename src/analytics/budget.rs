//! Budget usage per category
//!
//! Spending is derived from the month's expenses rather than taken from the
//! server-reported `spent` field, so it always agrees with the other reports.

use serde::Serialize;
use std::collections::HashMap;

use super::category::tally_categories;
use super::efficiency::{budget_efficiency, total_budget};
use super::monthly::expenses_in_month;
use crate::models::{Category, CategoryId, Expense, Money, YearMonth};

/// How a category is tracking against its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    NoBudget,
    OverBudget,
    Danger,
    Caution,
    OnTrack,
}

impl BudgetStatus {
    /// Classify spending against a budget
    pub fn for_amounts(spent: Money, budget: Money) -> Self {
        if !budget.is_positive() {
            return Self::NoBudget;
        }
        if spent > budget {
            return Self::OverBudget;
        }

        let percentage = spent.percent_of(budget).unwrap_or(0.0);
        if percentage > 90.0 {
            Self::Danger
        } else if percentage > 70.0 {
            Self::Caution
        } else {
            Self::OnTrack
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoBudget => "No budget",
            Self::OverBudget => "Over budget!",
            Self::Danger => "Danger",
            Self::Caution => "Caution",
            Self::OnTrack => "On track",
        }
    }
}

/// One category's budget line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRow {
    pub category_id: CategoryId,
    pub name: String,
    pub color: String,
    pub budget: Money,
    pub spent: Money,
    /// May be negative when over budget
    pub remaining: Money,
    /// Usage clamped to `0..=100`
    pub percentage: f64,
    pub status: BudgetStatus,
}

/// Budget usage for every category in a month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetOverview {
    pub month: YearMonth,
    pub rows: Vec<BudgetRow>,
    pub total_budget: Money,
    /// Spending assigned to a configured category
    pub total_spent: Money,
    /// Spending that matched no configured category
    pub unbudgeted_spent: Money,
    pub remaining: Money,
    pub percentage: f64,
}

/// Compare each category's spending in `month` with its monthly budget
///
/// Rows follow the order of `categories`.
pub fn budget_overview(expenses: &[Expense], categories: &[Category], month: YearMonth) -> BudgetOverview {
    let totals = tally_categories(expenses_in_month(expenses, month), categories);
    let spent_by_id: HashMap<&CategoryId, Money> = totals
        .iter()
        .filter_map(|t| t.category_id.as_ref().map(|id| (id, t.total)))
        .collect();

    let mut colors: HashMap<&CategoryId, &str> = HashMap::new();
    for t in &totals {
        if let Some(id) = &t.category_id {
            colors.insert(id, &t.color);
        }
    }

    let rows: Vec<BudgetRow> = categories
        .iter()
        .map(|category| {
            let spent = spent_by_id.get(&category.id).copied().unwrap_or_default();
            BudgetRow {
                category_id: category.id.clone(),
                name: category.name.clone(),
                color: colors
                    .get(&category.id)
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
                budget: category.budget,
                spent,
                remaining: category.budget - spent,
                percentage: budget_efficiency(spent, category.budget),
                status: BudgetStatus::for_amounts(spent, category.budget),
            }
        })
        .collect();

    let budget = total_budget(categories);
    let total_spent: Money = rows.iter().map(|r| r.spent).sum();
    let all_spent: Money = totals.iter().map(|t| t.total).sum();

    BudgetOverview {
        month,
        rows,
        total_budget: budget,
        total_spent,
        unbudgeted_spent: all_spent - total_spent,
        remaining: budget - total_spent,
        percentage: budget_efficiency(total_spent, budget),
    }
}
