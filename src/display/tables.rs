//! Report tables
//!
//! Terminal rendering of the monthly, weekly, category, weekday and budget
//! reports.

use tabled::Tabled;

use super::report::{format_bar, format_percentage, heading, render_table, truncate};
use crate::analytics::{
    BudgetOverview, CategoryTotal, MonthlyTotal, WeekdayPattern, WeeklyTotal,
};
use crate::models::Money;

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct PeriodRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Expenses")]
    count: usize,
    #[tabled(rename = "")]
    bar: String,
}

fn bar_for(total: Money, max: Money) -> String {
    format_bar(total.to_decimal(), max.to_decimal(), BAR_WIDTH)
}

/// Format monthly totals
pub fn format_monthly(totals: &[MonthlyTotal], symbol: &str) -> String {
    let mut output = heading(&format!("Monthly Expenses (last {} months)", totals.len()));

    if totals.iter().all(|t| t.total.is_zero()) {
        output.push_str(&format!(
            "No expense data for the last {} months.\n",
            totals.len()
        ));
        return output;
    }

    let max = totals.iter().map(|t| t.total).max().unwrap_or_default();
    let rows: Vec<PeriodRow> = totals
        .iter()
        .map(|t| PeriodRow {
            period: t.label.clone(),
            total: t.total.format_with_symbol(symbol),
            count: t.expense_count,
            bar: bar_for(t.total, max),
        })
        .collect();

    output.push_str(&render_table(rows));
    output.push('\n');

    let sum: Money = totals.iter().map(|t| t.total).sum();
    output.push_str(&format!("Total: {}\n", sum.format_with_symbol(symbol)));
    output
}

/// Format weekly totals for a month grid
pub fn format_weekly(totals: &[WeeklyTotal], symbol: &str) -> String {
    let mut output = heading("Weekly Spending");

    if totals.iter().all(|t| t.total.is_zero()) {
        output.push_str("No expense data for recent weeks.\n");
        return output;
    }

    let max = totals.iter().map(|t| t.total).max().unwrap_or_default();
    let rows: Vec<PeriodRow> = totals
        .iter()
        .map(|t| PeriodRow {
            period: format!("{} ({} to {})", t.label, t.start, t.end),
            total: t.total.format_with_symbol(symbol),
            count: t.expense_count,
            bar: bar_for(t.total, max),
        })
        .collect();

    output.push_str(&render_table(rows));
    output.push('\n');
    output
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Expenses")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Color")]
    color: String,
}

/// Format spending by category
pub fn format_categories(totals: &[CategoryTotal], symbol: &str) -> String {
    let mut output = heading("Expenses by Category");

    if totals.is_empty() {
        output.push_str("No categories or expenses yet.\n");
        return output;
    }

    let grand_total: Money = totals.iter().map(|t| t.total).sum();
    let rows: Vec<CategoryRow> = totals
        .iter()
        .map(|t| CategoryRow {
            name: truncate(&t.name, 30),
            total: t.total.format_with_symbol(symbol),
            count: t.expense_count,
            share: format_percentage(t.total.percent_of(grand_total).unwrap_or(0.0)),
            color: t.color.clone(),
        })
        .collect();

    output.push_str(&render_table(rows));
    output.push('\n');
    output.push_str(&format!(
        "Total: {}\n",
        grand_total.format_with_symbol(symbol)
    ));
    output
}

#[derive(Tabled)]
struct WeekdayRow {
    #[tabled(rename = "Weekday")]
    name: &'static str,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Expenses")]
    count: usize,
}

/// Format spending per weekday
pub fn format_patterns(pattern: &WeekdayPattern, symbol: &str) -> String {
    let mut output = heading("Spending Patterns");

    let (Some(highest), Some(lowest)) = (pattern.highest(), pattern.lowest()) else {
        output.push_str("No dated expenses to analyze.\n");
        return output;
    };

    let rows: Vec<WeekdayRow> = pattern
        .days
        .iter()
        .map(|d| WeekdayRow {
            name: d.name,
            total: d.total.format_with_symbol(symbol),
            count: d.expense_count,
        })
        .collect();

    output.push_str(&render_table(rows));
    output.push('\n');
    output.push_str(&format!(
        "Peak spending day:   {} ({})\n",
        highest.name,
        highest.total.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Lowest spending day: {} ({})\n",
        lowest.name,
        lowest.total.format_with_symbol(symbol)
    ));
    output
}

#[derive(Tabled)]
struct BudgetLine {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// Format budget usage per category
pub fn format_budget(overview: &BudgetOverview, symbol: &str) -> String {
    let mut output = heading(&format!("Budgets for {}", overview.month.label()));

    output.push_str(&format!(
        "Overall: {} of {} spent, {} remaining ({})\n\n",
        overview.total_spent.format_with_symbol(symbol),
        overview.total_budget.format_with_symbol(symbol),
        overview.remaining.format_with_symbol(symbol),
        format_percentage(overview.percentage)
    ));

    if overview.rows.is_empty() {
        output.push_str("No categories found.\n");
    } else {
        let rows: Vec<BudgetLine> = overview
            .rows
            .iter()
            .map(|r| BudgetLine {
                name: truncate(&r.name, 30),
                spent: r.spent.format_with_symbol(symbol),
                budget: r.budget.format_with_symbol(symbol),
                remaining: r.remaining.format_with_symbol(symbol),
                used: format_percentage(r.percentage),
                status: r.status.label(),
            })
            .collect();
        output.push_str(&render_table(rows));
        output.push('\n');
    }

    if !overview.unbudgeted_spent.is_zero() {
        output.push_str(&format!(
            "Spending outside any category: {}\n",
            overview.unbudgeted_spent.format_with_symbol(symbol)
        ));
    }

    output
}
