//! Dashboard and insight summaries

use tabled::Tabled;

use super::report::{
    format_bar, format_date, format_percentage, heading, or_not_available, render_table, truncate,
};
use crate::analytics::{Change, DashboardSummary, InsightComparison, Trend};

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
    }
}

fn describe_change(change: &Change) -> String {
    format!("{} {} from last month", trend_arrow(change.trend), change)
}

/// Format month insights with their change from the previous month
pub fn format_insights(comparison: &InsightComparison, symbol: &str) -> String {
    let current = &comparison.current;
    let mut output = heading(&format!("Analytics for {}", current.month.label()));

    output.push_str(&format!(
        "Average daily spending: {:>12}   {}\n",
        current.average_daily.format_with_symbol(symbol),
        describe_change(&comparison.average_daily_change)
    ));
    output.push_str(&format!(
        "Highest spending day:   {:>12}\n",
        or_not_available(current.highest_spending_day)
    ));
    let top_category_note = if comparison.top_category_unchanged {
        "same as last month"
    } else {
        "changed since last month"
    };
    output.push_str(&format!(
        "Most spent category:    {:>12}   {} {}\n",
        or_not_available(current.most_spent_category.as_deref()),
        trend_arrow(comparison.top_category_trend()),
        top_category_note
    ));
    output.push_str(&format!(
        "Budget efficiency:      {:>12}   {}\n",
        format!("{:.0}%", current.budget_efficiency),
        describe_change(&comparison.efficiency_change)
    ));
    output.push_str(&format!(
        "Total this month:       {:>12}\n",
        current.total.format_with_symbol(symbol)
    ));

    output.push('\n');
    output.push_str("Spending Patterns\n");
    output.push_str(&format!(
        "  Peak spending day: You spend the most on {}.\n",
        or_not_available(current.highest_spending_day)
    ));
    output.push_str(&format!(
        "  Top category: Most of your spending is in {}.\n",
        or_not_available(current.most_spent_category.as_deref())
    ));
    output.push_str(&format!(
        "  Budget usage: You've used about {:.0}% of your total budget this month.\n",
        current.budget_efficiency
    ));

    output
}

#[derive(Tabled)]
struct RecentRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format the dashboard overview
pub fn format_dashboard(summary: &DashboardSummary, symbol: &str, date_format: &str) -> String {
    let mut output = heading(&format!("Dashboard for {}", summary.month.label()));

    output.push_str(&format!(
        "Total expenses: {}\n",
        summary.month_total.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Budget:         {}\n",
        summary.total_budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining:      {}\n",
        summary.remaining.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Status:         {} {}\n",
        format_bar(summary.percentage_used, 100.0, 20),
        format_percentage(summary.percentage_used)
    ));

    output.push_str("\nRecent Expenses\n");
    if summary.recent.is_empty() {
        output.push_str("No expenses recorded yet.\n");
    } else {
        let rows: Vec<RecentRow> = summary
            .recent
            .iter()
            .map(|r| RecentRow {
                date: r
                    .date
                    .map(|d| format_date(d, date_format))
                    .unwrap_or_else(|| or_not_available(None).to_string()),
                amount: r.amount.format_with_symbol(symbol),
                category: truncate(&r.category, 24),
                description: truncate(&r.description, 40),
            })
            .collect();
        output.push_str(&render_table(rows));
        output.push('\n');
    }

    if !summary.trend.is_empty() {
        output.push_str("\nMonthly Trend\n");
        let max = summary
            .trend
            .iter()
            .map(|t| t.total)
            .max()
            .unwrap_or_default();
        for month in &summary.trend {
            output.push_str(&format!(
                "  {:<9} {} {}\n",
                month.label,
                format_bar(month.total.to_decimal(), max.to_decimal(), 20),
                month.total.format_with_symbol(symbol)
            ));
        }
    }

    output
}
