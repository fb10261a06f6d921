//! Monthly spending totals
//!
//! Buckets expenses into the last N calendar months ending at the reference
//! month, zero-filling months without spending so charts keep a fixed axis.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Expense, Money, YearMonth};

/// Total spending for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub month: YearMonth,
    /// Chart label, e.g. "Oct 2025"
    pub label: String,
    pub total: Money,
    pub expense_count: usize,
}

/// The `month_count` months ending at the month containing `today`, oldest first
pub fn trailing_months(today: NaiveDate, month_count: u32) -> Vec<YearMonth> {
    let current = YearMonth::from_date(today);
    (0..month_count)
        .rev()
        .map(|offset| current.minus_months(offset))
        .collect()
}

/// Totals for the last `month_count` months ending at the month containing `today`
///
/// Results are in chronological order. Expenses dated outside the covered
/// range, or with unparseable dates, are left out.
pub fn monthly_totals(expenses: &[Expense], month_count: u32, today: NaiveDate) -> Vec<MonthlyTotal> {
    let months = trailing_months(today, month_count);

    let mut rows: Vec<MonthlyTotal> = months
        .iter()
        .map(|month| MonthlyTotal {
            month: *month,
            label: month.label(),
            total: Money::zero(),
            expense_count: 0,
        })
        .collect();

    let positions: HashMap<YearMonth, usize> = months
        .iter()
        .enumerate()
        .map(|(i, month)| (*month, i))
        .collect();

    for expense in expenses {
        let Some(date) = expense.parsed_date() else {
            log::debug!("Skipping expense {} with unparseable date {:?}", expense.id, expense.date);
            continue;
        };

        if let Some(&i) = positions.get(&YearMonth::from_date(date)) {
            rows[i].total += expense.amount;
            rows[i].expense_count += 1;
        }
    }

    rows
}

/// Total spending dated within a single month
pub fn month_total(expenses: &[Expense], month: YearMonth) -> Money {
    expenses_in_month(expenses, month).map(|e| e.amount).sum()
}

/// Iterate over the expenses dated within a month
pub fn expenses_in_month(expenses: &[Expense], month: YearMonth) -> impl Iterator<Item = &Expense> {
    expenses.iter().filter(move |expense| {
        expense
            .parsed_date()
            .is_some_and(|date| month.contains(date))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(cents: i64, date: &str) -> Expense {
        Expense::new(Money::from_cents(cents), date)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 26).unwrap()
    }

    #[test]
    fn test_months_are_chronological_and_zero_filled() {
        let expenses = vec![expense(4599, "2025-10-25"), expense(1000, "2025-08-02")];

        let totals = monthly_totals(&expenses, 6, today());
        let labels: Vec<&str> = totals.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["May 2025", "Jun 2025", "Jul 2025", "Aug 2025", "Sep 2025", "Oct 2025"]
        );

        assert_eq!(totals[5].total.cents(), 4599);
        assert_eq!(totals[3].total.cents(), 1000);
        assert_eq!(totals[4].total, Money::zero());
        assert_eq!(totals[4].expense_count, 0);
    }

    #[test]
    fn test_range_crosses_year_boundary() {
        let jan = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let expenses = vec![expense(500, "2024-12-31"), expense(700, "2024-10-31")];

        let totals = monthly_totals(&expenses, 3, jan);
        assert_eq!(totals[0].month, YearMonth::new(2024, 11).unwrap());
        assert_eq!(totals[1].total.cents(), 500);
        // October is outside the three-month window
        let covered: Money = totals.iter().map(|t| t.total).sum();
        assert_eq!(covered.cents(), 500);
    }

    #[test]
    fn test_out_of_range_and_unparseable_dates_are_excluded() {
        let expenses = vec![
            expense(100, "2025-10-01"),
            expense(200, "2024-10-01"),
            expense(300, "not a date"),
            expense(400, "2025-11-01"),
        ];

        let totals = monthly_totals(&expenses, 6, today());
        let covered: Money = totals.iter().map(|t| t.total).sum();
        assert_eq!(covered.cents(), 100);
    }

    #[test]
    fn test_zero_months() {
        let expenses = vec![expense(100, "2025-10-01")];
        assert!(monthly_totals(&expenses, 0, today()).is_empty());
    }

    #[test]
    fn test_empty_month_is_present() {
        let totals = monthly_totals(&[], 1, today());
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].total, Money::zero());
    }

    #[test]
    fn test_month_total() {
        let expenses = vec![
            expense(100, "2025-10-01"),
            expense(250, "2025-10-31T22:00:00Z"),
            expense(999, "2025-09-30"),
        ];
        let october = YearMonth::new(2025, 10).unwrap();
        assert_eq!(month_total(&expenses, october).cents(), 350);
        assert_eq!(expenses_in_month(&expenses, october).count(), 2);
    }

    #[test]
    fn test_idempotent() {
        let expenses = vec![expense(100, "2025-10-01"), expense(250, "2025-09-03")];
        assert_eq!(
            monthly_totals(&expenses, 6, today()),
            monthly_totals(&expenses, 6, today())
        );
    }
}
