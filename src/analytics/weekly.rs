//! Weekly spending totals
//!
//! A month's calendar grid runs from the Sunday on or before the 1st to the
//! Saturday on or after the last day. Each row of the grid is one window.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::models::{Expense, Money, YearMonth};

/// Total spending for one Sunday..Saturday window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyTotal {
    /// "Week 1", "Week 2", ...
    pub label: String,
    pub start: NaiveDate,
    /// Inclusive
    pub end: NaiveDate,
    pub total: Money,
    pub expense_count: usize,
}

impl WeeklyTotal {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// First and last day (inclusive) of a month's Sunday-first calendar grid
pub fn month_grid(month: YearMonth) -> (NaiveDate, NaiveDate) {
    let first = month.first_day();
    let last = month.last_day();

    let lead = Days::new(u64::from(first.weekday().num_days_from_sunday()));
    let trail = Days::new(u64::from(6 - last.weekday().num_days_from_sunday()));

    // clipped at the ends of the supported calendar
    let grid_start = first.checked_sub_days(lead).unwrap_or(NaiveDate::MIN);
    let grid_end = last.checked_add_days(trail).unwrap_or(NaiveDate::MAX);

    (grid_start, grid_end)
}

/// Totals for each week window of the reference month's calendar grid
///
/// Leading and trailing days of neighbouring months that fall inside the
/// grid count toward their window.
pub fn weekly_totals(expenses: &[Expense], reference_month: YearMonth) -> Vec<WeeklyTotal> {
    let (grid_start, grid_end) = month_grid(reference_month);

    let mut weeks = Vec::new();
    let mut start = grid_start;
    while start <= grid_end {
        let end = start.checked_add_days(Days::new(6)).unwrap_or(grid_end);
        weeks.push(WeeklyTotal {
            label: format!("Week {}", weeks.len() + 1),
            start,
            end: end.min(grid_end),
            total: Money::zero(),
            expense_count: 0,
        });
        match start.checked_add_days(Days::new(7)) {
            Some(next) => start = next,
            None => break,
        }
    }

    for expense in expenses {
        let Some(date) = expense.parsed_date() else {
            continue;
        };
        if date < grid_start || date > grid_end {
            continue;
        }

        let index = ((date - grid_start).num_days() / 7) as usize;
        if let Some(week) = weeks.get_mut(index) {
            week.total += expense.amount;
            week.expense_count += 1;
        }
    }

    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(cents: i64, date: &str) -> Expense {
        Expense::new(Money::from_cents(cents), date)
    }

    #[test]
    fn test_grid_for_october_2025() {
        // Oct 1 2025 is a Wednesday, Oct 31 a Friday
        let (start, end) = month_grid(YearMonth::new(2025, 10).unwrap());
        assert_eq!(start, ymd(2025, 9, 28));
        assert_eq!(end, ymd(2025, 11, 1));

        let weeks = weekly_totals(&[], YearMonth::new(2025, 10).unwrap());
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0].label, "Week 1");
        assert_eq!(weeks[4].end, ymd(2025, 11, 1));
    }

    #[test]
    fn test_month_starting_on_sunday() {
        // June 2025 starts on a Sunday and ends on a Monday
        let (start, end) = month_grid(YearMonth::new(2025, 6).unwrap());
        assert_eq!(start, ymd(2025, 6, 1));
        assert_eq!(end, ymd(2025, 7, 5));
    }

    #[test]
    fn test_february_fitting_four_rows() {
        // Feb 2015 starts on Sunday and ends on Saturday
        let weeks = weekly_totals(&[], YearMonth::new(2015, 2).unwrap());
        assert_eq!(weeks.len(), 4);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let expenses = vec![
            expense(100, "2025-09-28"), // grid start, Sunday
            expense(200, "2025-10-04"), // Saturday of week 1
            expense(300, "2025-10-05"), // Sunday of week 2
            expense(400, "2025-11-01"), // grid end
            expense(500, "2025-11-02"), // outside
            expense(600, "garbage"),
        ];

        let weeks = weekly_totals(&expenses, YearMonth::new(2025, 10).unwrap());
        assert_eq!(weeks[0].total.cents(), 300);
        assert_eq!(weeks[0].expense_count, 2);
        assert_eq!(weeks[1].total.cents(), 300);
        assert_eq!(weeks[4].total.cents(), 400);

        let total: Money = weeks.iter().map(|w| w.total).sum();
        assert_eq!(total.cents(), 1000);
        assert!(weeks[4].contains(ymd(2025, 11, 1)));
    }

    fn mixed_expenses() -> Vec<Expense> {
        vec![
            expense(1_250, "2025-09-27"),
            expense(700, "2025-09-29"),
            expense(-300, "2025-10-10"),
            expense(4_599, "2025-10-24T19:30:00.000Z"),
            expense(820, "2025-10-31"),
            expense(150, "2025-11-01"),
            expense(9_999, "2025-11-15"),
            expense(42, ""),
        ]
    }

    #[test]
    fn test_windows_partition_the_grid() {
        let month = YearMonth::new(2025, 10).unwrap();
        let expenses = mixed_expenses();
        let (start, end) = month_grid(month);

        let in_grid: Vec<&Expense> = expenses
            .iter()
            .filter(|e| e.parsed_date().is_some_and(|d| d >= start && d <= end))
            .collect();
        let flat: Money = in_grid.iter().map(|e| e.amount).sum();

        let weeks = weekly_totals(&expenses, month);
        let windowed: Money = weeks.iter().map(|w| w.total).sum();
        let counted: usize = weeks.iter().map(|w| w.expense_count).sum();

        assert_eq!(windowed, flat);
        assert_eq!(counted, in_grid.len());
        for pair in weeks.windows(2) {
            assert_eq!(pair[0].end.succ_opt(), Some(pair[1].start));
        }
    }

    #[test]
    fn test_idempotent() {
        let month = YearMonth::new(2025, 10).unwrap();
        let expenses = mixed_expenses();
        assert_eq!(weekly_totals(&expenses, month), weekly_totals(&expenses, month));
    }

    #[test]
    fn test_calendar_edges_do_not_overflow() {
        let last = YearMonth::from_date(NaiveDate::MAX);
        let weeks = weekly_totals(&[], last);
        assert!(!weeks.is_empty());
        assert_eq!(weeks.last().map(|w| w.end), Some(NaiveDate::MAX));

        let first = YearMonth::from_date(NaiveDate::MIN);
        let weeks = weekly_totals(&[], first);
        assert_eq!(weeks[0].start, NaiveDate::MIN);
    }
}
