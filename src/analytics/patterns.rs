//! Day-of-week spending patterns

use chrono::{Datelike, Weekday};
use serde::Serialize;

use crate::models::{Expense, Money};

/// English weekday name, independent of the host locale
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Spending summed over every occurrence of one weekday
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayTotal {
    #[serde(skip)]
    pub weekday: Weekday,
    pub name: &'static str,
    pub total: Money,
    pub expense_count: usize,
}

/// Per-weekday totals in the order each weekday was first encountered
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeekdayPattern {
    pub days: Vec<WeekdayTotal>,
}

impl WeekdayPattern {
    /// The weekday with the highest total; ties go to the first encountered
    pub fn highest(&self) -> Option<&WeekdayTotal> {
        let mut best: Option<&WeekdayTotal> = None;
        for day in &self.days {
            if best.map_or(true, |b| day.total > b.total) {
                best = Some(day);
            }
        }
        best
    }

    /// The weekday with the lowest total; ties go to the first encountered
    pub fn lowest(&self) -> Option<&WeekdayTotal> {
        let mut best: Option<&WeekdayTotal> = None;
        for day in &self.days {
            if best.map_or(true, |b| day.total < b.total) {
                best = Some(day);
            }
        }
        best
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Group spending by weekday
///
/// Expenses with unparseable dates are skipped.
pub fn daily_patterns(expenses: &[Expense]) -> WeekdayPattern {
    tally_weekdays(expenses)
}

pub(crate) fn tally_weekdays<'a, I>(expenses: I) -> WeekdayPattern
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut days: Vec<WeekdayTotal> = Vec::with_capacity(7);

    for expense in expenses {
        let Some(date) = expense.parsed_date() else {
            continue;
        };
        let weekday = date.weekday();

        match days.iter_mut().find(|d| d.weekday == weekday) {
            Some(day) => {
                day.total += expense.amount;
                day.expense_count += 1;
            }
            None => days.push(WeekdayTotal {
                weekday,
                name: weekday_name(weekday),
                total: expense.amount,
                expense_count: 1,
            }),
        }
    }

    WeekdayPattern { days }
}
