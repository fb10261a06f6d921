//! Calendar month representation
//!
//! Reports bucket expenses by calendar month ("2025-10"). Labels use fixed
//! English month abbreviations so output never depends on the host locale.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::fmt;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month in a specific year
///
/// Only months inside chrono's supported date range can be built, so the
/// first and last day always exist. Navigation stops at the range bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// Create a month, returning `None` if `month` is outside 1..=12 or the
    /// year is outside the supported calendar
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// The month containing a date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first: date - Duration::days(i64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Last day of the month (inclusive)
    pub fn last_day(&self) -> NaiveDate {
        match self.first.checked_add_months(Months::new(1)) {
            Some(next) => next - Duration::days(1),
            // only the final supported month has no successor
            None => NaiveDate::MAX,
        }
    }

    /// Number of days in the month
    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(*self, |first| Self { first })
    }

    /// Get the previous month
    pub fn prev(&self) -> Self {
        self.minus_months(1)
    }

    /// Step back `count` months, stopping at the earliest supported month
    pub fn minus_months(&self, count: u32) -> Self {
        Self {
            first: self
                .first
                .checked_sub_months(Months::new(count))
                .unwrap_or(NaiveDate::MIN),
        }
    }

    /// Short chart label, e.g. "Oct 2025"
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_ABBREVIATIONS[self.first.month0() as usize], self.year())
    }

    /// Parse a month string in `YYYY-MM` form
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = parts[0]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        Self::new(year, month).ok_or(MonthParseError::YearOutOfRange(year))
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("YearMonth", 2)?;
        state.serialize_field("year", &self.year())?;
        state.serialize_field("month", &self.month())?;
        state.end()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    YearOutOfRange(i32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid month format: {} (expected YYYY-MM)", s),
            Self::InvalidMonth(m) => write!(f, "Invalid month: {} (must be 1-12)", m),
            Self::YearOutOfRange(y) => write!(f, "Invalid month: year {} is out of range", y),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bounds() {
        let oct = YearMonth::new(2025, 10).unwrap();
        assert_eq!(oct.first_day(), ymd(2025, 10, 1));
        assert_eq!(oct.last_day(), ymd(2025, 10, 31));
        assert_eq!(oct.days_in_month(), 31);

        let feb_leap = YearMonth::new(2024, 2).unwrap();
        assert_eq!(feb_leap.days_in_month(), 29);

        let dec = YearMonth::new(2025, 12).unwrap();
        assert_eq!(dec.last_day(), ymd(2025, 12, 31));
    }

    #[test]
    fn test_navigation() {
        let jan = YearMonth::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), YearMonth::new(2024, 12).unwrap());
        assert_eq!(jan.prev().next(), jan);
        assert_eq!(jan.minus_months(0), jan);
        assert_eq!(jan.minus_months(5), YearMonth::new(2024, 8).unwrap());
        assert_eq!(jan.minus_months(13), YearMonth::new(2023, 12).unwrap());
    }

    #[test]
    fn test_contains() {
        let oct = YearMonth::new(2025, 10).unwrap();
        assert!(oct.contains(ymd(2025, 10, 31)));
        assert!(!oct.contains(ymd(2025, 11, 1)));
        assert!(!oct.contains(ymd(2024, 10, 15)));
    }

    #[test]
    fn test_label_and_display() {
        let oct = YearMonth::new(2025, 10).unwrap();
        assert_eq!(oct.label(), "Oct 2025");
        assert_eq!(oct.to_string(), "2025-10");
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            YearMonth::parse("2025-03").unwrap(),
            YearMonth::new(2025, 3).unwrap()
        );
        assert_eq!(
            YearMonth::parse("2025-13"),
            Err(MonthParseError::InvalidMonth(13))
        );
        assert!(matches!(
            YearMonth::parse("March"),
            Err(MonthParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unsupported_years() {
        assert_eq!(
            YearMonth::parse("300000-01"),
            Err(MonthParseError::YearOutOfRange(300000))
        );
        assert_eq!(
            YearMonth::parse("-300000-01"),
            Err(MonthParseError::InvalidFormat("-300000-01".to_string()))
        );
        assert!(YearMonth::new(300000, 1).is_none());
        assert!(YearMonth::new(2025, 0).is_none());
    }

    #[test]
    fn test_calendar_edges() {
        let last = YearMonth::from_date(NaiveDate::MAX);
        assert_eq!(last.last_day(), NaiveDate::MAX);
        assert_eq!(last.days_in_month(), 31);
        assert_eq!(last.next(), last);

        let first = YearMonth::from_date(NaiveDate::MIN);
        assert_eq!(first.first_day(), NaiveDate::MIN);
        assert_eq!(first.prev(), first);
        assert_eq!(first.minus_months(120), first);
    }

    #[test]
    fn test_serializes_year_and_month() {
        let json = serde_json::to_value(YearMonth::new(2025, 10).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "year": 2025, "month": 10 }));
    }

    #[test]
    fn test_ordering() {
        let a = YearMonth::new(2024, 12).unwrap();
        let b = YearMonth::new(2025, 1).unwrap();
        assert!(a < b);
    }
}
