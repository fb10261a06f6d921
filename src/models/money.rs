//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that sums over many expenses
//! stay exact. On the wire, amounts are plain decimal numbers (`45.99`).

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_cli::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a decimal currency value, rounded to the cent
    ///
    /// Non-finite input becomes zero.
    ///
    /// # Examples
    /// ```
    /// use expense_cli::models::Money;
    /// assert_eq!(Money::from_decimal(45.99).cents(), 4599);
    /// ```
    pub fn from_decimal(value: f64) -> Self {
        if value.is_finite() {
            Self((value * 100.0).round() as i64)
        } else {
            Self::zero()
        }
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a decimal currency value
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Ratio of this amount to another, as a percentage
    ///
    /// Returns `None` when `whole` is not positive.
    pub fn percent_of(&self, whole: Money) -> Option<f64> {
        if whole.is_positive() {
            Some(self.0 as f64 * 100.0 / whole.0 as f64)
        } else {
            None
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1,250.00".
    /// Digits past the second decimal place are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let cleaned: String = rest.chars().filter(|c| *c != ',').collect();

        let (whole, fraction) = match cleaned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (cleaned.as_str(), ""),
        };
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        let no_digits = whole.is_empty() && fraction.is_empty();
        if no_digits || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        // fraction is ASCII, so byte slicing stays on char boundaries
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(invalid)?;
        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

/// Amount shapes accepted from remote records
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Whole(i64),
    Decimal(f64),
    Text(String),
    Other(serde_json::Value),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let money = match RawAmount::deserialize(deserializer)? {
            RawAmount::Whole(units) => Money::from_cents(units.saturating_mul(100)),
            RawAmount::Decimal(value) => Money::from_decimal(value),
            RawAmount::Text(text) => Money::parse(&text).unwrap_or_else(|_| {
                log::warn!("Treating unparseable amount {:?} as zero", text);
                Money::zero()
            }),
            RawAmount::Other(value) => {
                log::warn!("Treating non-numeric amount {} as zero", value);
                Money::zero()
            }
        };
        Ok(money)
    }
}

// Arithmetic saturates at the i64 bounds.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_decimal_rounds_to_cent() {
        assert_eq!(Money::from_decimal(45.99).cents(), 4599);
        assert_eq!(Money::from_decimal(52.5).cents(), 5250);
        assert_eq!(Money::from_decimal(0.1 + 0.2).cents(), 30);
        assert_eq!(Money::from_decimal(f64::NAN), Money::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(Money::from_cents(1050).format_with_symbol("€"), "€10.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
        assert_eq!(b.max(a), a);
    }

    #[test]
    fn test_percent_of() {
        let spent = Money::from_cents(5000);
        assert_eq!(spent.percent_of(Money::from_cents(10000)), Some(50.0));
        assert_eq!(spent.percent_of(Money::zero()), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("1,250.00").unwrap().cents(), 125000);
        assert!(Money::parse("ten").is_err());
    }

    #[test]
    fn test_parse_rejects_misplaced_signs() {
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("-$-5").is_err());
        assert!(Money::parse("10.-5").is_err());
        assert!(Money::parse("10.+5").is_err());
        assert!(Money::parse("+10").is_err());
        assert!(Money::parse("-").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert_eq!(Money::parse("-$5").unwrap().cents(), -500);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("10.999").unwrap().cents(), 1099);
    }

    #[test]
    fn test_parse_non_ascii_fraction() {
        assert!(Money::parse("1.5\u{e9}").is_err());
        assert!(Money::parse("1.\u{e9}5").is_err());
        assert!(Money::parse("\u{e9}").is_err());

        let m: Money = serde_json::from_str("\"1.5\u{e9}\"").unwrap();
        assert!(m.is_zero());
    }

    #[test]
    fn test_parse_overflow_is_an_error() {
        assert!(Money::parse("99999999999999999999").is_err());
        assert!(Money::parse("999999999999999999.00").is_err());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_decimal(9e16);
        assert_eq!(huge.cents(), 9_000_000_000_000_000_000);

        assert_eq!(huge + huge, Money::from_cents(i64::MAX));
        assert_eq!(-huge - huge, Money::from_cents(i64::MIN));
        assert_eq!((-Money::from_cents(i64::MIN)).cents(), i64::MAX);

        let mut acc = huge;
        acc += huge;
        assert_eq!(acc.cents(), i64::MAX);
        acc -= Money::from_cents(1);
        assert_eq!(acc.cents(), i64::MAX - 1);

        let total: Money = vec![huge, huge, Money::from_cents(100)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_serializes_as_decimal() {
        let json = serde_json::to_string(&Money::from_cents(4599)).unwrap();
        assert_eq!(json, "45.99");
    }

    #[test]
    fn test_lenient_deserialization() {
        let m: Money = serde_json::from_str("45.99").unwrap();
        assert_eq!(m.cents(), 4599);

        let m: Money = serde_json::from_str("12").unwrap();
        assert_eq!(m.cents(), 1200);

        let m: Money = serde_json::from_str("\"7.25\"").unwrap();
        assert_eq!(m.cents(), 725);

        let m: Money = serde_json::from_str("\"abc\"").unwrap();
        assert!(m.is_zero());

        let m: Money = serde_json::from_str("null").unwrap();
        assert!(m.is_zero());
    }
}
