//! Money type for representing currency amounts
//!
//! Wraps an exact `rust_decimal::Decimal` so sums and stored amounts never
//! pick up floating-point error. Serialized as a decimal string, which keeps
//! every digit across a load/save cycle.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

/// Represents a monetary amount in the (single, implicit) currency unit
///
/// Arithmetic saturates at the `Decimal` range instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a decimal value
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use ledger::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1.5e2". Sign
    /// checks are left to the caller.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s).trim();

        // Decimal::from_str tolerates `_` separators; plain numbers only here
        if s.is_empty() || s.starts_with(|c: char| c == '-' || c == '+') || s.contains('_')
        {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let value = Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// The amount rounded half away from zero to two decimal places
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format with a currency symbol and exactly two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.rounded();
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-{}{:.2}", symbol, rounded.abs())
        } else {
            format!("{}{:.2}", symbol, rounded.abs())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

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

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
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
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        assert_eq!(Money::from_cents(1050).amount(), dec!(10.50));
        assert_eq!(Money::from_cents(5).amount(), dec!(0.05));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(format!("{}", Money::new(dec!(80))), "$80.00");
        assert_eq!(format!("{}", Money::new(dec!(12.345))), "$12.35");
        assert_eq!(format!("{}", Money::new(dec!(1234567.8))), "$1234567.80");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::new(dec!(3.5)).format_with_symbol("€"), "€3.50");
        assert_eq!(Money::new(dec!(-0.001)).format_with_symbol("$"), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(dec!(10.00));
        let b = Money::new(dec!(5.25));

        assert_eq!((a + b).amount(), dec!(15.25));
        assert_eq!((a - b).amount(), dec!(4.75));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::new(Decimal::MAX);
        assert_eq!((max + max).amount(), Decimal::MAX);

        let mut total = max;
        total += Money::from_cents(1);
        assert_eq!(total.amount(), Decimal::MAX);

        let total: Money = vec![max, max, max].into_iter().sum();
        assert_eq!(total.amount(), Decimal::MAX);
        assert_eq!((Money::new(Decimal::MIN) - max).amount(), Decimal::MIN);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().amount(), dec!(10.50));
        assert_eq!(Money::parse("$10.50").unwrap().amount(), dec!(10.50));
        assert_eq!(Money::parse(" 10 ").unwrap().amount(), dec!(10));
        assert_eq!(Money::parse("-10.50").unwrap().amount(), dec!(-10.50));
        assert_eq!(Money::parse("0.1").unwrap().amount(), dec!(0.1));
        assert_eq!(Money::parse("1.5e2").unwrap().amount(), dec!(150));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12abc").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("NaN").is_err());
        assert!(Money::parse("inf").is_err());
        assert!(Money::parse("1_000").is_err());
        assert!(Money::parse("1.5e_2").is_err());
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::parse("-0.01").unwrap().is_negative());
        assert!(!Money::parse("-0").unwrap().is_negative());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::new(dec!(0.1)),
            Money::new(dec!(0.2)),
            Money::new(dec!(0.3)),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.amount(), dec!(0.6));
    }

    #[test]
    fn test_serialization_keeps_precision() {
        let m = Money::new(dec!(12.345));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"12.345\"");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[test]
    fn test_deserialize_from_number() {
        let m: Money = serde_json::from_str("50").unwrap();
        assert_eq!(m.amount(), dec!(50));
    }
}
