//! Money type for representing prices and totals.
//!
//! Uses a cents-based integer representation so cart totals never drift the
//! way repeated floating-point sums do. The storefront sells in a single
//! currency, displayed with a `$` symbol and two decimals.
//!
//! On the wire a price is a plain decimal number (`109.95`), which is what the
//! product service sends and what the stored cart contains. Amounts are kept
//! within [`Money::MAX_CENTS`] so that conversion is exact in both directions.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Minor units per major unit.
const CENTS_PER_UNIT: i64 = 100;

/// A monetary amount in cents, always within `±MAX_CENTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    amount_cents: i64,
}

impl Money {
    /// Largest magnitude held, in cents (about $2.8 trillion).
    ///
    /// Every amount up to this survives the decimal wire format unchanged.
    pub const MAX_CENTS: i64 = 1 << 48;

    /// Create a Money value from cents, clamped to `±MAX_CENTS`.
    pub const fn new(amount_cents: i64) -> Self {
        let amount_cents = if amount_cents > Self::MAX_CENTS {
            Self::MAX_CENTS
        } else if amount_cents < -Self::MAX_CENTS {
            -Self::MAX_CENTS
        } else {
            amount_cents
        };
        Self { amount_cents }
    }

    /// Amount in cents.
    pub const fn cents(&self) -> i64 {
        self.amount_cents
    }

    /// Create a Money value from a decimal amount, rounding to the cent.
    ///
    /// ```
    /// use shopfront_commerce::money::Money;
    /// let price = Money::from_decimal(109.95);
    /// assert_eq!(price.cents(), 10995);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        if !amount.is_finite() {
            return Self::zero();
        }
        // `as` saturates on out-of-range floats; `new` clamps the rest.
        Self::new((amount * CENTS_PER_UNIT as f64).round() as i64)
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}${}", sign, self.display_amount_abs())
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}", sign, self.display_amount_abs())
    }

    fn display_amount_abs(&self) -> String {
        let abs = self.amount_cents.unsigned_abs();
        let unit = CENTS_PER_UNIT as u64;
        format!("{}.{:02}", abs / unit, abs % unit)
    }

    /// Multiply by a quantity, returning `None` past `MAX_CENTS`.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .and_then(Money::checked)
    }

    /// Add another amount, returning `None` past `MAX_CENTS`.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.amount_cents
            .checked_add(other.amount_cents)
            .and_then(Money::checked)
    }

    fn checked(cents: i64) -> Option<Money> {
        (cents.unsigned_abs() <= Self::MAX_CENTS as u64).then_some(Money {
            amount_cents: cents,
        })
    }
}

/// Saturates at `±MAX_CENTS`, so a derived total is always defined.
impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }
}

/// Saturates at `±MAX_CENTS`.
impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Money::from_decimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).cents(), 4999);
        assert_eq!(Money::from_decimal(0.1 + 0.2).cents(), 30);
        assert_eq!(Money::from_decimal(20.0).cents(), 2000);
    }

    #[test]
    fn test_money_from_non_finite_is_zero() {
        assert!(Money::from_decimal(f64::NAN).is_zero());
        assert!(Money::from_decimal(f64::INFINITY).is_zero());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999).display(), "$49.99");
        assert_eq!(Money::new(5000).display(), "$50.00");
        assert_eq!(Money::new(5).display(), "$0.05");
        assert_eq!(Money::new(-250).display(), "-$2.50");
        assert_eq!(Money::new(-250).display_amount(), "-2.50");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!(a.try_multiply(i64::MAX), None);
        let max = Money::new(Money::MAX_CENTS);
        assert_eq!(max + Money::new(1), max);
        assert_eq!(max * 2, max);
        assert_eq!(max.try_add(&Money::new(1)), None);
        assert_eq!(max.try_add(&Money::new(-1)).map(|m| m.cents()), Some(Money::MAX_CENTS - 1));
    }

    #[test]
    fn test_money_clamps_to_bound() {
        assert_eq!(Money::new(i64::MAX).cents(), Money::MAX_CENTS);
        assert_eq!(Money::new(i64::MIN).cents(), -Money::MAX_CENTS);
        assert_eq!(Money::from_decimal(1e300).cents(), Money::MAX_CENTS);
    }

    #[test]
    fn test_oversized_amount_round_trips() {
        // 2^53 + 1 cents has no exact f64 decimal form.
        let m = Money::new(9_007_199_254_740_993);
        let back: Money = serde_json::from_str(&serde_json::to_string(&m).unwrap()).unwrap();
        assert_eq!(back, m);
        let parsed: Money = serde_json::from_str("1e20").unwrap();
        assert_eq!(parsed.cents(), Money::MAX_CENTS);
    }

    #[test]
    fn test_money_sum() {
        let prices = [Money::new(100), Money::new(250), Money::new(5)];
        let total: Money = prices.iter().sum();
        assert_eq!(total.cents(), 355);
    }

    #[test]
    fn test_money_serializes_as_decimal() {
        assert_eq!(serde_json::to_string(&Money::new(10995)).unwrap(), "109.95");
        let m: Money = serde_json::from_str("109.95").unwrap();
        assert_eq!(m.cents(), 10995);
        let m: Money = serde_json::from_str("20").unwrap();
        assert_eq!(m.cents(), 2000);
    }

    #[test]
    fn test_money_decimal_round_trip() {
        for cents in [0, 1, 99, 100, 10995, 123_456_789] {
            let m = Money::new(cents);
            let back: Money = serde_json::from_str(&serde_json::to_string(&m).unwrap()).unwrap();
            assert_eq!(back, m);
        }
    }

    proptest! {
        #[test]
        fn decimal_round_trip_is_exact(cents in -Money::MAX_CENTS..=Money::MAX_CENTS) {
            let m = Money::new(cents);
            let back: Money = serde_json::from_str(&serde_json::to_string(&m).unwrap()).unwrap();
            prop_assert_eq!(back, m);
        }
    }
}
