//! Money types with precise decimal arithmetic
//!
//! Premiums are quoted in a single currency (EUR), so `Money` carries only an
//! amount. rust_decimal keeps every premium, discount and total exact, which
//! makes repeated quotations reproducible to the last digit.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use thiserror::Error;

/// Number of decimal places kept internally
const INTERNAL_DP: u32 = 4;

/// Number of decimal places used when presenting an amount
const CENT_DP: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Amount out of range")]
    Overflow,
}

/// A monetary amount in euros
///
/// Amounts are stored with 4 decimal places so that a two-decimal premium
/// multiplied by a whole-number percentage stays exact. Values built with
/// [`Money::new`] are rounded to that precision; values coming from user
/// input go through [`Money::try_new`] (also used by `parse` and serde),
/// which rejects anything finer instead of rounding it away.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new Money value, rounding to 4 decimal places
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount: amount.round_dp(INTERNAL_DP),
        }
    }

    /// Creates a new Money value, rejecting amounts finer than 4 decimal places
    pub fn try_new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.normalize().scale() > INTERNAL_DP {
            return Err(MoneyError::InvalidAmount(format!(
                "{} has more than {} decimal places",
                amount, INTERNAL_DP
            )));
        }
        Ok(Self::new(amount))
    }

    /// Creates Money from an integer amount in cents
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, CENT_DP))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self { amount: dec!(0) }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
        }
    }

    /// Adds two amounts, failing instead of overflowing
    pub fn checked_add(&self, other: &Money) -> Result<Self, MoneyError> {
        self.amount
            .checked_add(other.amount)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Subtracts an amount, failing instead of overflowing
    pub fn checked_sub(&self, other: &Money) -> Result<Self, MoneyError> {
        self.amount
            .checked_sub(other.amount)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Multiplies by a scalar, failing instead of overflowing
    pub fn checked_multiply(&self, factor: Decimal) -> Result<Self, MoneyError> {
        self.amount
            .checked_mul(factor)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Multiplies by a scalar
    ///
    /// Callers pass fractions such as a remaining-premium factor, whose
    /// product is never larger than `self`. Use [`Money::checked_multiply`]
    /// for factors above one.
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor)
    }

    /// Returns `self / other` as a plain ratio
    ///
    /// Unlike [`Money::new`] the ratio is not rounded, so callers that take a
    /// ceiling of it see the exact quotient.
    pub fn ratio_to(&self, other: &Money) -> Result<Decimal, MoneyError> {
        if other.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount
            .checked_div(other.amount)
            .ok_or(MoneyError::Overflow)
    }

    /// Parses an amount from user input such as `"499.90"`
    pub fn parse(input: &str) -> Result<Self, MoneyError> {
        let amount = input
            .trim()
            .parse::<Decimal>()
            .map_err(|e| MoneyError::InvalidAmount(format!("{}: {}", input.trim(), e)))?;
        Self::try_new(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.dp$}€", self.amount, dp = CENT_DP as usize)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::try_new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.amount
    }
}

/// Panics on overflow like `Decimal`; use [`Money::checked_add`] for
/// amounts that are not known to be bounded.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.amount + other.amount)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.amount - other.amount)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.50));
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_from_cents() {
        let m = Money::from_cents(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(50.00));

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
        assert_eq!((-a).amount(), dec!(-100.00));
    }

    #[test]
    fn test_internal_precision_is_four_places() {
        let m = Money::new(dec!(1.234567));
        assert_eq!(m.amount(), dec!(1.2346));
    }

    #[test]
    fn test_display_uses_cents() {
        assert_eq!(Money::new(dec!(1.5)).to_string(), "1.50€");
        assert_eq!(Money::new(dec!(-200)).to_string(), "-200.00€");
    }

    #[test]
    fn test_ratio_to_zero_is_error() {
        let a = Money::new(dec!(10));
        assert_eq!(a.ratio_to(&Money::zero()), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse(" 499.90 ").unwrap().amount(), dec!(499.90));
        assert!(matches!(Money::parse("abc"), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_try_new_rejects_sub_precision() {
        assert!(Money::try_new(dec!(0.0001)).is_ok());
        assert!(Money::try_new(dec!(1.500000)).is_ok());
        assert!(matches!(Money::try_new(dec!(0.00004)), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_checked_add_overflow() {
        let big = Money::new(Decimal::MAX);
        assert_eq!(big.checked_add(&big), Err(MoneyError::Overflow));
        assert_eq!(big.checked_sub(&big), Ok(Money::zero()));
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::new(dec!(0.01)).is_positive());
        assert!(!Money::zero().is_positive());
        assert!(!Money::zero().is_negative());
        assert!(Money::new(dec!(-0.01)).is_negative());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn money_sum_matches_decimal_sum(
            cents in proptest::collection::vec(-1_000_000i64..1_000_000i64, 0..20)
        ) {
            let total: Money = cents.iter().map(|c| Money::from_cents(*c)).sum();
            let expected: Decimal = cents.iter().map(|c| Decimal::new(*c, 2)).sum();
            prop_assert_eq!(total.amount(), expected);
        }

        #[test]
        fn money_arithmetic_is_associative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64,
            c in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_cents(a);
            let mb = Money::from_cents(b);
            let mc = Money::from_cents(c);

            prop_assert_eq!((ma + mb) + mc, ma + (mb + mc));
        }
    }
}
