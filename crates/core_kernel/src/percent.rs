//! Whole-number discount percentages
//!
//! A discount is stored as the raw integer supplied by the caller. It may be
//! out of range until validation has run, so range checks live here as
//! queries rather than in the constructor.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

/// Highest discount that may be granted on a single product
pub const MAX_DISCOUNT_PERCENT: i32 = 99;

/// Lowest discount that may be granted on a single product
pub const MIN_DISCOUNT_PERCENT: i32 = 0;

/// A discount in whole percentage points
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DiscountPercent(i32);

impl DiscountPercent {
    /// No discount
    pub const ZERO: DiscountPercent = DiscountPercent(MIN_DISCOUNT_PERCENT);

    /// The largest permitted discount
    pub const MAX: DiscountPercent = DiscountPercent(MAX_DISCOUNT_PERCENT);

    /// Wraps a raw percentage without range checks
    pub const fn new(points: i32) -> Self {
        Self(points)
    }

    /// Returns the percentage points
    pub fn points(&self) -> i32 {
        self.0
    }

    /// Returns true if the value is below zero
    pub fn is_negative(&self) -> bool {
        self.0 < MIN_DISCOUNT_PERCENT
    }

    /// Returns true if the value is above the permitted maximum
    pub fn exceeds_max(&self) -> bool {
        self.0 > MAX_DISCOUNT_PERCENT
    }

    /// Returns true if the value lies in `[0, 99]`
    pub fn is_in_range(&self) -> bool {
        !self.is_negative() && !self.exceeds_max()
    }

    pub fn is_max(&self) -> bool {
        self.0 >= MAX_DISCOUNT_PERCENT
    }

    pub fn is_zero(&self) -> bool {
        self.0 <= MIN_DISCOUNT_PERCENT
    }

    /// One point more, saturating at the maximum
    pub fn incremented(&self) -> Self {
        Self((self.0 + 1).min(MAX_DISCOUNT_PERCENT))
    }

    /// One point less, saturating at zero
    pub fn decremented(&self) -> Self {
        Self((self.0 - 1).max(MIN_DISCOUNT_PERCENT))
    }

    /// The share of the premium that remains payable, e.g. `0.80` for 20%
    pub fn remaining_factor(&self) -> Decimal {
        Decimal::from(100 - self.0) / dec!(100)
    }

    /// Applies this discount to an amount
    pub fn apply(&self, amount: &Money) -> Money {
        amount.multiply(self.remaining_factor())
    }
}

impl From<i32> for DiscountPercent {
    fn from(points: i32) -> Self {
        Self(points)
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
