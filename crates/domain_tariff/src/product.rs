//! Insurance products
//!
//! Liability and collision cover price the same way, so a single `Product`
//! type serves both. `ProductLine` only names the role a product plays.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{DiscountPercent, Money};

/// The role a product plays within a quotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductLine {
    /// Mandatory third-party liability cover
    Liability,
    /// Optional collision/comprehensive cover
    Collision,
}

impl ProductLine {
    /// Returns the label used in violation messages and logs
    pub fn label(&self) -> &'static str {
        match self {
            ProductLine::Liability => "liability",
            ProductLine::Collision => "collision",
        }
    }
}

impl fmt::Display for ProductLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A priced product: base premium plus a percentage discount
///
/// No checks happen on construction. A product may hold a non-positive
/// premium or an out-of-range discount until `QuoteValidator` rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    base_premium: Money,
    #[serde(rename = "discount_percent", default)]
    discount: DiscountPercent,
}

impl Product {
    /// Creates a product with an initial discount in percentage points
    ///
    /// # Arguments
    ///
    /// * `base_premium` - Undiscounted premium
    /// * `discount_percent` - Initial discount, expected in `[0, 99]`
    pub fn new(base_premium: Money, discount_percent: i32) -> Self {
        Self {
            base_premium,
            discount: DiscountPercent::new(discount_percent),
        }
    }

    /// Creates a product without discount
    pub fn with_base(base_premium: Money) -> Self {
        Self::new(base_premium, 0)
    }

    /// Returns the undiscounted premium
    pub fn base_premium(&self) -> Money {
        self.base_premium
    }

    /// Returns the discount
    pub fn discount(&self) -> DiscountPercent {
        self.discount
    }

    /// Returns the discount in percentage points
    pub fn discount_percent(&self) -> i32 {
        self.discount.points()
    }

    /// Returns the premium after discount: `base * (100 - discount) / 100`
    pub fn discounted_premium(&self) -> Money {
        self.discount.apply(&self.base_premium)
    }

    /// Only the allocator adjusts discounts, and only while a quotation is
    /// being built.
    pub(crate) fn set_discount(&mut self, discount: DiscountPercent) {
        self.discount = discount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_discounted_premium() {
        let product = Product::new(Money::new(dec!(100)), 20);
        assert_eq!(product.discounted_premium().amount(), dec!(80));
    }

    #[test]
    fn test_with_base_has_no_discount() {
        let product = Product::with_base(Money::new(dec!(250.50)));
        assert_eq!(product.discount_percent(), 0);
        assert_eq!(product.discounted_premium(), product.base_premium());
    }

    #[test]
    fn test_invalid_values_are_held_unchanged() {
        let product = Product::new(Money::new(dec!(-100)), 150);
        assert_eq!(product.base_premium().amount(), dec!(-100));
        assert_eq!(product.discount_percent(), 150);
    }

    #[test]
    fn test_deserialize_defaults_discount() {
        let product: Product = serde_json::from_str(r#"{"base_premium": "300.00"}"#).unwrap();
        assert_eq!(product.base_premium().amount(), dec!(300.00));
        assert_eq!(product.discount_percent(), 0);
    }

    #[test]
    fn test_line_labels() {
        assert_eq!(ProductLine::Liability.to_string(), "liability");
        assert_eq!(ProductLine::Collision.label(), "collision");
    }
}
