//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating tariff inputs that satisfy
//! the plausibility rules.

use core_kernel::Money;
use domain_tariff::Product;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for valid base premiums between 1.00 and 100,000.00
pub fn premium_strategy() -> impl Strategy<Value = Money> {
    (100i64..10_000_000i64).prop_map(Money::from_cents)
}

/// Strategy for discounts in `[0, 99]`
pub fn discount_strategy() -> impl Strategy<Value = i32> {
    0i32..=99i32
}

/// Strategy for valid products
pub fn product_strategy() -> impl Strategy<Value = Product> {
    (premium_strategy(), discount_strategy())
        .prop_map(|(base, discount)| Product::new(base, discount))
}

/// Strategy for undiscounted products
pub fn undiscounted_product_strategy() -> impl Strategy<Value = Product> {
    premium_strategy().prop_map(Product::with_base)
}

/// Strategy for a fraction of the gross total in `[0.01, 1.00)`
///
/// Multiplying a gross total by this yields a reachable target below it.
pub fn reachable_fraction_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100i64).prop_map(|n| Decimal::new(n, 2))
}
