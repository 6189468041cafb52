//! Pre-built Test Fixtures
//!
//! Ready-to-use products and requests. The amounts mirror the scenarios the
//! tariff is usually demonstrated with, so expected results are easy to
//! check by hand.

use core_kernel::Money;
use domain_tariff::{Product, QuoteRequest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Shorthand for a euro amount
pub fn eur(amount: Decimal) -> Money {
    Money::new(amount)
}

/// Fixture for product test data
pub struct ProductFixtures;

impl ProductFixtures {
    /// Liability at 100.00 without discount
    pub fn liability_100() -> Product {
        Product::with_base(eur(dec!(100)))
    }

    /// Collision at 50.00 without discount
    pub fn collision_50() -> Product {
        Product::with_base(eur(dec!(50)))
    }

    /// Liability at 500.00, the demo scenario's liability
    pub fn liability_500() -> Product {
        Product::with_base(eur(dec!(500)))
    }

    /// Collision at 300.00, the demo scenario's collision
    pub fn collision_300() -> Product {
        Product::with_base(eur(dec!(300)))
    }

    /// Product with the given base and discount
    pub fn priced(base: Decimal, discount_percent: i32) -> Product {
        Product::new(eur(base), discount_percent)
    }
}

/// Fixture for quote requests
pub struct RequestFixtures;

impl RequestFixtures {
    /// Liability 100 + collision 50, gross 150
    pub fn standard_pair() -> QuoteRequest {
        QuoteRequest::new(ProductFixtures::liability_100())
            .with_collision(ProductFixtures::collision_50())
    }

    /// Liability 100 + collision 50 with a target premium
    pub fn standard_pair_with_target(target: Decimal) -> QuoteRequest {
        Self::standard_pair().with_target(eur(target))
    }

    /// Request without any product
    pub fn empty() -> QuoteRequest {
        QuoteRequest::default()
    }
}
