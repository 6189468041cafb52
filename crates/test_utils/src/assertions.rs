//! Custom Test Assertions
//!
//! Assertion helpers for tariff types that give more meaningful failure
//! messages than standard assertions.

use core_kernel::Money;
use domain_tariff::{Quotation, TariffError};
use rust_decimal::Decimal;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: \
         actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a quotation's totals agree with its products
pub fn assert_totals_consistent(quotation: &Quotation) {
    let collision = quotation.collision();

    let gross = quotation.liability().base_premium()
        + collision.map(|c| c.base_premium()).unwrap_or_default();
    let net = quotation.liability().discounted_premium()
        + collision.map(|c| c.discounted_premium()).unwrap_or_default();

    assert_eq!(quotation.gross_total(), gross, "gross total does not match base premiums");
    assert_eq!(quotation.net_total(), net, "net total does not match discounted premiums");
}

/// Asserts that a quotation failed validation and returns its violations
///
/// # Panics
///
/// Panics if the result is a quotation or a different error kind
pub fn expect_violations(result: Result<Quotation, TariffError>) -> Vec<String> {
    match result {
        Err(TariffError::ValidationFailed { violations }) => violations,
        Err(other) => panic!("Expected ValidationFailed, got {:?}", other),
        Ok(quotation) => panic!("Expected ValidationFailed, got quotation {:?}", quotation),
    }
}

/// Asserts that every discount of a quotation lies in `[0, 99]`
pub fn assert_discounts_in_range(quotation: &Quotation) {
    let products = std::iter::once(quotation.liability()).chain(quotation.collision());
    for product in products {
        assert!(
            product.discount().is_in_range(),
            "discount {} out of range",
            product.discount()
        );
    }
}
