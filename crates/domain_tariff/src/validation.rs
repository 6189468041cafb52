//! Plausibility checks for quote requests
//!
//! Every rule is checked independently and all violations are collected, so
//! a caller sees the full list of problems in one pass.
//!
//! # Validation Rules
//!
//! ## Products
//! - Liability must be present
//! - Base premium must be positive
//! - Discount must lie between 0 and 99
//!
//! ## Combined premium
//! - The sum of the base premiums must fit the decimal range used for money
//!
//! ## Target premium
//! - Must be positive when given; the message reports the lowest premium
//!   reachable at 99% discount on every product

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Money;

use crate::error::TariffError;
use crate::product::{Product, ProductLine};
use crate::quotation::QuoteRequest;

/// Message emitted when the mandatory liability product is missing
pub const LIABILITY_MANDATORY: &str = "liability is mandatory";

/// Message emitted when the base premiums cannot be summed
pub const COMBINED_PREMIUM_OUT_OF_RANGE: &str = "combined premium exceeds the supported range";

/// Share of a premium that remains at the maximum discount
const MIN_PREMIUM_SHARE: Decimal = dec!(0.01);

/// Lowest net premium reachable with the maximum discount on every product
pub fn minimum_reachable(gross_total: Money) -> Money {
    gross_total.multiply(MIN_PREMIUM_SHARE)
}

/// Same value as `minimum_reachable(gross)`, summed per product so that it
/// exists even when the gross total does not
fn minimum_for_request(request: &QuoteRequest) -> Money {
    let minimum: Decimal = request
        .liability()
        .into_iter()
        .chain(request.collision())
        .map(|product| product.base_premium().amount() * MIN_PREMIUM_SHARE)
        .sum();
    Money::new(minimum)
}

/// Message for a target premium that no discount combination can reach
pub fn unreachable_target_message(target: Money, minimum: Money) -> String {
    format!(
        "target premium of {} is not reachable; minimum premium at maximum discount (99%): {}",
        target, minimum
    )
}

/// Outcome of validating a quote request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    violations: Vec<String>,
}

impl ValidationResult {
    /// Creates an empty (valid) result
    pub fn ok() -> Self {
        Self::default()
    }

    /// Records a violation
    pub fn add_violation(&mut self, violation: impl Into<String>) {
        self.violations.push(violation.into());
    }

    /// Appends the violations of another result
    pub fn merge(&mut self, other: ValidationResult) {
        self.violations.extend(other.violations);
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in the order they were detected
    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<String> {
        self.violations
    }

    /// Converts into `Err(ValidationFailed)` when any violation was recorded
    pub fn into_result(self) -> Result<(), TariffError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(TariffError::ValidationFailed {
                violations: self.violations,
            })
        }
    }
}

/// Validator for quote requests
///
/// # Examples
///
/// ```rust,ignore
/// let result = QuoteValidator::validate(&request);
/// for violation in result.violations() {
///     println!("{}", violation);
/// }
/// ```
pub struct QuoteValidator;

impl QuoteValidator {
    /// Validates a request and returns every violation found
    pub fn validate(request: &QuoteRequest) -> ValidationResult {
        let mut result = ValidationResult::ok();

        match request.liability() {
            Some(liability) => {
                result.merge(Self::validate_product(liability, ProductLine::Liability));
            }
            None => result.add_violation(LIABILITY_MANDATORY),
        }

        if let Some(collision) = request.collision() {
            result.merge(Self::validate_product(collision, ProductLine::Collision));
        }

        if request.gross_total().is_err() {
            result.add_violation(COMBINED_PREMIUM_OUT_OF_RANGE);
        }

        if let Some(target) = request.target_premium() {
            if !target.is_positive() {
                let minimum = minimum_for_request(request);
                result.add_violation(unreachable_target_message(target, minimum));
            }
        }

        result
    }

    /// Validates a single product in the given role
    pub fn validate_product(product: &Product, line: ProductLine) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if !product.base_premium().is_positive() {
            result.add_violation(format!("premium for {} must be positive", line));
        }

        let discount = product.discount();
        if discount.is_negative() {
            result.add_violation(format!("discount for {} must not be negative", line));
        } else if discount.exceeds_max() {
            result.add_violation(format!("discount for {} must not exceed 99", line));
        }

        result
    }
}
