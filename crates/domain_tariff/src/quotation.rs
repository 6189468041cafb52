//! Quote requests and priced quotations

use serde::{Deserialize, Serialize};

use core_kernel::{Money, MoneyError};

use crate::allocator::AllocationOutcome;
use crate::error::TariffError;
use crate::product::Product;
use crate::services::QuotationService;

/// Input to a quotation
///
/// The liability product is optional here so that a missing liability is
/// reported as a violation instead of being unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    target_premium: Option<Money>,
    #[serde(default)]
    liability: Option<Product>,
    #[serde(default)]
    collision: Option<Product>,
}

impl QuoteRequest {
    /// Creates a request for the given liability product
    pub fn new(liability: Product) -> Self {
        Self {
            target_premium: None,
            liability: Some(liability),
            collision: None,
        }
    }

    /// Adds a collision product
    pub fn with_collision(mut self, collision: Product) -> Self {
        self.collision = Some(collision);
        self
    }

    /// Asks the allocator to hit this net total
    pub fn with_target(mut self, target: Money) -> Self {
        self.target_premium = Some(target);
        self
    }

    pub fn target_premium(&self) -> Option<Money> {
        self.target_premium
    }

    pub fn liability(&self) -> Option<&Product> {
        self.liability.as_ref()
    }

    pub fn collision(&self) -> Option<&Product> {
        self.collision.as_ref()
    }

    /// Sum of the base premiums of the products present
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the sum leaves the decimal range.
    pub fn gross_total(&self) -> Result<Money, MoneyError> {
        self.liability
            .iter()
            .chain(self.collision.iter())
            .try_fold(Money::zero(), |total, product| {
                total.checked_add(&product.base_premium())
            })
    }

    pub(crate) fn into_parts(self) -> (Option<Money>, Option<Product>, Option<Product>) {
        (self.target_premium, self.liability, self.collision)
    }
}

/// A priced quotation
///
/// Totals are computed once when the quotation is built; there are no
/// mutators, so the products' discounts are final.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quotation {
    target_premium: Option<Money>,
    liability: Product,
    collision: Option<Product>,
    gross_total: Money,
    net_total: Money,
    allocation: AllocationOutcome,
}

impl Quotation {
    /// Prices a quotation with default allocator settings
    ///
    /// # Arguments
    ///
    /// * `target_premium` - Desired net total, if discounts should be solved for
    /// * `liability` - Mandatory liability product
    /// * `collision` - Optional collision product
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` with every violation found, or
    /// `TargetUnreachable` when the target is below the minimum premium.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let quotation = Quotation::quote(None, Product::new(Money::new(dec!(100)), 20), None)?;
    /// assert_eq!(quotation.net_total().amount(), dec!(80));
    /// ```
    pub fn quote(
        target_premium: Option<Money>,
        liability: Product,
        collision: Option<Product>,
    ) -> Result<Self, TariffError> {
        let mut request = QuoteRequest::new(liability);
        request.target_premium = target_premium;
        request.collision = collision;
        Self::from_request(request)
    }

    /// Prices a request with default allocator settings
    pub fn from_request(request: QuoteRequest) -> Result<Self, TariffError> {
        QuotationService::default().quote(request)
    }

    /// Freezes the totals of already-allocated products
    ///
    /// Only called on validated products, whose gross total is known to fit.
    pub(crate) fn priced(
        target_premium: Option<Money>,
        liability: Product,
        collision: Option<Product>,
        allocation: AllocationOutcome,
    ) -> Self {
        let gross_total = liability.base_premium()
            + collision.as_ref().map(Product::base_premium).unwrap_or_default();
        let net_total = liability.discounted_premium()
            + collision.as_ref().map(Product::discounted_premium).unwrap_or_default();

        Self {
            target_premium,
            liability,
            collision,
            gross_total,
            net_total,
            allocation,
        }
    }

    pub fn target_premium(&self) -> Option<Money> {
        self.target_premium
    }

    pub fn liability(&self) -> &Product {
        &self.liability
    }

    pub fn collision(&self) -> Option<&Product> {
        self.collision.as_ref()
    }

    /// Sum of undiscounted base premiums
    pub fn gross_total(&self) -> Money {
        self.gross_total
    }

    /// Sum of discounted premiums
    pub fn net_total(&self) -> Money {
        self.net_total
    }

    /// How the discounts were determined
    pub fn allocation(&self) -> &AllocationOutcome {
        &self.allocation
    }
}
