//! Tariff domain services
//!
//! `QuotationService` runs the full pricing sequence: validate, allocate
//! discounts when a target is given, then freeze the totals.

use tracing::{info, instrument, warn};

use crate::allocator::{AllocationOutcome, DiscountAllocator};
use crate::error::TariffError;
use crate::quotation::{QuoteRequest, Quotation};
use crate::settings::AllocatorSettings;
use crate::validation::{QuoteValidator, LIABILITY_MANDATORY};

/// Service for pricing quotations
#[derive(Debug, Clone, Copy, Default)]
pub struct QuotationService {
    allocator: DiscountAllocator,
}

impl QuotationService {
    /// Creates a service whose allocator uses the given settings
    pub fn new(settings: AllocatorSettings) -> Self {
        Self {
            allocator: DiscountAllocator::new(settings),
        }
    }

    pub fn settings(&self) -> &AllocatorSettings {
        self.allocator.settings()
    }

    /// Prices a quote request
    ///
    /// This method:
    /// 1. Validates the request, collecting every violation
    /// 2. Allocates discounts if a target premium was requested
    /// 3. Computes gross and net totals
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` or `TargetUnreachable`. No partial
    /// quotation is produced on failure.
    #[instrument(skip(self, request), fields(target = ?request.target_premium()))]
    pub fn quote(&self, request: QuoteRequest) -> Result<Quotation, TariffError> {
        let validation = QuoteValidator::validate(&request);
        if !validation.is_valid() {
            warn!(violations = validation.violations().len(), "quote request rejected");
        }
        validation.into_result()?;

        let (target_premium, liability, mut collision) = request.into_parts();
        let mut liability = liability.ok_or_else(|| TariffError::validation(LIABILITY_MANDATORY))?;

        let allocation = match target_premium {
            Some(target) => self
                .allocator
                .allocate(target, &mut liability, collision.as_mut())
                .inspect_err(|_| warn!(%target, "target premium not reachable"))?,
            None => AllocationOutcome::NotRequested,
        };

        let quotation = Quotation::priced(target_premium, liability, collision, allocation);

        info!(
            gross = %quotation.gross_total(),
            net = %quotation.net_total(),
            liability_discount = %quotation.liability().discount(),
            collision_discount = ?quotation.collision().map(|c| c.discount_percent()),
            "quotation priced"
        );

        Ok(quotation)
    }
}
