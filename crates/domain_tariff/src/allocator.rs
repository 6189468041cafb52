//! Target-premium discount allocation
//!
//! Given a target net premium, the allocator assigns whole-percentage
//! discounts to the liability and collision products so that their combined
//! discounted premium lands on the target.
//!
//! # Algorithm
//!
//! 1. **Reachability**: a target at or above the gross total needs no
//!    discount. A target below 1% of the gross total (99% off everything) is
//!    unreachable.
//! 2. **Seed**: the more expensive product absorbs the needed discount
//!    amount, up to 99% of its premium. Anything left spills over to the
//!    cheaper product. Percentages are rounded up.
//! 3. **Correction**: single-point steps remove the rounding overshoot.
//!    Increases go to the expensive product first, decreases to the cheaper
//!    one first. The loop is capped by `AllocatorSettings::max_iterations`.
//!
//! Whole-point steps cannot always hit the target to the cent. When no step
//! closes the gap the loop alternates between the two neighbouring
//! assignments until the cap, and the quotation keeps the final one.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::{debug, warn};

use core_kernel::{DiscountPercent, Money, MoneyError, MAX_DISCOUNT_PERCENT};

use crate::error::TariffError;
use crate::product::{Product, ProductLine};
use crate::settings::AllocatorSettings;
use crate::validation::{minimum_reachable, COMBINED_PREMIUM_OUT_OF_RANGE};

/// Share of a premium that the maximum discount removes
const MAX_DISCOUNT_SHARE: Decimal = dec!(0.99);

/// How a quotation's discounts were determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AllocationOutcome {
    /// No target premium was requested; discounts are the caller's
    NotRequested,
    /// The target was at or above the gross total
    NoDiscountNeeded,
    /// The net total is within tolerance of the target
    Converged {
        /// Correction steps taken after the seed
        iterations: u32,
    },
    /// Allocation stopped with the net total outside tolerance
    ResidualGap {
        /// Correction steps taken after the seed
        iterations: u32,
        /// `net_total - target` at the end
        gap: Money,
    },
}

impl AllocationOutcome {
    /// Returns true unless a gap to the target remains
    pub fn hit_target(&self) -> bool {
        !matches!(self, AllocationOutcome::ResidualGap { .. })
    }
}

/// Rounded-up discount percentage that removes `amount` from `base`
///
/// Returns 0 for a zero base and never more than 99.
pub fn percent_for(amount: Money, base: Money) -> DiscountPercent {
    let ratio = match amount.checked_multiply(dec!(100)) {
        Ok(scaled) => scaled.ratio_to(&base),
        // Too large to scale up first, so divide first
        Err(_) => amount
            .ratio_to(&base)
            .and_then(|ratio| ratio.checked_mul(dec!(100)).ok_or(MoneyError::Overflow)),
    };

    match ratio {
        Ok(ratio) => {
            let points = ratio
                .ceil()
                .to_i32()
                .unwrap_or(MAX_DISCOUNT_PERCENT)
                .min(MAX_DISCOUNT_PERCENT);
            DiscountPercent::new(points)
        }
        Err(MoneyError::DivisionByZero) => DiscountPercent::ZERO,
        Err(_) => DiscountPercent::MAX,
    }
}

/// The products under allocation, ordered by price
enum Lines<'a> {
    Single(&'a mut Product),
    Pair {
        expensive: (ProductLine, &'a mut Product),
        cheaper: (ProductLine, &'a mut Product),
    },
}

impl<'a> Lines<'a> {
    /// Collision counts as the expensive product only when strictly dearer
    fn new(liability: &'a mut Product, collision: Option<&'a mut Product>) -> Self {
        match collision {
            None => Lines::Single(liability),
            Some(collision) if collision.base_premium() > liability.base_premium() => {
                Lines::Pair {
                    expensive: (ProductLine::Collision, collision),
                    cheaper: (ProductLine::Liability, liability),
                }
            }
            Some(collision) => Lines::Pair {
                expensive: (ProductLine::Liability, liability),
                cheaper: (ProductLine::Collision, collision),
            },
        }
    }

    fn gross(&self) -> Result<Money, MoneyError> {
        match self {
            Lines::Single(product) => Ok(product.base_premium()),
            Lines::Pair { expensive, cheaper } => {
                expensive.1.base_premium().checked_add(&cheaper.1.base_premium())
            }
        }
    }

    /// Discounted premiums never exceed their bases, so this fits whenever
    /// `gross` does
    fn net(&self) -> Money {
        match self {
            Lines::Single(product) => product.discounted_premium(),
            Lines::Pair { expensive, cheaper } => {
                expensive.1.discounted_premium() + cheaper.1.discounted_premium()
            }
        }
    }

    fn clear_discounts(&mut self) {
        match self {
            Lines::Single(product) => product.set_discount(DiscountPercent::ZERO),
            Lines::Pair { expensive, cheaper } => {
                expensive.1.set_discount(DiscountPercent::ZERO);
                cheaper.1.set_discount(DiscountPercent::ZERO);
            }
        }
    }

    /// Expensive-first seed for a discount amount of `needed`
    fn seed(&mut self, needed: Money) {
        match self {
            Lines::Single(product) => {
                let discount = percent_for(needed, product.base_premium());
                product.set_discount(discount);
                debug!(line = %ProductLine::Liability, %discount, "seeded single product");
            }
            Lines::Pair { expensive, cheaper } => {
                let max_expensive = expensive.1.base_premium().multiply(MAX_DISCOUNT_SHARE);

                if needed <= max_expensive {
                    expensive.1.set_discount(percent_for(needed, expensive.1.base_premium()));
                    cheaper.1.set_discount(DiscountPercent::ZERO);
                } else {
                    expensive.1.set_discount(DiscountPercent::MAX);
                    let spill = needed - max_expensive;
                    cheaper.1.set_discount(percent_for(spill, cheaper.1.base_premium()));
                }

                debug!(
                    expensive = %expensive.0,
                    expensive_discount = %expensive.1.discount(),
                    cheaper = %cheaper.0,
                    cheaper_discount = %cheaper.1.discount(),
                    "seeded product pair"
                );
            }
        }
    }

    /// Adds one point, expensive product first
    fn increase(&mut self) -> bool {
        match self {
            Lines::Single(product) => step_up(product),
            Lines::Pair { expensive, cheaper } => step_up(expensive.1) || step_up(cheaper.1),
        }
    }

    /// Removes one point, cheaper product first
    fn decrease(&mut self) -> bool {
        match self {
            Lines::Single(product) => step_down(product),
            Lines::Pair { expensive, cheaper } => step_down(cheaper.1) || step_down(expensive.1),
        }
    }
}

fn step_up(product: &mut Product) -> bool {
    if product.discount().is_max() {
        return false;
    }
    product.set_discount(product.discount().incremented());
    true
}

fn step_down(product: &mut Product) -> bool {
    if product.discount().is_zero() {
        return false;
    }
    product.set_discount(product.discount().decremented());
    true
}

/// Distributes discounts across products to reach a target net premium
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountAllocator {
    settings: AllocatorSettings,
}

impl DiscountAllocator {
    /// Creates an allocator with the given settings
    pub fn new(settings: AllocatorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AllocatorSettings {
        &self.settings
    }

    /// Assigns discounts to the products so their net total meets `target`
    ///
    /// Products are expected to have passed validation. Their discounts are
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `target` - Desired net total
    /// * `liability` - Liability product
    /// * `collision` - Collision product, if quoted
    ///
    /// # Returns
    ///
    /// How the allocation ended
    ///
    /// # Errors
    ///
    /// Returns `TargetUnreachable` if the target is below 1% of the gross
    /// total, or `ValidationFailed` if the gross total is out of range
    pub fn allocate(
        &self,
        target: Money,
        liability: &mut Product,
        collision: Option<&mut Product>,
    ) -> Result<AllocationOutcome, TariffError> {
        let mut lines = Lines::new(liability, collision);
        let gross = lines
            .gross()
            .map_err(|_| TariffError::validation(COMBINED_PREMIUM_OUT_OF_RANGE))?;

        if target >= gross {
            lines.clear_discounts();
            debug!(%target, %gross, "target at or above gross total, no discount needed");
            return Ok(AllocationOutcome::NoDiscountNeeded);
        }

        let minimum = minimum_reachable(gross);
        if target < minimum {
            return Err(TariffError::TargetUnreachable { target, minimum });
        }

        lines.seed(gross - target);
        Ok(self.correct(&mut lines, target))
    }

    /// Single-point correction loop following the seed
    fn correct(&self, lines: &mut Lines<'_>, target: Money) -> AllocationOutcome {
        let tolerance = self.settings.tolerance;

        for iteration in 0..self.settings.max_iterations {
            let gap = lines.net() - target;

            if gap.is_zero() || gap.amount().abs() < tolerance {
                debug!(iteration, %gap, "discount allocation converged");
                return AllocationOutcome::Converged { iterations: iteration };
            }

            let adjusted = if gap.is_positive() {
                lines.increase()
            } else {
                lines.decrease()
            };

            if !adjusted {
                warn!(iteration, %gap, "no discount left to adjust, keeping residual gap");
                return AllocationOutcome::ResidualGap { iterations: iteration, gap };
            }
        }

        let iterations = self.settings.max_iterations;
        let gap = lines.net() - target;
        if gap.amount().abs() < tolerance {
            AllocationOutcome::Converged { iterations }
        } else {
            warn!(iterations, %gap, "correction loop hit its iteration cap");
            AllocationOutcome::ResidualGap { iterations, gap }
        }
    }
}
