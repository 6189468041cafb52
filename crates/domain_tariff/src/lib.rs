//! Motor Tariff Domain
//!
//! This crate prices a motor-vehicle policy made of a mandatory liability
//! product and an optional collision product, and can solve for a target net
//! premium by distributing whole-percentage discounts across the two.
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic:
//! - **Value objects**: `Product`, `QuoteRequest`
//! - **Result object**: `Quotation` (immutable once priced)
//! - **Domain services**: `QuoteValidator`, `DiscountAllocator`, `QuotationService`
//!
//! # Quotation Flow
//!
//! ```text
//! QuoteRequest -> QuoteValidator -> DiscountAllocator (only with a target) -> Quotation
//!                      \-> ValidationFailed          \-> TargetUnreachable
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_tariff::{Product, Quotation};
//! use core_kernel::Money;
//! use rust_decimal_macros::dec;
//!
//! let quotation = Quotation::quote(
//!     Some(Money::new(dec!(600))),
//!     Product::with_base(Money::new(dec!(500))),
//!     Some(Product::with_base(Money::new(dec!(300)))),
//! )?;
//!
//! assert_eq!(quotation.gross_total().amount(), dec!(800));
//! ```

pub mod product;
pub mod validation;
pub mod allocator;
pub mod quotation;
pub mod services;
pub mod settings;
pub mod report;
pub mod error;

pub use product::{Product, ProductLine};
pub use validation::{QuoteValidator, ValidationResult};
pub use allocator::{AllocationOutcome, DiscountAllocator};
pub use quotation::{QuoteRequest, Quotation};
pub use services::QuotationService;
pub use settings::AllocatorSettings;
pub use report::ViolationReport;
pub use error::TariffError;
