//! Core Kernel - Foundational types for the motor tariff system
//!
//! This crate provides the building blocks shared by the tariff domain and
//! its interfaces:
//! - Money with precise decimal arithmetic
//! - Whole-number discount percentages
//! - Common kernel errors

pub mod money;
pub mod percent;
pub mod error;

pub use money::{Money, MoneyError};
pub use percent::{DiscountPercent, MAX_DISCOUNT_PERCENT, MIN_DISCOUNT_PERCENT};
pub use error::CoreError;
