//! Tuning parameters for the discount allocator

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::CoreError;

/// Default convergence tolerance (one cent)
pub const DEFAULT_TOLERANCE: Decimal = dec!(0.01);

/// Default cap on correction-loop iterations
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Allocator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorSettings {
    /// A net total closer than this to the target counts as converged
    pub tolerance: Decimal,
    /// Upper bound on ±1-point correction steps
    pub max_iterations: u32,
}

impl Default for AllocatorSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl AllocatorSettings {
    /// Checks that the settings can drive the correction loop
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.tolerance <= Decimal::ZERO {
            return Err(CoreError::configuration(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(CoreError::configuration("max_iterations must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AllocatorSettings::default();
        assert_eq!(settings.tolerance, dec!(0.01));
        assert_eq!(settings.max_iterations, 100);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_tolerance() {
        let settings = AllocatorSettings {
            tolerance: dec!(0),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(CoreError::Configuration(_))));
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let settings = AllocatorSettings {
            max_iterations: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let settings: AllocatorSettings =
            serde_json::from_str(r#"{"max_iterations": 50}"#).unwrap();
        assert_eq!(settings.max_iterations, 50);
        assert_eq!(settings.tolerance, DEFAULT_TOLERANCE);
    }
}
