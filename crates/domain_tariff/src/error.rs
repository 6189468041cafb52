//! Tariff domain errors
//!
//! Both variants are fatal to quotation construction and are reported to the
//! user the same way, as a violation list.

use thiserror::Error;

use core_kernel::Money;

use crate::report::ViolationReport;
use crate::validation::unreachable_target_message;

/// Errors that can occur while pricing a quotation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TariffError {
    /// The request failed one or more plausibility checks
    #[error("{}", ViolationReport::new(.violations))]
    ValidationFailed {
        violations: Vec<String>,
    },

    /// No discount combination brings the net total down to the target
    #[error("{}", unreachable_report(.target, .minimum))]
    TargetUnreachable {
        target: Money,
        minimum: Money,
    },
}

fn unreachable_report(target: &Money, minimum: &Money) -> String {
    let violations = [unreachable_target_message(*target, *minimum)];
    ViolationReport::new(&violations).to_string()
}

impl TariffError {
    /// Creates a validation failure with a single violation
    pub fn validation(message: impl Into<String>) -> Self {
        TariffError::ValidationFailed {
            violations: vec![message.into()],
        }
    }

    /// Returns the violation messages carried by this error
    ///
    /// `TargetUnreachable` yields exactly one message, so callers can treat
    /// both variants alike.
    pub fn violations(&self) -> Vec<String> {
        match self {
            TariffError::ValidationFailed { violations } => violations.clone(),
            TariffError::TargetUnreachable { target, minimum } => {
                vec![unreachable_target_message(*target, *minimum)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unreachable_has_single_violation() {
        let err = TariffError::TargetUnreachable {
            target: Money::new(dec!(1.0)),
            minimum: Money::new(dec!(1.5)),
        };
        assert_eq!(
            err.violations(),
            vec![
                "target premium of 1.00€ is not reachable; \
                 minimum premium at maximum discount (99%): 1.50€"
                    .to_string()
            ]
        );
        assert!(err.to_string().contains("  1. target premium of 1.00€ is not reachable"));
    }

    #[test]
    fn test_validation_failed_display_is_report() {
        let err = TariffError::validation("liability is mandatory");
        let rendered = err.to_string();
        assert!(rendered.contains("PLAUSIBILITY ERRORS"));
        assert!(rendered.contains("  1. liability is mandatory"));
    }
}
