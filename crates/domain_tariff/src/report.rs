//! Text rendering of violation lists

use std::fmt;

const RULE_WIDTH: usize = 70;
const HEADING: &str = "PLAUSIBILITY ERRORS";
const EMPTY_REPORT: &str = "plausibility check failed";

/// Numbered, banner-framed rendering of a violation list
///
/// ```text
///
/// ======================================================================
/// PLAUSIBILITY ERRORS
/// ======================================================================
///   1. premium for liability must be positive
/// ======================================================================
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ViolationReport<'a> {
    violations: &'a [String],
}

impl<'a> ViolationReport<'a> {
    pub fn new(violations: &'a [String]) -> Self {
        Self { violations }
    }
}

impl fmt::Display for ViolationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return f.write_str(EMPTY_REPORT);
        }

        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "{}", HEADING)?;
        writeln!(f, "{}", rule)?;
        for (index, violation) in self.violations.iter().enumerate() {
            writeln!(f, "  {}. {}", index + 1, violation)?;
        }
        write!(f, "{}", rule)
    }
}
