//! Built-in sample scenarios

use std::io::Write;

use core_kernel::Money;
use domain_tariff::{Product, QuotationService, QuoteRequest};
use rust_decimal::Decimal;
use tracing::info;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

/// A named request run by the `demo` command
pub struct Scenario {
    pub title: &'static str,
    pub request: QuoteRequest,
}

fn product(base: i64) -> Product {
    Product::with_base(Money::new(Decimal::from(base)))
}

/// The sample requests, the last one deliberately invalid
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            title: "Liability only",
            request: QuoteRequest::new(product(500)),
        },
        Scenario {
            title: "Liability and collision",
            request: QuoteRequest::new(product(500)).with_collision(product(300)),
        },
        Scenario {
            title: "Liability and collision with target premium",
            request: QuoteRequest::new(product(500))
                .with_collision(product(300))
                .with_target(Money::new(Decimal::from(600))),
        },
        Scenario {
            title: "Invalid liability premium",
            request: QuoteRequest::new(product(-100)),
        },
    ]
}

/// Prices every scenario; rejected requests print their report and the run continues
pub fn run_scenarios<W: Write>(
    service: &QuotationService,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    for (index, scenario) in scenarios().into_iter().enumerate() {
        writeln!(out, "--- Scenario {}: {} ---", index + 1, scenario.title)?;

        match service.quote(scenario.request) {
            Ok(quotation) => output::write_quotation(out, &quotation, format)?,
            Err(err) => {
                info!(scenario = scenario.title, "scenario rejected");
                writeln!(out, "{}", err)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
