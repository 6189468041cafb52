//! Rendering of priced quotations

use std::io::Write;

use domain_tariff::{AllocationOutcome, Product, Quotation};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Writes a quotation in the requested format
pub fn write_quotation<W: Write>(
    out: &mut W,
    quotation: &Quotation,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => out.write_all(render_text(quotation).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, quotation)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Human readable summary
pub fn render_text(quotation: &Quotation) -> String {
    let mut text = String::new();

    if let Some(target) = quotation.target_premium() {
        text.push_str(&format!("Target premium:      {}\n", target));
    }
    text.push_str(&product_line("Liability", Some(quotation.liability())));
    text.push_str(&product_line("Collision", quotation.collision()));
    text.push_str(&format!("Gross premium:       {}\n", quotation.gross_total()));
    text.push_str(&format!("Net premium:         {}\n", quotation.net_total()));
    text.push_str(&format!("Allocation:          {}\n", describe(quotation.allocation())));
    text
}

fn product_line(label: &str, product: Option<&Product>) -> String {
    match product {
        Some(p) => format!(
            "{:<21}{} - {} = {}\n",
            format!("{}:", label),
            p.base_premium(),
            p.discount(),
            p.discounted_premium()
        ),
        None => format!("{:<21}not included\n", format!("{}:", label)),
    }
}

fn describe(outcome: &AllocationOutcome) -> String {
    match outcome {
        AllocationOutcome::NotRequested => "no target".to_string(),
        AllocationOutcome::NoDiscountNeeded => "target at or above gross, no discount".to_string(),
        AllocationOutcome::Converged { iterations } => {
            format!("converged after {} correction steps", iterations)
        }
        AllocationOutcome::ResidualGap { iterations, gap } => {
            format!("stopped after {} steps, {} off target", iterations, gap)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Money;
    use rust_decimal_macros::dec;

    #[test]
    fn test_text_without_collision() {
        let liability = Product::new(Money::new(dec!(500)), 10);
        let quotation = Quotation::quote(None, liability, None).unwrap();
        let text = render_text(&quotation);

        assert!(text.contains("Liability:           500.00€ - 10% = 450.00€"));
        assert!(text.contains("Collision:           not included"));
        assert!(text.contains("Net premium:         450.00€"));
        assert!(!text.contains("Target premium"));
    }

    #[test]
    fn test_json_is_parseable() {
        let quotation = Quotation::quote(
            Some(Money::new(dec!(600))),
            Product::with_base(Money::new(dec!(500))),
            Some(Product::with_base(Money::new(dec!(300)))),
        )
        .unwrap();

        let mut buffer = Vec::new();
        write_quotation(&mut buffer, &quotation, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["allocation"]["status"], "converged");
        assert_eq!(value["liability"]["discount_percent"], 40);
    }
}
