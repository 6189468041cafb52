//! Command line arguments

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

use core_kernel::Money;
use domain_tariff::{Product, QuoteRequest};

/// Motor insurance tariff calculator
#[derive(Debug, Parser)]
#[command(name = "kfz-tariff", version, about)]
pub struct Cli {
    /// Log filter, e.g. `debug` or `domain_tariff=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format for priced quotations
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Price a quotation from command line values
    Quote(QuoteArgs),
    /// Price a quotation read from a JSON request file
    QuoteFile {
        /// Path to a JSON quote request
        path: PathBuf,
    },
    /// Run the built-in sample scenarios
    Demo,
}

#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    /// Liability base premium, at most 4 decimal places
    #[arg(long, value_parser = Money::parse, allow_negative_numbers = true)]
    pub liability: Option<Money>,

    /// Initial liability discount in percent
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub liability_discount: i32,

    /// Collision base premium, at most 4 decimal places
    #[arg(long, value_parser = Money::parse, allow_negative_numbers = true)]
    pub collision: Option<Money>,

    /// Initial collision discount in percent
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub collision_discount: i32,

    /// Desired net premium; discounts are solved for when given
    #[arg(long, value_parser = Money::parse, allow_negative_numbers = true)]
    pub target: Option<Money>,
}

impl QuoteArgs {
    /// Builds the domain request; a missing liability is left for validation
    pub fn to_request(&self) -> QuoteRequest {
        let mut request = match self.liability {
            Some(base) => QuoteRequest::new(Product::new(base, self.liability_discount)),
            None => QuoteRequest::default(),
        };
        if let Some(base) = self.collision {
            request = request.with_collision(Product::new(base, self.collision_discount));
        }
        if let Some(target) = self.target {
            request = request.with_target(target);
        }
        request
    }
}

/// How quotations are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
