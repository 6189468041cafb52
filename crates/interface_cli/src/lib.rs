//! # Interface CLI
//!
//! Command line front end for the motor tariff. Parses arguments, loads
//! configuration from the environment and writes priced quotations to
//! stdout in text or JSON form.
//!
//! # Commands
//!
//! * `quote` - price a quotation from flags
//! * `quote-file` - price a JSON quote request
//! * `demo` - run the sample scenarios

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod output;

use std::fs;
use std::io::Write;
use std::path::Path;

use domain_tariff::{QuotationService, QuoteRequest};
use tracing::{debug, info};

use crate::cli::{Cli, Command};
use crate::config::CliConfig;
use crate::error::CliError;

/// Executes the parsed command, writing results to `out`
pub fn run<W: Write>(cli: &Cli, config: &CliConfig, out: &mut W) -> Result<(), CliError> {
    let service = QuotationService::new(config.allocator_settings()?);

    match &cli.command {
        Command::Quote(args) => {
            let quotation = service.quote(args.to_request())?;
            output::write_quotation(out, &quotation, config.output)
        }
        Command::QuoteFile { path } => {
            let request = read_request(path)?;
            let quotation = service.quote(request)?;
            output::write_quotation(out, &quotation, config.output)
        }
        Command::Demo => demo::run_scenarios(&service, config.output, out),
    }
}

/// Reads a JSON quote request from disk
pub fn read_request(path: &Path) -> Result<QuoteRequest, CliError> {
    debug!(path = %path.display(), "reading quote request");

    let contents = fs::read_to_string(path).map_err(|source| CliError::RequestFile {
        path: path.to_path_buf(),
        source,
    })?;
    let request: QuoteRequest = serde_json::from_str(&contents)?;

    info!(
        path = %path.display(),
        collision = request.collision().is_some(),
        "quote request loaded"
    );
    Ok(request)
}
