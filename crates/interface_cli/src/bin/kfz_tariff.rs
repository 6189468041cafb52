//! Motor Tariff - Command Line Binary
//!
//! Prices liability and collision quotations, optionally solving the
//! discounts for a target premium.
//!
//! # Usage
//!
//! ```bash
//! kfz-tariff quote --liability 500 --collision 300 --target 600
//! kfz-tariff --format json quote-file request.json
//! kfz-tariff demo
//! ```
//!
//! # Environment Variables
//!
//! * `TARIFF_LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: warn)
//! * `TARIFF_TOLERANCE` - Allocator convergence tolerance (default: 0.01)
//! * `TARIFF_MAX_ITERATIONS` - Allocator iteration cap (default: 100)
//! * `TARIFF_OUTPUT` - `text` or `json` (default: text)

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use interface_cli::{cli::Cli, config::CliConfig, error::CliError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<CliError>() {
            Some(CliError::Tariff(report)) => {
                eprintln!("{}", report);
                ExitCode::from(2)
            }
            Some(cli_err) => {
                eprintln!("Error: {}", cli_err);
                ExitCode::from(cli_err.exit_code())
            }
            None => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}

fn try_main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::from_env()
        .context("failed to load TARIFF_* configuration")?
        .with_overrides(&cli);

    init_tracing(&config.log_level);

    tracing::debug!(
        tolerance = %config.tolerance,
        max_iterations = config.max_iterations,
        "configuration loaded"
    );

    let stdout = io::stdout();
    interface_cli::run(&cli, &config, &mut stdout.lock())?;
    Ok(())
}

/// Initializes the tracing subscriber, logging to stderr
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .init();
}
