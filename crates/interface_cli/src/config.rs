//! CLI configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use domain_tariff::settings::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use domain_tariff::AllocatorSettings;

use crate::cli::{Cli, OutputFormat};
use crate::error::CliError;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Allocator convergence tolerance
    pub tolerance: Decimal,
    /// Allocator iteration cap
    pub max_iterations: u32,
    /// Default output format
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            output: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `TARIFF_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("TARIFF"))
            .build()?
            .try_deserialize()
    }

    /// Applies command line flags on top of the environment
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
        if let Some(format) = cli.format {
            self.output = format;
        }
        self
    }

    /// Returns validated allocator settings
    pub fn allocator_settings(&self) -> Result<AllocatorSettings, CliError> {
        let settings = AllocatorSettings {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        };
        settings.validate()?;
        Ok(settings)
    }
}
