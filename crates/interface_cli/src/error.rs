//! CLI error handling

use std::io;
use std::path::PathBuf;

use core_kernel::CoreError;
use domain_tariff::TariffError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// The quotation was rejected; displays the violation report
    #[error(transparent)]
    Tariff(#[from] TariffError),

    #[error("Invalid settings: {0}")]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Cannot read request file {}: {source}", .path.display())]
    RequestFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Tariff(_) => 2,
            _ => 1,
        }
    }
}
