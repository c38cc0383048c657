//! CLI error types.

use ndrand_core::types::TensorError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Rejected dimensions or container construction failure.
    #[error(transparent)]
    Tensor(#[from] TensorError),

    /// Invalid or unreadable configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failure writing command output.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Argument accepted by the parser but invalid for the command.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
