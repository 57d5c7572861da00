//! Error types for the CLI

use core_types::ClacError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// The interpreter rejected a request outside the evaluation loop
    #[error("{0}")]
    Interpreter(#[from] ClacError),

    /// Terminal or file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The line editor failed
    #[error("Line editor error: {0}")]
    Readline(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
