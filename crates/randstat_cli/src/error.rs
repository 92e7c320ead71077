//! Error types for the randstat CLI.

use thiserror::Error;

/// CLI error type
///
/// Write failures on stdout arrive as `RandStatError::Io` through [`CliError::Core`].
#[derive(Debug, Error)]
pub enum CliError {
    /// Error raised by the core library
    #[error(transparent)]
    Core(#[from] randstat_core::RandStatError),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
