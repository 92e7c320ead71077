//! Error types for sample generation and reporting.

use thiserror::Error;

/// Errors raised by the randstat library.
///
/// # Examples
/// ```
/// use randstat_core::RandStatError;
///
/// let err = RandStatError::invalid_argument("No method with number 99");
/// assert_eq!(format!("{}", err), "Invalid argument: No method with number 99");
/// ```
#[derive(Debug, Error)]
pub enum RandStatError {
    /// Caller passed a value outside the supported domain, such as an
    /// unknown strategy selector.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Run configuration failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing the report failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RandStatError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RandStatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RandStatError::invalid_argument("No method with number 7");
        assert!(err.to_string().contains("No method with number 7"));

        let err = RandStatError::config("sample_sizes must not be empty");
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: RandStatError = io.into();
        assert!(matches!(err, RandStatError::Io(_)));
    }
}
