//! Error types for pomogo.

use thiserror::Error;

/// Errors that can occur while running pomogo.
#[derive(Debug, Error)]
pub enum PomogoError {
    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration is missing or invalid.
    #[error("{0}")]
    Config(String),

    /// A requested resource does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Terminal setup or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = PomogoError::NotFound("History file".to_string());
        assert_eq!(err.to_string(), "History file not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PomogoError = io.into();
        assert!(matches!(err, PomogoError::Io(_)));
    }
}
