//! Error handling module for the pgdt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the pgdt CLI application.
#[derive(Error, Debug)]
pub enum PgdtError {
    /// Error when the configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be opened or read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when checked files contain illegal tokens.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a query to the server fails.
    #[error("RPC error: {0}")]
    Rpc(#[from] pgd_rpc::RpcError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using PgdtError.
pub type Result<T> = std::result::Result<T, PgdtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = PgdtError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = PgdtError::FileOperation("dhcp.conf: permission denied".to_string());
        assert_eq!(
            err.to_string(),
            "File operation failed: dhcp.conf: permission denied"
        );
    }

    #[test]
    fn test_validation_error_display() {
        let err = PgdtError::Validation("2 illegal tokens".to_string());
        assert_eq!(err.to_string(), "Validation error: 2 illegal tokens");
    }

    #[test]
    fn test_rpc_error_conversion() {
        let rpc_err = pgd_rpc::RpcError::Call {
            method: "Server.MemStatus".to_string(),
            message: "busy".to_string(),
        };
        let err: PgdtError = rpc_err.into();
        assert!(matches!(err, PgdtError::Rpc(_)));
        assert_eq!(err.to_string(), "RPC error: Server.MemStatus failed: busy");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PgdtError = io_err.into();
        assert!(matches!(err, PgdtError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: PgdtError = json_err.into();
        assert!(matches!(err, PgdtError::Json(_)));
    }
}
