// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for MikroTik PoE Exporter application

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown port name, or a port missing from a polled table
    #[error("Not found: {0}")]
    NotFound(String),

    /// Remote command or transport failure
    #[error("Remote error: {0}")]
    Remote(String),

    /// Response did not have the expected tabular shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = AppError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = AppError::NotFound("port 'ether9'".to_string());
        assert_eq!(err.to_string(), "Not found: port 'ether9'");
    }

    #[test]
    fn test_remote_error() {
        let err = AppError::Remote("ssh exited with status 255".to_string());
        assert_eq!(err.to_string(), "Remote error: ssh exited with status 255");
    }

    #[test]
    fn test_parse_error() {
        let err = AppError::Parse("missing header row".to_string());
        assert_eq!(err.to_string(), "Parse error: missing header row");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_addr_parse_error_conversion() {
        let parse_result = "invalid".parse::<std::net::SocketAddr>();
        assert!(parse_result.is_err());
        let app_err: AppError = parse_result.unwrap_err().into();
        assert!(matches!(app_err, AppError::AddrParse(_)));
    }
}
