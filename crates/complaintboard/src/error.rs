//! Error types for complaintboard.
//!
//! This module defines all error types used throughout the complaintboard crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

use crate::complaint::ComplaintId;

/// The main error type for complaintboard operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Source Errors ===
    /// Failed to read the board file.
    #[error("failed to read {path}: {source}")]
    SourceRead {
        /// Path to the board file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request for the board failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status} ({url})")]
    HttpStatus {
        /// The URL that was requested.
        url: String,
        /// The status code returned.
        status: u16,
    },

    // === Sink Errors ===
    /// Failed to write the board file.
    #[error("failed to write {path}: {source}")]
    SinkWrite {
        /// Path of the file being written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Board Errors ===
    /// No complaint has the given id.
    #[error("no complaint with id {0}")]
    ComplaintNotFound(ComplaintId),

    /// No id above the largest one on the board is left to issue.
    #[error("cannot issue a complaint id above {0}")]
    IdsExhausted(ComplaintId),

    /// A value could not be parsed.
    #[error("invalid {field}: '{value}'")]
    InvalidValue {
        /// What was being parsed.
        field: &'static str,
        /// The offending input.
        value: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for complaintboard operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid value error.
    #[must_use]
    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error came from fetching the board over the network.
    #[must_use]
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::Http(_) | Self::HttpStatus { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_display() {
        let err = Error::HttpStatus {
            url: "https://example.org/complaints.json".to_string(),
            status: 404,
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("example.org"));
        assert!(err.is_network_error());
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::ComplaintNotFound(ComplaintId(123));
        assert_eq!(err.to_string(), "no complaint with id 123");
        assert!(!err.is_network_error());
    }

    #[test]
    fn test_ids_exhausted_display() {
        let err = Error::IdsExhausted(ComplaintId(i64::MAX));
        assert!(err.to_string().contains(&i64::MAX.to_string()));
    }

    #[test]
    fn test_invalid_value_display() {
        let err = Error::invalid_value("priority", "urgent");
        assert_eq!(err.to_string(), "invalid priority: 'urgent'");
    }

    #[test]
    fn test_config_validation_display() {
        let err = Error::config_validation("timeout_secs must be greater than 0");
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_source_read_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::SourceRead {
            path: PathBuf::from("/srv/board/complaints.json"),
            source: io_err,
        };
        assert!(err.to_string().contains("/srv/board/complaints.json"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }
}
