//! Error types for the Zeus client.
//!
//! Validation failures (`InvalidName`, `InvalidDate`, `Validation`) are
//! raised before any request leaves the client. Only HTTP 500 is turned into
//! an error on the response side; every other status is handed back to the
//! caller inside an [`ApiResponse`](crate::types::ApiResponse).

use std::time::Duration;
use thiserror::Error;

use crate::transport::TransportError;

/// Result type alias for Zeus operations.
pub type ZeusResult<T> = Result<T, ZeusError>;

/// Error type for Zeus client operations.
#[derive(Debug, Error)]
pub enum ZeusError {
    /// Malformed log or metric name.
    #[error("Invalid name: {message}")]
    InvalidName {
        /// Error message describing the rule that was broken.
        message: String,
        /// The rejected name, if one was supplied.
        name: Option<String>,
    },

    /// Unparseable or inverted date range.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Error message.
        message: String,
    },

    /// Request parameters that fail client-side checks other than names and dates.
    #[error("Validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
        /// The parameter that caused the error.
        param: Option<String>,
    },

    /// The remote service answered with HTTP 500.
    #[error("Internal Server Error: {message}")]
    RemoteServerError {
        /// Error message.
        message: String,
        /// Raw response body, if any was sent.
        body: Option<String>,
    },

    /// No response within the configured timeout.
    #[error("Request timeout after {timeout:?}")]
    Timeout {
        /// The timeout that elapsed.
        timeout: Duration,
    },

    /// An HTTP method the transport does not support.
    #[error("Unknown HTTP method: {method}")]
    UnknownMethod {
        /// The method that was requested.
        method: String,
    },

    /// Configuration error (missing token, bad endpoint, etc.)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// Network/connection error.
    #[error("Network error: {message}")]
    Network {
        /// Error message.
        message: String,
    },

    /// Payload encoding error.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message.
        message: String,
    },
}

impl ZeusError {
    /// Returns true if the error was raised before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ZeusError::InvalidName { .. }
                | ZeusError::InvalidDate { .. }
                | ZeusError::Validation { .. }
        )
    }

    /// Returns a short, stable label for the error kind, used in metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ZeusError::InvalidName { .. } => "invalid_name",
            ZeusError::InvalidDate { .. } => "invalid_date",
            ZeusError::Validation { .. } => "validation",
            ZeusError::RemoteServerError { .. } => "remote_server_error",
            ZeusError::Timeout { .. } => "timeout",
            ZeusError::UnknownMethod { .. } => "unknown_method",
            ZeusError::Configuration { .. } => "configuration",
            ZeusError::Network { .. } => "network",
            ZeusError::Serialization { .. } => "serialization",
        }
    }

    /// Creates an invalid name error.
    pub fn invalid_name(message: impl Into<String>, name: Option<&str>) -> Self {
        ZeusError::InvalidName {
            message: message.into(),
            name: name.map(str::to_string),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(message: impl Into<String>) -> Self {
        ZeusError::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a validation error for a named parameter.
    pub fn validation_param(message: impl Into<String>, param: impl Into<String>) -> Self {
        ZeusError::Validation {
            message: message.into(),
            param: Some(param.into()),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        ZeusError::Configuration {
            message: message.into(),
        }
    }
}

impl From<TransportError> for ZeusError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout { timeout } => ZeusError::Timeout { timeout },
            TransportError::Connection { message } | TransportError::InvalidResponse { message } => {
                ZeusError::Network { message }
            }
            TransportError::InvalidUrl { message } | TransportError::InvalidRequest { message } => {
                ZeusError::Configuration { message }
            }
        }
    }
}

impl From<serde_json::Error> for ZeusError {
    fn from(err: serde_json::Error) -> Self {
        ZeusError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for ZeusError {
    fn from(err: url::ParseError) -> Self {
        ZeusError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}
