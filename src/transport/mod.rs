//! HTTP transport layer for the Zeus client.
//!
//! Provides the HTTP transport abstraction and the reqwest-backed
//! implementation used to reach the Zeus API.

mod http;

pub use http::{
    normalize_endpoint, resolve_url, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
    HttpTransportImpl, Payload,
};

use std::time::Duration;

/// Transport error types.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection error.
    #[error("Connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Timeout error.
    #[error("Timeout after {timeout:?}")]
    Timeout {
        /// Timeout duration.
        timeout: Duration,
    },

    /// Invalid response.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Error message.
        message: String,
    },

    /// The request could not be built from its headers or payload.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// The request URL could not be built.
    #[error("Invalid URL: {message}")]
    InvalidUrl {
        /// Error message.
        message: String,
    },
}

impl From<url::ParseError> for TransportError {
    fn from(err: url::ParseError) -> Self {
        TransportError::InvalidUrl {
            message: err.to_string(),
        }
    }
}
