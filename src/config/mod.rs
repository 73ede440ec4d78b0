//! Configuration module for the Zeus client.
//!
//! Provides configuration management for the account token, the API
//! endpoint and the request timeout.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

use crate::auth::token_hint;
use crate::errors::{ZeusError, ZeusResult};
use crate::transport::normalize_endpoint;

/// Default endpoint of the Zeus API.
pub const DEFAULT_ENDPOINT: &str = "https://api.ciscozeus.io";

/// Default request timeout (20 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Configuration for the Zeus client.
#[derive(Clone)]
pub struct ZeusConfig {
    /// Account token (stored securely).
    pub(crate) token: SecretString,
    /// Base endpoint, always `https`.
    pub endpoint: Url,
    /// Request timeout.
    pub timeout: Duration,
    /// Custom headers to include in requests.
    pub custom_headers: Vec<(String, String)>,
}

impl ZeusConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ZeusConfigBuilder {
        ZeusConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ZEUS_TOKEN` (required): account token
    /// - `ZEUS_ENDPOINT` (optional): custom endpoint
    /// - `ZEUS_TIMEOUT` (optional): request timeout in seconds
    pub fn from_env() -> ZeusResult<Self> {
        let mut builder = ZeusConfigBuilder::new().token_from_env("ZEUS_TOKEN")?;

        if let Ok(endpoint) = std::env::var("ZEUS_ENDPOINT") {
            builder = builder.endpoint(endpoint);
        }

        if let Ok(timeout_str) = std::env::var("ZEUS_TIMEOUT") {
            match timeout_str.parse::<u64>() {
                Ok(secs) => builder = builder.timeout_secs(secs),
                Err(_) => tracing::warn!(value = %timeout_str, "Ignoring unparseable ZEUS_TIMEOUT"),
            }
        }

        builder.build()
    }

    /// Returns the token (exposing the secret).
    pub(crate) fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Returns the token hint (last 4 characters) for debugging.
    pub fn token_hint(&self) -> String {
        token_hint(self.token.expose_secret())
    }
}

impl std::fmt::Debug for ZeusConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZeusConfig")
            .field("token", &"[REDACTED]")
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for `ZeusConfig`.
#[derive(Default)]
pub struct ZeusConfigBuilder {
    token: Option<String>,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    custom_headers: Vec<(String, String)>,
}

impl ZeusConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the token from an environment variable.
    pub fn token_from_env(mut self, var_name: &str) -> ZeusResult<Self> {
        let token = std::env::var(var_name).map_err(|_| {
            ZeusError::configuration(format!("Environment variable {} not set", var_name))
        })?;
        self.token = Some(token);
        Ok(self)
    }

    /// Sets the endpoint. The scheme is always forced to `https`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Adds a custom header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> ZeusResult<ZeusConfig> {
        let token = self
            .token
            .ok_or_else(|| ZeusError::configuration("Token is required"))?;

        if token.trim().is_empty() {
            return Err(ZeusError::configuration("Token cannot be empty"));
        }

        let endpoint = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        let endpoint = normalize_endpoint(endpoint).map_err(|e| {
            ZeusError::configuration(format!("Invalid endpoint '{}': {}", endpoint, e))
        })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ZeusError::configuration("Timeout must be greater than zero"));
        }

        Ok(ZeusConfig {
            token: SecretString::new(token),
            endpoint,
            timeout,
            custom_headers: self.custom_headers,
        })
    }
}
