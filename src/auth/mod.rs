//! Authentication for the Zeus client.
//!
//! Zeus identifies the account by its token, which travels both in the
//! request path and as a bearer credential.

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;

use crate::errors::ZeusError;

/// Authentication provider trait.
///
/// Implementations of this trait provide authentication credentials
/// for API requests.
pub trait AuthProvider: Send + Sync {
    /// Apply authentication to request headers.
    fn apply_auth(&self, headers: &mut HashMap<String, String>);

    /// Get the authentication scheme name.
    fn scheme(&self) -> &str;

    /// Validate the credentials.
    fn validate(&self) -> Result<(), ZeusError>;
}

/// Bearer authentication with the Zeus account token.
pub struct TokenAuth {
    token: SecretString,
}

impl TokenAuth {
    /// Creates a new token authentication provider.
    pub fn new(token: SecretString) -> Self {
        Self { token }
    }

    /// Creates from a string token.
    pub fn from_string(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into()),
        }
    }

    /// Gets a hint of the token for debugging (last 4 characters).
    pub fn token_hint(&self) -> String {
        token_hint(self.token.expose_secret())
    }
}

/// Returns the last four characters of a token, or `****` for short tokens.
pub(crate) fn token_hint(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > 4 {
        format!("...{}", chars[chars.len() - 4..].iter().collect::<String>())
    } else {
        "****".to_string()
    }
}

impl AuthProvider for TokenAuth {
    fn apply_auth(&self, headers: &mut HashMap<String, String>) {
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.token.expose_secret()),
        );
    }

    fn scheme(&self) -> &str {
        "Bearer"
    }

    fn validate(&self) -> Result<(), ZeusError> {
        if self.token.expose_secret().trim().is_empty() {
            return Err(ZeusError::configuration("Token cannot be empty"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for TokenAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuth")
            .field("token", &"[REDACTED]")
            .field("token_hint", &self.token_hint())
            .finish()
    }
}
