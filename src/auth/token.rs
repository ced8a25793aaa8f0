//! Bearer and refresh tokens.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use http::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{Error, Result};

/// An OAuth2 access token, sent as `Authorization: Bearer <token>`.
///
/// Opaque to this crate; `Debug` output is redacted.
///
/// # Example
///
/// ```
/// use moneytree::AccessToken;
///
/// let token = AccessToken::new("abc123");
/// assert!(!format!("{:?}", token).contains("abc123"));
/// ```
#[derive(Deserialize)]
#[serde(from = "String")]
pub struct AccessToken(SecretString);

impl AccessToken {
    /// Wrap a raw access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// Expose the raw token value.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }

    /// Header value for `Authorization`, marked sensitive.
    pub(crate) fn authorization_header(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.expose_secret()))
            .map_err(|_| Error::InvalidInput("Access token is not a valid header value".to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl Clone for AccessToken {
    fn clone(&self) -> Self {
        Self::new(self.expose_secret())
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// An OAuth2 refresh token.
#[derive(Deserialize)]
#[serde(from = "String")]
pub struct RefreshToken(SecretString);

impl RefreshToken {
    /// Wrap a raw refresh token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// Expose the raw token value.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for RefreshToken {
    fn clone(&self) -> Self {
        Self::new(self.expose_secret())
    }
}

impl From<String> for RefreshToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for RefreshToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RefreshToken([REDACTED])")
    }
}

/// Response of the token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Token to send on data requests
    pub access_token: AccessToken,
    /// Token type, normally `bearer`
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of the access token in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Token for obtaining a new access token
    #[serde(default)]
    pub refresh_token: Option<RefreshToken>,
    /// Space separated granted scopes
    #[serde(default)]
    pub scope: Option<String>,
    /// Issue time as a unix timestamp
    #[serde(default)]
    pub created_at: Option<i64>,
}

impl TokenResponse {
    /// When the access token stops being valid, if the server said so.
    ///
    /// Values outside the representable date range yield `None`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let created = DateTime::from_timestamp(self.created_at?, 0)?;
        let lifetime = TimeDelta::try_seconds(self.expires_in?)?;
        created.checked_add_signed(lifetime)
    }

    /// Granted scopes as a list.
    pub fn scopes(&self) -> Vec<&str> {
        self.scope
            .as_deref()
            .map(|s| s.split_whitespace().collect())
            .unwrap_or_default()
    }
}
