//! Client configuration.

use std::fmt;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::ConfigError;

/// Credentials and endpoint for a Moneytree API client.
///
/// Immutable once built; the secret is held in a [`SecretString`] and never
/// shows up in `Debug` output.
///
/// # Example
///
/// ```
/// use moneytree::Config;
///
/// let config = Config::new(
///     "https://jp-api.getmoneytree.com",
///     "my-client-id",
///     "my-client-secret",
/// );
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    base_url: String,
    client_id: String,
    client_secret: SecretString,
}

impl Config {
    /// Create a new configuration.
    ///
    /// Values are checked by [`validate`](Self::validate) when a client is built.
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
        }
    }

    /// Base URL every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// OAuth client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// OAuth client secret.
    pub fn client_secret(&self) -> &SecretString {
        &self.client_secret
    }

    /// Check that every field is present.
    ///
    /// Fields are checked in order: base URL, client ID, client secret.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if self.client_id.trim().is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        if self.client_secret.expose_secret().trim().is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Settings for the default `reqwest` transport.
///
/// Ignored when a custom transport is supplied.
///
/// # Example
///
/// ```
/// use moneytree::ClientOptions;
/// use std::time::Duration;
///
/// let options = ClientOptions::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Total request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("moneytree-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let config = Config::new("https://api.example.com", "id", "secret");
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.client_id(), "id");
        assert_eq!(config.client_secret().expose_secret(), "secret");
    }

    #[test]
    fn test_validate_reports_each_field() {
        assert_eq!(
            Config::new("", "id", "secret").validate(),
            Err(ConfigError::EmptyBaseUrl)
        );
        assert_eq!(
            Config::new("https://api.example.com", "", "secret").validate(),
            Err(ConfigError::EmptyClientId)
        );
        assert_eq!(
            Config::new("https://api.example.com", "id", "  ").validate(),
            Err(ConfigError::EmptyClientSecret)
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = Config::new("https://api.example.com", "id", "super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_default_options() {
        let options = ClientOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert!(options.user_agent.starts_with("moneytree-rs/"));
    }
}
