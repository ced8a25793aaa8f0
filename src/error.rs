//! Error types for the Moneytree API client.
//!
//! Every failure a call can produce maps to one [`Error`] variant, so callers
//! can tell configuration mistakes, network failures, cancellations, upstream
//! rejections and malformed bodies apart without string matching.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Moneytree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Moneytree API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The client could not be constructed from the supplied configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The request never produced an HTTP response (DNS, TLS, connect, timeout)
    #[error("Transport error for {url}: {source}")]
    Transport {
        /// Sanitized request URL
        url: String,
        /// Underlying transport failure
        #[source]
        source: TransportError,
    },

    /// The call was aborted through its cancellation handle
    #[error("Request cancelled")]
    Cancelled,

    /// The API answered with a non-2xx status
    #[error("API error: status={status}, code={code:?}, message={message}, url={url}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Upstream error code (e.g. `invalid_token`)
        code: Option<String>,
        /// Human-readable error message
        message: String,
        /// Sanitized request URL
        url: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// A 2xx response body did not match the expected JSON shape
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        /// Sanitized request URL
        url: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Reasons a client cannot be constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No configuration was supplied to the builder
    #[error("config cannot be nil")]
    Missing,
    /// The base URL is empty
    #[error("base URL cannot be empty")]
    EmptyBaseUrl,
    /// The OAuth client ID is empty
    #[error("client ID cannot be empty")]
    EmptyClientId,
    /// The OAuth client secret is empty
    #[error("client secret cannot be empty")]
    EmptyClientSecret,
    /// The base URL could not be parsed as an absolute URL
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    /// The default HTTP transport could not be built
    #[error("failed to build HTTP transport: {0}")]
    Transport(String),
}

/// Failure reported by an [`HttpTransport`](crate::client::HttpTransport).
///
/// The message never carries the request URL; the client attaches a
/// sanitized copy when it wraps this into [`Error::Transport`].
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    timed_out: bool,
}

impl TransportError {
    /// Create a transport error from any displayable failure.
    pub fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
            timed_out: false,
        }
    }

    /// Create a transport error that represents a timeout.
    pub fn timeout(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
            timed_out: true,
        }
    }

    /// Returns `true` if the transport gave up waiting.
    pub fn is_timeout(&self) -> bool {
        self.timed_out
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let timed_out = err.is_timeout();
        let err = err.without_url();

        // reqwest keeps the useful detail (connection refused, dns, tls) in the source chain
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        Self { message, timed_out }
    }
}

impl Error {
    /// Returns `true` if the client configuration was rejected.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Returns `true` for network, DNS, TLS and timeout failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    /// Returns `true` if the call was cancelled by the caller.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// Returns `true` if the API answered with a non-2xx status.
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Returns `true` if a successful response could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// HTTP status code of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the access token was rejected (401).
    ///
    /// The client never refreshes tokens; callers holding a refresh token
    /// can use [`OAuthService::refresh`](crate::auth::OAuthService::refresh)
    /// and retry.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => (400..500).contains(status),
            Error::InvalidInput(_) | Error::Config(_) | Error::UrlParse(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a failed response.
    ///
    /// Understands the OAuth envelope (`{"error": "...", "error_description": "..."}`)
    /// and the nested one (`{"error": {"code": "...", "message": "..."}}`).
    pub(crate) fn from_api_response(status: u16, url: impl Into<String>, raw: &[u8]) -> Self {
        let body = serde_json::from_slice::<Value>(raw).unwrap_or_else(|_| {
            if raw.is_empty() {
                Value::Null
            } else {
                Value::String(String::from_utf8_lossy(raw).into_owned())
            }
        });

        let (code, message) = match body.get("error") {
            Some(Value::String(code)) => {
                let message = body
                    .get("error_description")
                    .and_then(|d| d.as_str())
                    .unwrap_or(code.as_str())
                    .to_string();
                (Some(code.clone()), message)
            }
            Some(nested) if nested.is_object() => {
                let code = nested
                    .get("code")
                    .and_then(|c| c.as_str())
                    .map(String::from);
                let message = nested
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("Unknown API error")
                    .to_string();
                (code, message)
            }
            _ => {
                let message = body
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("Unknown API error")
                    .to_string();
                (None, message)
            }
        };

        Error::Api {
            status,
            code,
            message,
            url: url.into(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_oauth_envelope() {
        let raw = br#"{"error":"invalid_token","error_description":"The access token expired"}"#;

        match Error::from_api_response(401, "https://example.com/link/profile.json", raw) {
            Error::Api {
                status,
                code,
                message,
                ..
            } => {
                assert_eq!(status, 401);
                assert_eq!(code.as_deref(), Some("invalid_token"));
                assert_eq!(message, "The access token expired");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_nested_envelope() {
        let raw = br#"{"error":{"code":"not_found","message":"Account not found"}}"#;

        let err = Error::from_api_response(404, "/link/accounts/1/transactions.json", raw);
        assert_eq!(err.status(), Some(404));
        assert!(err.is_client_error());
        match err {
            Error::Api { code, message, .. } => {
                assert_eq!(code.as_deref(), Some("not_found"));
                assert_eq!(message, "Account not found");
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_from_non_json_body() {
        let err = Error::from_api_response(502, "/link/profile.json", b"Bad Gateway");
        assert!(err.is_server_error());
        match err {
            Error::Api { code, body, .. } => {
                assert!(code.is_none());
                assert_eq!(body, Value::String("Bad Gateway".to_string()));
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::Cancelled.is_cancelled());
        assert!(Error::from(ConfigError::EmptyClientId).is_config());
        assert!(!Error::Cancelled.is_api());

        let transport = Error::Transport {
            url: "https://example.com".into(),
            source: TransportError::timeout("operation timed out"),
        };
        assert!(transport.is_transport());
        assert!(!transport.is_client_error());

        let unauthorized = Error::from_api_response(401, "/", b"{}");
        assert!(unauthorized.is_unauthorized());
    }

    #[test]
    fn test_config_error_messages_are_distinct() {
        let messages = [
            ConfigError::Missing.to_string(),
            ConfigError::EmptyBaseUrl.to_string(),
            ConfigError::EmptyClientId.to_string(),
            ConfigError::EmptyClientSecret.to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
