//! Pluggable HTTP transport.
//!
//! The client only needs "something that turns a request into a response".
//! `reqwest::Client` is the default; tests and callers with special needs
//! (proxies, recording, fixtures) can supply their own implementation.

use std::sync::Arc;

use futures_util::future::BoxFuture;

use super::config::ClientOptions;
use crate::error::{ConfigError, TransportError};

/// Anything capable of executing an HTTP request.
///
/// Implementations must not follow up with extra requests of their own;
/// the client relies on one `send` per API call.
///
/// # Example
///
/// ```
/// use futures_util::future::BoxFuture;
/// use moneytree::client::HttpTransport;
/// use moneytree::error::TransportError;
///
/// struct Offline;
///
/// impl HttpTransport for Offline {
///     fn send(
///         &self,
///         _request: http::Request<Vec<u8>>,
///     ) -> BoxFuture<'_, Result<http::Response<Vec<u8>>, TransportError>> {
///         Box::pin(async { Err(TransportError::new("offline")) })
///     }
/// }
/// ```
pub trait HttpTransport: Send + Sync {
    /// Send a request and return the full response.
    fn send(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> BoxFuture<'_, Result<http::Response<Vec<u8>>, TransportError>>;
}

impl<T> HttpTransport for &T
where
    T: HttpTransport + ?Sized,
{
    fn send(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> BoxFuture<'_, Result<http::Response<Vec<u8>>, TransportError>> {
        T::send(*self, request)
    }
}

impl<T> HttpTransport for Arc<T>
where
    T: HttpTransport + ?Sized,
{
    fn send(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> BoxFuture<'_, Result<http::Response<Vec<u8>>, TransportError>> {
        T::send(self, request)
    }
}

impl HttpTransport for reqwest::Client {
    fn send(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> BoxFuture<'_, Result<http::Response<Vec<u8>>, TransportError>> {
        Box::pin(async move {
            let request = reqwest::Request::try_from(request)?;
            let response = self.execute(request).await?;

            let mut builder = http::Response::builder()
                .status(response.status())
                .version(response.version());
            for (name, value) in response.headers() {
                builder = builder.header(name, value);
            }

            let body = response.bytes().await?;
            builder.body(body.to_vec()).map_err(TransportError::new)
        })
    }
}

/// Build the default transport.
pub(crate) fn default_transport(options: &ClientOptions) -> Result<reqwest::Client, ConfigError> {
    reqwest::Client::builder()
        .timeout(options.timeout)
        .connect_timeout(options.connect_timeout)
        .user_agent(&options.user_agent)
        .build()
        .map_err(|e| ConfigError::Transport(TransportError::from(e).to_string()))
}
