//! HTTP client and request pipeline for the Moneytree API.
//!
//! [`MoneytreeClient`] is the entry point; it hands out one service per
//! group of endpoints. Requests go through an [`HttpTransport`], which is
//! `reqwest` unless the caller supplies something else.
//!
//! # Example
//!
//! ```no_run
//! use moneytree::{AccessToken, Config, MoneytreeClient};
//!
//! # async fn example() -> moneytree::Result<()> {
//! let client = MoneytreeClient::new(Config::new(
//!     "https://jp-api.getmoneytree.com",
//!     "client-id",
//!     "client-secret",
//! ))?;
//!
//! let token = AccessToken::new("access-token");
//! let profile = client.profile().get(&token).await?;
//! # Ok(())
//! # }
//! ```

mod cancel;
mod config;
mod http;
mod transport;

pub use cancel::{cancellable, AbortHandle, AbortRegistration};
pub use config::{ClientOptions, Config};
pub use self::http::{ClientBuilder, MoneytreeClient};
pub use transport::HttpTransport;
pub(crate) use self::http::{ApiRequest, ClientInner};
