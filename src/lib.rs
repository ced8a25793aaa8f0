//! # moneytree-rs
//!
//! A typed async Rust client for the Moneytree LINK financial-data API.
//!
//! The crate covers the OAuth token endpoints, the user profile and account
//! groups, accounts across the three account categories (personal,
//! corporate, point), their balances, transactions, term deposits and point
//! expirations, and the institution directory.
//!
//! ## Features
//!
//! - **Typed responses**: every endpoint decodes into plain structs; optional
//!   fields are `Option`s
//! - **Bring your own token**: access tokens are passed per call and never
//!   stored or refreshed behind your back
//! - **Pluggable transport**: `reqwest` by default, anything implementing
//!   [`HttpTransport`](client::HttpTransport) otherwise
//! - **No leaked secrets**: URLs in logs and errors go through the
//!   [`sanitize`] module first
//! - **Classified errors**: configuration, transport, cancellation, API and
//!   decode failures are distinct [`Error`] variants
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use moneytree::{AccessToken, Config, MoneytreeClient};
//!
//! #[tokio::main]
//! async fn main() -> moneytree::Result<()> {
//!     let client = MoneytreeClient::new(Config::new(
//!         "https://jp-api.getmoneytree.com",
//!         "client-id",
//!         "client-secret",
//!     ))?;
//!
//!     let token = AccessToken::new("access-token");
//!
//!     let profile = client.profile().get(&token).await?;
//!     println!("Signed in as {}", profile.moneytree_id);
//!
//!     for account in client.personal_accounts().list(&token, None).await? {
//!         println!("{}: {:?}", account.display_name(), account.current_balance);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use moneytree::{AccessToken, AccountId, Error};
//!
//! # async fn example(client: moneytree::MoneytreeClient) {
//! let token = AccessToken::new("expired-token");
//! match client.personal_accounts().transactions(&token, AccountId::new(1), None).await {
//!     Ok(transactions) => println!("{} transactions", transactions.len()),
//!     Err(err) if err.is_unauthorized() => println!("token expired, re-authenticate"),
//!     Err(Error::Api { status, message, .. }) => println!("API said {}: {}", status, message),
//!     Err(err) => println!("request failed: {}", err),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod sanitize;

// Re-export primary types at crate root for convenience
pub use auth::{AccessToken, RefreshToken, TokenResponse};
pub use client::{ClientBuilder, ClientOptions, Config, MoneytreeClient};
pub use error::{ConfigError, Error, Result, TransportError};
pub use models::{AccountGroupId, AccountId, InstitutionId, TransactionId};
pub use sanitize::{sanitize_url, sanitize_url_str};

/// Prelude module for convenient imports.
///
/// ```rust
/// use moneytree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{PageQuery, TransactionsQuery};
    pub use crate::auth::{AccessToken, RefreshToken, TokenResponse};
    pub use crate::client::{cancellable, AbortHandle, ClientOptions, Config, MoneytreeClient};
    pub use crate::error::{ConfigError, Error, Result};
    pub use crate::models::{
        // Identifiers
        AccountGroupId, AccountId, InstitutionId, TransactionId,
        // Enums
        AccountCategory, AccountType, AggregationState, SortKey, SortOrder,
        // Records
        Account, AccountGroup, Balance, Institution, PointAccount, PointExpiration,
        PointTransaction, Profile, TermDeposit, Transaction,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_creation() {
        let account = AccountId::new(1001);
        assert_eq!(account.get(), 1001);
    }

    #[test]
    fn test_empty_config_rejected() {
        let err = MoneytreeClient::new(Config::new("https://api.example.com", "", "secret"))
            .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::EmptyClientId)));
    }

    #[test]
    fn test_sanitize_reexport() {
        assert_eq!(
            sanitize_url_str("/?client_secret=x"),
            "/?client_secret=REDACTED"
        );
    }
}
