//! OAuth tokens and the token endpoints.
//!
//! The client never stores or refreshes tokens on its own. Callers obtain
//! an [`AccessToken`] (typically through [`OAuthService::exchange_code`]
//! after their own authorization redirect) and pass it to every call.

mod oauth;
mod token;

pub use oauth::OAuthService;
pub use token::{AccessToken, RefreshToken, TokenResponse};
