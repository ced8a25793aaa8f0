//! OAuth token retrieval and revocation.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::Serialize;

use super::token::{AccessToken, RefreshToken, TokenResponse};
use crate::client::{ApiRequest, ClientInner};
use crate::Result;

const TOKEN_PATH: &str = "/oauth/token.json";
const REVOKE_PATH: &str = "/oauth/revoke.json";

/// Service for the OAuth token endpoints.
///
/// Client credentials travel in the query string; the URL that ends up in
/// logs and errors has them redacted.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: moneytree::MoneytreeClient) -> moneytree::Result<()> {
/// // `code` comes back on your redirect URI after the user authorizes
/// let token = client
///     .oauth()
///     .exchange_code("authorization-code", "https://example.com/callback")
///     .await?;
///
/// let profile = client.profile().get(&token.access_token).await?;
/// # Ok(())
/// # }
/// ```
pub struct OAuthService {
    inner: Arc<ClientInner>,
}

#[derive(Serialize)]
struct TokenQuery<'a> {
    grant_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_uri: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,
    client_id: &'a str,
    client_secret: &'a str,
}

#[derive(Serialize)]
struct RevokeQuery<'a> {
    token: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

impl OAuthService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Exchange an authorization code for tokens.
    ///
    /// # Arguments
    ///
    /// * `code` - The code delivered to the redirect URI
    /// * `redirect_uri` - The redirect URI used in the authorization request
    pub async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<TokenResponse> {
        let config = &self.inner.config;
        let query = TokenQuery {
            grant_type: "authorization_code",
            code: Some(code),
            redirect_uri: Some(redirect_uri),
            refresh_token: None,
            client_id: config.client_id(),
            client_secret: config.client_secret().expose_secret(),
        };

        self.inner
            .execute(ApiRequest::post(TOKEN_PATH).query(&query)?)
            .await
    }

    /// Obtain a new access token from a refresh token.
    pub async fn refresh(&self, refresh_token: &RefreshToken) -> Result<TokenResponse> {
        let config = &self.inner.config;
        let query = TokenQuery {
            grant_type: "refresh_token",
            code: None,
            redirect_uri: None,
            refresh_token: Some(refresh_token.expose_secret()),
            client_id: config.client_id(),
            client_secret: config.client_secret().expose_secret(),
        };

        self.inner
            .execute(ApiRequest::post(TOKEN_PATH).query(&query)?)
            .await
    }

    /// Revoke an access token.
    pub async fn revoke(&self, token: &AccessToken) -> Result<()> {
        let config = &self.inner.config;
        let query = RevokeQuery {
            token: token.expose_secret(),
            client_id: config.client_id(),
            client_secret: config.client_secret().expose_secret(),
        };

        self.inner
            .execute_empty(ApiRequest::post(REVOKE_PATH).query(&query)?)
            .await
    }
}
