//! Profile and account group endpoints.

use std::sync::Arc;

use crate::api::query::PageQuery;
use crate::auth::AccessToken;
use crate::client::{ApiRequest, ClientInner};
use crate::models::{AccountGroup, AccountGroupId, Profile};
use crate::Result;

/// Service for the signed-in user's profile.
///
/// # Example
///
/// ```no_run
/// use moneytree::AccessToken;
///
/// # async fn example(client: moneytree::MoneytreeClient) -> moneytree::Result<()> {
/// let token = AccessToken::new("access-token");
///
/// let profile = client.profile().get(&token).await?;
/// println!("Hello, {}!", profile.email.as_deref().unwrap_or("guest"));
///
/// for group in client.profile().account_groups(&token, None).await? {
///     println!("{}: {:?}", group.institution_entity_key, group.aggregation_state);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ProfileService {
    inner: Arc<ClientInner>,
}

impl ProfileService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the current user's profile.
    pub async fn get(&self, token: &AccessToken) -> Result<Profile> {
        #[derive(serde::Deserialize)]
        struct Response {
            profile: Profile,
        }

        let response: Response = self
            .inner
            .execute(ApiRequest::get("/link/profile.json").bearer(token))
            .await?;
        Ok(response.profile)
    }

    /// Ask Moneytree to re-aggregate every account group.
    ///
    /// Aggregation runs asynchronously on the server; poll
    /// [`account_groups`](Self::account_groups) for progress.
    pub async fn refresh(&self, token: &AccessToken) -> Result<()> {
        self.inner
            .execute_empty(ApiRequest::post("/link/profile/refresh.json").bearer(token))
            .await
    }

    /// List account groups.
    pub async fn account_groups(
        &self,
        token: &AccessToken,
        page: Option<PageQuery>,
    ) -> Result<Vec<AccountGroup>> {
        #[derive(serde::Deserialize)]
        struct Response {
            account_groups: Vec<AccountGroup>,
        }

        let request = ApiRequest::get("/link/profile/account_groups.json")
            .bearer(token)
            .optional_query(page.as_ref())?;

        let response: Response = self.inner.execute(request).await?;
        Ok(response.account_groups)
    }

    /// Ask Moneytree to re-aggregate a single account group.
    pub async fn refresh_account_group(
        &self,
        token: &AccessToken,
        group_id: AccountGroupId,
    ) -> Result<()> {
        let path = format!("/link/profile/account_groups/{}/refresh.json", group_id);
        self.inner
            .execute_empty(ApiRequest::post(path).bearer(token))
            .await
    }
}
