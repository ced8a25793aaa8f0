//! Point account endpoints.

use std::sync::Arc;

use crate::api::query::{PageQuery, TransactionsQuery};
use crate::auth::AccessToken;
use crate::client::{ApiRequest, ClientInner};
use crate::models::{AccountCategory, AccountId, PointAccount, PointExpiration, PointTransaction};
use crate::Result;

/// Service for loyalty point accounts.
pub struct PointAccountsService {
    inner: Arc<ClientInner>,
}

impl PointAccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn path(account_id: AccountId, resource: &str) -> String {
        format!(
            "{}/{}/{}.json",
            AccountCategory::Point.path_prefix(),
            account_id,
            resource
        )
    }

    /// List point accounts.
    pub async fn list(
        &self,
        token: &AccessToken,
        page: Option<PageQuery>,
    ) -> Result<Vec<PointAccount>> {
        #[derive(serde::Deserialize)]
        struct Response {
            point_accounts: Vec<PointAccount>,
        }

        let request = ApiRequest::get(format!("{}.json", AccountCategory::Point.path_prefix()))
            .bearer(token)
            .optional_query(page.as_ref())?;

        let response: Response = self.inner.execute(request).await?;
        Ok(response.point_accounts)
    }

    /// List point transactions of an account.
    pub async fn transactions(
        &self,
        token: &AccessToken,
        account_id: AccountId,
        query: Option<TransactionsQuery>,
    ) -> Result<Vec<PointTransaction>> {
        #[derive(serde::Deserialize)]
        struct Response {
            transactions: Vec<PointTransaction>,
        }

        let request = ApiRequest::get(Self::path(account_id, "transactions"))
            .bearer(token)
            .optional_query(query.as_ref())?;

        let response: Response = self.inner.execute(request).await?;
        Ok(response.transactions)
    }

    /// List upcoming point expirations of an account.
    pub async fn expirations(
        &self,
        token: &AccessToken,
        account_id: AccountId,
        page: Option<PageQuery>,
    ) -> Result<Vec<PointExpiration>> {
        #[derive(serde::Deserialize)]
        struct Response {
            point_expirations: Vec<PointExpiration>,
        }

        let request = ApiRequest::get(Self::path(account_id, "expirations"))
            .bearer(token)
            .optional_query(page.as_ref())?;

        let response: Response = self.inner.execute(request).await?;
        Ok(response.point_expirations)
    }
}
