//! Institution lookup.

use std::sync::Arc;

use crate::api::query::PageQuery;
use crate::auth::AccessToken;
use crate::client::{ApiRequest, ClientInner};
use crate::models::Institution;
use crate::Result;

/// Service for the institution directory.
pub struct InstitutionsService {
    inner: Arc<ClientInner>,
}

impl InstitutionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List institutions Moneytree can aggregate from.
    pub async fn list(
        &self,
        token: &AccessToken,
        page: Option<PageQuery>,
    ) -> Result<Vec<Institution>> {
        #[derive(serde::Deserialize)]
        struct Response {
            institutions: Vec<Institution>,
        }

        let request = ApiRequest::get("/link/institutions.json")
            .bearer(token)
            .optional_query(page.as_ref())?;

        let response: Response = self.inner.execute(request).await?;
        Ok(response.institutions)
    }
}
