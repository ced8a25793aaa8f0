//! Personal and corporate account endpoints.

use std::sync::Arc;

use crate::api::query::{PageQuery, TransactionsQuery};
use crate::auth::AccessToken;
use crate::client::{ApiRequest, ClientInner};
use crate::models::{Account, AccountCategory, AccountId, Balance, TermDeposit, Transaction};
use crate::Result;

/// Service for one category of accounts.
///
/// Personal and corporate accounts expose the same operations under
/// different paths; obtain the one you need from
/// [`MoneytreeClient::personal_accounts`](crate::MoneytreeClient::personal_accounts)
/// or [`MoneytreeClient::corporate_accounts`](crate::MoneytreeClient::corporate_accounts).
///
/// # Example
///
/// ```no_run
/// use moneytree::AccessToken;
/// use moneytree::api::TransactionsQuery;
///
/// # async fn example(client: moneytree::MoneytreeClient) -> moneytree::Result<()> {
/// let token = AccessToken::new("access-token");
///
/// for account in client.personal_accounts().list(&token, None).await? {
///     let query = TransactionsQuery::new().per_page(100);
///     let transactions = client
///         .personal_accounts()
///         .transactions(&token, account.id, Some(query))
///         .await?;
///     println!("{}: {} transactions", account.display_name(), transactions.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
    category: AccountCategory,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>, category: AccountCategory) -> Self {
        Self { inner, category }
    }

    /// The category this service talks to.
    pub fn category(&self) -> AccountCategory {
        self.category
    }

    fn path(&self, account_id: AccountId, resource: &str) -> String {
        format!(
            "{}/{}/{}.json",
            self.category.path_prefix(),
            account_id,
            resource
        )
    }

    /// List accounts.
    pub async fn list(&self, token: &AccessToken, page: Option<PageQuery>) -> Result<Vec<Account>> {
        #[derive(serde::Deserialize)]
        struct Response {
            accounts: Vec<Account>,
        }

        let request = ApiRequest::get(format!("{}.json", self.category.path_prefix()))
            .bearer(token)
            .optional_query(page.as_ref())?;

        let response: Response = self.inner.execute(request).await?;
        Ok(response.accounts)
    }

    /// List daily balances of an account.
    pub async fn balances(
        &self,
        token: &AccessToken,
        account_id: AccountId,
        page: Option<PageQuery>,
    ) -> Result<Vec<Balance>> {
        #[derive(serde::Deserialize)]
        struct Response {
            account_balances: Vec<Balance>,
        }

        let request = ApiRequest::get(self.path(account_id, "balances"))
            .bearer(token)
            .optional_query(page.as_ref())?;

        let response: Response = self.inner.execute(request).await?;
        Ok(response.account_balances)
    }

    /// List transactions of an account.
    ///
    /// # Arguments
    ///
    /// * `token` - The caller's access token
    /// * `account_id` - The account to query
    /// * `query` - Optional paging, `since` filter and ordering
    pub async fn transactions(
        &self,
        token: &AccessToken,
        account_id: AccountId,
        query: Option<TransactionsQuery>,
    ) -> Result<Vec<Transaction>> {
        #[derive(serde::Deserialize)]
        struct Response {
            transactions: Vec<Transaction>,
        }

        let request = ApiRequest::get(self.path(account_id, "transactions"))
            .bearer(token)
            .optional_query(query.as_ref())?;

        let response: Response = self.inner.execute(request).await?;
        Ok(response.transactions)
    }

    /// List term deposits held in an account.
    pub async fn term_deposits(
        &self,
        token: &AccessToken,
        account_id: AccountId,
        page: Option<PageQuery>,
    ) -> Result<Vec<TermDeposit>> {
        #[derive(serde::Deserialize)]
        struct Response {
            term_deposits: Vec<TermDeposit>,
        }

        let request = ApiRequest::get(self.path(account_id, "term_deposits"))
            .bearer(token)
            .optional_query(page.as_ref())?;

        let response: Response = self.inner.execute(request).await?;
        Ok(response.term_deposits)
    }
}
