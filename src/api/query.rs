//! Query parameters shared by list endpoints.
//!
//! These describe a single page. Walking through pages is up to the
//! caller: keep requesting the next `page` until a short page comes back.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{SortKey, SortOrder};

/// Page selection for list endpoints.
///
/// # Example
///
/// ```
/// use moneytree::api::PageQuery;
///
/// let query = PageQuery::new().page(2).per_page(100);
/// assert_eq!(query.page, Some(2));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl PageQuery {
    /// Create an empty query (server defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a page.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

/// Query parameters for listing transactions.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TransactionsQuery {
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Only transactions updated at or after this instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
    /// Field to sort by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<SortKey>,
    /// Sort direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortOrder>,
}

impl TransactionsQuery {
    /// Create an empty query (server defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a page.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Only return transactions updated since `since`.
    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    /// Order results.
    pub fn sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_key = Some(key);
        self.sort_by = Some(order);
        self
    }
}
