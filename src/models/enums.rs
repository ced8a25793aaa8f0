//! Enumeration types for the Moneytree API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of account; each has its own parallel set of endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountCategory {
    /// Accounts owned by the individual user
    Personal,
    /// Business accounts
    Corporate,
    /// Loyalty point programs
    Point,
}

impl AccountCategory {
    /// Path prefix of this category's account endpoints.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            AccountCategory::Personal => "/link/accounts",
            AccountCategory::Corporate => "/link/corporate/accounts",
            AccountCategory::Point => "/link/point_accounts",
        }
    }
}

impl fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountCategory::Personal => write!(f, "personal"),
            AccountCategory::Corporate => write!(f, "corporate"),
            AccountCategory::Point => write!(f, "point"),
        }
    }
}

/// Kind of financial account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Bank deposit account
    Bank,
    /// Credit card
    CreditCard,
    /// Prepaid / electronic money
    StoredValue,
    /// Loyalty points
    Point,
    /// Brokerage account
    Stock,
    /// Manually tracked wallet
    Manual,
    /// Unknown account type
    #[serde(other)]
    Unknown,
}

/// Progress of the most recent data aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationState {
    /// Aggregation is in progress
    Running,
    /// Last aggregation succeeded
    Success,
    /// Last aggregation failed; see `aggregation_status`
    Failed,
    /// Waiting for user action (e.g. additional authentication)
    Suspended,
    /// Unknown state
    #[serde(other)]
    Unknown,
}

impl AggregationState {
    /// Returns `true` while data may still change.
    pub fn is_running(&self) -> bool {
        matches!(self, AggregationState::Running)
    }
}

/// Field transactions are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Transaction date
    Date,
    /// Transaction identifier
    Id,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}
