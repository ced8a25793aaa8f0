//! Transaction models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::primitives::{AccountId, TransactionId};

/// A single transaction on a personal or corporate account.
///
/// Descriptions are optional: some institutions send none, and an empty
/// string is kept distinct from an absent value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID
    pub id: TransactionId,
    /// Account the transaction belongs to
    pub account_id: AccountId,
    /// Signed amount; negative for money leaving the account
    pub amount: Decimal,
    /// Transaction date
    pub date: DateTime<Utc>,
    /// Description entered by the user
    #[serde(default)]
    pub description_guest: Option<String>,
    /// Cleaned-up description
    #[serde(default)]
    pub description_pretty: Option<String>,
    /// Description as reported by the institution
    #[serde(default)]
    pub description_raw: Option<String>,
    /// Institution-side transaction identifier
    #[serde(default)]
    pub raw_transaction_id: Option<String>,
    /// Category ID
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Free-form attributes attached by the institution
    #[serde(default)]
    pub attributes: Option<Value>,
    /// When the record was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// The most specific description available: guest, then pretty, then raw.
    pub fn description(&self) -> Option<&str> {
        self.description_guest
            .as_deref()
            .or(self.description_pretty.as_deref())
            .or(self.description_raw.as_deref())
    }

    /// Returns `true` if money left the account.
    pub fn is_outflow(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}
