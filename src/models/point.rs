//! Point account models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::AggregationState;
use super::primitives::{AccountGroupId, AccountId, InstitutionId, TransactionId};

/// A loyalty point program account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointAccount {
    /// Account ID
    pub id: AccountId,
    /// Account group the account was aggregated through
    #[serde(default)]
    pub account_group: Option<AccountGroupId>,
    /// Key of the point program
    #[serde(default)]
    pub institution_entity_key: String,
    /// Institution ID
    #[serde(default)]
    pub institution_id: Option<InstitutionId>,
    /// Nickname shown to the user
    #[serde(default)]
    pub nickname: String,
    /// Currency the points convert to
    #[serde(default)]
    pub currency: Option<String>,
    /// Current point balance
    #[serde(default)]
    pub current_balance: Option<Decimal>,
    /// Point balance valued in the profile's base currency
    #[serde(default)]
    pub current_balance_in_base: Option<Decimal>,
    /// State of the most recent aggregation
    #[serde(default)]
    pub aggregation_state: Option<AggregationState>,
    /// Detailed aggregation status
    #[serde(default)]
    pub aggregation_status: Option<String>,
    /// When aggregation last succeeded
    #[serde(default)]
    pub last_aggregated_success: Option<DateTime<Utc>>,
}

/// Points earned or spent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointTransaction {
    /// Transaction ID
    pub id: TransactionId,
    /// Point account the transaction belongs to
    pub account_id: AccountId,
    /// Signed number of points
    pub amount: Decimal,
    /// Transaction date
    pub date: DateTime<Utc>,
    /// Cleaned-up description
    #[serde(default)]
    pub description_pretty: Option<String>,
    /// Description as reported by the program
    #[serde(default)]
    pub description_raw: Option<String>,
}

/// Points that expire on a given day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointExpiration {
    /// Expiration record ID
    pub id: i64,
    /// Point account the points belong to
    pub account_id: AccountId,
    /// Number of points expiring
    pub amount: Decimal,
    /// Day the points expire
    pub expiration_date: NaiveDate,
}
