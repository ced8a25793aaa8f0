//! Personal and corporate account models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{AccountType, AggregationState};
use super::primitives::{AccountGroupId, AccountId, InstitutionId};

/// A bank, card or other financial account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account ID
    pub id: AccountId,
    /// Account group the account was aggregated through
    #[serde(default)]
    pub account_group: Option<AccountGroupId>,
    /// Kind of account
    #[serde(default)]
    pub account_type: Option<AccountType>,
    /// Institution-specific subtype, e.g. `savings`
    #[serde(default)]
    pub account_subtype: Option<String>,
    /// ISO currency code
    #[serde(default)]
    pub currency: String,
    /// Key of the institution holding the account
    #[serde(default)]
    pub institution_entity_key: String,
    /// Institution ID
    #[serde(default)]
    pub institution_id: Option<InstitutionId>,
    /// Account name as reported by the institution
    #[serde(default)]
    pub institution_account_name: Option<String>,
    /// Masked account number
    #[serde(default)]
    pub institution_account_number: Option<String>,
    /// Branch name
    #[serde(default)]
    pub branch_name: Option<String>,
    /// Nickname shown to the user
    #[serde(default)]
    pub nickname: String,
    /// Balance in the account currency
    #[serde(default)]
    pub current_balance: Option<Decimal>,
    /// Balance converted to the profile's base currency
    #[serde(default)]
    pub current_balance_in_base: Option<Decimal>,
    /// When the balance was captured
    #[serde(default)]
    pub current_balance_data_snapshot_at: Option<DateTime<Utc>>,
    /// State of the most recent aggregation
    #[serde(default)]
    pub aggregation_state: Option<AggregationState>,
    /// Detailed aggregation status
    #[serde(default)]
    pub aggregation_status: Option<String>,
    /// When aggregation last ran
    #[serde(default)]
    pub last_aggregated_at: Option<DateTime<Utc>>,
    /// When aggregation last succeeded
    #[serde(default)]
    pub last_aggregated_success: Option<DateTime<Utc>>,
}

impl Account {
    /// Best name to show for this account.
    pub fn display_name(&self) -> &str {
        if !self.nickname.is_empty() {
            return &self.nickname;
        }
        self.institution_account_name
            .as_deref()
            .unwrap_or(&self.institution_entity_key)
    }
}
