//! Profile and account group models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::AggregationState;
use super::primitives::{AccountGroupId, InstitutionId};

/// The signed-in Moneytree user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Stable Moneytree user identifier
    pub moneytree_id: String,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Locale, e.g. `ja_JP`
    #[serde(default)]
    pub locale_identifier: Option<String>,
    /// Country code
    #[serde(default)]
    pub country: Option<String>,
    /// Base currency amounts are converted into
    #[serde(default)]
    pub currency: Option<String>,
}

/// One set of institution credentials and the accounts behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountGroup {
    /// Account group ID
    pub id: AccountGroupId,
    /// Key of the institution the credentials belong to
    pub institution_entity_key: String,
    /// Institution ID
    #[serde(default)]
    pub institution_id: Option<InstitutionId>,
    /// Display name chosen by the user
    #[serde(default)]
    pub display_name: Option<String>,
    /// State of the most recent aggregation
    #[serde(default)]
    pub aggregation_state: Option<AggregationState>,
    /// Detailed aggregation status, e.g. `auth.creds.invalid`
    #[serde(default)]
    pub aggregation_status: Option<String>,
    /// When aggregation last ran
    #[serde(default)]
    pub last_aggregated_at: Option<DateTime<Utc>>,
    /// When aggregation last succeeded
    #[serde(default)]
    pub last_aggregated_success: Option<DateTime<Utc>>,
}
