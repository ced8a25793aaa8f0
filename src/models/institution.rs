//! Financial institution models.

use serde::{Deserialize, Serialize};

use super::primitives::InstitutionId;

/// A bank, card issuer or point program Moneytree can aggregate from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    /// Institution ID
    pub id: InstitutionId,
    /// Stable key referenced by accounts and account groups
    pub entity_key: String,
    /// Institution name
    pub name: String,
    /// Phonetic reading of the name
    #[serde(default)]
    pub name_reading: Option<String>,
    /// Kind of institution, e.g. `bank` or `credit_card`
    #[serde(default)]
    pub institution_type: Option<String>,
    /// Availability, e.g. `available` or `unavailable`
    #[serde(default)]
    pub status: Option<String>,
    /// Public website
    #[serde(default)]
    pub url: Option<String>,
}

impl Institution {
    /// Returns `true` unless the institution is reported unavailable.
    pub fn is_available(&self) -> bool {
        self.status.as_deref() != Some("unavailable")
    }
}
