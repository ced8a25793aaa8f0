//! Balance and term deposit models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::AccountId;

/// Daily balance of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    /// Balance record ID
    pub id: i64,
    /// Account the balance belongs to
    pub account_id: AccountId,
    /// Balance in the account currency
    pub balance: Decimal,
    /// Balance converted to the profile's base currency
    #[serde(default)]
    pub balance_in_base: Option<Decimal>,
    /// Kind of balance (e.g. `closing`), when the institution reports one
    #[serde(default)]
    pub balance_type: Option<String>,
    /// Day the balance applies to
    pub date: NaiveDate,
}

/// A fixed-term deposit held in an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermDeposit {
    /// Term deposit ID
    pub id: i64,
    /// Account holding the deposit
    pub account_id: AccountId,
    /// ISO currency code
    #[serde(default)]
    pub currency: String,
    /// Description from the institution
    #[serde(default)]
    pub description: Option<String>,
    /// Date the deposit was placed
    #[serde(default)]
    pub trade_date: Option<NaiveDate>,
    /// Date the deposit matures
    #[serde(default)]
    pub maturity_date: Option<NaiveDate>,
    /// Contracted annual interest rate, in percent
    #[serde(default)]
    pub contract_interest_rate: Option<Decimal>,
    /// Current value
    pub current_value: Decimal,
    /// Current value in the profile's base currency
    #[serde(default)]
    pub current_value_in_base: Option<Decimal>,
    /// Principal originally deposited
    #[serde(default)]
    pub cost_basis: Option<Decimal>,
}

impl TermDeposit {
    /// Returns `true` if the deposit has matured on or before `today`.
    pub fn is_matured(&self, today: NaiveDate) -> bool {
        self.maturity_date.is_some_and(|d| d <= today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_balance() {
        let json = r#"{"id": 1, "account_id": 1001, "balance": 98000, "date": "2024-02-29"}"#;
        let balance: Balance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(balance.balance_in_base.is_none());
    }

    #[test]
    fn test_term_deposit_maturity() {
        let json = r#"{
            "id": 3,
            "account_id": 1001,
            "currency": "JPY",
            "trade_date": "2023-04-01",
            "maturity_date": "2024-04-01",
            "current_value": 1000000
        }"#;
        let deposit: TermDeposit = serde_json::from_str(json).unwrap();

        assert!(!deposit.is_matured(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
        assert!(deposit.is_matured(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
    }
}
