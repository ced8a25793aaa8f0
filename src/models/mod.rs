//! Data models for the Moneytree API.
//!
//! Plain decoded records, organized by domain:
//!
//! - [`primitives`] - Identifier newtypes like `AccountId`
//! - [`enums`] - Account categories, aggregation states, sort options
//! - [`profile`] - Profile and account groups
//! - [`account`] - Personal and corporate accounts
//! - [`transaction`] - Account transactions
//! - [`balance`] - Balances and term deposits
//! - [`point`] - Point accounts, point transactions and expirations
//! - [`institution`] - Financial institutions
//!
//! Fields the API omits on some records are `Option`s, never sentinel values.

pub mod primitives;
pub mod enums;
pub mod profile;
pub mod account;
pub mod transaction;
pub mod balance;
pub mod point;
pub mod institution;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use profile::*;
pub use account::*;
pub use transaction::*;
pub use balance::*;
pub use point::*;
pub use institution::*;
