//! API service modules for Moneytree endpoints.
//!
//! Each service covers one group of endpoints and is obtained from
//! [`MoneytreeClient`](crate::MoneytreeClient). Every method performs
//! exactly one HTTP request and takes the caller's access token.

mod accounts;
mod institutions;
mod points;
mod profile;
mod query;

pub use accounts::AccountsService;
pub use institutions::InstitutionsService;
pub use points::PointAccountsService;
pub use profile::ProfileService;
pub use query::{PageQuery, TransactionsQuery};
