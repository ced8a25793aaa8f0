//! Identifier newtypes.
//!
//! Moneytree identifies every resource with an integer. Wrapping them keeps
//! an account ID from being passed where an account group ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an identifier from its raw value.
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the raw value.
            pub const fn get(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

id_type! {
    /// Identifier of a personal, corporate or point account.
    ///
    /// # Example
    ///
    /// ```
    /// use moneytree::AccountId;
    ///
    /// let id = AccountId::new(42);
    /// assert_eq!(id.to_string(), "42");
    /// ```
    AccountId
}

id_type! {
    /// Identifier of an account group (one set of institution credentials).
    AccountGroupId
}

id_type! {
    /// Identifier of a financial institution.
    InstitutionId
}

id_type! {
    /// Identifier of a transaction.
    TransactionId
}
