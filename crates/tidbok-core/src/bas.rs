//! Swedish BAS chart-of-accounts reference data.
//!
//! Tasks reference a BAS account purely as a grouping key for the
//! hours-by-account metric and the accounting reports. The lookup is
//! fixed, read-only reference data -- no task owns an entry.

use serde::{Deserialize, Serialize};

/// A single BAS account: code plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasAccount {
    /// BAS account code, e.g. "1930".
    pub id: String,
    /// Human-readable account name.
    pub name: String,
}

impl BasAccount {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Default BAS account code assigned to new task drafts.
pub const DEFAULT_ACCOUNT: &str = "1930";

/// The fixed five-entry account lookup used by the dashboard.
pub fn standard_accounts() -> Vec<BasAccount> {
    vec![
        BasAccount::new("1930", "Företagskonto / checkräkningskonto"),
        BasAccount::new("5010", "Lokalhyra"),
        BasAccount::new("5800", "Resekostnader"),
        BasAccount::new("6200", "Telekommunikation"),
        BasAccount::new("7010", "Löner"),
    ]
}

/// Look up an account name by code.
pub fn account_name<'a>(accounts: &'a [BasAccount], id: &str) -> Option<&'a str> {
    accounts
        .iter()
        .find(|a| a.id == id)
        .map(|a| a.name.as_str())
}
