use serde::{Deserialize, Serialize};

use crate::Account;

/// Client row without its accounts, as returned by list and lookup queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl ClientSummary {
    #[must_use]
    pub fn new(id: i32, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self { id, first_name: first_name.into(), last_name: last_name.into() }
    }

    /// Attach the client's accounts, producing the composed read model.
    #[must_use]
    pub fn with_accounts(self, accounts: Vec<Account>) -> Client {
        Client { id: self.id, first_name: self.first_name, last_name: self.last_name, accounts }
    }
}

/// A client together with the accounts it owns.
///
/// Accounts are only populated when composing read responses; they are never
/// written back through the client table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl Client {
    /// A freshly created client, which never owns accounts yet.
    #[must_use]
    pub fn new(id: i32, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        ClientSummary::new(id, first_name, last_name).with_accounts(Vec::new())
    }
}

/// Request body for creating or replacing a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInput {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl ClientInput {
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self { first_name: first_name.into(), last_name: last_name.into() }
    }

    /// Whether either name is empty once surrounding whitespace is removed.
    #[must_use]
    pub fn has_blank_name(&self) -> bool {
        crate::is_blank(&self.first_name) || crate::is_blank(&self.last_name)
    }
}
