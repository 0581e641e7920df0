use serde::{Deserialize, Serialize};

/// A single account owned by a client.
///
/// `amount` is a signed whole number with no currency semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i32,
    pub account_type: String,
    pub amount: i32,
    pub client_id: i32,
}

impl Account {
    #[must_use]
    pub fn new(id: i32, account_type: impl Into<String>, amount: i32, client_id: i32) -> Self {
        Self { id, account_type: account_type.into(), amount, client_id }
    }
}

/// Request body for creating or replacing an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInput {
    #[serde(default)]
    pub account_type: String,
    pub amount: i32,
}

impl AccountInput {
    #[must_use]
    pub fn new(account_type: impl Into<String>, amount: i32) -> Self {
        Self { account_type: account_type.into(), amount }
    }

    #[must_use]
    pub fn has_blank_type(&self) -> bool {
        crate::is_blank(&self.account_type)
    }

    /// Materialize the stored record once the owning client and id are known.
    #[must_use]
    pub fn into_account(self, id: i32, client_id: i32) -> Account {
        Account::new(id, self.account_type, self.amount, client_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_serializes_camel_case() {
        let json = serde_json::to_value(Account::new(2, "Checking", -15, 1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 2, "accountType": "Checking", "amount": -15, "clientId": 1})
        );
    }

    #[test]
    fn input_parses_request_body() {
        let input: AccountInput =
            serde_json::from_str(r#"{"accountType": "Savings", "amount": 10000}"#).unwrap();
        assert_eq!(input, AccountInput::new("Savings", 10000));
        assert_eq!(input.into_account(5, 1), Account::new(5, "Savings", 10000, 1));
    }

    #[test]
    fn blank_type_detected() {
        assert!(AccountInput::new("", 1000).has_blank_type());
        assert!(AccountInput::new("             ", 1000).has_blank_type());
        assert!(!AccountInput::new("Savings", 1000).has_blank_type());
    }
}
