//! Request/query types (Deserialize)

use serde::Deserialize;

/// Optional amount bounds on the account listing.
///
/// Values stay raw strings; parsing happens in the service so a malformed
/// bound is reported with the exact text the caller sent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountQuery {
    pub amount_greater_than: Option<String>,
    pub amount_less_than: Option<String>,
}
