use serde::Deserialize;

/// Wire shape of the chain RPC account query. Numbers arrive as strings.
#[derive(Debug, Deserialize)]
pub struct AccountResponse {
    #[serde(alias = "transaction-count")]
    pub transaction_count: String,
    #[serde(alias = "native-balance")]
    pub native_balance: String,
}
