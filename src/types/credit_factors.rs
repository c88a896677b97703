use serde::{Deserialize, Serialize};

/// The four normalized sub-scores, each clamped to [0,100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditFactors {
    pub on_chain_activity: i64,
    pub wallet_balance: i64,
    pub income_verification: i64,
    pub transaction_history: i64,
}
