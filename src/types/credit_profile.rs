use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::RiskTier;

/// The externally consumed scoring result. Recomputed on every request,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditProfile {
    pub credit_score: i64,
    pub risk_tier: RiskTier,
    pub interest_rate_apr: BigDecimal,
    pub max_borrow_amount: BigDecimal,
    pub can_borrow: bool,
    pub can_use_agents: bool,
    pub can_access_marketplace: bool,
    pub can_trade: bool,
}
