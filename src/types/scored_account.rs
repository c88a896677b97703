use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccountSignals, CreditProfile, SignalSource};

/// A fully scored account as served to clients and held in the profile
/// cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredAccount {
    pub address: String,
    pub source: SignalSource,
    pub signals: AccountSignals,
    pub profile: CreditProfile,
    pub computed_at: DateTime<Utc>,
}
