use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative risk bucket derived from the credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Building,
    Fair,
    Good,
    Excellent,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tier = match self {
            RiskTier::Building => "building",
            RiskTier::Fair => "fair",
            RiskTier::Good => "good",
            RiskTier::Excellent => "excellent",
        };
        write!(f, "{}", tier)
    }
}
