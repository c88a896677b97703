use bigdecimal::{num_bigint::BigInt, BigDecimal};

use crate::types::RiskTier;

/// Maps a credit score to its risk tier. Boundaries are closed on the
/// lower bound: a score of exactly 80 is excellent.
pub fn classify(score: i64) -> RiskTier {
    match score {
        s if s >= 80 => RiskTier::Excellent,
        s if s >= 60 => RiskTier::Good,
        s if s >= 40 => RiskTier::Fair,
        _ => RiskTier::Building,
    }
}

/// Annual interest rate offered at the given tier, in percent.
pub fn interest_rate_apr(tier: RiskTier) -> BigDecimal {
    let tenths: i64 = match tier {
        RiskTier::Excellent => 35,
        RiskTier::Good => 55,
        RiskTier::Fair => 85,
        RiskTier::Building => 120,
    };

    BigDecimal::new(BigInt::from(tenths), 1)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn tier_boundaries_are_closed_below() {
        assert_eq!(classify(0), RiskTier::Building);
        assert_eq!(classify(39), RiskTier::Building);
        assert_eq!(classify(40), RiskTier::Fair);
        assert_eq!(classify(59), RiskTier::Fair);
        assert_eq!(classify(60), RiskTier::Good);
        assert_eq!(classify(79), RiskTier::Good);
        assert_eq!(classify(80), RiskTier::Excellent);
        assert_eq!(classify(100), RiskTier::Excellent);
    }

    #[test]
    fn apr_per_tier() {
        let apr = |s: &str| BigDecimal::from_str(s).unwrap();

        assert_eq!(interest_rate_apr(RiskTier::Excellent), apr("3.5"));
        assert_eq!(interest_rate_apr(RiskTier::Good), apr("5.5"));
        assert_eq!(interest_rate_apr(RiskTier::Fair), apr("8.5"));
        assert_eq!(interest_rate_apr(RiskTier::Building), apr("12.0"));
    }
}
