use bigdecimal::{num_bigint::BigInt, BigDecimal, RoundingMode};

use crate::types::AccountSignals;

pub const MARKETPLACE_MIN_SCORE: i64 = 30;
pub const BORROW_MIN_SCORE: i64 = 40;
pub const AGENTS_MIN_SCORE: i64 = 50;
pub const TRADE_MIN_SCORE: i64 = 60;

/// Share of verified monthly income offered as the borrow ceiling (30%).
const INCOME_SHARE_TENTHS: i64 = 3;

/// Minimum borrow offer when no income attestation backs the estimate.
const MIN_BORROW_OFFER: i64 = 100;

/// Capability flags plus the borrow ceiling unlocked at a given score.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureGates {
    pub can_borrow: bool,
    pub can_use_agents: bool,
    pub can_access_marketplace: bool,
    pub can_trade: bool,
    pub max_borrow_amount: BigDecimal,
}

/// Score-gated capabilities. Thresholds are nested, so every unlocked
/// gate implies all cheaper gates.
pub fn gate(score: i64, signals: &AccountSignals) -> FeatureGates {
    FeatureGates {
        can_borrow: score >= BORROW_MIN_SCORE,
        can_use_agents: score >= AGENTS_MIN_SCORE,
        can_access_marketplace: score >= MARKETPLACE_MIN_SCORE,
        can_trade: score >= TRADE_MIN_SCORE,
        max_borrow_amount: max_borrow_amount(signals),
    }
}

/// 30% of verified monthly income, floored. Without an attestation the
/// ceiling falls back to an on-chain estimate with a minimum offer of
/// 100, regardless of score.
fn max_borrow_amount(signals: &AccountSignals) -> BigDecimal {
    if signals.income_verified() {
        let share = &signals.verified_monthly_income
            * BigDecimal::new(BigInt::from(INCOME_SHARE_TENTHS), 1);
        return share.with_scale_round(0, RoundingMode::Floor);
    }

    let estimate = &signals.native_balance * BigDecimal::from(500)
        + BigDecimal::from(signals.transaction_count)
            * BigDecimal::from(10);

    estimate
        .with_scale_round(0, RoundingMode::Floor)
        .max(BigDecimal::from(MIN_BORROW_OFFER))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    fn unverified(transaction_count: u64, native_balance: &str) -> AccountSignals {
        AccountSignals {
            transaction_count,
            native_balance: BigDecimal::from_str(native_balance).unwrap(),
            verified_monthly_income: BigDecimal::from(0),
        }
    }

    #[test]
    fn gates_unlock_at_their_thresholds() {
        let signals = unverified(0, "0");

        let gates = gate(29, &signals);
        assert!(!gates.can_access_marketplace);

        let gates = gate(30, &signals);
        assert!(gates.can_access_marketplace);
        assert!(!gates.can_borrow);

        let gates = gate(40, &signals);
        assert!(gates.can_borrow);
        assert!(!gates.can_use_agents);

        let gates = gate(50, &signals);
        assert!(gates.can_use_agents);
        assert!(!gates.can_trade);

        let gates = gate(60, &signals);
        assert!(gates.can_trade);
    }

    #[test]
    fn gates_are_nested_by_threshold() {
        let signals = unverified(0, "0");

        for score in 0..=100 {
            let gates = gate(score, &signals);
            if gates.can_trade {
                assert!(gates.can_use_agents);
            }
            if gates.can_use_agents {
                assert!(gates.can_borrow);
            }
            if gates.can_borrow {
                assert!(gates.can_access_marketplace);
            }
        }
    }

    #[test]
    fn verified_income_caps_borrowing_at_thirty_percent() {
        let mut signals = unverified(50, "10");
        signals.verified_monthly_income = BigDecimal::from(3000);

        let gates = gate(95, &signals);
        assert_eq!(gates.max_borrow_amount, BigDecimal::from(900));
    }

    #[test]
    fn income_share_is_floored() {
        let mut signals = unverified(0, "0");
        signals.verified_monthly_income =
            BigDecimal::from_str("999.99").unwrap();

        let gates = gate(0, &signals);
        assert_eq!(gates.max_borrow_amount, BigDecimal::from(299));
    }

    #[test]
    fn unverified_fallback_uses_on_chain_estimate() {
        // 5 * 500 + 10 * 10 = 2600
        let gates = gate(45, &unverified(10, "5"));
        assert_eq!(gates.max_borrow_amount, BigDecimal::from(2600));
    }

    #[test]
    fn fallback_offer_never_drops_below_minimum() {
        let gates = gate(0, &unverified(0, "0"));
        assert_eq!(gates.max_borrow_amount, BigDecimal::from(100));

        let gates = gate(0, &unverified(0, "0.1"));
        assert_eq!(gates.max_borrow_amount, BigDecimal::from(100));
    }
}
