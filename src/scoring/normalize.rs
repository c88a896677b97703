use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};

use crate::types::{AccountSignals, CreditFactors};

/// Score awarded by the income step function for any verified income.
const VERIFIED_INCOME_SCORE: i64 = 85;

/// Transactions needed to saturate the activity factor.
const ACTIVITY_SATURATION_TX: u64 = 10;

/// Transactions needed to saturate the history factor. Intentionally a
/// different denominator than the activity factor.
const HISTORY_SATURATION_TX: u64 = 50;

/// Converts raw account signals into the four 0-100 sub-scores. Inputs
/// are coerced by clamping, never rejected.
pub fn normalize(signals: &AccountSignals) -> CreditFactors {
    let income_verification = if signals.income_verified() {
        VERIFIED_INCOME_SCORE
    } else {
        0
    };

    CreditFactors {
        on_chain_activity: clamp_ratio(
            signals.transaction_count,
            ACTIVITY_SATURATION_TX,
        ),
        wallet_balance: clamp_decimal(
            &(&signals.native_balance * BigDecimal::from(10)),
        ),
        income_verification,
        transaction_history: clamp_ratio(
            signals.transaction_count,
            HISTORY_SATURATION_TX,
        ),
    }
}

/// (count / denominator) * 100, clamped to [0,100].
fn clamp_ratio(count: u64, denominator: u64) -> i64 {
    (count.saturating_mul(100) / denominator).min(100) as i64
}

/// Floors a decimal to an integer and clamps it to [0,100]. Negative
/// values clamp to 0.
fn clamp_decimal(value: &BigDecimal) -> i64 {
    if *value < BigDecimal::zero() {
        return 0;
    }

    if *value >= BigDecimal::from(100) {
        return 100;
    }

    value
        .with_scale_round(0, RoundingMode::Floor)
        .to_i64()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(
        transaction_count: u64,
        native_balance: i64,
        verified_monthly_income: i64,
    ) -> AccountSignals {
        AccountSignals {
            transaction_count,
            native_balance: BigDecimal::from(native_balance),
            verified_monthly_income: BigDecimal::from(verified_monthly_income),
        }
    }

    #[test]
    fn activity_saturates_at_ten_transactions() {
        assert_eq!(normalize(&signals(0, 0, 0)).on_chain_activity, 0);
        assert_eq!(normalize(&signals(9, 0, 0)).on_chain_activity, 90);
        assert_eq!(normalize(&signals(10, 0, 0)).on_chain_activity, 100);
        assert_eq!(normalize(&signals(10_000, 0, 0)).on_chain_activity, 100);
    }

    #[test]
    fn history_saturates_at_fifty_transactions() {
        assert_eq!(normalize(&signals(9, 0, 0)).transaction_history, 18);
        assert_eq!(normalize(&signals(50, 0, 0)).transaction_history, 100);
        assert_eq!(normalize(&signals(51, 0, 0)).transaction_history, 100);
    }

    #[test]
    fn balance_factor_is_floored_and_clamped() {
        use std::str::FromStr as _;

        let mut fractional = signals(0, 0, 0);
        fractional.native_balance = BigDecimal::from_str("3.75").unwrap();
        assert_eq!(normalize(&fractional).wallet_balance, 37);

        assert_eq!(normalize(&signals(0, 10, 0)).wallet_balance, 100);
        assert_eq!(normalize(&signals(0, 1_000_000, 0)).wallet_balance, 100);
    }

    #[test]
    fn negative_balance_clamps_to_zero() {
        assert_eq!(normalize(&signals(0, -5, 0)).wallet_balance, 0);
    }

    #[test]
    fn income_is_a_step_function() {
        assert_eq!(normalize(&signals(0, 0, 0)).income_verification, 0);
        assert_eq!(normalize(&signals(0, 0, 1)).income_verification, 85);
        assert_eq!(
            normalize(&signals(0, 0, 1_000_000)).income_verification,
            85
        );
    }

    #[test]
    fn activity_is_monotonic_in_transaction_count() {
        let mut previous = normalize(&signals(0, 0, 0));
        for count in 1..200 {
            let current = normalize(&signals(count, 0, 0));
            assert!(current.on_chain_activity >= previous.on_chain_activity);
            assert!(
                current.transaction_history >= previous.transaction_history
            );
            previous = current;
        }
    }
}
