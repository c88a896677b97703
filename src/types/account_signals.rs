use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Raw, unscored observations about a wallet. A missing income
/// attestation is represented as a zero income rather than an Option so
/// the scoring arithmetic never special-cases absent data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSignals {
    pub transaction_count: u64,
    pub native_balance: BigDecimal,
    pub verified_monthly_income: BigDecimal,
}

impl AccountSignals {
    /// Range-checked constructor for boundary code that prefers an error
    /// over silent clamping. The scoring core itself clamps.
    pub fn try_new(
        transaction_count: u64,
        native_balance: BigDecimal,
        verified_monthly_income: BigDecimal,
    ) -> Result<AccountSignals, Error> {
        if native_balance < BigDecimal::zero() {
            return Err(Error::InvalidSignals(format!(
                "negative native balance: {}",
                native_balance
            )));
        }

        if verified_monthly_income < BigDecimal::zero() {
            return Err(Error::InvalidSignals(format!(
                "negative verified income: {}",
                verified_monthly_income
            )));
        }

        Ok(AccountSignals {
            transaction_count,
            native_balance,
            verified_monthly_income,
        })
    }

    pub fn income_verified(&self) -> bool {
        self.verified_monthly_income > BigDecimal::zero()
    }
}
