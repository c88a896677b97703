use bigdecimal::{BigDecimal, Zero};
use tracing::warn;

use crate::{
    configuration::{AppState, State},
    error::Error,
    types::{AccountSignals, SignalSource},
};

/// Fetches signals for an address from the chain RPC and the attestation
/// provider. A failed or invalid RPC read yields deterministic synthetic
/// signals tagged as fallback instead of an error; a failed attestation
/// lookup only downgrades the income to unverified.
pub async fn fetch_signals(
    state: &AppState<State>,
    address: &str,
) -> Result<(SignalSource, AccountSignals), Error> {
    let (account, attestation) = futures::join!(
        state.chain_rpc.get_account(address),
        state.attestation.get_verified_income(address),
    );

    let (transaction_count, native_balance) = match account {
        Ok(data) => data,
        Err(e) => {
            warn!(
                "chain rpc unavailable for {}, substituting fallback signals: {}",
                address, e
            );
            return Ok((SignalSource::Fallback, fallback_signals(address)));
        },
    };

    let verified_monthly_income = match attestation {
        Ok(income) => income,
        Err(e) => {
            warn!(
                "attestation unavailable for {}, treating as unverified: {}",
                address, e
            );
            BigDecimal::zero()
        },
    };

    match AccountSignals::try_new(
        transaction_count,
        native_balance,
        verified_monthly_income,
    ) {
        Ok(signals) => Ok((SignalSource::Chain, signals)),
        Err(e) => {
            warn!(
                "chain rpc returned out-of-range signals for {}, substituting fallback: {}",
                address, e
            );
            Ok((SignalSource::Fallback, fallback_signals(address)))
        },
    }
}

/// Synthetic signals derived from the address digest. Deterministic, so
/// repeated requests for the same address score identically. Income stays
/// zero because an attestation cannot be synthesized.
fn fallback_signals(address: &str) -> AccountSignals {
    let digest = sha256::digest(address.to_lowercase());
    let bytes = digest.as_bytes();

    AccountSignals {
        transaction_count: u64::from(bytes[0] % 64),
        native_balance: BigDecimal::from(bytes[1] % 16),
        verified_monthly_income: BigDecimal::zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_signals_are_deterministic() {
        let a = fallback_signals("0xAbC123");
        let b = fallback_signals("0xabc123");

        assert_eq!(a, b);
    }

    #[test]
    fn fallback_income_is_always_unverified() {
        for address in ["0xabc", "0xdef", "nolus1xyz"] {
            let signals = fallback_signals(address);
            assert!(!signals.income_verified());
            assert!(signals.transaction_count < 64);
        }
    }
}
