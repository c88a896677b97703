pub use self::{
    account_response::AccountResponse,
    account_signals::AccountSignals,
    attestation_response::AttestationResponse,
    credit_factors::CreditFactors,
    credit_profile::CreditProfile,
    risk_tier::RiskTier,
    scored_account::ScoredAccount,
    signal_source::SignalSource,
};

mod account_response;
mod account_signals;
mod attestation_response;
mod credit_factors;
mod credit_profile;
mod risk_tier;
mod scored_account;
mod signal_source;
