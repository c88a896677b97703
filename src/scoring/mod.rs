//! The scoring core: pure, stateless computation from raw account
//! signals to a credit profile. Every caller (API routes, background
//! tasks, tests) goes through [`compute_credit_profile`] so the formula
//! cannot drift between call sites.

pub use self::{
    aggregate::aggregate,
    gate::{gate, FeatureGates},
    normalize::normalize,
    tier::{classify, interest_rate_apr},
};

mod aggregate;
mod gate;
mod normalize;
mod tier;

use crate::types::{AccountSignals, CreditProfile};

/// Single entry point for consumers: normalizes, aggregates, classifies
/// and gates in one pass. Pure and total; identical signals always
/// produce an identical profile.
pub fn compute_credit_profile(signals: &AccountSignals) -> CreditProfile {
    let factors = normalize(signals);
    let credit_score = aggregate(&factors);
    let risk_tier = classify(credit_score);
    let gates = gate(credit_score, signals);

    CreditProfile {
        credit_score,
        risk_tier,
        interest_rate_apr: interest_rate_apr(risk_tier),
        max_borrow_amount: gates.max_borrow_amount,
        can_borrow: gates.can_borrow,
        can_use_agents: gates.can_use_agents,
        can_access_marketplace: gates.can_access_marketplace,
        can_trade: gates.can_trade,
    }
}
