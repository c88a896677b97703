use crate::types::CreditFactors;

/// Factor weights in hundredths. They sum to 100.
const W_ACTIVITY: i64 = 30;
const W_BALANCE: i64 = 25;
const W_INCOME: i64 = 30;
const W_HISTORY: i64 = 15;

/// Weighted credit score in [0,100]. Integer arithmetic keeps the floor
/// exact: floor(a*0.30 + b*0.25 + i*0.30 + h*0.15).
pub fn aggregate(factors: &CreditFactors) -> i64 {
    (factors.on_chain_activity * W_ACTIVITY
        + factors.wallet_balance * W_BALANCE
        + factors.income_verification * W_INCOME
        + factors.transaction_history * W_HISTORY)
        / 100
}
