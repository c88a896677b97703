use serde::Deserialize;

/// Wire shape of the attestation provider income lookup.
#[derive(Debug, Deserialize)]
pub struct AttestationResponse {
    pub verified: bool,
    #[serde(alias = "monthly-income")]
    pub monthly_income: String,
}
