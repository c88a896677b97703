use std::{str::FromStr as _, time::Duration};

use bigdecimal::{BigDecimal, Zero};
use reqwest::Client;
use tracing::debug;

use crate::{
    configuration::Config, error::Error, types::AttestationResponse,
};

/// Client for the income attestation provider.
#[derive(Debug)]
pub struct Attestation {
    client: Client,
    config: Config,
}

impl Attestation {
    pub fn new(config: Config) -> Result<Attestation, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Attestation { client, config })
    }

    /// Verified monthly income for an address. An unverified account
    /// maps to zero income, per the data-model invariant.
    pub async fn get_verified_income(
        &self,
        address: &str,
    ) -> Result<BigDecimal, Error> {
        let url = self.config.get_attestation_url(address);
        debug!("querying attestation provider: {}", &url);

        let json = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<AttestationResponse>()
            .await?;

        if !json.verified {
            return Ok(BigDecimal::zero());
        }

        let income = BigDecimal::from_str(&json.monthly_income)?;
        Ok(income)
    }
}
