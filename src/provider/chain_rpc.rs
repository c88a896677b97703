use std::{str::FromStr as _, time::Duration};

use bigdecimal::BigDecimal;
use reqwest::Client;
use tracing::debug;

use crate::{
    configuration::Config, error::Error, types::AccountResponse,
};

/// Client for the upstream wallet RPC that reports per-address activity
/// and balance.
#[derive(Debug)]
pub struct ChainRpc {
    client: Client,
    config: Config,
}

impl ChainRpc {
    pub fn new(config: Config) -> Result<ChainRpc, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(ChainRpc { client, config })
    }

    /// Transaction count and native balance for an address. Numbers come
    /// over the wire as strings.
    pub async fn get_account(
        &self,
        address: &str,
    ) -> Result<(u64, BigDecimal), Error> {
        let url = self.config.get_account_url(address);
        debug!("querying chain rpc: {}", &url);

        let json = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<AccountResponse>()
            .await?;

        let transaction_count: u64 = json.transaction_count.parse()?;
        let native_balance = BigDecimal::from_str(&json.native_balance)?;

        Ok((transaction_count, native_balance))
    }
}
