use std::{env, fs, ops::Deref, sync::Arc};

use url::Url;

use crate::{
    cache::TimedCache,
    error::Error,
    provider::{Attestation, ChainRpc},
    types::ScoredAccount,
};

#[derive(Debug)]
pub struct AppState<T>(Arc<T>);

impl<T> AppState<T> {
    pub fn new(state: T) -> AppState<T> {
        AppState(Arc::new(state))
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> AppState<T> {
        AppState(Arc::clone(&self.0))
    }
}

impl<T> Deref for AppState<T> {
    type Target = Arc<T>;

    fn deref(&self) -> &Arc<T> {
        &self.0
    }
}

#[derive(Debug)]
pub struct State {
    pub config: Config,
    pub chain_rpc: ChainRpc,
    pub attestation: Attestation,
    pub profile_cache: TimedCache<ScoredAccount>,
}

impl State {
    pub fn new(
        config: Config,
        chain_rpc: ChainRpc,
        attestation: Attestation,
    ) -> State {
        let profile_cache = TimedCache::new(config.profile_cache_ttl);
        State {
            config,
            chain_rpc,
            attestation,
            profile_cache,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub chain_rpc_host: String,
    pub attestation_host: String,
    pub timeout: u64,
    pub profile_cache_ttl: u64,
    pub cache_sweep_interval: u64,
}

impl Config {
    pub fn get_account_url(&self, address: &str) -> String {
        format!(
            "{}/account/{}",
            self.chain_rpc_host.trim_end_matches('/'),
            address
        )
    }

    pub fn get_attestation_url(&self, address: &str) -> String {
        format!(
            "{}/attestation/{}",
            self.attestation_host.trim_end_matches('/'),
            address
        )
    }
}

pub fn get_configuration() -> Result<Config, Error> {
    let server_host = env::var("SERVER_HOST")?;
    let port: u16 = env::var("PORT")?.parse()?;
    let allowed_origins = env::var("ALLOWED_ORIGINS")?
        .split(',')
        .map(|item| item.to_owned())
        .collect::<Vec<String>>();

    let chain_rpc_host = env::var("CHAIN_RPC_HOST")?;
    Url::parse(&chain_rpc_host)?;

    let attestation_host = env::var("ATTESTATION_HOST")?;
    Url::parse(&attestation_host)?;

    let timeout = env::var("TIMEOUT")?.parse()?;
    let profile_cache_ttl =
        env::var("PROFILE_CACHE_TTL_IN_SEC")?.parse()?;
    let cache_sweep_interval =
        env::var("CACHE_SWEEP_INTERVAL_IN_SEC")?.parse()?;

    let config = Config {
        server_host,
        port,
        allowed_origins,
        chain_rpc_host,
        attestation_host,
        timeout,
        profile_cache_ttl,
        cache_sweep_interval,
    };

    Ok(config)
}

pub fn set_configuration() -> Result<(), Error> {
    let config_file: &str = ".env";

    let directory = env!("CARGO_MANIFEST_DIR");
    let path = format!("{}/{}", directory, config_file);

    let config_string = fs::read_to_string(path)?;
    parse_config_string(config_string);

    Ok(())
}

fn parse_config_string(config: String) {
    let params: Vec<Option<(&str, &str)>> = config
        .split('\n')
        .map(|s| {
            let element = s.find('=');
            if let Some(e) = element {
                return Some(s.split_at(e));
            }
            None
        })
        .map(|value| {
            if let Some((k, v)) = value {
                return Some((k, &v[1..]));
            }
            None
        })
        .collect();

    for (key, value) in params.into_iter().flatten() {
        std::env::set_var(key, value);
    }
}
