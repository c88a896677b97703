//! Background eviction of expired profile cache entries.
//!
//! Entries are evicted lazily on read as well; the sweeper keeps the
//! per-address map from growing without bound between requests.

use std::time::Duration;

use tokio::time::interval;
use tracing::{debug, info};

use crate::{
    configuration::{AppState, State},
    error::Error,
};

pub async fn sweep_task(app_state: AppState<State>) -> Result<(), Error> {
    info!("Starting profile cache sweeper");

    let mut sweep_interval = interval(Duration::from_secs(
        app_state.config.cache_sweep_interval,
    ));
    sweep_interval.tick().await;

    loop {
        sweep_interval.tick().await;

        let evicted = app_state.profile_cache.sweep().await;
        if evicted > 0 {
            debug!("evicted {} expired profile entries", evicted);
        }
    }
}
