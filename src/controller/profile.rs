use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    cache_keys,
    configuration::{AppState, State},
    error::Error,
    handler::fetch_signals,
    scoring::compute_credit_profile,
    types::ScoredAccount,
};

#[get("/profile")]
async fn index(
    state: web::Data<AppState<State>>,
    data: web::Query<Query>,
) -> Result<HttpResponse, Error> {
    let address = data.address.trim();
    if address.is_empty() {
        return Err(Error::InvalidAddress(String::from("empty address")));
    }

    let key = cache_keys::profile_key(address);

    if let Some(scored) = state.profile_cache.get(&key).await {
        return Ok(HttpResponse::Ok().json(scored));
    }

    let (source, signals) = fetch_signals(&state, address).await?;
    let profile = compute_credit_profile(&signals);

    let scored = ScoredAccount {
        address: address.to_owned(),
        source,
        signals,
        profile,
        computed_at: Utc::now(),
    };

    state.profile_cache.set(&key, scored.clone()).await;

    Ok(HttpResponse::Ok().json(scored))
}

#[derive(Debug, Deserialize)]
pub struct Query {
    address: String,
}
