use actix_web::{get, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::{
    cache_keys,
    configuration::{AppState, State},
    error::Error,
    handler::fetch_signals,
    scoring::{aggregate, normalize},
    types::{CreditFactors, SignalSource},
};

/// Factor breakdown for dashboard cards. Reuses cached signals when the
/// profile endpoint has already scored the address.
#[get("/factors")]
async fn index(
    state: web::Data<AppState<State>>,
    data: web::Query<Query>,
) -> Result<HttpResponse, Error> {
    let address = data.address.trim();
    if address.is_empty() {
        return Err(Error::InvalidAddress(String::from("empty address")));
    }

    let key = cache_keys::profile_key(address);

    let (source, signals) = match state.profile_cache.get(&key).await {
        Some(scored) => (scored.source, scored.signals),
        None => fetch_signals(&state, address).await?,
    };

    let factors = normalize(&signals);
    let credit_score = aggregate(&factors);

    Ok(HttpResponse::Ok().json(Response {
        address: address.to_owned(),
        source,
        factors,
        credit_score,
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub address: String,
    pub source: SignalSource,
    pub factors: CreditFactors,
    pub credit_score: i64,
}

#[derive(Debug, Deserialize)]
pub struct Query {
    address: String,
}
