//! JSON API surface

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::ClimadexError;
use crate::models::LookupResult;
use crate::orchestrator;
use crate::rand_source::RandomSource;

/// Shared, immutable per-process state
#[derive(Clone)]
pub struct AppState {
    /// One client for all upstream calls; carries the identifying User-Agent
    /// the geocoding provider requires
    pub http: reqwest::Client,
    pub config: Arc<AppConfig>,
    pub rand: Arc<dyn RandomSource>,
}

#[derive(Debug, Deserialize)]
struct CityQuery {
    city: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/weather-item", get(weather_item))
}

async fn weather_item(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<LookupResult>, ClimadexError> {
    let city = query.city.as_deref().map(str::trim).unwrap_or_default();
    if city.is_empty() {
        return Err(ClimadexError::validation("city parameter is required"));
    }

    let result = orchestrator::lookup_city(&state, city).await?;
    Ok(Json(result))
}
