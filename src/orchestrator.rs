//! The lookup pipeline
//!
//! One city in, one combined result out. The chain is strictly sequential:
//! geocoding feeds the weather call, the weather code feeds the catalog
//! lookup. Geocoding and weather failures abort the request; catalog
//! failures degrade to an element-only item.

use tracing::{info, warn};

use crate::Result;
use crate::api::AppState;
use crate::error::ClimadexError;
use crate::mapping::{self, ElementKind};
use crate::models::{ItemInfo, LookupResult};
use crate::{catalog, geocode, weather};

/// Run the full pipeline for one city query.
pub async fn lookup_city(state: &AppState, city: &str) -> Result<LookupResult> {
    let location = geocode::search_city(&state.http, &state.config.geocoding_url, city)
        .await?
        .ok_or_else(|| ClimadexError::not_found(format!("City not found: {city}")))?;

    info!(
        "Resolved {city:?} to {} ({}, {})",
        location.display_name, location.latitude, location.longitude
    );

    let current = weather::current_conditions(
        &state.http,
        &state.config.weather_url,
        location.latitude,
        location.longitude,
    )
    .await?;

    // Without a weather code the catalog lookup is skipped entirely and the
    // item keeps the default label.
    let item = match current.as_ref().and_then(|w| w.weathercode) {
        Some(code) => {
            let kind = mapping::element_for_code(code, state.rand.as_ref());
            fetch_item(state, kind).await
        }
        None => ItemInfo::placeholder(ElementKind::Normal),
    };

    Ok(LookupResult {
        city: location.display_name,
        latitude: location.latitude,
        longitude: location.longitude,
        weather: current,
        item,
    })
}

/// Catalog enrichment; never fails the request.
async fn fetch_item(state: &AppState, kind: ElementKind) -> ItemInfo {
    let pick = catalog::random_of_element(
        &state.http,
        &state.config.catalog_url,
        kind,
        state.rand.as_ref(),
    )
    .await;

    match pick {
        Ok(Some(pick)) => ItemInfo {
            kind,
            name: pick.name,
            image_url: pick.image_url,
        },
        Ok(None) => {
            warn!("Catalog has no creatures of element {kind}");
            ItemInfo::placeholder(kind)
        }
        Err(e) => {
            warn!("Catalog lookup for {kind} failed, returning empty item: {e}");
            ItemInfo::placeholder(kind)
        }
    }
}
