//! Geocoding client (Nominatim)
//!
//! Turns a free-form city name into coordinates. Nominatim returns latitude
//! and longitude as strings, so the raw result is parsed into the internal
//! [`Location`] before anything downstream sees it.

use reqwest::Client;
use tracing::debug;

use crate::Result;
use crate::error::ClimadexError;
use crate::models::Location;

/// Search for a city, returning the provider's first match.
///
/// `Ok(None)` means the provider answered with an empty result list; the
/// caller decides how to surface that.
pub async fn search_city(client: &Client, base_url: &str, city: &str) -> Result<Option<Location>> {
    let url = format!(
        "{}/search?q={}&format=json&limit=1",
        base_url,
        urlencoding::encode(city)
    );
    debug!("Geocoding request: {url}");

    let response = client.get(&url).send().await?;
    let results: Vec<nominatim::SearchResult> = response.json().await.map_err(|e| {
        ClimadexError::upstream("Failed to parse geocoding response", e.to_string())
    })?;

    let Some(first) = results.into_iter().next() else {
        debug!("No geocoding match for {city:?}");
        return Ok(None);
    };

    let location = first.try_into()?;
    Ok(Some(location))
}

/// Nominatim API response structures
mod nominatim {
    use serde::Deserialize;

    use super::{ClimadexError, Location};

    #[derive(Debug, Deserialize)]
    pub struct SearchResult {
        /// Latitude, serialized as a decimal string
        pub lat: String,
        /// Longitude, serialized as a decimal string
        pub lon: String,
        pub display_name: String,
    }

    impl TryFrom<SearchResult> for Location {
        type Error = ClimadexError;

        fn try_from(result: SearchResult) -> Result<Self, Self::Error> {
            let parse = |field: &str, raw: &str| {
                raw.parse::<f64>().map_err(|_| {
                    ClimadexError::upstream(
                        "Failed to parse geocoding response",
                        format!("non-numeric {field}: {raw:?}"),
                    )
                })
            };
            Ok(Location {
                latitude: parse("latitude", &result.lat)?,
                longitude: parse("longitude", &result.lon)?,
                display_name: result.display_name,
            })
        }
    }
}
