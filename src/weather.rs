//! Weather client (Open-Meteo)
//!
//! Fetches the current-conditions block for a coordinate pair. Open-Meteo
//! needs no API key; the request asks for `current_weather=true` and ignores
//! the rest of the forecast payload.

use reqwest::Client;
use tracing::debug;

use crate::Result;
use crate::error::ClimadexError;
use crate::models::CurrentWeather;

/// Fetch current conditions for a coordinate pair.
///
/// `Ok(None)` means the provider answered without a `current_weather` block;
/// the result then carries no weather and no catalog lookup happens.
pub async fn current_conditions(
    client: &Client,
    base_url: &str,
    latitude: f64,
    longitude: f64,
) -> Result<Option<CurrentWeather>> {
    let url = format!(
        "{base_url}/forecast?latitude={latitude}&longitude={longitude}&current_weather=true&timezone=auto"
    );
    debug!("Weather request: {url}");

    let response = client.get(&url).send().await?;
    let forecast: openmeteo::ForecastResponse = response
        .json()
        .await
        .map_err(|e| ClimadexError::upstream("Failed to parse weather response", e.to_string()))?;

    Ok(forecast.current_weather.map(CurrentWeather::from))
}

/// `OpenMeteo` API response structures
mod openmeteo {
    use serde::Deserialize;

    use super::CurrentWeather;

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current_weather: Option<CurrentWeatherData>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentWeatherData {
        pub temperature: f64,
        pub windspeed: f64,
        pub winddirection: f64,
        pub weathercode: Option<i64>,
    }

    impl From<CurrentWeatherData> for CurrentWeather {
        fn from(data: CurrentWeatherData) -> Self {
            CurrentWeather {
                temperature: data.temperature,
                windspeed: data.windspeed,
                winddirection: data.winddirection,
                weathercode: data.weathercode,
            }
        }
    }
}
