//! Configuration for the `Climadex` service
//!
//! Everything is read from the environment at startup; the listening port
//! comes from `PORT` and the upstream base URLs can be redirected (mainly so
//! tests can point the pipeline at stub servers).

use std::env;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Root configuration for the `Climadex` service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Base URL of the geocoding provider (Nominatim)
    pub geocoding_url: String,
    /// Base URL of the weather provider (Open-Meteo)
    pub weather_url: String,
    /// Base URL of the creature catalog (PokeAPI)
    pub catalog_url: String,
    /// Directory the frontend assets are served from
    pub static_dir: String,
}

// Default value functions
fn default_port() -> u16 {
    3000
}

fn default_geocoding_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_weather_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_catalog_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_static_dir() -> String {
    "public".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            geocoding_url: default_geocoding_url(),
            weather_url: default_weather_url(),
            catalog_url: default_catalog_url(),
            static_dir: default_static_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Invalid PORT value {raw:?}, using default {}", default_port());
                default_port()
            }),
            Err(_) => default_port(),
        };

        Self {
            port,
            geocoding_url: env::var("CLIMADEX_GEOCODING_URL")
                .unwrap_or_else(|_| default_geocoding_url()),
            weather_url: env::var("CLIMADEX_WEATHER_URL")
                .unwrap_or_else(|_| default_weather_url()),
            catalog_url: env::var("CLIMADEX_CATALOG_URL")
                .unwrap_or_else(|_| default_catalog_url()),
            static_dir: env::var("CLIMADEX_STATIC_DIR")
                .unwrap_or_else(|_| default_static_dir()),
        }
    }
}
