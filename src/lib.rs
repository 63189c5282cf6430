//! `Climadex` - weather-matched creature lookup service
//!
//! This library geocodes a city name, fetches its current weather and pairs
//! the conditions with a creature from a public catalog, exposing the whole
//! pipeline behind a single JSON endpoint plus a static frontend.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod geocode;
pub mod mapping;
pub mod models;
pub mod orchestrator;
pub mod rand_source;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::AppConfig;
pub use error::ClimadexError;
pub use mapping::ElementKind;
pub use models::{CurrentWeather, ItemInfo, Location, LookupResult};
pub use rand_source::{RandomSource, ThreadRandom};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ClimadexError>;
