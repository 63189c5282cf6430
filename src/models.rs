//! Request-scoped domain types
//!
//! Nothing here is persisted; every value lives for exactly one request.
//! Provider wire formats stay private to their client modules, these are the
//! shapes the orchestrator and the JSON endpoint agree on.

use serde::{Deserialize, Serialize};

use crate::mapping::ElementKind;

/// A geocoded place, taken unconditionally from the provider's first match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Provider-formatted name, e.g. "Lisboa, Portugal"
    pub display_name: String,
}

/// Current-conditions snapshot as reported by the weather provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Temperature in °C
    pub temperature: f64,
    /// Wind speed in the provider's default unit (km/h)
    pub windspeed: f64,
    /// Wind direction in degrees
    pub winddirection: f64,
    /// WMO weather code, absent when the provider omits it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weathercode: Option<i64>,
}

/// The creature attached to a result
///
/// `name` and `image_url` are empty when the catalog lookup was skipped or
/// degraded; the element label is always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemInfo {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl ItemInfo {
    /// An item carrying only the element label
    #[must_use]
    pub fn placeholder(kind: ElementKind) -> Self {
        Self {
            kind,
            name: String::new(),
            image_url: String::new(),
        }
    }
}

/// Full response body for one lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResult {
    /// Display name of the geocoded city
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Null when the provider returned no current-conditions block
    pub weather: Option<CurrentWeather>,
    pub item: ItemInfo,
}
