//! Weather code to creature element mapping
//!
//! WMO weather codes (as reported by Open-Meteo) are bucketed into broad
//! condition ranges, each paired with one or more creature elements. Ranges
//! with several valid elements are tie-broken through the injected
//! [`RandomSource`].

use serde::{Deserialize, Serialize};

use crate::rand_source::RandomSource;

/// Creature element, matching the catalog provider's type labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Fire,
    Electric,
    Flying,
    Water,
    Ice,
    Ghost,
    Normal,
    Grass,
}

impl ElementKind {
    /// Lowercase label, as used in catalog URLs and JSON payloads
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Fire => "fire",
            ElementKind::Electric => "electric",
            ElementKind::Flying => "flying",
            ElementKind::Water => "water",
            ElementKind::Ice => "ice",
            ElementKind::Ghost => "ghost",
            ElementKind::Normal => "normal",
            ElementKind::Grass => "grass",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Elements for clear to partly cloudy skies (codes 0-3)
const CLEAR_SKY: [ElementKind; 3] = [
    ElementKind::Fire,
    ElementKind::Electric,
    ElementKind::Flying,
];

/// Elements for everything outside the known ranges (overcast, drizzle, ...)
const OVERCAST: [ElementKind; 2] = [ElementKind::Normal, ElementKind::Grass];

/// Map a WMO weather code to a creature element.
///
/// Total over all integers: unrecognized codes fall through to the overcast
/// bucket rather than failing.
#[must_use]
pub fn element_for_code(code: i64, rand: &dyn RandomSource) -> ElementKind {
    match code {
        // clear sky to partly cloudy
        0..=3 => CLEAR_SKY[rand.pick(CLEAR_SKY.len())],
        // drizzle and rain
        51..=67 => ElementKind::Water,
        // snow
        71..=75 => ElementKind::Ice,
        // fog
        45..=48 => ElementKind::Ghost,
        _ => OVERCAST[rand.pick(OVERCAST.len())],
    }
}
