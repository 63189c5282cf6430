//! Creature catalog client (PokeAPI)
//!
//! Two-step lookup: list every creature of an element, pick one uniformly at
//! random, then fetch its detail record for the display name and sprite. The
//! detail URL comes verbatim from the listing payload.

use reqwest::Client;
use tracing::debug;

use crate::Result;
use crate::error::ClimadexError;
use crate::mapping::ElementKind;
use crate::rand_source::RandomSource;

/// One fully resolved catalog pick
#[derive(Debug, Clone)]
pub struct CatalogPick {
    pub name: String,
    /// Empty when the detail record carries no sprite
    pub image_url: String,
}

/// Pick a random creature of the given element.
///
/// `Ok(None)` means the element listing was empty. Transport and parse
/// failures propagate; the orchestrator downgrades them to an empty item.
pub async fn random_of_element(
    client: &Client,
    base_url: &str,
    kind: ElementKind,
    rand: &dyn RandomSource,
) -> Result<Option<CatalogPick>> {
    let url = format!("{base_url}/type/{kind}/");
    debug!("Catalog listing request: {url}");

    let response = client.get(&url).send().await?;
    let listing: pokeapi::TypeResponse = response.json().await.map_err(|e| {
        ClimadexError::upstream("Failed to parse catalog listing", e.to_string())
    })?;

    if listing.pokemon.is_empty() {
        debug!("Catalog listing for {kind} is empty");
        return Ok(None);
    }

    let index = rand.pick(listing.pokemon.len());
    let detail_url = &listing.pokemon[index].pokemon.url;
    debug!("Catalog detail request: {detail_url}");

    let response = client.get(detail_url).send().await?;
    let detail: pokeapi::CreatureDetail = response.json().await.map_err(|e| {
        ClimadexError::upstream("Failed to parse catalog detail", e.to_string())
    })?;

    Ok(Some(CatalogPick {
        name: detail.name,
        image_url: detail.sprites.front_default.unwrap_or_default(),
    }))
}

/// `PokeAPI` response structures
mod pokeapi {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct TypeResponse {
        #[serde(default)]
        pub pokemon: Vec<TypeEntry>,
    }

    #[derive(Debug, Deserialize)]
    pub struct TypeEntry {
        pub pokemon: NamedResource,
    }

    #[derive(Debug, Deserialize)]
    pub struct NamedResource {
        pub url: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct CreatureDetail {
        pub name: String,
        pub sprites: Sprites,
    }

    #[derive(Debug, Deserialize)]
    pub struct Sprites {
        pub front_default: Option<String>,
    }
}
