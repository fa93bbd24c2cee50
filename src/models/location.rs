//! Location area records
//!
//! Decoders for the paginated `location-area/` listing and for a single
//! location area.

use serde::Deserialize;

use super::NamedResource;
use crate::error::Result;

/// One page of the `location-area/` listing.
///
/// `next` and `previous` are absolute URLs of the neighbouring pages, or
/// `None` at either end.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationAreaPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl LocationAreaPage {
    /// Decodes a listing page from a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// A single location area and the creatures that can be encountered there.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationArea {
    /// Decodes a location area from a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Names of every creature encountered here, in response order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}
