//! Response models for the PokeAPI endpoints
//!
//! This module defines the records decoded from raw response bodies. Only
//! the fields the commands read are modelled; everything else is ignored.

pub mod location;
pub mod pokemon;

use serde::Deserialize;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

/// A `{ name, url }` pair, PokeAPI's link to another resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}
