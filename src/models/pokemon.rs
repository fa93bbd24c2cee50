//! Creature records
//!
//! Decoder for a single `pokemon/{name}` response.

use serde::Deserialize;

use super::NamedResource;
use crate::error::Result;

/// A creature as returned by `pokemon/{name}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Experience gained for defeating it; drives the catch chance.
    /// Some forms report `null`, which decodes as zero.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

fn null_as_zero<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}

impl Pokemon {
    /// Decodes a creature from a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIDGEY: &str = r#"{
        "id": 16,
        "name": "pidgey",
        "base_experience": 50,
        "height": 3,
        "weight": 18,
        "is_default": true,
        "abilities": [],
        "stats": [
            {"base_stat": 40, "effort": 0, "stat": {"name": "hp", "url": "u"}},
            {"base_stat": 56, "effort": 1, "stat": {"name": "speed", "url": "u"}}
        ],
        "types": [
            {"slot": 1, "type": {"name": "normal", "url": "u"}},
            {"slot": 2, "type": {"name": "flying", "url": "u"}}
        ]
    }"#;

    #[test]
    fn test_decode_pokemon() {
        let pokemon = Pokemon::from_slice(PIDGEY.as_bytes()).unwrap();

        assert_eq!(pokemon.name, "pidgey");
        assert_eq!(pokemon.base_experience, 50);
        assert_eq!(pokemon.height, 3);
        assert_eq!(pokemon.weight, 18);
        assert_eq!(pokemon.stats[1].stat.name, "speed");
        assert_eq!(pokemon.stats[1].base_stat, 56);
        assert_eq!(pokemon.types[1].kind.name, "flying");
    }

    #[test]
    fn test_null_base_experience_decodes_as_zero() {
        let body = r#"{"id": 10001, "name": "deoxys-attack", "base_experience": null, "height": 17, "weight": 608}"#;
        let pokemon = Pokemon::from_slice(body.as_bytes()).unwrap();

        assert_eq!(pokemon.base_experience, 0);
        assert!(pokemon.stats.is_empty());
    }
}
