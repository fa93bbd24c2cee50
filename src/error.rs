//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for fetching, decoding and running commands.
///
/// The response cache never produces one of these: a lookup can only miss.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Network unreachable, connection refused, body read interrupted
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote answered with a non-success status
    #[error("PokeAPI request failed: {status} ({url})")]
    RemoteStatus { url: String, status: StatusCode },

    /// Body was not the JSON shape we expected
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A command was invoked without its positional argument
    #[error("please specify {0}")]
    MissingArgument(&'static str),

    /// Catch target could not be looked up
    #[error("could not find Pokemon '{name}': {source}")]
    NotFound {
        name: String,
        #[source]
        source: Box<PokedexError>,
    },

    /// Terminal input/output failure
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
