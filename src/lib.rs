//! Pokedex - An interactive PokeAPI explorer
//!
//! Pages through location areas, explores them, and catches creatures, with
//! every API response held in a time-expiring in-memory cache.

pub mod api;
pub mod cache;
pub mod catch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod session;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Repl;
