//! Command-line interface parsing for the Pokedex
//!
//! Flags only tune startup; everything else happens inside the REPL.

use clap::Parser;

/// Pokedex - explore PokeAPI location areas and catch creatures
#[derive(Parser, Debug, Default)]
#[command(name = "pokedex")]
#[command(about = "Interactive Pokedex backed by PokeAPI")]
#[command(version)]
pub struct Cli {
    /// Seconds a cached API response stays fresh (overrides POKEDEX_CACHE_TTL)
    #[arg(long, value_name = "SECONDS")]
    pub cache_ttl: Option<u64>,

    /// PokeAPI root URL (overrides POKEDEX_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Log cache and request activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
