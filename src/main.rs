//! Pokedex - An interactive PokeAPI explorer
//!
//! Reads commands from stdin and answers them from PokeAPI, caching every
//! response for the configured time-to-live.

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::commands::CommandTable;
use pokedex::session::Session;
use pokedex::{Config, PokeApiClient, Repl};

/// Main entry point for the Pokedex.
///
/// # Startup Sequence
/// 1. Parse command-line flags
/// 2. Initialize tracing subscriber (stderr, so logs stay out of the REPL)
/// 3. Load configuration from environment variables, then apply flag overrides
/// 4. Create the API client and its cache, which starts the reaper
/// 5. Build the command table and session and run the REPL on stdin
/// 6. Stop the reaper once the REPL returns
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Defaults to warnings only, can be overridden with RUST_LOG env var
    let default_filter = if cli.verbose {
        "pokedex=debug"
    } else {
        "pokedex=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().apply_cli(&cli);
    info!(
        "Configuration loaded: cache_ttl={}s, base_url={}",
        config.cache_ttl.as_secs(),
        config.base_url
    );

    let client = PokeApiClient::from_config(&config);
    info!("Response cache initialized");

    let mut repl = Repl::new(CommandTable::new(), Session::new(), client.clone());
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    repl.run(stdin, &mut stdout)
        .await
        .context("terminal input/output failed")?;

    client.cache().shutdown().await;
    info!("Cache reaper stopped, goodbye");

    Ok(())
}
