//! Command Handlers
//!
//! One function per verb. Handlers print through the context writer, mutate
//! the session, and return a [`Flow`] or a descriptive error.

use std::io::Write;

use tracing::info;

use super::{CommandContext, CommandTable, Flow};
use crate::catch::{attempt_catch, catch_probability};
use crate::error::{PokedexError, Result};
use crate::models::LocationAreaPage;

/// Prints the welcome banner and every command with its description.
pub fn help(table: &CommandTable, ctx: &mut CommandContext<'_>) -> Result<Flow> {
    writeln!(ctx.out, "Welcome to the Pokedex!")?;
    writeln!(ctx.out, "Usage:")?;
    writeln!(ctx.out)?;
    writeln!(ctx.out, "Commands:")?;
    for command in table.iter() {
        writeln!(ctx.out, " - {}: {}", command.name, command.description)?;
    }
    Ok(Flow::Continue)
}

pub fn exit(ctx: &mut CommandContext<'_>) -> Result<Flow> {
    writeln!(ctx.out)?;
    writeln!(ctx.out, "Closing the Pokedex... Goodbye!")?;
    Ok(Flow::Exit)
}

/// Shows the next page of location areas, starting from the first.
pub async fn map(ctx: &mut CommandContext<'_>) -> Result<Flow> {
    let url = match ctx.session.next_url.take() {
        Some(url) if !url.is_empty() => url,
        _ => ctx.client.first_page_url(),
    };

    // Put the cursor back if the fetch fails so a retry hits the same page
    let page = match ctx.client.location_areas(&url).await {
        Ok(page) => page,
        Err(e) => {
            ctx.session.next_url = Some(url);
            return Err(e);
        }
    };

    show_page(ctx, page)
}

/// Shows the previous page of location areas.
pub async fn map_back(ctx: &mut CommandContext<'_>) -> Result<Flow> {
    let Some(url) = ctx.session.prev_url.clone().filter(|url| !url.is_empty()) else {
        writeln!(ctx.out, "you're on the first page")?;
        return Ok(Flow::Continue);
    };

    let page = ctx.client.location_areas(&url).await?;
    show_page(ctx, page)
}

fn show_page(ctx: &mut CommandContext<'_>, page: LocationAreaPage) -> Result<Flow> {
    for area in &page.results {
        writeln!(ctx.out, "{}", area.name)?;
    }

    ctx.session.next_url = page.next;
    ctx.session.prev_url = page.previous;
    Ok(Flow::Continue)
}

/// Lists the creatures that can be encountered in a location area.
pub async fn explore(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow> {
    let name = args
        .first()
        .ok_or(PokedexError::MissingArgument("a location to explore"))?;

    let area = ctx.client.location_area(name).await?;

    writeln!(ctx.out, "Exploring {}...", area.name)?;
    writeln!(ctx.out, "Found Pokemon:")?;
    for pokemon in area.pokemon_names() {
        writeln!(ctx.out, " - {}", pokemon)?;
    }
    Ok(Flow::Continue)
}

/// Throws a Pokeball; the chance falls as base experience rises.
///
/// A creature already in the Pokedex is reported without fetching or rolling.
pub async fn catch(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow> {
    let name = args
        .first()
        .ok_or(PokedexError::MissingArgument("a Pokemon to catch"))?;

    if ctx.session.is_caught(name) {
        writeln!(ctx.out, "You have already caught {}.", name)?;
        return Ok(Flow::Continue);
    }

    let pokemon = ctx
        .client
        .pokemon(name)
        .await
        .map_err(|e| PokedexError::NotFound {
            name: name.clone(),
            source: Box::new(e),
        })?;

    writeln!(ctx.out, "Throwing a Pokeball at {}...", pokemon.name)?;

    let chance = catch_probability(pokemon.base_experience);
    if attempt_catch(chance, ctx.session.rng()) {
        info!(pokemon = %pokemon.name, chance, "caught");
        writeln!(ctx.out, "Congratulations! You caught {}!", pokemon.name)?;
        writeln!(ctx.out, "You may now inspect it with the inspect command.")?;
        ctx.session.record_catch(pokemon);
    } else {
        writeln!(ctx.out, "Oh no! {} escaped the Pokeball!", pokemon.name)?;
    }
    Ok(Flow::Continue)
}

/// Prints a caught creature's name, size, stats and types.
pub fn inspect(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow> {
    let name = args
        .first()
        .ok_or(PokedexError::MissingArgument("a Pokemon to inspect"))?;

    let Some(pokemon) = ctx.session.caught(name) else {
        writeln!(ctx.out, "You have not caught that pokemon")?;
        return Ok(Flow::Continue);
    };

    writeln!(ctx.out, "Name: {}", pokemon.name)?;
    writeln!(ctx.out, "Height: {}", pokemon.height)?;
    writeln!(ctx.out, "Weight: {}", pokemon.weight)?;
    writeln!(ctx.out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(ctx.out, "  - {}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(ctx.out, "Types:")?;
    for kind in &pokemon.types {
        writeln!(ctx.out, "  - {}", kind.kind.name)?;
    }
    Ok(Flow::Continue)
}

pub fn pokedex(ctx: &mut CommandContext<'_>) -> Result<Flow> {
    if ctx.session.caught_count() == 0 {
        writeln!(ctx.out, "You have not caught any Pokemon yet.")?;
        return Ok(Flow::Continue);
    }

    writeln!(ctx.out, "Your Pokedex:")?;
    for name in ctx.session.caught_names() {
        writeln!(ctx.out, " - {}", name)?;
    }
    Ok(Flow::Continue)
}
