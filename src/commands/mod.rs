//! Commands Module
//!
//! The verb table and dispatch for the REPL.
//!
//! # Commands
//! - `help` - List every command
//! - `exit` - Leave the Pokedex
//! - `map` / `mapb` - Page forward / backward through location areas
//! - `explore <area>` - List the creatures found in an area
//! - `catch <name>` - Throw a Pokeball
//! - `inspect <name>` - Show a caught creature's stats
//! - `pokedex` - List caught creatures

pub mod handlers;

use std::io::Write;

use tracing::debug;

use crate::api::PokeApiClient;
use crate::error::Result;
use crate::session::Session;

/// What the REPL should do after a command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Which handler a verb runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

/// One row of the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

/// Everything a handler may touch: the session it mutates, the API client
/// it fetches through, and where it prints.
pub struct CommandContext<'a> {
    pub session: &'a mut Session,
    pub client: &'a PokeApiClient,
    pub out: &'a mut dyn Write,
}

/// Maps verbs to commands. Built once at startup and passed to the REPL.
#[derive(Debug, Clone)]
pub struct CommandTable {
    commands: Vec<Command>,
}

impl CommandTable {
    /// Creates the table with every built-in command, in help order.
    pub fn new() -> Self {
        let commands = vec![
            Command {
                name: "help",
                description: "Displays a help message",
                kind: CommandKind::Help,
            },
            Command {
                name: "exit",
                description: "Exit the Pokedex",
                kind: CommandKind::Exit,
            },
            Command {
                name: "map",
                description: "Displays the next page of location areas",
                kind: CommandKind::Map,
            },
            Command {
                name: "mapb",
                description: "Displays the previous page of location areas",
                kind: CommandKind::MapBack,
            },
            Command {
                name: "explore",
                description: "Lists the Pokemon found in a location area",
                kind: CommandKind::Explore,
            },
            Command {
                name: "catch",
                description: "Throws a Pokeball at a Pokemon",
                kind: CommandKind::Catch,
            },
            Command {
                name: "inspect",
                description: "Shows the stats of a caught Pokemon",
                kind: CommandKind::Inspect,
            },
            Command {
                name: "pokedex",
                description: "Lists every caught Pokemon",
                kind: CommandKind::Pokedex,
            },
        ];

        Self { commands }
    }

    /// Looks up a verb.
    pub fn get(&self, verb: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name == verb)
    }

    /// Every command, in help order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Runs the command registered under `verb` with the positional `args`.
    ///
    /// Unknown verbs are ignored: no output, no error.
    pub async fn dispatch(
        &self,
        ctx: &mut CommandContext<'_>,
        verb: &str,
        args: &[String],
    ) -> Result<Flow> {
        let Some(command) = self.get(verb) else {
            debug!(verb, "ignoring unknown command");
            return Ok(Flow::Continue);
        };

        debug!(verb, ?args, "dispatching command");
        match command.kind {
            CommandKind::Help => handlers::help(self, ctx),
            CommandKind::Exit => handlers::exit(ctx),
            CommandKind::Map => handlers::map(ctx).await,
            CommandKind::MapBack => handlers::map_back(ctx).await,
            CommandKind::Explore => handlers::explore(ctx, args).await,
            CommandKind::Catch => handlers::catch(ctx, args).await,
            CommandKind::Inspect => handlers::inspect(ctx, args),
            CommandKind::Pokedex => handlers::pokedex(ctx),
        }
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}
