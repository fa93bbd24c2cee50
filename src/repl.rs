//! REPL (Read-Eval-Print Loop)
//!
//! Reads one line at a time, tokenizes it, and hands the verb to the
//! command table. Input is the only place the loop waits.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::api::PokeApiClient;
use crate::commands::{CommandContext, CommandTable, Flow};
use crate::error::Result;
use crate::session::Session;

pub const PROMPT: &str = "Pokedex > ";

/// Splits a raw line into lowercase words, ignoring surrounding and repeated whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

/// The interactive loop. Owns nothing global: the command table, session
/// and client are all handed in at construction.
pub struct Repl {
    commands: CommandTable,
    session: Session,
    client: PokeApiClient,
}

impl Repl {
    pub fn new(commands: CommandTable, session: Session, client: PokeApiClient) -> Self {
        Self {
            commands,
            session,
            client,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `exit` or end of input.
    ///
    /// A failing command prints its error and the loop carries on; only
    /// I/O errors on `input` or `out` end the loop early.
    pub async fn run<R, W>(&mut self, mut input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut line = Vec::new();

        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            // Raw bytes, so a line that is not valid UTF-8 is a bad command
            // rather than a broken terminal
            line.clear();
            if input.read_until(b'\n', &mut line).await? == 0 {
                debug!("end of input");
                writeln!(out)?;
                break;
            }

            let words = clean_input(&String::from_utf8_lossy(&line));
            let Some((verb, args)) = words.split_first() else {
                continue;
            };

            let mut ctx = CommandContext {
                session: &mut self.session,
                client: &self.client,
                out: &mut *out,
            };

            match self.commands.dispatch(&mut ctx, verb, args).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) => {
                    debug!(verb = verb.as_str(), error = ?e, "command failed");
                    writeln!(out, "Error executing command '{}': {}", verb, e)?;
                }
            }
        }

        Ok(())
    }
}
