//! Session state
//!
//! The per-process data the command handlers read and mutate.

use std::collections::HashMap;
use std::fmt;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::models::Pokemon;

/// Pagination cursors, caught creatures, and the random source for catch rolls.
pub struct Session {
    /// URL `map` fetches next; `None` means start from the first page
    pub next_url: Option<String>,
    /// URL `mapb` fetches; `None` means we are on the first page
    pub prev_url: Option<String>,
    /// Caught creatures keyed by name; never shrinks
    caught: HashMap<String, Pokemon>,
    rng: Box<dyn RngCore + Send>,
}

impl Session {
    /// Creates an empty session with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an empty session drawing catch rolls from `rng`.
    pub fn with_rng(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            next_url: None,
            prev_url: None,
            caught: HashMap::new(),
            rng: Box::new(rng),
        }
    }

    pub fn is_caught(&self, name: &str) -> bool {
        self.caught.contains_key(name)
    }

    pub fn caught(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    /// Records a catch, keyed by the creature's own name.
    pub fn record_catch(&mut self, pokemon: Pokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }

    /// Names of every caught creature, in no particular order.
    pub fn caught_names(&self) -> impl Iterator<Item = &str> {
        self.caught.keys().map(String::as_str)
    }

    pub fn caught_count(&self) -> usize {
        self.caught.len()
    }

    /// Random source for catch rolls.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("next_url", &self.next_url)
            .field("prev_url", &self.prev_url)
            .field("caught", &self.caught.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
