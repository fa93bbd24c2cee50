//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside the REPL.
//!
//! # Tasks
//! - Cache reaper: sweeps stale response bodies out of the cache

mod reaper;

pub use reaper::spawn_reaper_task;
