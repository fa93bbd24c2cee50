//! Cache Store Module
//!
//! The unsynchronized map behind the shared cache handle. Every operation
//! takes the current instant explicitly so expiry can be driven by a clock
//! the caller controls.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// URL-keyed response bodies with a single time-to-live.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Maximum age before an entry is stale
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries go stale after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    // == Insert ==
    /// Stores `payload` under `key` stamped with `now`.
    ///
    /// If the key already exists, the payload is overwritten and the age resets.
    pub fn insert(&mut self, key: String, payload: Bytes, now: Instant) {
        self.entries.insert(key, CacheEntry::new(payload, now));
    }

    // == Get ==
    /// Retrieves the payload for `key` if present and fresh as of `now`.
    ///
    /// A stale entry is removed and reported as a miss.
    pub fn get(&mut self, key: &str, now: Instant) -> Option<Bytes> {
        let entry = self.entries.get(key)?;

        if entry.is_stale_at(self.ttl, now) {
            self.entries.remove(key);
            return None;
        }

        Some(entry.payload.clone())
    }

    // == Purge Expired ==
    /// Removes every entry that is stale as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_stale_at(ttl, now));
        before - self.entries.len()
    }

    /// Whether `key` is physically present, stale or not.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the number of stored entries, including stale ones not yet reaped.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
