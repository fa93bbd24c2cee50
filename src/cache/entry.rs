//! Cache Entry Module
//!
//! Defines a single cached response body and its creation time.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A cached response body with the moment it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// When the entry was inserted (or last overwritten)
    pub created_at: Instant,
    /// The response body; cloning shares the buffer
    pub payload: Bytes,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with `created_at`.
    pub fn new(payload: Bytes, created_at: Instant) -> Self {
        Self {
            created_at,
            payload,
        }
    }

    // == Age ==
    /// Time elapsed between creation and `now`. Saturates at zero.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived `ttl` as of `now`.
    ///
    /// Boundary condition: an entry whose age is exactly `ttl` is still fresh.
    /// It only goes stale once its age is strictly greater than `ttl`.
    pub fn is_stale_at(&self, ttl: Duration, now: Instant) -> bool {
        self.age_at(now) > ttl
    }
}
