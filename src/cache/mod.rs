//! Cache Module
//!
//! Provides the in-memory response cache with time-based expiry.

mod entry;
mod shared;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use shared::Cache;
pub use store::CacheStore;

// == Public Constants ==
/// Default time-to-live for cached responses, in seconds
pub const DEFAULT_TTL_SECS: u64 = 60;
