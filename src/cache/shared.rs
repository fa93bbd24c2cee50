//! Shared Cache Handle
//!
//! Thread-safe, cloneable front for a [`CacheStore`] that owns the store's
//! background reaper.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::cache::CacheStore;
use crate::tasks::spawn_reaper_task;

/// Stop signal and join handle for the reaper.
///
/// Dropping this drops the sender, which also stops the reaper.
#[derive(Debug)]
struct Reaper {
    shutdown: watch::Sender<()>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

// == Cache ==
/// Time-expiring response cache keyed by request URL.
///
/// Stale entries are never returned: `get` drops them on sight, and a
/// background reaper sweeping every `ttl` reclaims the ones nobody asks for.
/// Clones share the same store and reaper.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    reaper: Arc<Reaper>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
        let (shutdown, rx) = watch::channel(());
        let handle = spawn_reaper_task(Arc::downgrade(&store), ttl, rx);

        Self {
            store,
            reaper: Arc::new(Reaper {
                shutdown,
                handle: Mutex::new(Some(handle)),
            }),
        }
    }

    // == Get ==
    /// Returns the body cached under `key`, or `None` if absent or stale.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.store.lock().get(key, Instant::now())
    }

    // == Add ==
    /// Caches `payload` under `key`, replacing any previous entry.
    pub fn add(&self, key: impl Into<String>, payload: Bytes) {
        self.store.lock().insert(key.into(), payload, Instant::now());
    }

    /// Stops the reaper and waits for it to exit.
    ///
    /// Affects every clone. Get and Add keep working; only the active sweep
    /// stops. Calling this more than once is a no-op.
    pub async fn shutdown(&self) {
        let _ = self.reaper.shutdown.send(());

        let handle = self.reaper.handle.lock().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                debug!("Cache reaper ended abnormally: {}", e);
            }
        }
    }

    /// The configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.store.lock().ttl()
    }

    // == Length ==
    /// Number of stored entries, including stale ones the reaper has not reached.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// Whether `key` is physically stored, without applying expiry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.store.lock().contains_key(key)
    }
}
