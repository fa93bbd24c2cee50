//! Cache Reaper Task
//!
//! Background task that periodically sweeps stale entries out of the
//! response cache, so bodies nobody asks for again still get reclaimed.

use std::sync::Weak;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Shortest sweep period the reaper accepts; `tokio::time::interval` rejects zero.
const MIN_REAP_PERIOD: Duration = Duration::from_millis(1);

/// Spawns a background task that sweeps stale entries every `period`.
///
/// The first sweep happens one full `period` after spawning. Each sweep takes
/// the store lock once, removes every stale entry, and releases it.
///
/// The task ends when a value is sent on `shutdown`, when its sender is
/// dropped, or when the store itself has been dropped.
///
/// # Arguments
/// * `store` - Weak reference to the cache's store
/// * `period` - Interval between sweeps
/// * `shutdown` - Stop signal receiver
///
/// # Returns
/// A JoinHandle that completes once the loop has exited.
pub fn spawn_reaper_task(
    store: Weak<Mutex<CacheStore>>,
    period: Duration,
    mut shutdown: watch::Receiver<()>,
) -> JoinHandle<()> {
    let period = period.max(MIN_REAP_PERIOD);
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tokio::spawn(async move {
        debug!("Starting cache reaper with period of {:?}", period);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown.changed() => {
                    debug!("Cache reaper received stop signal");
                    break;
                }
            }

            let Some(store) = store.upgrade() else {
                debug!("Cache dropped, reaper exiting");
                break;
            };

            let removed = store.lock().purge_expired(Instant::now());

            if removed > 0 {
                info!("Cache reap: removed {} stale entries", removed);
            } else {
                debug!("Cache reap: no stale entries found");
            }
        }
    })
}
