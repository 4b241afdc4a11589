//! Stats Reporter Task
//!
//! Background task that periodically logs cache statistics.

use std::hash::Hash;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::cache::SharedCache;

/// Spawns a background task that logs cache statistics every interval.
///
/// The task runs until aborted through the returned handle.
///
/// # Example
/// ```ignore
/// let cache = SharedCache::<String, String>::new(1000)?;
/// let reporter = spawn_stats_reporter(cache.clone(), 10);
/// // Later, during shutdown:
/// reporter.abort();
/// ```
pub fn spawn_stats_reporter<K, V>(cache: SharedCache<K, V>, interval_secs: u64) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    let period = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!("Starting stats reporter with interval of {} seconds", period.as_secs());

        let mut ticker = tokio::time::interval(period);
        // First tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let stats = cache.stats().await;
            info!(
                hits = stats.hits,
                misses = stats.misses,
                evictions = stats.evictions,
                entries = stats.total_entries,
                capacity = stats.capacity,
                hit_rate = stats.hit_rate(),
                "Cache stats"
            );
        }
    })
}
