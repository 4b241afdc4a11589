//! LRU Cache - command driver
//!
//! Reads cache commands from stdin and writes one JSON reply per line to stdout.

use std::time::Duration;

use anyhow::Context;
use tokio::io::{stdin, stdout, BufReader};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_cache::session::StringCache;
use lru_cache::{run_session, spawn_stats_reporter, Config};

/// Main entry point for the cache driver.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the shared cache with the configured capacity
/// 4. Start the stats reporter if an interval is configured
/// 5. Process stdin until end of input or a shutdown signal
///
/// The runtime is built by hand so it can be shut down with a timeout: the
/// blocking stdin read cannot be cancelled and would otherwise keep the
/// process alive after a signal.
fn main() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    let result = runtime.block_on(run());
    runtime.shutdown_timeout(SHUTDOWN_TIMEOUT);
    result
}

/// Grace period for runtime workers once the session has ended
const SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(200);

async fn run() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, stats_interval={}s",
        config.capacity, config.stats_interval
    );

    let cache = StringCache::new(config.capacity).context("failed to create cache")?;

    let reporter = (config.stats_interval > 0)
        .then(|| spawn_stats_reporter(cache.clone(), config.stats_interval));

    let session = run_session(&cache, BufReader::new(stdin()), stdout());

    tokio::select! {
        result = session => {
            let replies = result.context("command session failed")?;
            info!("End of input after {} replies", replies);
        }
        _ = shutdown_signal() => {}
    }

    if let Some(handle) = reporter {
        handle.abort();
    }

    let stats = cache.stats().await;
    info!(
        hits = stats.hits,
        misses = stats.misses,
        insertions = stats.insertions,
        evictions = stats.evictions,
        entries = stats.total_entries,
        hit_rate = stats.hit_rate(),
        "Final cache stats"
    );

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
