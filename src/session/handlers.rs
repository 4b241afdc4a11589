//! Command Handlers
//!
//! Executes one parsed command against the shared cache.

use tracing::debug;

use crate::cache::SharedCache;
use crate::models::{Command, Reply};

/// Cache type driven by the session: text keys and values.
pub type StringCache = SharedCache<String, String>;

/// Executes a command and builds its reply.
pub async fn execute(cache: &StringCache, command: Command) -> Reply {
    match command {
        Command::Put { key, value } => {
            cache.put(key.clone(), value).await;
            Reply::Put { key }
        }
        Command::Get { key } => {
            let value = cache.get(&key).await;
            debug!(key = %key, hit = value.is_some(), "get");
            Reply::Get { key, value }
        }
        Command::Peek { key } => {
            let value = cache.peek(&key).await;
            Reply::Peek { key, value }
        }
        Command::Stats => Reply::stats(cache.stats().await),
        Command::Keys => Reply::Keys {
            keys: cache.keys().await,
        },
    }
}
