//! LRU Cache - A bounded in-memory key-value cache
//!
//! Evicts the least recently used entry once capacity is reached; both reads
//! and writes count as a use.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod tasks;

pub use cache::{CacheStats, LruCache, SharedCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use session::run_session;
pub use tasks::spawn_stats_reporter;
