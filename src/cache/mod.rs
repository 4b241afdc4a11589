//! Cache Module
//!
//! Provides a bounded in-memory cache with LRU eviction.

mod lru;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use lru::{Iter as RecencyIter, NodeIndex, RecencyList};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::LruCache;
