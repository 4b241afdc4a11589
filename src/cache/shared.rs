//! Shared Cache Module
//!
//! Thread-safe handle around an `LruCache` for use from async tasks.

use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::{CacheStats, LruCache};
use crate::error::Result;

// == Shared Cache ==
/// Cloneable handle to a single `LruCache` guarded by one mutex.
///
/// A `get` reorders recency, so even lookups take the lock exclusively. The
/// map and the recency list always change together under that lock.
#[derive(Debug)]
pub struct SharedCache<K, V> {
    inner: Arc<Mutex<LruCache<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates a shared cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Result<Self> {
        LruCache::new(capacity).map(Self::from_cache)
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: LruCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Retrieves a clone of the value and marks the key as most recently used.
    pub async fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().await.get(key).cloned()
    }

    /// Stores a key-value pair, evicting the least recently used entry if full.
    pub async fn put(&self, key: K, value: V) {
        self.inner.lock().await.put(key, value);
    }

    /// Retrieves a clone of the value without counting it as a use.
    pub async fn peek(&self, key: &K) -> Option<V> {
        self.inner.lock().await.peek(key).cloned()
    }

    /// Snapshot of held keys from least to most recently used.
    pub async fn keys(&self) -> Vec<K> {
        self.inner.lock().await.keys().cloned().collect()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn capacity(&self) -> usize {
        self.inner.lock().await.capacity()
    }
}
