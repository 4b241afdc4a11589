//! Cache Store Module
//!
//! Main cache engine combining HashMap lookup with a recency list for LRU eviction.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{CacheStats, NodeIndex, RecencyList};
use crate::error::{CacheError, Result};

// == LRU Cache ==
/// Fixed-capacity key-value store with least-recently-used eviction.
///
/// Both a `get` hit and a `put` count as a use. The map holds a handle into
/// the recency list for every key, so moving a key to the most recently used
/// position never scans the list.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key to node handle
    map: HashMap<K, NodeIndex>,
    /// Entries ordered from most to least recently used
    order: RecencyList<(K, V)>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries, fixed at construction
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            map: HashMap::with_capacity(capacity),
            order: RecencyList::with_capacity(capacity),
            stats: CacheStats::new(capacity),
            capacity,
        })
    }

    // == Get ==
    /// Retrieves a value by key and marks the key as most recently used.
    ///
    /// A miss returns `None` and leaves the recency order untouched.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let Some(&idx) = self.map.get(key) else {
            self.stats.record_miss();
            return None;
        };

        self.stats.record_hit();
        self.order.move_to_front(idx);
        self.order.get(idx).map(|(_, value)| value)
    }

    // == Put ==
    /// Stores a key-value pair and marks the key as most recently used.
    ///
    /// Overwriting an existing key keeps the size unchanged. Inserting a new
    /// key into a full cache evicts the least recently used entry.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&idx) = self.map.get(&key) {
            if let Some(entry) = self.order.get_mut(idx) {
                entry.1 = value;
            }
            self.order.move_to_front(idx);
            return;
        }

        let idx = self.order.push_front((key.clone(), value));
        self.map.insert(key, idx);
        self.stats.record_insertion();

        if self.order.len() > self.capacity {
            if let Some((evicted, _)) = self.order.pop_back() {
                self.map.remove(&evicted);
                self.stats.record_eviction();
                debug!(
                    capacity = self.capacity,
                    evictions = self.stats.evictions,
                    "Evicted least recently used entry"
                );
            }
        }

        debug_assert!(self.map.len() <= self.capacity);
        debug_assert_eq!(self.map.len(), self.order.len());
    }

    // == Peek ==
    /// Retrieves a value without counting it as a use.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.map
            .get(key)
            .and_then(|&idx| self.order.get(idx))
            .map(|(_, value)| value)
    }

    // == Contains ==
    /// Checks whether a key is held, without counting it as a use.
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    // == Keys ==
    /// Iterates over held keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.order.iter().map(|(key, _)| key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.map.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
