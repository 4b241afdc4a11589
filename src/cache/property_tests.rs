//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check capacity, recency and overwrite behaviour of `LruCache`.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::cache::LruCache;

// == Strategies ==
/// Small key space so sequences revisit keys often
fn key_strategy() -> impl Strategy<Value = u8> {
    0u8..16
}

/// Values include negatives, so a -1 miss sentinel would collide
fn value_strategy() -> impl Strategy<Value = i64> {
    -4i64..1000
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: u8, value: i64 },
    Get { key: u8 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

// == Reference Model ==
/// Linear-scan model: entries ordered from least to most recently used.
struct ModelCache {
    entries: Vec<(u8, i64)>,
    capacity: usize,
}

impl ModelCache {
    fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    fn get(&mut self, key: u8) -> Option<i64> {
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        let entry = self.entries.remove(pos);
        self.entries.push(entry);
        Some(entry.1)
    }

    fn put(&mut self, key: u8, value: i64) {
        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries.remove(pos);
        }
        self.entries.push((key, value));
        if self.entries.len() > self.capacity {
            self.entries.remove(0);
        }
    }

    fn keys(&self) -> Vec<u8> {
        self.entries.iter().map(|(k, _)| *k).collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // For any sequence of operations the cache agrees with the linear model
    // on every lookup and on the final recency order.
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..200)
    ) {
        let mut cache = LruCache::new(capacity).unwrap();
        let mut model = ModelCache::new(capacity);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    cache.put(key, value);
                    model.put(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key).copied(), model.get(key));
                }
            }
            prop_assert_eq!(cache.keys().copied().collect::<Vec<_>>(), model.keys());
        }
    }

    // For any sequence of puts, size never exceeds capacity.
    #[test]
    fn prop_capacity_enforcement(
        capacity in 1usize..20,
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..200)
    ) {
        let mut cache = LruCache::new(capacity).unwrap();

        for (key, value) in entries {
            cache.put(key, value);
            prop_assert!(
                cache.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                cache.len(),
                capacity
            );
        }
    }

    // Immediately after put(k, v), get(k) returns v.
    #[test]
    fn prop_put_then_get(
        capacity in 1usize..8,
        prefix in prop::collection::vec((key_strategy(), value_strategy()), 0..50),
        key in key_strategy(),
        value in value_strategy()
    ) {
        let mut cache = LruCache::new(capacity).unwrap();
        for (k, v) in prefix {
            cache.put(k, v);
        }

        cache.put(key, value);
        prop_assert_eq!(cache.get(&key), Some(&value));
    }

    // put(k, v1) then put(k, v2) leaves size unchanged and get(k) returns v2.
    #[test]
    fn prop_overwrite_semantics(
        capacity in 1usize..8,
        prefix in prop::collection::vec((key_strategy(), value_strategy()), 0..50),
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut cache = LruCache::new(capacity).unwrap();
        for (k, v) in prefix {
            cache.put(k, v);
        }

        cache.put(key, value1);
        let size = cache.len();
        cache.put(key, value2);

        prop_assert_eq!(cache.len(), size);
        prop_assert_eq!(cache.get(&key), Some(&value2));
    }

    // A miss changes neither the size nor the recency order.
    #[test]
    fn prop_miss_is_side_effect_free(
        capacity in 1usize..8,
        entries in prop::collection::vec((key_strategy(), value_strategy()), 0..50),
        probe in 100u8..200
    ) {
        let mut cache = LruCache::new(capacity).unwrap();
        for (k, v) in entries {
            cache.put(k, v);
        }

        let size = cache.len();
        let order: Vec<u8> = cache.keys().copied().collect();

        prop_assert_eq!(cache.get(&probe), None);
        prop_assert_eq!(cache.len(), size);
        prop_assert_eq!(cache.keys().copied().collect::<Vec<_>>(), order);
    }

    // After filling to capacity, one more new key evicts exactly the key
    // that went longest without a use; a get hit moves a key out of that slot.
    #[test]
    fn prop_lru_eviction_order(
        keys in prop::collection::vec(0u8..64, 2..10),
        touched in 0usize..100,
        new_key in 64u8..128
    ) {
        let unique: Vec<u8> = {
            let mut seen = HashSet::new();
            keys.into_iter().filter(|k| seen.insert(*k)).collect()
        };
        prop_assume!(unique.len() >= 2);

        let capacity = unique.len();
        let mut cache = LruCache::new(capacity).unwrap();
        for key in &unique {
            cache.put(*key, i64::from(*key));
        }

        // Refresh one key; if it was the oldest, the next one becomes oldest
        let touched_key = unique[touched % capacity];
        cache.get(&touched_key);
        let expected_victim = if touched_key == unique[0] { unique[1] } else { unique[0] };

        cache.put(new_key, -1);

        prop_assert_eq!(cache.len(), capacity);
        prop_assert!(!cache.contains(&expected_victim));
        prop_assert!(cache.contains(&new_key));
        for key in unique.iter().filter(|k| **k != expected_victim) {
            prop_assert_eq!(cache.get(key), Some(&i64::from(*key)));
        }
    }
}
