//! Memoizing lookup cache
//!
//! Unbounded key/value store: no eviction, no TTL, no internal locking.
//! Entries live until `clear` is called.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Generic memoizing cache
#[derive(Clone, Debug)]
pub struct Cache<K, V> {
    entries: FxHashMap<K, V>,
}

impl<K: Eq + Hash, V> Cache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// True iff a resolved entry exists for `key`
    pub fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Stored value, or `None` when absent
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Insert or overwrite
    pub fn set(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Current entry count
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for Cache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
