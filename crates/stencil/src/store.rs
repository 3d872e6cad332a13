//! Keyed in-memory storage behind generated repositories

use dashmap::DashMap;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

/// Returned by generated controllers when a keyed entity does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("entity not found")]
pub struct NotFound;

/// Concurrent map from key to entity.
///
/// Reads hand out clones so no lock is held once a call returns.
pub struct KeyedStore<K, V> {
    entries: DashMap<K, V>,
}

impl<K: Eq + Hash, V: Clone> KeyedStore<K, V> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Insert or overwrite, returning the previous value.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Apply `f` to an existing entry in place and return the updated value.
    ///
    /// Returns `None` without calling `f` when `key` is absent.
    pub fn update<F>(&self, key: &K, f: F) -> Option<V>
    where
        F: FnOnce(&mut V),
    {
        self.entries.get_mut(key).map(|mut entry| {
            f(entry.value_mut());
            entry.value().clone()
        })
    }

    /// Remove an entry; removing an absent key is a no-op.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|(_, value)| value)
    }

    /// Snapshot of every value, in no particular order.
    pub fn values(&self) -> Vec<V> {
        self.entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V: Clone> Default for KeyedStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for KeyedStore<K, V>
where
    K: Eq + Hash + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedStore")
            .field("len", &self.entries.len())
            .finish()
    }
}
