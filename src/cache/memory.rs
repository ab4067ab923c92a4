//! In-Memory Pool
//!
//! Immediate-write pool backed by a HashMap. Deferred saves are written
//! through, so `commit` has nothing left to do.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{validate_key, CacheItem, ItemPool};
use crate::error::Result;

// == Memory Pool ==
/// Single-process pool where every save is visible immediately.
#[derive(Debug, Clone)]
pub struct MemoryPool<V> {
    /// Committed items by key
    items: HashMap<String, CacheItem<V>>,
}

impl<V> MemoryPool<V> {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    // == Length ==
    /// Returns the number of stored items, expired or not.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<V> Default for MemoryPool<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> ItemPool for MemoryPool<V> {
    type Value = V;

    fn get_item(&self, key: &str) -> Result<CacheItem<V>> {
        validate_key(key)?;

        Ok(self
            .items
            .get(key)
            .cloned()
            .unwrap_or_else(|| CacheItem::new(key)))
    }

    fn has_item(&self, key: &str) -> Result<bool> {
        validate_key(key)?;

        Ok(self.items.contains_key(key))
    }

    fn clear(&mut self) -> Result<bool> {
        debug!("Clearing {} items from memory pool", self.items.len());
        self.items.clear();

        Ok(true)
    }

    fn delete_item(&mut self, key: &str) -> Result<bool> {
        validate_key(key)?;

        Ok(self.items.remove(key).is_some())
    }

    fn save(&mut self, item: CacheItem<V>) -> Result<bool> {
        validate_key(item.key())?;
        self.items.insert(item.key().to_string(), item);

        Ok(true)
    }

    fn save_deferred(&mut self, item: CacheItem<V>) -> Result<bool> {
        self.save(item)
    }

    fn commit(&mut self) -> Result<bool> {
        Ok(true)
    }
}
