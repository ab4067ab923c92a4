//! Deferred-Write Pool
//!
//! Keeps committed items and staged items in separate maps. Staged items
//! count as existing for `has_item` but are not readable until `commit`.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{validate_key, CacheItem, ItemPool};
use crate::error::Result;

// == Deferred Pool ==
/// Pool supporting batched writes through `save_deferred` and `commit`.
#[derive(Debug, Clone)]
pub struct DeferredPool<V> {
    /// Committed, readable items
    items: HashMap<String, CacheItem<V>>,
    /// Staged write intents awaiting commit
    deferred: HashMap<String, CacheItem<V>>,
}

impl<V> DeferredPool<V> {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            deferred: HashMap::new(),
        }
    }

    // == Length ==
    /// Returns the number of committed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // == Pending ==
    /// Returns the number of staged items awaiting commit.
    pub fn pending(&self) -> usize {
        self.deferred.len()
    }
}

impl<V> Default for DeferredPool<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> ItemPool for DeferredPool<V> {
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

        Ok(self.items.contains_key(key) || self.deferred.contains_key(key))
    }

    /// Drops committed and staged items alike.
    fn clear(&mut self) -> Result<bool> {
        debug!(
            "Clearing deferred pool: {} committed, {} staged",
            self.items.len(),
            self.deferred.len()
        );
        self.items.clear();
        self.deferred.clear();

        Ok(true)
    }

    /// Removes the key from both maps; true if either held it.
    fn delete_item(&mut self, key: &str) -> Result<bool> {
        validate_key(key)?;

        let committed = self.items.remove(key).is_some();
        let staged = self.deferred.remove(key).is_some();

        Ok(committed || staged)
    }

    fn save(&mut self, item: CacheItem<V>) -> Result<bool> {
        validate_key(item.key())?;
        self.items.insert(item.key().to_string(), item);

        Ok(true)
    }

    fn save_deferred(&mut self, item: CacheItem<V>) -> Result<bool> {
        validate_key(item.key())?;
        self.deferred.insert(item.key().to_string(), item);

        Ok(true)
    }

    fn commit(&mut self) -> Result<bool> {
        let staged = self.deferred.len();
        self.items.extend(self.deferred.drain());
        debug!("Committed {} staged items", staged);

        Ok(true)
    }
}
