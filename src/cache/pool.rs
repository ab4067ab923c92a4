//! Item Pool Contract
//!
//! The swappable storage seam. The facade talks to any backend through this
//! trait, whether in-memory, deferred-write, or supplied by the caller.

use std::collections::HashSet;

use crate::cache::{validate_keys, CacheItem};
use crate::error::Result;

// == Item Pool ==
/// Key-addressed store of cache items.
///
/// Every key-accepting operation validates the key first and returns
/// `CacheError::InvalidKey` on failure. Any other error is a backend failure.
/// A miss is never an error: `get_item` returns an empty item instead.
pub trait ItemPool {
    /// Payload type held by the items of this pool.
    type Value: Clone;

    /// Returns the committed item for `key`, or an empty item on a miss.
    fn get_item(&self, key: &str) -> Result<CacheItem<Self::Value>>;

    /// Returns one item per requested key, in request order.
    ///
    /// Duplicate keys collapse into their first position.
    fn get_items(&self, keys: &[&str]) -> Result<Vec<(String, CacheItem<Self::Value>)>> {
        let keys = validate_keys(keys)?;
        let mut seen: HashSet<String> = HashSet::with_capacity(keys.len());
        let mut items: Vec<(String, CacheItem<Self::Value>)> = Vec::with_capacity(keys.len());

        for key in keys {
            if !seen.insert(key.clone()) {
                continue;
            }
            let item = self.get_item(&key)?;
            items.push((key, item));
        }

        Ok(items)
    }

    /// Returns true if the pool holds an entry for `key`.
    fn has_item(&self, key: &str) -> Result<bool>;

    /// Removes every entry.
    fn clear(&mut self) -> Result<bool>;

    /// Removes `key`, returning false when nothing was stored under it.
    fn delete_item(&mut self, key: &str) -> Result<bool>;

    /// Deletes every key and returns true only if each deletion succeeded.
    ///
    /// All keys are attempted even after a failed deletion.
    fn delete_items(&mut self, keys: &[&str]) -> Result<bool> {
        let keys = validate_keys(keys)?;
        let mut success = true;

        for key in keys {
            success &= self.delete_item(&key)?;
        }

        Ok(success)
    }

    /// Stores `item`, replacing any entry under the same key.
    fn save(&mut self, item: CacheItem<Self::Value>) -> Result<bool>;

    /// Stages `item` until the next `commit`.
    fn save_deferred(&mut self, item: CacheItem<Self::Value>) -> Result<bool>;

    /// Persists every staged item.
    fn commit(&mut self) -> Result<bool>;
}

impl<P: ItemPool + ?Sized> ItemPool for Box<P> {
    type Value = P::Value;

    fn get_item(&self, key: &str) -> Result<CacheItem<Self::Value>> {
        (**self).get_item(key)
    }

    fn get_items(&self, keys: &[&str]) -> Result<Vec<(String, CacheItem<Self::Value>)>> {
        (**self).get_items(keys)
    }

    fn has_item(&self, key: &str) -> Result<bool> {
        (**self).has_item(key)
    }

    fn clear(&mut self) -> Result<bool> {
        (**self).clear()
    }

    fn delete_item(&mut self, key: &str) -> Result<bool> {
        (**self).delete_item(key)
    }

    fn delete_items(&mut self, keys: &[&str]) -> Result<bool> {
        (**self).delete_items(keys)
    }

    fn save(&mut self, item: CacheItem<Self::Value>) -> Result<bool> {
        (**self).save(item)
    }

    fn save_deferred(&mut self, item: CacheItem<Self::Value>) -> Result<bool> {
        (**self).save_deferred(item)
    }

    fn commit(&mut self) -> Result<bool> {
        (**self).commit()
    }
}
