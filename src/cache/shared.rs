//! Shared Pool Handle
//!
//! Wraps any pool behind a single mutex so several owners can use it from
//! different threads. Each pool operation runs under the lock for its whole
//! duration; sequences of operations are not atomic.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{CacheItem, ItemPool};
use crate::error::Result;

// == Shared Pool ==
/// Cloneable, thread-safe handle to a pool.
#[derive(Debug, Default)]
pub struct SharedPool<P> {
    inner: Arc<Mutex<P>>,
}

impl<P> SharedPool<P> {
    pub fn new(pool: P) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    /// Runs `f` with exclusive access to the wrapped pool.
    pub fn with_pool<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }
}

impl<P> Clone for SharedPool<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: ItemPool> ItemPool for SharedPool<P> {
    type Value = P::Value;

    fn get_item(&self, key: &str) -> Result<CacheItem<Self::Value>> {
        self.inner.lock().get_item(key)
    }

    fn get_items(&self, keys: &[&str]) -> Result<Vec<(String, CacheItem<Self::Value>)>> {
        self.inner.lock().get_items(keys)
    }

    fn has_item(&self, key: &str) -> Result<bool> {
        self.inner.lock().has_item(key)
    }

    fn clear(&mut self) -> Result<bool> {
        self.inner.lock().clear()
    }

    fn delete_item(&mut self, key: &str) -> Result<bool> {
        self.inner.lock().delete_item(key)
    }

    fn delete_items(&mut self, keys: &[&str]) -> Result<bool> {
        self.inner.lock().delete_items(keys)
    }

    fn save(&mut self, item: CacheItem<Self::Value>) -> Result<bool> {
        self.inner.lock().save(item)
    }

    fn save_deferred(&mut self, item: CacheItem<Self::Value>) -> Result<bool> {
        self.inner.lock().save_deferred(item)
    }

    fn commit(&mut self) -> Result<bool> {
        self.inner.lock().commit()
    }
}
