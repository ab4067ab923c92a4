//! Cache Facade
//!
//! High-level get/set/delete API over any [`ItemPool`].
//!
//! Only key-validation errors reach the caller. Every other pool failure is
//! logged at alert severity and turned into a miss for reads or `false` for
//! writes, so a broken backend degrades to the slow path instead of failing.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Duration;

use crate::cache::{
    instant_after, validate_key, validate_keys, CacheItem, DeferredPool, Expiration, ItemPool,
    MemoryPool,
};
use crate::config::{Backend, CacheConfig};
use crate::error::{CacheError, InvalidKeyError, Result};
use crate::logger::{CacheLogger, NullLogger, Severity, TracingLogger};

// == Templates ==
/// Logged when a backend failure is absorbed.
pub const FAILURE_TEMPLATE: &str = "An error occurred with cache: {message}";
const SET_FAILURE_TEMPLATE: &str = "Unable to set cache with key \"{key}\"";
const DELETE_FAILURE_TEMPLATE: &str = "Unable to delete cache with key \"{key}\"";

/// Result type of facade operations: only invalid keys surface as errors.
pub type KeyResult<T> = std::result::Result<T, InvalidKeyError>;

/// Boxed pool used when the backend is chosen at runtime.
pub type BoxedPool<V> = Box<dyn ItemPool<Value = V> + Send>;

// == Expiry ==
/// Time-to-live accepted by [`Cache::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Expires this long after the write; negative intervals are already expired
    After(Duration),
    /// Expires at an absolute Unix timestamp in seconds
    Timestamp(i64),
}

impl Expiry {
    fn into_expiration(self) -> Expiration {
        match self {
            Expiry::After(interval) => Expiration::At(instant_after(interval)),
            Expiry::Timestamp(ts) => Expiration::Timestamp(ts),
        }
    }
}

// == Cache ==
/// Key/value cache delegating storage to a pool.
pub struct Cache<P: ItemPool> {
    pool: P,
    logger: Arc<dyn CacheLogger>,
}

impl<V> Cache<BoxedPool<V>>
where
    V: Clone + Send + 'static,
{
    /// Builds a cache with the backend and logging selected by `config`.
    pub fn from_config(config: &CacheConfig) -> Self {
        let pool: BoxedPool<V> = match config.backend {
            Backend::Memory => Box::new(MemoryPool::new()),
            Backend::Deferred => Box::new(DeferredPool::new()),
        };
        let logger: Arc<dyn CacheLogger> = if config.log_failures {
            Arc::new(TracingLogger)
        } else {
            Arc::new(NullLogger)
        };

        Self::with_logger(pool, logger)
    }
}

impl<P: ItemPool> Cache<P> {
    // == Constructors ==
    /// Creates a cache that discards diagnostics.
    pub fn new(pool: P) -> Self {
        Self::with_logger(pool, Arc::new(NullLogger))
    }

    pub fn with_logger(pool: P, logger: Arc<dyn CacheLogger>) -> Self {
        Self { pool, logger }
    }

    pub fn set_logger(&mut self, logger: Arc<dyn CacheLogger>) {
        self.logger = logger;
    }

    pub fn pool(&self) -> &P {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut P {
        &mut self.pool
    }

    pub fn into_pool(self) -> P {
        self.pool
    }

    // == Get ==
    /// Returns the value stored under `key` if it is currently a hit.
    ///
    /// Backend failures are logged and reported as a miss.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the item is a hit
    /// - `Ok(None)` if the key is absent, expired, or the pool failed
    /// - `Err(InvalidKeyError)` if the key is malformed
    pub fn get(&self, key: &str) -> KeyResult<Option<P::Value>> {
        validate_key(key)?;

        let outcome = self
            .pool
            .get_item(key)
            .map(|item| if item.is_hit() { item.into_value() } else { None });
        self.contain(outcome, None)
    }

    /// Like [`Cache::get`], substituting `default` on a miss.
    pub fn get_or(&self, key: &str, default: P::Value) -> KeyResult<P::Value> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    // == Get Multiple ==
    /// Looks up every key, in request order. Duplicates collapse into their
    /// first position.
    pub fn get_multiple<I, K>(&self, keys: I) -> KeyResult<Vec<(String, Option<P::Value>)>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let keys = validate_keys(keys)?;
        let mut seen: HashSet<String> = HashSet::with_capacity(keys.len());
        let mut values: Vec<(String, Option<P::Value>)> = Vec::with_capacity(keys.len());

        for key in keys {
            if !seen.insert(key.clone()) {
                continue;
            }
            let value = self.get(&key)?;
            values.push((key, value));
        }

        Ok(values)
    }

    /// Like [`Cache::get_multiple`], substituting `default` for every miss.
    pub fn get_multiple_or<I, K>(
        &self,
        keys: I,
        default: P::Value,
    ) -> KeyResult<Vec<(String, P::Value)>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        Ok(self
            .get_multiple(keys)?
            .into_iter()
            .map(|(key, value)| (key, value.unwrap_or_else(|| default.clone())))
            .collect())
    }

    // == Set ==
    /// Stores `value` under `key`.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional expiry; `None` means the value never expires.
    ///   Intervals past the representable range saturate instead of failing.
    ///
    /// # Returns
    /// The pool's success flag, `false` if the pool failed, or
    /// `Err(InvalidKeyError)` if the key is malformed.
    pub fn set(&mut self, key: &str, value: P::Value, ttl: Option<Expiry>) -> KeyResult<bool> {
        validate_key(key)?;

        let item =
            CacheItem::with_value(key, value).with_expiration(ttl.map(Expiry::into_expiration));
        let outcome = self.pool.save(item);
        self.contain(outcome, false)
    }

    /// Stores every entry with the same `ttl`; true only if all succeeded.
    ///
    /// Keys are validated before anything is written.
    pub fn set_multiple<I, K>(&mut self, values: I, ttl: Option<Expiry>) -> KeyResult<bool>
    where
        I: IntoIterator<Item = (K, P::Value)>,
        K: AsRef<str>,
    {
        let values: Vec<(K, P::Value)> = values.into_iter().collect();
        validate_keys(values.iter().map(|(key, _)| key))?;

        let mut success = true;
        for (key, value) in values {
            let key = key.as_ref();
            if !self.set(key, value, ttl)? {
                self.logger.log(Severity::Error, SET_FAILURE_TEMPLATE, &[("key", key)]);
                success = false;
            }
        }

        Ok(success)
    }

    // == Delete ==
    /// Removes `key`; false if it was absent or the pool failed.
    pub fn delete(&mut self, key: &str) -> KeyResult<bool> {
        validate_key(key)?;

        let outcome = self.pool.delete_item(key);
        self.contain(outcome, false)
    }

    /// Deletes every key; true only if all deletions succeeded.
    ///
    /// Keys are validated before anything is removed.
    pub fn delete_multiple<I, K>(&mut self, keys: I) -> KeyResult<bool>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let keys = validate_keys(keys)?;

        let mut success = true;
        for key in keys {
            if !self.delete(&key)? {
                self.logger
                    .log(Severity::Error, DELETE_FAILURE_TEMPLATE, &[("key", key.as_str())]);
                success = false;
            }
        }

        Ok(success)
    }

    // == Clear ==
    pub fn clear(&mut self) -> bool {
        match self.pool.clear() {
            Ok(cleared) => cleared,
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    // == Has ==
    /// Returns true if the pool holds an entry for `key`, hit or not.
    pub fn has(&self, key: &str) -> KeyResult<bool> {
        validate_key(key)?;

        let outcome = self.pool.has_item(key);
        self.contain(outcome, false)
    }

    // == Containment ==
    /// Passes invalid-key errors through and swaps any other failure for
    /// `fallback` after logging it.
    fn contain<T>(&self, outcome: Result<T>, fallback: T) -> KeyResult<T> {
        match outcome {
            Ok(value) => Ok(value),
            Err(CacheError::InvalidKey(err)) => Err(err),
            Err(err) => {
                self.report(&err);
                Ok(fallback)
            }
        }
    }

    fn report(&self, err: &CacheError) {
        let message = err.to_string();
        self.logger
            .log(Severity::Alert, FAILURE_TEMPLATE, &[("message", message.as_str())]);
    }
}
