//! Pool Cache - An in-process key/value cache
//!
//! Provides a uniform get/set/delete facade over pluggable item pools, with
//! time-based expiration evaluated lazily on read.

pub mod cache;
pub mod config;
pub mod error;
pub mod facade;
pub mod logger;

pub use cache::{CacheItem, DeferredPool, ItemPool, MemoryPool, SharedPool};
pub use config::{Backend, CacheConfig};
pub use error::{CacheError, InvalidKeyError};
pub use facade::{BoxedPool, Cache, Expiry};
pub use logger::{CacheLogger, NullLogger, Severity, TracingLogger};
