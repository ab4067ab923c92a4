//! Cache Module
//!
//! Provides cache items with time-based expiration and the pools that store them.

mod deferred;
mod item;
mod key;
mod memory;
mod pool;
mod shared;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use deferred::DeferredPool;
pub use item::{current_timestamp, instant_after, CacheItem, Expiration, TimeToLive};
pub use key::{validate_key, validate_keys};
pub use memory::MemoryPool;
pub use pool::ItemPool;
pub use shared::SharedPool;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 64;
