//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Invalid Key Error ==
/// Raised by every operation that accepts a key when the key is malformed.
///
/// This is a caller bug and is never absorbed by the facade.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidKeyError {
    /// Key is the empty string
    #[error("The key must be a non-empty string.")]
    Empty,

    /// Key exceeds the maximum length
    #[error("The key \"{key}\" must have a length of up to 64 characters, {length} given.")]
    TooLong { key: String, length: usize },

    /// Key contains characters outside `[A-Za-z0-9_.-]`
    #[error("The key \"{key}\" must be a string containing only alphanumeric characters, underscores, dots, and hyphens.")]
    InvalidCharacters { key: String },
}

// == Cache Error Enum ==
/// Unified error type at the pool boundary.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key failed validation
    #[error(transparent)]
    InvalidKey(#[from] InvalidKeyError),

    /// Storage backend failure
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl CacheError {
    /// Convenience constructor for backend failures carrying a plain message.
    pub fn backend(message: impl Into<String>) -> Self {
        CacheError::Backend(anyhow::Error::msg(message.into()))
    }
}

// == Result Type Alias ==
/// Convenience Result type for pool operations.
pub type Result<T> = std::result::Result<T, CacheError>;
