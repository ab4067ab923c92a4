//! Configuration Module
//!
//! Selects the pool backend and the logging sink from environment variables.

use std::env;

/// Storage backend behind the cache facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Every save is visible immediately
    #[default]
    Memory,
    /// Deferred saves stay staged until commit
    Deferred,
}

impl Backend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Some(Backend::Memory),
            "deferred" => Some(Backend::Deferred),
            _ => None,
        }
    }
}

/// Cache configuration parameters.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Pool implementation to build
    pub backend: Backend,
    /// Route absorbed failures to `tracing` instead of discarding them
    pub log_failures: bool,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_BACKEND` - `memory` or `deferred` (default: memory)
    /// - `CACHE_LOG_FAILURES` - `true` or `false` (default: true)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            backend: env::var("CACHE_BACKEND")
                .ok()
                .and_then(|v| Backend::parse(&v))
                .unwrap_or(defaults.backend),
            log_failures: env::var("CACHE_LOG_FAILURES")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_failures),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Memory,
            log_failures: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.backend, Backend::Memory);
        assert!(config.log_failures);
    }

    #[test]
    fn test_backend_parse() {
        assert_eq!(Backend::parse("memory"), Some(Backend::Memory));
        assert_eq!(Backend::parse(" Deferred "), Some(Backend::Deferred));
        assert_eq!(Backend::parse("redis"), None);
    }

    #[test]
    fn test_config_from_env() {
        // Both variables are handled in one test to avoid races between tests
        env::remove_var("CACHE_BACKEND");
        env::remove_var("CACHE_LOG_FAILURES");

        let config = CacheConfig::from_env();
        assert_eq!(config.backend, Backend::Memory);
        assert!(config.log_failures);

        env::set_var("CACHE_BACKEND", "deferred");
        env::set_var("CACHE_LOG_FAILURES", "false");

        let config = CacheConfig::from_env();
        assert_eq!(config.backend, Backend::Deferred);
        assert!(!config.log_failures);

        env::set_var("CACHE_BACKEND", "bogus");
        env::set_var("CACHE_LOG_FAILURES", "maybe");

        let config = CacheConfig::from_env();
        assert_eq!(config.backend, Backend::Memory);
        assert!(config.log_failures);

        env::remove_var("CACHE_BACKEND");
        env::remove_var("CACHE_LOG_FAILURES");
    }
}
