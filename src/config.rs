//! Cache configuration loaded from the process environment.
//!
//! | Variable         | Field      | Default |
//! |------------------|------------|---------|
//! | `CACHE_CAPACITY` | `capacity` | 10      |
//!
//! An unset variable keeps the default. A value that does not parse as an
//! unsigned integer, or parses as zero, is a [`ConfigError`].
//!
//! ```
//! use ringcache::config::CacheConfig;
//!
//! let config = CacheConfig::default();
//! assert_eq!(config.capacity, 10);
//!
//! let cache = config.into_builder::<String>().build::<u64>();
//! assert_eq!(cache.capacity(), 10);
//! ```

use std::env;

use crate::builder::LruCacheBuilder;
use crate::error::ConfigError;

/// Environment variable holding the cache capacity.
pub const CACHE_CAPACITY_VAR: &str = "CACHE_CAPACITY";

/// Capacity used when `CACHE_CAPACITY` is unset.
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries.
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// Reads `CACHE_CAPACITY` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) with a caller-supplied variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(CACHE_CAPACITY_VAR) {
            config.capacity = raw.trim().parse::<usize>().map_err(|err| {
                ConfigError::new(format!(
                    "{CACHE_CAPACITY_VAR}={raw:?} is not a valid capacity: {err}"
                ))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::zero_capacity());
        }
        Ok(())
    }

    /// Starts an [`LruCacheBuilder`] with this configuration.
    pub fn into_builder<V>(self) -> LruCacheBuilder<V> {
        LruCacheBuilder::new(self.capacity)
    }
}
