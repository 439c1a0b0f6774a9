//! Error types for the ringcache library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when cache configuration is invalid (zero
//!   capacity, unparsable `CACHE_CAPACITY`).
//! - [`InvariantError`]: Returned by [`LruCore::check_invariants`] when the
//!   index and the recency list disagree.
//!
//! A cache miss is never an error: lookups return `Option`.
//!
//! ## Example Usage
//!
//! ```
//! use ringcache::error::ConfigError;
//! use ringcache::policy::lru::LruCache;
//!
//! let cache: Result<LruCache<String, i32>, ConfigError> = LruCache::try_new(100);
//! assert!(cache.is_ok());
//!
//! let bad = LruCache::<String, i32>::try_new(0);
//! assert!(bad.unwrap_err().to_string().contains("capacity"));
//! ```
//!
//! [`LruCore::check_invariants`]: crate::policy::lru::LruCore::check_invariants

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`LruCache::try_new`](crate::policy::lru::LruCache::try_new),
/// [`LruCacheBuilder::try_build`](crate::builder::LruCacheBuilder::try_build)
/// and [`CacheConfig::from_env`](crate::config::CacheConfig::from_env).
///
/// # Example
///
/// ```
/// use ringcache::error::ConfigError;
/// use ringcache::builder::LruCacheBuilder;
///
/// let err = LruCacheBuilder::<u64>::new(0).try_build::<u64>().unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }

    pub(crate) fn zero_capacity() -> Self {
        Self::new("capacity must be greater than zero")
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
