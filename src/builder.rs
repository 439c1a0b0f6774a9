//! Builder for [`LruCache`].
//!
//! Collects the capacity and an optional miss value, then produces the
//! thread-safe cache. `build` panics on a zero capacity like
//! [`LruCache::new`]; `try_build` reports it as a [`ConfigError`].
//!
//! ## Example
//!
//! ```rust
//! use ringcache::builder::LruCacheBuilder;
//!
//! let cache = LruCacheBuilder::new(100)
//!     .default_value(String::from("not cached"))
//!     .build::<u64>();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1).as_deref().map(String::as_str), Some("hello"));
//! assert_eq!(
//!     cache.get_or_default(&2).as_deref().map(String::as_str),
//!     Some("not cached")
//! );
//! ```

use std::hash::Hash;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::policy::lru::{LruCache, LruCore};

/// Builder for creating [`LruCache`] instances.
#[derive(Debug, Clone)]
pub struct LruCacheBuilder<V> {
    capacity: usize,
    default_value: Option<Arc<V>>,
}

impl<V> LruCacheBuilder<V> {
    /// Create a new builder with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            default_value: None,
        }
    }

    /// Overrides the capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Value returned by [`LruCache::get_or_default`] on a miss.
    pub fn default_value(mut self, value: V) -> Self {
        self.default_value = Some(Arc::new(value));
        self
    }

    /// Build the cache.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero.
    pub fn build<K>(self) -> LruCache<K, V>
    where
        K: Clone + Eq + Hash,
    {
        match self.try_build() {
            Ok(cache) => cache,
            Err(err) => panic!("LruCacheBuilder::build: {err}"),
        }
    }

    /// Build the cache, rejecting a zero capacity.
    pub fn try_build<K>(self) -> Result<LruCache<K, V>, ConfigError>
    where
        K: Clone + Eq + Hash,
    {
        let core = LruCore::try_new(self.capacity)?;
        Ok(LruCache::from_parts(core, self.default_value))
    }
}
