//! # Cache-Aside Helpers
//!
//! Glue between a [`SharedCache`] and the durable store it fronts.
//!
//! ```text
//!   read_through(key)                 write_through(key, value)
//!   ─────────────────                 ─────────────────────────
//!   cache.get(key) ── hit ──► value   backing.store(key, value) ── err ──► LoadError::Store
//!        │                                    │                            (cache untouched)
//!       miss                                  ok
//!        ▼                                    ▼
//!   backing.fetch(key)                 cache.put(key, value)
//!        │
//!        ├── Some(v) ──► cache.put(key, v) ──► Some(v)
//!        ├── None    ──► None
//!        └── Err     ──► LoadError::Fetch
//!
//!   warm()
//!   ──────
//!   backing.latest(capacity)   newest first: [e5, e4, e3]
//!   put in reverse             e3, e4, e5   → e5 ends at the MRU position
//! ```
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use std::convert::Infallible;
//! use std::sync::Mutex;
//!
//! use ringcache::aside::{read_through, Backing};
//! use ringcache::policy::lru::LruCache;
//!
//! struct Orders(Mutex<HashMap<u64, String>>);
//!
//! impl Backing<u64, String> for Orders {
//!     type Error = Infallible;
//!
//!     fn fetch(&self, key: &u64) -> Result<Option<String>, Infallible> {
//!         Ok(self.0.lock().unwrap().get(key).cloned())
//!     }
//!
//!     fn store(&self, key: &u64, value: &String) -> Result<(), Infallible> {
//!         self.0.lock().unwrap().insert(*key, value.clone());
//!         Ok(())
//!     }
//!
//!     fn latest(&self, _limit: usize) -> Result<Vec<(u64, String)>, Infallible> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! let db = Orders(Mutex::new(HashMap::from([(7, "order #7".to_string())])));
//! let cache: LruCache<u64, String> = LruCache::new(4);
//!
//! let view = read_through(&cache, &db, &7).unwrap();
//! assert_eq!(view.as_deref().map(String::as_str), Some("order #7"));
//! assert!(cache.contains(&7));
//! ```

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::traits::SharedCache;

/// Durable store behind the cache.
pub trait Backing<K, V> {
    type Error: Error + 'static;

    /// Loads one entity, `None` when it does not exist.
    fn fetch(&self, key: &K) -> Result<Option<V>, Self::Error>;

    /// Persists one entity.
    fn store(&self, key: &K, value: &V) -> Result<(), Self::Error>;

    /// Up to `limit` most recently created entities, newest first.
    fn latest(&self, limit: usize) -> Result<Vec<(K, V)>, Self::Error>;
}

/// Failure of the backing store during a cache-aside operation.
#[derive(Debug)]
pub enum LoadError<E> {
    /// `fetch` failed on a cache miss.
    Fetch(E),
    /// `store` failed; the cache was not updated.
    Store(E),
    /// `latest` failed while warming.
    Warm(E),
}

impl<E> LoadError<E> {
    pub fn into_inner(self) -> E {
        match self {
            LoadError::Fetch(err) | LoadError::Store(err) | LoadError::Warm(err) => err,
        }
    }
}

impl<E: fmt::Display> fmt::Display for LoadError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Fetch(err) => write!(f, "fetching from backing store failed: {}", err),
            LoadError::Store(err) => write!(f, "persisting to backing store failed: {}", err),
            LoadError::Warm(err) => write!(f, "loading latest entries for warm-up failed: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for LoadError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Fetch(err) | LoadError::Store(err) | LoadError::Warm(err) => Some(err),
        }
    }
}

/// Returns the cached value, loading and caching it from `backing` on a miss.
pub fn read_through<K, V, C, B>(
    cache: &C,
    backing: &B,
    key: &K,
) -> Result<Option<Arc<V>>, LoadError<B::Error>>
where
    K: Clone,
    C: SharedCache<K, V> + ?Sized,
    B: Backing<K, V> + ?Sized,
{
    if let Some(value) = cache.get(key) {
        debug!("read-through hit");
        return Ok(Some(value));
    }

    match backing.fetch(key) {
        Ok(Some(value)) => {
            let value = Arc::new(value);
            cache.put_arc(key.clone(), Arc::clone(&value));
            debug!(size = cache.size(), "read-through miss, populated from backing store");
            Ok(Some(value))
        },
        Ok(None) => {
            debug!("read-through miss, absent from backing store");
            Ok(None)
        },
        Err(err) => {
            warn!(error = %err, "read-through fetch failed");
            Err(LoadError::Fetch(err))
        },
    }
}

/// Persists `value`, then caches it. Nothing is cached when persisting fails.
pub fn write_through<K, V, C, B>(
    cache: &C,
    backing: &B,
    key: K,
    value: V,
) -> Result<Arc<V>, LoadError<B::Error>>
where
    C: SharedCache<K, V> + ?Sized,
    B: Backing<K, V> + ?Sized,
{
    if let Err(err) = backing.store(&key, &value) {
        warn!(error = %err, "write-through store failed, cache left unchanged");
        return Err(LoadError::Store(err));
    }

    let value = Arc::new(value);
    cache.put_arc(key, Arc::clone(&value));
    debug!(size = cache.size(), "write-through stored and cached");
    Ok(value)
}

/// Fills the cache with the `capacity` most recent entities.
///
/// Entries are inserted oldest first so the newest one ends up most recently
/// used. Returns the number of entries inserted.
pub fn warm<K, V, C, B>(cache: &C, backing: &B) -> Result<usize, LoadError<B::Error>>
where
    C: SharedCache<K, V> + ?Sized,
    B: Backing<K, V> + ?Sized,
{
    let capacity = cache.capacity();
    let entries = backing.latest(capacity).map_err(|err| {
        warn!(error = %err, capacity, "warm-up query failed");
        LoadError::Warm(err)
    })?;

    // The store may hand back more than asked for; only the newest `capacity` count.
    let take = entries.len().min(capacity);
    let mut loaded = 0usize;
    for (key, value) in entries.into_iter().take(take).rev() {
        cache.put(key, value);
        loaded += 1;
    }

    info!(loaded, capacity, "cache warmed");
    Ok(loaded)
}
