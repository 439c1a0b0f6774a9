//! # Shared Cache Seam
//!
//! Collaborators (request handlers, warm-up jobs, the [`aside`](crate::aside)
//! routines) depend on [`SharedCache`] rather than on a concrete cache type.
//! Implementations take `&self` and synchronize internally, so one handle can
//! be cloned into every worker.
//!
//! ```text
//!   ┌──────────────────────┐        ┌─────────────────────────────────────┐
//!   │  handler / warm-up   │ ─────► │         SharedCache<K, V>           │
//!   └──────────────────────┘        │                                     │
//!                                   │  put(&self, K, V)                   │
//!                                   │  put_arc(&self, K, Arc<V>)          │
//!                                   │  get(&self, &K) → Option<Arc<V>>    │
//!                                   │  size(&self) → usize                │
//!                                   │  capacity(&self) → usize            │
//!                                   └──────────────────┬──────────────────┘
//!                                                      │ implemented by
//!                                                      ▼
//!                                   ┌─────────────────────────────────────┐
//!                                   │   LruCache<K, V> (RwLock inside)    │
//!                                   └─────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use ringcache::policy::lru::LruCache;
//! use ringcache::traits::SharedCache;
//!
//! fn remember<C: SharedCache<u64, String>>(cache: &C, id: u64, view: String) {
//!     cache.put(id, view);
//! }
//!
//! let cache: LruCache<u64, String> = LruCache::new(8);
//! remember(&cache, 1, "order #1".to_string());
//! assert_eq!(SharedCache::size(&cache), 1);
//! ```

use std::sync::Arc;

/// Thread-safe key/value cache shared by reference.
///
/// A miss is `None`. Implementations decide what is evicted when full; the
/// only promise is that `size() <= capacity()` after every `put`.
pub trait SharedCache<K, V>: Send + Sync {
    /// Inserts or updates an entry.
    fn put(&self, key: K, value: V);

    /// Inserts a value that is already shared.
    fn put_arc(&self, key: K, value: Arc<V>);

    /// Looks up `key`, counting it as a use.
    fn get(&self, key: &K) -> Option<Arc<V>>;

    fn size(&self) -> usize;

    fn capacity(&self) -> usize;
}
