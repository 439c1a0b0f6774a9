//! ringcache: a fixed-capacity LRU cache built on an arena-backed,
//! sentinel-rooted intrusive list.
//!
//! - [`ds`]: the slot arena and the circular recency list.
//! - [`policy::lru`]: `LruCore` (list + index) and the thread-safe `LruCache`.
//! - [`aside`]: read-through, write-through and warm-up against a durable store.
//! - [`config`] / [`builder`]: capacity from `CACHE_CAPACITY`, validated construction.

pub mod aside;
pub mod builder;
pub mod config;
pub mod ds;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod traits;

#[cfg(feature = "metrics")]
pub mod metrics;
