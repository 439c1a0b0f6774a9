pub use crate::aside::{Backing, LoadError, read_through, warm, write_through};
pub use crate::builder::LruCacheBuilder;
pub use crate::config::CacheConfig;
pub use crate::ds::{IntrusiveList, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::{LruMetricsSnapshot, MetricsSnapshotProvider};
pub use crate::policy::lru::{LruCache, LruCore};
pub use crate::traits::SharedCache;
