//! Counters for the LRU cache (enabled with the `metrics` feature).
//!
//! Recording is split from reading the same way the cache traits are split
//! from the cache types: [`LruCore`](crate::policy::lru::LruCore) writes to an
//! [`LruMetrics`] through [`CoreMetricsRecorder`], and callers read a
//! copyable [`LruMetricsSnapshot`] through [`MetricsSnapshotProvider`].
//!
//! Only paths that already hold `&mut` (the write lock) record; read-locked
//! paths such as `peek` and `iter` are not counted.

pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use metrics_impl::LruMetrics;
pub use snapshot::LruMetricsSnapshot;
pub use traits::{CoreMetricsRecorder, MetricsReset, MetricsSnapshotProvider};
