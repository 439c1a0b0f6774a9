//! Recording and snapshot traits.
//!
//! ```text
//!   ┌─────────────────────────────┐      ┌──────────────────────────────┐
//!   │     CoreMetricsRecorder     │      │ MetricsSnapshotProvider<S>   │
//!   │  get_hit/get_miss/put       │      │ (tests, benches, exporters)  │
//!   │  evict/remove/clear         │      └──────────────────────────────┘
//!   └─────────────────────────────┘
//! ```

/// Counters every recency cache records.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_put_call(&mut self);
    fn record_put_new(&mut self);
    fn record_put_update(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_removal(&mut self);
    fn record_clear(&mut self);
}

/// Produces a point-in-time copy of the counters.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}
