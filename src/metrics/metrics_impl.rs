use crate::metrics::traits::{CoreMetricsRecorder, MetricsReset};

#[derive(Debug, Default, Clone)]
pub struct LruMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub put_calls: u64,
    pub put_updates: u64,
    pub put_new: u64,
    pub evicted_entries: u64,
    pub removals: u64,
    pub clears: u64,
}

impl CoreMetricsRecorder for LruMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    fn record_put_call(&mut self) {
        self.put_calls += 1;
    }

    fn record_put_new(&mut self) {
        self.put_new += 1;
    }

    fn record_put_update(&mut self) {
        self.put_updates += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_removal(&mut self) {
        self.removals += 1;
    }

    fn record_clear(&mut self) {
        self.clears += 1;
    }
}

impl MetricsReset for LruMetrics {
    fn reset_metrics(&mut self) {
        *self = LruMetrics::default();
    }
}
