//! Configuration for parallel aggregation.

use serde::{Deserialize, Serialize};

/// Default number of worker threads.
pub const DEFAULT_WORKER_COUNT: usize = 2;

/// Default number of processed files between progress notifications.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

/// Configuration for the parallel aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Number of worker threads. 0 selects one worker per CPU core.
    pub worker_count: usize,

    /// Stop consuming results once more than `limit` results have been
    /// merged. `None` processes the whole corpus.
    pub limit: Option<usize>,

    /// Emit a progress notification every time the processed count reaches a
    /// multiple of this interval.
    pub progress_interval: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            limit: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl AggregatorConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of worker threads.
    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Set the early-stop limit.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Set the progress notification interval.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Resolve the effective worker count (0 means one per CPU core).
    pub fn effective_worker_count(&self) -> usize {
        match self.worker_count {
            0 => num_cpus::get(),
            n => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AggregatorConfig::default();

        assert_eq!(config.worker_count, DEFAULT_WORKER_COUNT);
        assert_eq!(config.limit, None);
        assert_eq!(config.progress_interval, DEFAULT_PROGRESS_INTERVAL);
    }

    #[test]
    fn test_builder_methods() {
        let config = AggregatorConfig::new()
            .with_worker_count(4)
            .with_limit(Some(10))
            .with_progress_interval(50);

        assert_eq!(config.worker_count, 4);
        assert_eq!(config.limit, Some(10));
        assert_eq!(config.progress_interval, 50);
    }

    #[test]
    fn test_zero_workers_resolves_to_cpu_count() {
        let config = AggregatorConfig::new().with_worker_count(0);

        assert!(config.effective_worker_count() >= 1);
    }
}
