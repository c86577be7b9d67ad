//! Parallel aggregation engine.
//!
//! Distributes per-shard counting across a fixed pool of worker threads and
//! merges the results into a single mapping. Workers communicate with the
//! coordinator only by message-passing of result values: each worker owns its
//! private tokenizer, and the coordinator exclusively owns the running
//! aggregate.
//!
//! Results are consumed in submission order even though workers complete out
//! of order, so progress accounting is deterministic for a given corpus and
//! worker count.

use std::path::PathBuf;
use std::thread;

use ahash::AHashMap;
use crossbeam_channel::{Receiver, unbounded};

use crate::analysis::tokenizer::TokenizerFactory;
use crate::corpus::counter::count_file;
use crate::corpus::counts::TermCounts;
use crate::error::{LexifreqError, Result};
use crate::parallel::config::AggregatorConfig;
use crate::parallel::progress::ProgressReport;

/// Parallel aggregator for per-shard token counts.
pub struct ParallelAggregator {
    /// Configuration for the aggregator.
    config: AggregatorConfig,
}

impl ParallelAggregator {
    /// Create a new parallel aggregator.
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    /// Get the aggregator configuration.
    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Count tokens across all `paths` and merge into one mapping.
    ///
    /// Every worker builds its own tokenizer from `factory`. The first
    /// failing shard aborts the aggregation; no partial result is returned.
    /// With a configured limit, consumption stops once more than `limit`
    /// results have been merged.
    pub fn aggregate(
        &self,
        paths: &[PathBuf],
        factory: TokenizerFactory,
        progress: &dyn ProgressReport,
    ) -> Result<TermCounts> {
        if paths.is_empty() {
            return Ok(TermCounts::new());
        }

        let worker_count = self.config.effective_worker_count().min(paths.len());
        log::info!("using {worker_count} worker thread(s)");

        let (job_tx, job_rx) = unbounded::<(usize, PathBuf)>();
        let (result_tx, result_rx) = unbounded::<(usize, Result<TermCounts>)>();

        // The corpus is fixed for the run: queue every job up front and close
        // the channel so workers exit when it drains.
        for (index, path) in paths.iter().enumerate() {
            job_tx
                .send((index, path.clone()))
                .map_err(|_| LexifreqError::aggregation("job channel closed during submission"))?;
        }
        drop(job_tx);

        let total = paths.len();
        thread::scope(|scope| {
            for _ in 0..worker_count {
                let worker_jobs = job_rx.clone();
                let worker_results = result_tx.clone();
                let factory = factory.clone();
                scope.spawn(move || {
                    // One tokenizer per worker; heavyweight resources inside
                    // it initialize on first use.
                    let tokenizer = factory();
                    for (index, path) in worker_jobs {
                        let counts = count_file(&path, tokenizer.as_ref());
                        if worker_results.send((index, counts)).is_err() {
                            // The coordinator stopped consuming.
                            break;
                        }
                    }
                });
            }
            drop(result_tx);
            drop(job_rx);

            let outcome = self.collect(total, &result_rx, progress);
            // Closing the result channel lets workers bail out of any
            // remaining queue after an early stop.
            drop(result_rx);
            outcome
        })
    }

    /// Merge results in submission order, buffering out-of-order arrivals.
    fn collect(
        &self,
        total: usize,
        results: &Receiver<(usize, Result<TermCounts>)>,
        progress: &dyn ProgressReport,
    ) -> Result<TermCounts> {
        let interval = self.config.progress_interval.max(1);
        let mut pending: AHashMap<usize, Result<TermCounts>> = AHashMap::new();
        let mut aggregate = TermCounts::new();
        let mut next = 0;

        while next < total {
            if let Some(limit) = self.config.limit {
                if next > limit {
                    break;
                }
            }

            let outcome = match pending.remove(&next) {
                Some(outcome) => outcome,
                None => loop {
                    let (index, outcome) = results.recv().map_err(|_| {
                        LexifreqError::aggregation("worker pool stopped before all results arrived")
                    })?;
                    if index == next {
                        break outcome;
                    }
                    pending.insert(index, outcome);
                },
            };

            aggregate.merge(outcome?);
            next += 1;
            if next % interval == 0 {
                progress.report(next, total);
            }
        }

        Ok(aggregate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Language;
    use crate::analysis::tokenizer::Tokenizer;
    use crate::parallel::progress::NullProgress;
    use std::fs;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex, OnceLock};
    use tempfile::TempDir;

    fn write_shards(dir: &Path, texts: &[&str]) -> Vec<PathBuf> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let path = dir.join(format!("{i:03}.jsonl"));
                fs::write(&path, format!("{{\"text\": \"{text}\"}}\n")).unwrap();
                path
            })
            .collect()
    }

    fn aggregator(config: AggregatorConfig) -> ParallelAggregator {
        ParallelAggregator::new(config)
    }

    /// Records every progress notification.
    #[derive(Default)]
    struct RecordingProgress {
        calls: Mutex<Vec<(usize, usize)>>,
    }

    impl ProgressReport for RecordingProgress {
        fn report(&self, processed: usize, total: usize) {
            self.calls.lock().unwrap().push((processed, total));
        }
    }

    /// Tokenizer whose "analyzer resource" construction is counted.
    struct CountingResourceTokenizer {
        constructions: Arc<AtomicUsize>,
        resource: OnceLock<()>,
    }

    impl CountingResourceTokenizer {
        fn new(constructions: Arc<AtomicUsize>) -> Self {
            Self {
                constructions,
                resource: OnceLock::new(),
            }
        }
    }

    impl Tokenizer for CountingResourceTokenizer {
        fn tokenize(&self, text: &str) -> Result<Vec<String>> {
            self.resource.get_or_init(|| {
                self.constructions.fetch_add(1, Ordering::SeqCst);
            });
            Ok(text.split(' ').map(str::to_string).collect())
        }

        fn name(&self) -> &'static str {
            "counting_resource"
        }
    }

    #[test]
    fn test_aggregates_across_shards() {
        let dir = TempDir::new().unwrap();
        let paths = write_shards(dir.path(), &["a a b", "b b b", "a c"]);

        let counts = aggregator(AggregatorConfig::default())
            .aggregate(&paths, Language::Other.tokenizer_factory(), &NullProgress)
            .unwrap();

        assert_eq!(counts.get("a"), 3);
        assert_eq!(counts.get("b"), 4);
        assert_eq!(counts.get("c"), 1);
    }

    #[test]
    fn test_order_independent_aggregation() {
        let dir = TempDir::new().unwrap();
        let paths = write_shards(dir.path(), &["x y", "y z", "z x", "x x"]);
        let mut reversed = paths.clone();
        reversed.reverse();
        let mut rotated = paths.clone();
        rotated.rotate_left(2);

        let agg = aggregator(AggregatorConfig::default());
        let factory = Language::Other.tokenizer_factory();
        let forward = agg.aggregate(&paths, factory.clone(), &NullProgress).unwrap();
        let backward = agg.aggregate(&reversed, factory.clone(), &NullProgress).unwrap();
        let shuffled = agg.aggregate(&rotated, factory, &NullProgress).unwrap();

        assert_eq!(forward, backward);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn test_progress_at_interval_multiples() {
        let dir = TempDir::new().unwrap();
        let paths = write_shards(dir.path(), &["t"; 5]);
        let progress = RecordingProgress::default();

        aggregator(AggregatorConfig::new().with_progress_interval(2))
            .aggregate(&paths, Language::Other.tokenizer_factory(), &progress)
            .unwrap();

        // 5 files, interval 2: notifications at 2 and 4 only.
        assert_eq!(*progress.calls.lock().unwrap(), vec![(2, 5), (4, 5)]);
    }

    #[test]
    fn test_limit_consumes_limit_plus_one() {
        let dir = TempDir::new().unwrap();
        let texts: Vec<String> = (0..10).map(|i| format!("tok{i}")).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let paths = write_shards(dir.path(), &refs);

        let counts = aggregator(AggregatorConfig::new().with_limit(Some(2)))
            .aggregate(&paths, Language::Other.tokenizer_factory(), &NullProgress)
            .unwrap();

        // Strictly-greater-than comparison: limit 2 merges results 0, 1, 2.
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get("tok0"), 1);
        assert_eq!(counts.get("tok2"), 1);
        assert_eq!(counts.get("tok3"), 0);
    }

    #[test]
    fn test_limit_of_zero_merges_one_result() {
        let dir = TempDir::new().unwrap();
        let paths = write_shards(dir.path(), &["a", "b", "c"]);

        let counts = aggregator(AggregatorConfig::new().with_limit(Some(0)))
            .aggregate(&paths, Language::Other.tokenizer_factory(), &NullProgress)
            .unwrap();

        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("a"), 1);
    }

    #[test]
    fn test_failing_shard_aborts_aggregation() {
        let dir = TempDir::new().unwrap();
        let mut paths = write_shards(dir.path(), &["fine", "fine"]);
        let broken = dir.path().join("broken.jsonl");
        fs::write(&broken, "{not json\n").unwrap();
        paths.insert(1, broken);

        let result = aggregator(AggregatorConfig::default()).aggregate(
            &paths,
            Language::Other.tokenizer_factory(),
            &NullProgress,
        );

        assert!(matches!(result, Err(LexifreqError::Parse(_))));
    }

    #[test]
    fn test_empty_path_list() {
        let counts = aggregator(AggregatorConfig::default())
            .aggregate(&[], Language::Other.tokenizer_factory(), &NullProgress)
            .unwrap();

        assert!(counts.is_empty());
    }

    #[test]
    fn test_resource_constructed_once_per_worker() {
        let dir = TempDir::new().unwrap();
        let paths = write_shards(dir.path(), &["w"; 20]);
        let constructions = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&constructions);
        let factory: TokenizerFactory = Arc::new(move || {
            Box::new(CountingResourceTokenizer::new(Arc::clone(&counter))) as Box<dyn Tokenizer>
        });

        aggregator(AggregatorConfig::new().with_worker_count(1))
            .aggregate(&paths, factory, &NullProgress)
            .unwrap();

        // One worker, twenty files, twenty tokenize calls: one construction.
        assert_eq!(constructions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resource_construction_bounded_by_pool_size() {
        let dir = TempDir::new().unwrap();
        let paths = write_shards(dir.path(), &["w"; 40]);
        let constructions = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&constructions);
        let factory: TokenizerFactory = Arc::new(move || {
            Box::new(CountingResourceTokenizer::new(Arc::clone(&counter))) as Box<dyn Tokenizer>
        });

        aggregator(AggregatorConfig::new().with_worker_count(2))
            .aggregate(&paths, factory, &NullProgress)
            .unwrap();

        // At most one construction per worker that received work.
        let built = constructions.load(Ordering::SeqCst);
        assert!((1..=2).contains(&built), "built {built} resources");
    }

    #[test]
    fn test_deferred_resource_not_built_before_first_call() {
        let constructions = Arc::new(AtomicUsize::new(0));
        let tokenizer = CountingResourceTokenizer::new(Arc::clone(&constructions));

        assert_eq!(constructions.load(Ordering::SeqCst), 0);

        tokenizer.tokenize("a b").unwrap();
        tokenizer.tokenize("c d").unwrap();

        assert_eq!(constructions.load(Ordering::SeqCst), 1);
    }
}
