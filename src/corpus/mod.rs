//! Corpus processing: shard enumeration, per-file counting, and the
//! tokenize-count-aggregate pipeline.

pub mod counter;
pub mod counts;
pub mod export;
pub mod shard;

// Re-export commonly used items
pub use counter::count_file;
pub use counts::{DEFAULT_MIN_COUNT, TermCounts};
pub use export::write_frequency_table;
pub use shard::{ShardRecord, list_shards};

use std::path::Path;

use crate::analysis::Language;
use crate::error::Result;
use crate::parallel::config::AggregatorConfig;
use crate::parallel::engine::ParallelAggregator;
use crate::parallel::progress::ProgressReport;

/// Compute the filtered global frequency table for the corpus under `root`.
///
/// Enumerates the shards once, aggregates per-file counts across the worker
/// pool, and drops tokens occurring fewer than `min_count` times. Any failure
/// in enumeration or aggregation aborts the run.
pub fn word_frequencies(
    root: &Path,
    language: Language,
    config: &AggregatorConfig,
    min_count: u64,
    progress: &dyn ProgressReport,
) -> Result<TermCounts> {
    let shards = list_shards(root)?;
    log::info!("enumerated {} shard file(s) under {}", shards.len(), root.display());

    let aggregator = ParallelAggregator::new(config.clone());
    let counts = aggregator.aggregate(&shards, language.tokenizer_factory(), progress)?;

    Ok(counts.filtered(min_count))
}
