//! Command line argument parsing for the lexifreq CLI using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::corpus::counts::DEFAULT_MIN_COUNT;
use crate::parallel::config::DEFAULT_WORKER_COUNT;

/// lexifreq - word-frequency extraction from sharded JSONL corpora
#[derive(Parser, Debug, Clone)]
#[command(name = "lexifreq")]
#[command(about = "Extract a word-frequency table from a sharded JSONL corpus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexifreqArgs {
    /// Language tag selecting the tokenizer ("ja", "vi"; anything else uses
    /// the whitespace tokenizer)
    #[arg(value_name = "LANG")]
    pub language: String,

    /// Root directory containing one level of shard subdirectories
    #[arg(value_name = "CORPUS_DIR")]
    pub corpus_dir: PathBuf,

    /// Path of the JSON frequency table to write
    #[arg(value_name = "OUT_FILE")]
    pub output_file: PathBuf,

    /// Number of worker threads (0 = one per CPU core)
    #[arg(short, long, default_value_t = DEFAULT_WORKER_COUNT)]
    pub workers: usize,

    /// Stop after more than LIMIT shard results have been merged
    #[arg(short, long, value_name = "LIMIT")]
    pub limit: Option<usize>,

    /// Minimum aggregate count for a token to appear in the output
    #[arg(short, long, default_value_t = DEFAULT_MIN_COUNT)]
    pub min_count: u64,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl LexifreqArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let args =
            LexifreqArgs::parse_from(["lexifreq", "ja", "/corpus", "/out/freqs.json"]);

        assert_eq!(args.language, "ja");
        assert_eq!(args.corpus_dir, PathBuf::from("/corpus"));
        assert_eq!(args.output_file, PathBuf::from("/out/freqs.json"));
        assert_eq!(args.workers, DEFAULT_WORKER_COUNT);
        assert_eq!(args.limit, None);
        assert_eq!(args.min_count, DEFAULT_MIN_COUNT);
    }

    #[test]
    fn test_option_overrides() {
        let args = LexifreqArgs::parse_from([
            "lexifreq",
            "vi",
            "/corpus",
            "freqs.json",
            "--workers",
            "4",
            "--limit",
            "200",
            "--min-count",
            "5",
        ]);

        assert_eq!(args.workers, 4);
        assert_eq!(args.limit, Some(200));
        assert_eq!(args.min_count, 5);
    }

    #[test]
    fn test_verbosity_levels() {
        let normal = LexifreqArgs::parse_from(["lexifreq", "x", "a", "b"]);
        assert_eq!(normal.verbosity(), 1);

        let verbose = LexifreqArgs::parse_from(["lexifreq", "-vv", "x", "a", "b"]);
        assert_eq!(verbose.verbosity(), 2);

        let quiet = LexifreqArgs::parse_from(["lexifreq", "-q", "-v", "x", "a", "b"]);
        assert_eq!(quiet.verbosity(), 0);
    }
}
