//! Per-shard token counting.
//!
//! Reads one shard file line by line, tokenizes each record's `text` field,
//! and accumulates a token count mapping for the whole file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::analysis::tokenizer::Tokenizer;
use crate::corpus::counts::TermCounts;
use crate::corpus::shard::ShardRecord;
use crate::error::{LexifreqError, Result};

/// Count token occurrences across every record of the shard at `path`.
///
/// Empty lines are skipped. A malformed line (invalid JSON, or a record
/// without a string `text` field) fails the whole file; there is no
/// partial-file recovery. Tokenizer failures propagate unchanged.
pub fn count_file(path: &Path, tokenizer: &dyn Tokenizer) -> Result<TermCounts> {
    let file = File::open(path).map_err(|e| {
        LexifreqError::corpus(format!("Failed to open shard {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    let mut counts = TermCounts::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            LexifreqError::corpus(format!("Failed to read shard {}: {}", path.display(), e))
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let record: ShardRecord = serde_json::from_str(line).map_err(|e| {
            LexifreqError::parse(format!(
                "Malformed record at {}:{}: {}",
                path.display(),
                line_number + 1,
                e
            ))
        })?;

        counts.extend(tokenizer.tokenize(&record.text)?);
    }

    Ok(counts)
}
