//! Shard records and corpus enumeration.
//!
//! A corpus root contains one level of subdirectories, each holding shard
//! files. A shard is newline-delimited JSON, one record per line.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LexifreqError, Result};

/// One record of a shard file.
///
/// Records carry at least a `text` field; any other fields are ignored.
/// Deserialization fails if `text` is missing or not a string.
#[derive(Debug, Clone, Deserialize)]
pub struct ShardRecord {
    /// The document body to tokenize.
    pub text: String,
}

/// Enumerate all shard files two levels below `root`.
///
/// Lists the immediate subdirectories of `root`, then the files inside each
/// subdirectory, and returns the concatenation. Entries are sorted at both
/// levels so the order is deterministic and progress accounting is
/// reproducible across runs. Non-directory entries at the root level and
/// non-file entries inside a subdirectory are skipped.
///
/// An unreadable root or subdirectory is fatal; no partial listing is
/// returned.
pub fn list_shards(root: &Path) -> Result<Vec<PathBuf>> {
    let mut subdirs = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| {
        LexifreqError::corpus(format!("Failed to read corpus root {}: {}", root.display(), e))
    })? {
        let entry = entry.map_err(|e| {
            LexifreqError::corpus(format!("Failed to read corpus root {}: {}", root.display(), e))
        })?;
        if entry.file_type()?.is_dir() {
            subdirs.push(entry.path());
        }
    }
    subdirs.sort();

    let mut shards = Vec::new();
    for dir in subdirs {
        let mut files = Vec::new();
        for entry in fs::read_dir(&dir).map_err(|e| {
            LexifreqError::corpus(format!("Failed to read shard directory {}: {}", dir.display(), e))
        })? {
            let entry = entry.map_err(|e| {
                LexifreqError::corpus(format!(
                    "Failed to read shard directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        shards.extend(files);
    }

    Ok(shards)
}
