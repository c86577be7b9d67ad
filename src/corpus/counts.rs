//! Token occurrence counting.
//!
//! [`TermCounts`] is the unit of result produced per shard and merged across
//! workers. Merging is an element-wise sum, so it is associative and
//! commutative: the order in which per-shard counts are combined does not
//! affect the final table. That invariant is what makes parallel,
//! order-independent aggregation sound.

use std::collections::BTreeMap;

use ahash::AHashMap;
use serde::ser::{Serialize, Serializer};

/// Default minimum occurrence count for a token to be kept in final output.
pub const DEFAULT_MIN_COUNT: u64 = 3;

/// A mapping from token to non-negative occurrence count.
///
/// Serializes as a JSON object with keys in sorted order, so the written
/// frequency table is reproducible byte-for-byte across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TermCounts {
    counts: AHashMap<String, u64>,
}

impl TermCounts {
    /// Create an empty count mapping.
    pub fn new() -> Self {
        TermCounts {
            counts: AHashMap::new(),
        }
    }

    /// Record one occurrence of a token.
    pub fn add<S: Into<String>>(&mut self, token: S) {
        *self.counts.entry(token.into()).or_insert(0) += 1;
    }

    /// Merge another mapping into this one by element-wise sum.
    pub fn merge(&mut self, other: TermCounts) {
        for (token, count) in other.counts {
            *self.counts.entry(token).or_insert(0) += count;
        }
    }

    /// Return a new mapping retaining only entries with count >= `min_count`.
    pub fn filtered(self, min_count: u64) -> Self {
        let counts = self
            .counts
            .into_iter()
            .filter(|(_, count)| *count >= min_count)
            .collect();

        TermCounts { counts }
    }

    /// Get the count for a token (0 if absent).
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (token, count) entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }
}

impl Extend<String> for TermCounts {
    fn extend<I: IntoIterator<Item = String>>(&mut self, tokens: I) {
        for token in tokens {
            self.add(token);
        }
    }
}

impl Serialize for TermCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Sorted keys for reproducible output.
        let sorted: BTreeMap<&str, u64> = self
            .counts
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
            .collect();

        sorted.serialize(serializer)
    }
}
