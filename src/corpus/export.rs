//! Frequency table export.
//!
//! The final table is written in one shot through a temporary file in the
//! destination directory followed by an atomic rename, so a failed run never
//! leaves a partial output file behind.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::corpus::counts::TermCounts;
use crate::error::Result;

/// Write `table` as a JSON object to `path`.
///
/// Keys are sorted and non-ASCII characters are preserved literally. The
/// file appears at `path` only after the full table has been serialized.
pub fn write_frequency_table(path: &Path, table: &TermCounts) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer(&mut tmp, table)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
