//! Progress reporting for the aggregation loop.
//!
//! Progress lines are a human-facing channel, not a machine-consumed
//! contract. The aggregator reports through the [`ProgressReport`] trait so
//! tests can substitute a recording implementation.

/// Observer notified as files are merged into the global table.
pub trait ProgressReport: Send + Sync {
    /// Called when `processed` files out of `total` have been merged.
    fn report(&self, processed: usize, total: usize);
}

/// Prints progress lines to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleProgress;

impl ProgressReport for ConsoleProgress {
    fn report(&self, processed: usize, total: usize) {
        println!("Processed {processed:04} files out of {total:04}");
    }
}

/// Discards progress notifications.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullProgress;

impl ProgressReport for NullProgress {
    fn report(&self, _processed: usize, _total: usize) {}
}
