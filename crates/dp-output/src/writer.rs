//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ActorSnapshotRow, OutputResult, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// when the writer is driven by the observer bridge.
pub trait OutputWriter {
    /// Write a batch of actor snapshots.
    fn write_snapshots(&mut self, rows: &[ActorSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.  Calling it twice is harmless.
    fn finish(&mut self) -> OutputResult<()>;
}
