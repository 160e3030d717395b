//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `actor_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{ActorSnapshotRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

pub const SNAPSHOT_HEADER: [&str; 7] =
    ["tick", "actor_id", "state", "holds_left", "holds_right", "wait_time", "completions"];

pub const SUMMARY_HEADER: [&str; 10] = [
    "tick",
    "thinking",
    "hungry",
    "eating",
    "completed",
    "total_completions",
    "avg_wait_time",
    "throughput",
    "completion_variance",
    "deadlocked",
];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create (truncating) the two CSV files in `dir` and write the header
    /// rows.  `dir` is created if missing.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("actor_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[ActorSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.actor_id.to_string(),
                row.state.as_str().to_owned(),
                (row.holds_left as u8).to_string(),
                (row.holds_right as u8).to_string(),
                row.wait_time.map(|w| w.to_string()).unwrap_or_default(),
                row.completions.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.thinking.to_string(),
            row.hungry.to_string(),
            row.eating.to_string(),
            row.completed.to_string(),
            row.total_completions.to_string(),
            row.avg_wait_time.to_string(),
            row.throughput.to_string(),
            row.completion_variance.to_string(),
            (row.deadlocked as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
