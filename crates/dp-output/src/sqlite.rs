//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `actor_snapshots` and `tick_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::{ActorSnapshotRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir`, initialise the schema, and
    /// clear rows left by an earlier run, matching the truncating CSV writer.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS actor_snapshots (
                 tick        INTEGER NOT NULL,
                 actor_id    INTEGER NOT NULL,
                 state       TEXT    NOT NULL,
                 holds_left  INTEGER NOT NULL,
                 holds_right INTEGER NOT NULL,
                 wait_time   INTEGER,
                 completions INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick                INTEGER PRIMARY KEY,
                 thinking            INTEGER NOT NULL,
                 hungry              INTEGER NOT NULL,
                 eating              INTEGER NOT NULL,
                 completed           INTEGER NOT NULL,
                 total_completions   INTEGER NOT NULL,
                 avg_wait_time       REAL    NOT NULL,
                 throughput          REAL    NOT NULL,
                 completion_variance REAL    NOT NULL,
                 deadlocked          INTEGER NOT NULL
             );
             DELETE FROM actor_snapshots;
             DELETE FROM tick_summaries;",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[ActorSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO actor_snapshots \
                 (tick, actor_id, state, holds_left, holds_right, wait_time, completions) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick as i64,
                    row.actor_id,
                    row.state.as_str(),
                    row.holds_left as i64,
                    row.holds_right as i64,
                    row.wait_time.map(|w| w as i64),
                    row.completions as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries \
             (tick, thinking, hungry, eating, completed, total_completions, \
              avg_wait_time, throughput, completion_variance, deadlocked) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            rusqlite::params![
                row.tick as i64,
                row.thinking as i64,
                row.hungry as i64,
                row.eating as i64,
                row.completed as i64,
                row.total_completions as i64,
                row.avg_wait_time,
                row.throughput,
                row.completion_variance,
                row.deadlocked as i64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
