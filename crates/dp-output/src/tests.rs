//! Integration tests for dp-output.

use dp_table::ActorState;

use crate::row::{ActorSnapshotRow, TickSummaryRow};

fn snap_row(actor_id: u32, tick: u64) -> ActorSnapshotRow {
    ActorSnapshotRow {
        tick,
        actor_id,
        state:       ActorState::Hungry,
        holds_left:  actor_id % 2 == 0,
        holds_right: false,
        wait_time:   Some(tick),
        completions: u64::from(actor_id),
    }
}

fn summary_row(tick: u64) -> TickSummaryRow {
    TickSummaryRow {
        tick,
        thinking:            2,
        hungry:              2,
        eating:              1,
        completed:           1,
        total_completions:   tick,
        avg_wait_time:       1.5,
        throughput:          0.25,
        completion_variance: 0.0,
        deadlocked:          false,
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read(dir: &TempDir, name: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(name)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("actor_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("actor_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("actor_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["tick", "actor_id", "state", "holds_left", "holds_right", "wait_time", "completions"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, crate::csv::SUMMARY_HEADER);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let rows = read(&dir, "actor_snapshots.csv");
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "5");      // tick
        assert_eq!(&rows[0][1], "0");      // actor_id
        assert_eq!(&rows[0][2], "hungry"); // state
        assert_eq!(&rows[0][3], "1");      // holds_left
        assert_eq!(&rows[1][3], "0");
        assert_eq!(&rows[2][1], "2");
    }

    #[test]
    fn csv_missing_wait_time_is_empty() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = ActorSnapshotRow { state: ActorState::Thinking, wait_time: None, ..snap_row(0, 1) };
        w.write_snapshots(&[row]).unwrap();
        w.finish().unwrap();

        let rows = read(&dir, "actor_snapshots.csv");
        assert_eq!(&rows[0][2], "thinking");
        assert_eq!(&rows[0][5], "");
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let rows = read(&dir, "tick_summaries.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");    // tick
        assert_eq!(&rows[0][3], "1");    // eating
        assert_eq!(&rows[0][6], "1.5");  // avg_wait_time
        assert_eq!(&rows[0][9], "0");    // deadlocked
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }

    #[test]
    fn integration_csv() {
        use dp_core::{SimConfig, StrategyKind};

        use crate::observer::SimOutputObserver;

        let config = SimConfig {
            actor_count:           3,
            hungry_chance:         1.0,
            full_chance:           0.0,
            strategy:              StrategyKind::Naive,
            seed:                  0,
            max_ticks:             12,
            output_interval_ticks: 4,
            deadlock_window:       10,
        };
        let mut sim = dp_sim::initialize(config).unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run_to_end(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 4 → snapshots at ticks 4, 8, 12 (3 ticks × 3 actors)
        let snaps = read(&dir, "actor_snapshots.csv");
        assert_eq!(snaps.len(), 9, "got {} snapshot rows", snaps.len());
        assert_eq!(&snaps[0][0], "4");

        // One summary per tick; the deadlock flag appears from tick 11.
        let summaries = read(&dir, "tick_summaries.csv");
        assert_eq!(summaries.len(), 12);
        assert_eq!(&summaries[9][9], "0");
        assert_eq!(&summaries[10][9], "1");
        assert_eq!(&summaries[11][9], "1");
    }
}

// ── Row conversion ────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use dp_core::{SimConfig, StrategyKind};

    use super::*;

    #[test]
    fn rows_from_report() {
        let config = SimConfig {
            actor_count:   5,
            hungry_chance: 1.0,
            full_chance:   1.0,
            strategy:      StrategyKind::Atomic,
            ..SimConfig::default()
        };
        let mut sim = dp_sim::initialize(config).unwrap();
        let reports: Vec<_> = sim.run(3).map(|r| r.unwrap()).collect();

        let snaps = ActorSnapshotRow::from_report(&reports[1]);
        assert_eq!(snaps.len(), 5);
        assert_eq!(snaps[0].state, ActorState::Eating);
        assert!(snaps[0].holds_left && snaps[0].holds_right);
        assert_eq!(snaps[0].wait_time, None);
        assert_eq!(snaps[1].wait_time, Some(1));

        let summary = TickSummaryRow::from(&reports[2]);
        assert_eq!(summary.tick, 3);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.thinking, 2);
        assert_eq!(summary.hungry, 3);
        assert!(!summary.deadlocked);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 1), snap_row(1, 1), snap_row(2, 1)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM actor_snapshots", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_missing_wait_time_is_null() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let row = ActorSnapshotRow { state: ActorState::Eating, wait_time: None, ..snap_row(0, 4) };
        w.write_snapshots(&[row]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (state, wait): (String, Option<i64>) = conn.query_row(
            "SELECT state, wait_time FROM actor_snapshots WHERE actor_id = 0",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        ).unwrap();
        assert_eq!(state, "eating");
        assert_eq!(wait, None);
    }

    #[test]
    fn sqlite_reopen_replaces_previous_run() {
        let dir = tmp();
        for _ in 0..2 {
            let mut w = SqliteWriter::new(dir.path()).unwrap();
            w.write_tick_summary(&summary_row(1)).unwrap();
            w.write_snapshots(&[snap_row(0, 1), snap_row(1, 1)]).unwrap();
            w.finish().unwrap();
        }

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let summaries: i64 = conn.query_row(
            "SELECT COUNT(*) FROM tick_summaries", [], |r| r.get(0)
        ).unwrap();
        let snapshots: i64 = conn.query_row(
            "SELECT COUNT(*) FROM actor_snapshots", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(summaries, 1);
        assert_eq!(snapshots, 2);
    }

    #[test]
    fn sqlite_tick_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow { deadlocked: true, ..summary_row(7) }).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (tick, total, avg, deadlocked): (i64, i64, f64, i64) = conn.query_row(
            "SELECT tick, total_completions, avg_wait_time, deadlocked \
             FROM tick_summaries WHERE tick = 7",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
        ).unwrap();
        assert_eq!(tick, 7);
        assert_eq!(total, 7);
        assert_eq!(avg, 1.5);
        assert_eq!(deadlocked, 1);
    }
}
