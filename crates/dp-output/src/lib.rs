//! `dp-output` — report writers for the dining-table simulator.
//!
//! Two backends are provided, one behind a Cargo feature:
//!
//! | Feature   | Backend | Files created                                |
//! |-----------|---------|----------------------------------------------|
//! | *(none)*  | CSV     | `actor_snapshots.csv`, `tick_summaries.csv`  |
//! | `sqlite`  | SQLite  | `output.db`                                  |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `dp_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use dp_core::SimConfig;
//! use dp_output::{CsvWriter, SimOutputObserver};
//!
//! let mut sim = dp_sim::initialize(SimConfig::default()).unwrap();
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_to_end(&mut obs).unwrap();
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ActorSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
