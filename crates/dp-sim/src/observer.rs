//! Simulation observer trait for progress reporting and data collection.

use dp_core::Tick;

use crate::{RunSummary, TickReport};

/// Callbacks invoked by [`Sim::run_to_end`][crate::Sim::run_to_end] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         if report.tick.0 % self.interval == 0 {
///             println!("{}: {} meals", report.tick, report.summary.total_completions);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of every tick with the full report.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks), after `on_tick_end`.
    ///
    /// Output writers record per-actor rows here so that the snapshot cadence
    /// is decided in one place.
    fn on_snapshot(&mut self, _report: &TickReport) {}

    /// Called once per stall, on the tick the deadlock detector fires.
    /// `since` is the first stalled tick.
    fn on_deadlock(&mut self, _tick: Tick, _since: Tick) {}

    /// Called once after the final tick completes (or the run is stopped).
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `run_to_end` but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
