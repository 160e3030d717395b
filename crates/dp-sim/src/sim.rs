//! The `Sim` struct and its tick loop.

use dp_core::{ActorId, SimClock, SimConfig, SimRng, Tick};
use dp_strategy::{AcquisitionStrategy, ActorView};
use dp_table::{ActorState, Attempt, Table};
use tracing::{debug, info, trace, warn};

use crate::{
    ActorSnapshot, DeadlockDetector, Metrics, RunSummary, SimError, SimObserver, SimResult,
    StopHandle, TickReport, TickReports,
};

/// The simulation handle: one dining table and everything needed to advance
/// it.
///
/// Create via [`SimBuilder`][crate::SimBuilder] or
/// [`initialize`][crate::initialize].
pub struct Sim<S: AcquisitionStrategy> {
    /// Parameters the run was built from.
    pub config: SimConfig,

    /// Last processed tick.
    pub clock: SimClock,

    /// Actors and resources.
    pub table: Table,

    /// The single random source, consumed in a fixed order each tick.
    pub rng: SimRng,

    /// Acquisition policy shared by every actor.
    pub strategy: S,

    /// Run-level data collector.
    pub metrics: Metrics,

    pub(crate) deadlock: DeadlockDetector,
    pub(crate) stop: StopHandle,

    /// Table state at tick 0, restored by [`reset`][Self::reset].
    pub(crate) initial_table: Table,
}

impl<S: AcquisitionStrategy> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Process one tick and report on it.
    ///
    /// # Errors
    ///
    /// [`SimError::Invariant`] if the table fails its consistency check after
    /// the tick.  This indicates a bug in the scheduler or a custom strategy
    /// and the run should be abandoned.
    pub fn step(&mut self) -> SimResult<TickReport> {
        let now = self.clock.advance();
        let at_start: Vec<ActorState> = self.table.actors().iter().map(|a| a.state).collect();

        // ── Phase 1: hunger ───────────────────────────────────────────────
        for id in self.table.actor_ids() {
            if at_start[id.index()] == ActorState::Thinking
                && self.rng.gen_bool(self.config.hungry_chance)
            {
                self.table.become_hungry(id, now);
                trace!(tick = now.0, actor = id.0, "thinking -> hungry");
            }
        }

        // ── Phase 2: acquisition, ascending id ────────────────────────────
        //
        // Each decision is applied before the next actor decides, so later
        // actors see earlier acquisitions of the same tick.
        let mut started = Vec::new();
        for id in self.table.actor_ids() {
            if at_start[id.index()] != ActorState::Hungry {
                continue;
            }
            let decision = self.strategy.decide(&ActorView::new(id, now, &self.table));
            if self.table.apply(id, decision, now) == Attempt::AcquiredBoth {
                trace!(tick = now.0, actor = id.0, ?decision, "hungry -> eating");
                started.push(id);
            }
        }

        // ── Phase 3: release ──────────────────────────────────────────────
        let mut completed = Vec::new();
        for id in self.table.actor_ids() {
            if at_start[id.index()] == ActorState::Eating
                && self.rng.gen_bool(self.config.full_chance)
            {
                self.table.finish_eating(id, now);
                trace!(tick = now.0, actor = id.0, "eating -> thinking");
                completed.push(id);
            }
        }

        self.table
            .check_invariants()
            .map_err(|source| SimError::Invariant { tick: now, source })?;

        self.metrics.observe(&self.table, now);
        let detected = self.deadlock.observe(now, !completed.is_empty(), &self.table);
        if let Some(since) = detected {
            warn!(
                tick = now.0,
                since = since.0,
                strategy = self.strategy.name(),
                "deadlock: every actor is hungry holding one resource"
            );
        }

        let summary = self.metrics.summary(&self.table);
        debug!(
            tick     = now.0,
            thinking = summary.counts.thinking,
            hungry   = summary.counts.hungry,
            eating   = summary.counts.eating,
            meals    = summary.total_completions,
            "tick complete"
        );

        Ok(TickReport {
            tick: now,
            actors: ActorSnapshot::capture_all(&self.table, now),
            started,
            completed,
            summary,
            deadlocked_since: self.deadlock.deadlocked_since(),
            deadlock_detected: detected.is_some(),
        })
    }

    /// Lazily process up to `n` ticks.
    ///
    /// The iterator ends early if a tick fails or the stop handle fires.
    /// Call [`reset`][Self::reset] to replay the same sequence from the seed.
    pub fn run(&mut self, n: u64) -> TickReports<'_, S> {
        TickReports::new(self, n)
    }

    /// Run from the current tick to `config.max_ticks`, calling observer
    /// hooks at every tick boundary.  Stops early on the stop handle.
    pub fn run_to_end<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        info!(
            actors   = self.table.len(),
            strategy = self.strategy.name(),
            seed     = self.config.seed,
            from     = self.clock.current_tick.0,
            to       = self.config.max_ticks,
            "run started"
        );

        while self.clock.current_tick < self.config.end_tick() {
            if self.stop.is_stopped() {
                info!(tick = self.clock.current_tick.0, "stop requested");
                break;
            }
            observer.on_tick_start(self.clock.next_tick());
            let report = self.step()?;
            observer.on_tick_end(&report);

            let interval = self.config.output_interval_ticks;
            if interval > 0 && report.tick.0.is_multiple_of(interval) {
                observer.on_snapshot(&report);
            }
            if let (true, Some(since)) = (report.deadlock_detected, report.deadlocked_since) {
                observer.on_deadlock(report.tick, since);
            }
        }

        let summary = self.summary();
        info!(
            tick       = summary.tick.0,
            meals      = summary.total_completions,
            avg_wait   = summary.avg_wait_time,
            variance   = summary.completion_variance,
            deadlocked = self.deadlock.deadlocked_since().is_some(),
            "run finished"
        );
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    /// Restore the tick-0 table, reseed the RNG, and clear metrics, the
    /// deadlock detector, and the stop handle.  The next `step` replays tick 1.
    pub fn reset(&mut self) {
        self.table = self.initial_table.clone();
        self.rng = SimRng::new(self.config.seed);
        self.clock = SimClock::new();
        self.metrics = Metrics::new();
        self.deadlock.reset();
        self.stop.clear();
        debug!(seed = self.config.seed, "simulation reset");
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Aggregates as of the last processed tick.
    pub fn summary(&self) -> RunSummary {
        self.metrics.summary(&self.table)
    }

    /// A handle that stops `run` / `run_to_end` at the next tick boundary.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// First tick of the current stall if the run is flagged deadlocked.
    pub fn deadlocked_since(&self) -> Option<Tick> {
        self.deadlock.deadlocked_since()
    }

    /// Post-tick snapshot of one actor.
    pub fn snapshot(&self, actor: ActorId) -> ActorSnapshot {
        ActorSnapshot::capture(&self.table, actor, self.clock.current_tick)
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }
}
