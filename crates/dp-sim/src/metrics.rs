//! `Metrics` — the run-level data collector.
//!
//! Per-actor counters (completions, meals started, accumulated wait) live on
//! the actors themselves; this collector adds what spans ticks and folds
//! everything into a [`RunSummary`].

use dp_core::Tick;
use dp_table::{Actor, ActorState, Table};

use crate::RunSummary;

#[derive(Debug, Clone, Default)]
pub struct Metrics {
    ticks:        u64,
    longest_wait: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the post-tick state of `table`.
    pub fn observe(&mut self, table: &Table, now: Tick) {
        self.ticks = now.0;
        for actor in table.actors() {
            if let Some(wait) = current_wait(actor, now) {
                self.longest_wait = self.longest_wait.max(wait);
            }
        }
    }

    /// Fold the table's counters into run-level aggregates.
    pub fn summary(&self, table: &Table) -> RunSummary {
        let completions: Vec<u64> = table.actors().iter().map(|a| a.completions).collect();
        let total_completions: u64 = completions.iter().sum();

        let (waited, meals) = table
            .actors()
            .iter()
            .fold((0u64, 0u64), |(w, m), a| (w + a.total_wait_ticks, m + a.meals_started));
        let avg_wait_time = if meals == 0 { 0.0 } else { waited as f64 / meals as f64 };

        let throughput = if self.ticks == 0 {
            0.0
        } else {
            total_completions as f64 / self.ticks as f64
        };

        RunSummary {
            tick: Tick(self.ticks),
            completion_variance: variance(&completions),
            completions,
            total_completions,
            avg_wait_time,
            throughput,
            longest_wait: self.longest_wait,
            counts: table.state_counts(),
        }
    }
}

/// Wait of the actor's current hunger episode: ongoing if HUNGRY, final if
/// it has since started EATING.
fn current_wait(actor: &Actor, now: Tick) -> Option<u64> {
    let since = actor.hungry_since?;
    match actor.state {
        ActorState::Hungry   => Some(now.since(since)),
        ActorState::Eating   => Some(actor.last_transition.since(since)),
        ActorState::Thinking => None,
    }
}

/// Population variance.  `0.0` for an empty slice.
pub fn variance(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<u64>() as f64 / n;
    values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n
}
