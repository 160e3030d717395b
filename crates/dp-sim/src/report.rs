//! Plain data handed to observers and iterator consumers after each tick.

use dp_core::{ActorId, Tick};
use dp_table::{ActorState, StateCounts, Table};

/// One actor's post-tick state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorSnapshot {
    pub actor_id:    ActorId,
    pub state:       ActorState,
    pub holds_left:  bool,
    pub holds_right: bool,
    /// Ticks spent waiting so far; `Some` only while HUNGRY.
    pub wait_time:   Option<u64>,
    pub completions: u64,
}

impl ActorSnapshot {
    pub fn capture(table: &Table, actor: ActorId, now: Tick) -> ActorSnapshot {
        let a = table.actor(actor);
        ActorSnapshot {
            actor_id:    a.id,
            state:       a.state,
            holds_left:  table.holds_left(a.id),
            holds_right: table.holds_right(a.id),
            wait_time:   a.wait_time(now),
            completions: a.completions,
        }
    }

    /// Snapshot every actor of `table` in ascending id order.
    pub fn capture_all(table: &Table, now: Tick) -> Vec<ActorSnapshot> {
        table.actor_ids().map(|id| Self::capture(table, id, now)).collect()
    }
}

/// Run-level aggregates as of some tick.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub tick: Tick,

    /// Completed meals per actor, indexed by `ActorId`.
    pub completions: Vec<u64>,

    pub total_completions: u64,

    /// Mean ticks spent HUNGRY per started meal; `0.0` before the first meal.
    pub avg_wait_time: f64,

    /// Completed meals per tick over the whole run.
    pub throughput: f64,

    /// Population variance of `completions`; lower is fairer.
    pub completion_variance: f64,

    /// Longest time any actor has spent HUNGRY, finished or ongoing.
    pub longest_wait: u64,

    pub counts: StateCounts,
}

/// Everything that happened in one tick.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    pub tick: Tick,

    /// Post-tick state of every actor, ascending id.
    pub actors: Vec<ActorSnapshot>,

    /// Actors that started EATING this tick.
    pub started: Vec<ActorId>,

    /// Actors that finished EATING this tick.
    pub completed: Vec<ActorId>,

    pub summary: RunSummary,

    /// First tick of the current stall, while the run is flagged deadlocked.
    pub deadlocked_since: Option<Tick>,

    /// `true` only on the tick the deadlock detector fires.
    pub deadlock_detected: bool,
}

impl TickReport {
    #[inline]
    pub fn is_deadlocked(&self) -> bool {
        self.deadlocked_since.is_some()
    }

    /// Actors in `state` after this tick.
    pub fn actors_in(&self, state: ActorState) -> impl Iterator<Item = ActorId> + '_ {
        self.actors
            .iter()
            .filter(move |s| s.state == state)
            .map(|s| s.actor_id)
    }
}
