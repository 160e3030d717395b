//! Per-actor state.

use std::fmt;

use dp_core::{ActorId, ResourceId, Tick};

// ── ActorState ────────────────────────────────────────────────────────────────

/// The three-state philosopher cycle.  There is no terminal state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ActorState {
    #[default]
    Thinking,
    Hungry,
    Eating,
}

impl ActorState {
    /// Lower-case label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            ActorState::Thinking => "thinking",
            ActorState::Hungry   => "hungry",
            ActorState::Eating   => "eating",
        }
    }
}

impl fmt::Display for ActorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Actor ─────────────────────────────────────────────────────────────────────

/// One seat at the table.
///
/// `left` and `right` never change after creation.  Whether the actor holds
/// them is a property of the resources, read through
/// [`Table::holds_left`][crate::Table::holds_left] and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub id:    ActorId,
    pub state: ActorState,
    pub left:  ResourceId,
    pub right: ResourceId,

    /// Tick of the THINKING → HUNGRY transition; `None` unless HUNGRY or
    /// EATING.
    pub hungry_since: Option<Tick>,

    /// Tick of the most recent state change.
    pub last_transition: Tick,

    /// Completed meals (EATING → THINKING transitions).
    pub completions: u64,

    /// Meals started (HUNGRY → EATING transitions).  Exceeds `completions` by
    /// one while the actor is eating.
    pub meals_started: u64,

    /// Sum over all started meals of the ticks spent HUNGRY beforehand.
    pub total_wait_ticks: u64,
}

impl Actor {
    /// A THINKING actor with no history.
    pub fn new(id: ActorId, left: ResourceId, right: ResourceId) -> Self {
        Self {
            id,
            state: ActorState::Thinking,
            left,
            right,
            hungry_since: None,
            last_transition: Tick::ZERO,
            completions: 0,
            meals_started: 0,
            total_wait_ticks: 0,
        }
    }

    #[inline]
    pub fn is_hungry(&self) -> bool {
        self.state == ActorState::Hungry
    }

    /// Ticks spent waiting so far, while HUNGRY.
    pub fn wait_time(&self, now: Tick) -> Option<u64> {
        match (self.state, self.hungry_since) {
            (ActorState::Hungry, Some(since)) => Some(now.since(since)),
            _ => None,
        }
    }

    /// Mean wait per started meal, `0.0` before the first meal.
    pub fn mean_wait(&self) -> f64 {
        if self.meals_started == 0 {
            0.0
        } else {
            self.total_wait_ticks as f64 / self.meals_started as f64
        }
    }
}

// ── StateCounts ───────────────────────────────────────────────────────────────

/// How many actors are in each state.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateCounts {
    pub thinking: usize,
    pub hungry:   usize,
    pub eating:   usize,
}

impl StateCounts {
    pub fn record(&mut self, state: ActorState) {
        match state {
            ActorState::Thinking => self.thinking += 1,
            ActorState::Hungry   => self.hungry += 1,
            ActorState::Eating   => self.eating += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.thinking + self.hungry + self.eating
    }
}
