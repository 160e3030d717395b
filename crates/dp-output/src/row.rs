//! Plain data row types written by output backends.

use dp_sim::{ActorSnapshot, TickReport};
use dp_table::ActorState;

/// One actor's state after a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorSnapshotRow {
    pub tick:        u64,
    pub actor_id:    u32,
    pub state:       ActorState,
    pub holds_left:  bool,
    pub holds_right: bool,
    /// `None` unless the actor is HUNGRY.
    pub wait_time:   Option<u64>,
    pub completions: u64,
}

impl ActorSnapshotRow {
    pub fn new(tick: u64, snap: &ActorSnapshot) -> Self {
        Self {
            tick,
            actor_id:    snap.actor_id.0,
            state:       snap.state,
            holds_left:  snap.holds_left,
            holds_right: snap.holds_right,
            wait_time:   snap.wait_time,
            completions: snap.completions,
        }
    }

    /// One row per actor in `report`, ascending id.
    pub fn from_report(report: &TickReport) -> Vec<Self> {
        report.actors.iter().map(|s| Self::new(report.tick.0, s)).collect()
    }
}

/// Table-wide aggregates for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:                u64,
    pub thinking:            u64,
    pub hungry:              u64,
    pub eating:              u64,
    /// Meals finished during this tick.
    pub completed:           u64,
    pub total_completions:   u64,
    pub avg_wait_time:       f64,
    pub throughput:          f64,
    pub completion_variance: f64,
    pub deadlocked:          bool,
}

impl From<&TickReport> for TickSummaryRow {
    fn from(report: &TickReport) -> Self {
        let s = &report.summary;
        Self {
            tick:                report.tick.0,
            thinking:            s.counts.thinking as u64,
            hungry:              s.counts.hungry as u64,
            eating:              s.counts.eating as u64,
            completed:           report.completed.len() as u64,
            total_completions:   s.total_completions,
            avg_wait_time:       s.avg_wait_time,
            throughput:          s.throughput,
            completion_variance: s.completion_variance,
            deadlocked:          report.is_deadlocked(),
        }
    }
}
