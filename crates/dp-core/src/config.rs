//! Run configuration.
//!
//! `SimConfig` is the parameter set every entity of a run is created from.
//! Applications build it in code, or load it from a JSON file when the
//! `serde` feature is enabled, and hand it to `dp_sim::initialize`.

use std::fmt;
use std::str::FromStr;

use crate::{ConfigError, ConfigResult};

// ── StrategyKind ──────────────────────────────────────────────────────────────

/// Which acquisition strategy every actor of a run uses.
///
/// Strategies are never mixed within one simulation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StrategyKind {
    /// Left first, then right on a later tick; holds left while waiting.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "Naive"))]
    Naive,
    /// Both resources in one step or none.
    #[cfg_attr(feature = "serde", serde(alias = "Atomic"))]
    Atomic,
    /// Atomic, plus yielding to longer-waiting (or lower-id) hungry neighbors.
    #[cfg_attr(feature = "serde", serde(alias = "Cooperative"))]
    Cooperative,
}

impl StrategyKind {
    /// Every strategy, in presentation order.
    pub const ALL: [StrategyKind; 3] =
        [StrategyKind::Naive, StrategyKind::Atomic, StrategyKind::Cooperative];

    /// Lower-case label, used for CLI flags and output columns.
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Naive       => "naive",
            StrategyKind::Atomic      => "atomic",
            StrategyKind::Cooperative => "cooperative",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    /// Case-insensitive: `"Naive"`, `"naive"`, and `"NAIVE"` all parse.
    fn from_str(s: &str) -> ConfigResult<Self> {
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownStrategy(s.to_owned()))
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of actors seated around the ring.  One resource per actor.
    pub actor_count: usize,

    /// Per-tick probability that a THINKING actor becomes HUNGRY.
    pub hungry_chance: f64,

    /// Per-tick probability that an EATING actor finishes and releases.
    pub full_chance: f64,

    /// Acquisition strategy shared by all actors.
    pub strategy: StrategyKind,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Ticks processed by `Sim::run_to_end`.
    pub max_ticks: u64,

    /// Write actor snapshots every N ticks.  1 = every tick; 0 = never.
    pub output_interval_ticks: u64,

    /// Consecutive stalled ticks (no completions, every actor HUNGRY holding
    /// exactly one resource) before a run is flagged deadlocked.  0 disables
    /// detection.
    pub deadlock_window: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            actor_count:           5,
            hungry_chance:         0.1,
            full_chance:           0.2,
            strategy:              StrategyKind::Naive,
            seed:                  42,
            max_ticks:             1_000,
            output_interval_ticks: 1,
            deadlock_window:       10,
        }
    }
}

impl SimConfig {
    /// The tick at which `run_to_end` stops (inclusive).
    #[inline]
    pub fn end_tick(&self) -> crate::Tick {
        crate::Tick(self.max_ticks)
    }

    /// Reject parameter sets the scheduler cannot run.
    ///
    /// Called once by the simulation builder; a config that passes is never
    /// re-checked mid-run.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.actor_count == 0 {
            return Err(ConfigError::NoActors);
        }
        if u32::try_from(self.actor_count).is_err() {
            return Err(ConfigError::TooManyActors(self.actor_count));
        }
        check_probability("hungry_chance", self.hungry_chance)?;
        check_probability("full_chance", self.full_chance)?;
        if self.max_ticks == 0 {
            return Err(ConfigError::NoTicks);
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> ConfigResult<()> {
    // NaN fails the range check as well.
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}
