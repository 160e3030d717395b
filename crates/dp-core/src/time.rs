//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  `Tick(0)` is the
//! state right after initialization; the first call to `step` processes
//! `Tick(1)`.  There is no wall-clock mapping: one tick is one synchronous
//! round of the three-phase scheduler.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the last processed tick of a run.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The most recently completed tick.  `Tick::ZERO` before the first step.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick and return the new tick.
    #[inline]
    pub fn advance(&mut self) -> Tick {
        self.current_tick = self.current_tick.offset(1);
        self.current_tick
    }

    /// The tick the next `advance` will produce.
    #[inline]
    pub fn next_tick(&self) -> Tick {
        self.current_tick.offset(1)
    }

    /// Number of ticks processed so far.
    #[inline]
    pub fn elapsed(&self) -> u64 {
        self.current_tick.0
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_tick)
    }
}
