//! Hold-and-wait stall detection.
//!
//! A tick is *stalled* when nobody finished eating and every actor is HUNGRY
//! holding exactly one resource.  After `window` consecutive stalled ticks the
//! run is flagged deadlocked.  Any non-stalled tick clears the flag.

use dp_core::Tick;
use dp_table::Table;

#[derive(Debug, Clone)]
pub struct DeadlockDetector {
    window:      u64,
    stalled_for: u64,
    stall_start: Option<Tick>,
    flagged:     bool,
}

impl DeadlockDetector {
    /// `window == 0` disables detection.
    pub fn new(window: u64) -> Self {
        Self { window, stalled_for: 0, stall_start: None, flagged: false }
    }

    /// Feed one post-tick table.
    ///
    /// Returns `Some(stall_start)` on the single tick where the stall reaches
    /// `window` ticks; `None` otherwise.
    pub fn observe(&mut self, now: Tick, completed_any: bool, table: &Table) -> Option<Tick> {
        if self.window == 0 {
            return None;
        }
        if completed_any || !table.all_hungry_holding_one() {
            self.stalled_for = 0;
            self.stall_start = None;
            self.flagged = false;
            return None;
        }

        self.stalled_for += 1;
        let start = *self.stall_start.get_or_insert(now);
        if !self.flagged && self.stalled_for >= self.window {
            self.flagged = true;
            return Some(start);
        }
        None
    }

    /// First tick of the current stall, if the run is flagged deadlocked.
    pub fn deadlocked_since(&self) -> Option<Tick> {
        if self.flagged { self.stall_start } else { None }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.window);
    }
}
