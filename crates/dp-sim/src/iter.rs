//! `TickReports` — the lazy, finite report sequence returned by `Sim::run`.

use std::iter::FusedIterator;

use dp_strategy::AcquisitionStrategy;

use crate::{Sim, SimResult, TickReport};

/// Steps the simulation once per `next()` call.
///
/// Yields at most `n` items.  After an `Err` or once the stop handle fires,
/// it yields nothing more.  Dropping the iterator early simply leaves the
/// simulation at the last processed tick.
pub struct TickReports<'a, S: AcquisitionStrategy> {
    sim:       &'a mut Sim<S>,
    remaining: u64,
    failed:    bool,
}

impl<'a, S: AcquisitionStrategy> TickReports<'a, S> {
    pub(crate) fn new(sim: &'a mut Sim<S>, n: u64) -> Self {
        Self { sim, remaining: n, failed: false }
    }

    /// Ticks still to be produced, at most.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl<S: AcquisitionStrategy> Iterator for TickReports<'_, S> {
    type Item = SimResult<TickReport>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.failed || self.sim.stop.is_stopped() {
            return None;
        }
        self.remaining -= 1;
        let result = self.sim.step();
        self.failed = result.is_err();
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        (0, usize::try_from(self.remaining).ok())
    }
}

impl<S: AcquisitionStrategy> FusedIterator for TickReports<'_, S> {}
