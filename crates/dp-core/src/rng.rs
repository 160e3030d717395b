//! Deterministic run-wide RNG.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded from `SimConfig::seed`.  The
//! scheduler draws from it in a fixed order every tick (phase 1: one
//! `hungry_chance` sample per THINKING actor in ascending id; phase 3: one
//! `full_chance` sample per EATING actor in ascending id).  Given the same
//! seed, actor count, probabilities, and strategy, every run produces the
//! same sequence of tick reports.
//!
//! There are deliberately no per-actor generators: the sampling order is the
//! reproducibility contract, and one stream makes it explicit.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The single random source of a simulation run.
///
/// Used only from the scheduler's thread.  Parallel sweeps give every run its
/// own `SimRng` seeded from that run's config.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    ///
    /// `p == 1.0` always yields `true` and `p == 0.0` always yields `false`.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
