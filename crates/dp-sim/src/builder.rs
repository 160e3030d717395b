//! Fluent builder for constructing a [`Sim`].

use dp_core::{SimClock, SimConfig, SimRng, Tick};
use dp_strategy::{AcquisitionStrategy, AnyStrategy};
use dp_table::Table;
use tracing::info;

use crate::{DeadlockDetector, Metrics, Sim, SimError, SimResult, StopHandle};

/// Build a simulation from a config alone, using the strategy it names.
///
/// This is the usual entry point; use [`SimBuilder`] to plug in a custom
/// strategy or a staged starting table.
pub fn initialize(config: SimConfig) -> SimResult<Sim<AnyStrategy>> {
    let strategy = AnyStrategy::from_kind(config.strategy);
    SimBuilder::new(config, strategy).build()
}

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — actor count, probabilities, seed, tick limit, …
/// - `S: AcquisitionStrategy` — the policy every actor follows
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                   |
/// |---------------------|-------------------------------------------|
/// | `.table(t)`         | `Table::ring(config.actor_count)`         |
/// | `.stop_handle(h)`   | A fresh, un-fired `StopHandle`            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, Cooperative)
///     .stop_handle(handle.clone())
///     .build()?;
/// sim.run_to_end(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: AcquisitionStrategy> {
    config:   SimConfig,
    strategy: S,
    table:    Option<Table>,
    stop:     Option<StopHandle>,
}

impl<S: AcquisitionStrategy> SimBuilder<S> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, strategy: S) -> Self {
        Self { config, strategy, table: None, stop: None }
    }

    /// Start from a staged table instead of an all-THINKING ring.
    ///
    /// Must have `config.actor_count` actors and pass the table invariants.
    /// [`Sim::reset`] returns to this table.
    pub fn table(mut self, table: Table) -> Self {
        self.table = Some(table);
        self
    }

    /// Share an externally owned stop signal.
    pub fn stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`] at tick 0.
    pub fn build(self) -> SimResult<Sim<S>> {
        self.config.validate()?;
        let actor_count = self.config.actor_count;

        let table = match self.table {
            Some(t) => {
                if t.len() != actor_count {
                    return Err(SimError::ActorCountMismatch {
                        expected: actor_count,
                        got:      t.len(),
                        what:     "staged table",
                    });
                }
                t.check_invariants()
                    .map_err(|source| SimError::Invariant { tick: Tick::ZERO, source })?;
                t
            }
            None => Table::ring(actor_count),
        };

        info!(
            actors        = actor_count,
            strategy      = self.strategy.name(),
            hungry_chance = self.config.hungry_chance,
            full_chance   = self.config.full_chance,
            seed          = self.config.seed,
            "simulation initialized"
        );

        Ok(Sim {
            clock:         SimClock::new(),
            rng:           SimRng::new(self.config.seed),
            deadlock:      DeadlockDetector::new(self.config.deadlock_window),
            metrics:       Metrics::new(),
            stop:          self.stop.unwrap_or_default(),
            initial_table: table.clone(),
            table,
            strategy:      self.strategy,
            config:        self.config,
        })
    }
}
