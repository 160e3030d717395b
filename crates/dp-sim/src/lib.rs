//! `dp-sim` — the scheduler that drives a dining table tick by tick.
//!
//! # Three-phase tick
//!
//! ```text
//! for tick in 1..=config.max_ticks:
//!   ① Hunger   — every actor THINKING at tick start samples hungry_chance
//!                (ascending id) and may become HUNGRY.
//!   ② Acquire  — every actor HUNGRY at tick start asks its strategy for a
//!                decision, which is applied before the next actor decides
//!                (ascending id).  Holding both resources starts EATING.
//!   ③ Release  — every actor EATING at tick start samples full_chance
//!                (ascending id) and may put both resources down.
//!   then: invariant check → metrics → deadlock detector → TickReport
//! ```
//!
//! Phase eligibility uses the state at the start of the tick, so an actor
//! makes at most one transition per tick.  All randomness comes from one
//! `SimRng` consumed in the order above; a run is reproducible from
//! `(seed, actor_count, probabilities, strategy)`.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`sweep`] distributes whole runs over Rayon.           |
//! | `serde`    | Derives `Serialize`/`Deserialize` on reports.          |
//!
//! # Quick-start
//!
//! ```rust
//! use dp_core::{SimConfig, StrategyKind};
//!
//! let config = SimConfig {
//!     actor_count: 5,
//!     strategy:    StrategyKind::Atomic,
//!     max_ticks:   100,
//!     ..SimConfig::default()
//! };
//! let mut sim = dp_sim::initialize(config)?;
//! for report in sim.run(10) {
//!     let report = report?;
//!     assert_eq!(report.actors.len(), 5);
//! }
//! # Ok::<(), dp_sim::SimError>(())
//! ```

pub mod builder;
pub mod deadlock;
pub mod error;
pub mod iter;
pub mod metrics;
pub mod observer;
pub mod report;
pub mod sim;
pub mod stop;
pub mod sweep;


pub use builder::{SimBuilder, initialize};
pub use deadlock::DeadlockDetector;
pub use error::{SimError, SimResult};
pub use iter::TickReports;
pub use metrics::Metrics;
pub use observer::{NoopObserver, SimObserver};
pub use report::{ActorSnapshot, RunSummary, TickReport};
pub use sim::Sim;
pub use stop::StopHandle;
pub use sweep::{compare_strategies, sweep};
