//! `dp-core` — foundational types for the dining-table contention simulator.
//!
//! This crate is a dependency of every other `dp-*` crate.  It intentionally
//! has no `dp-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ActorId`, `ResourceId`                               |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `SimConfig`, `StrategyKind`                           |
//! | [`rng`]         | `SimRng` (the single run-wide generator)              |
//! | [`error`]       | `ConfigError`, `ConfigResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `SimConfig` from JSON.                    |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, StrategyKind};
pub use error::{ConfigError, ConfigResult};
pub use ids::{ActorId, ResourceId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
