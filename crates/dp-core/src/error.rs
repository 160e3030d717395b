//! Configuration error type.
//!
//! Every variant is raised while a run is being set up; nothing in the tick
//! loop produces a `ConfigError`.

use thiserror::Error;

/// Rejected run parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("actor_count must be greater than zero")]
    NoActors,

    #[error("actor_count {0} exceeds the id space")]
    TooManyActors(usize),

    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("max_ticks must be greater than zero")]
    NoTicks,

    #[error("unknown strategy {0:?} (expected naive, atomic, or cooperative)")]
    UnknownStrategy(String),
}

/// Shorthand result type for configuration handling.
pub type ConfigResult<T> = Result<T, ConfigError>;
