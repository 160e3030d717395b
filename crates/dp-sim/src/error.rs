use dp_core::{ConfigError, Tick};
use dp_table::InvariantViolation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid simulation configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("{what} length {got} does not match actor count {expected}")]
    ActorCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("table invariant violated at {tick}: {source}")]
    Invariant {
        tick:   Tick,
        #[source]
        source: InvariantViolation,
    },
}

pub type SimResult<T> = Result<T, SimError>;
