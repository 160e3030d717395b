//! Internal-consistency faults of the table.

use dp_core::{ActorId, ResourceId};
use thiserror::Error;

/// A broken table invariant.
///
/// None of these can occur while the scheduler follows the state machine; the
/// check after each tick exists so a fault surfaces at the tick it happened
/// instead of as a corrupted metric later.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{resource} is held by {holder}, which is not seated next to it")]
    ForeignHolder { resource: ResourceId, holder: ActorId },

    #[error("{actor} is eating without holding both of its resources")]
    EatingWithoutBoth { actor: ActorId },

    #[error("{actor} is thinking while still holding {resource}")]
    ThinkingWhileHolding { actor: ActorId, resource: ResourceId },

    #[error("{actor} is hungry but has no hungry_since tick")]
    HungryWithoutStart { actor: ActorId },
}

pub type InvariantResult<T> = Result<T, InvariantViolation>;
