//! `dp-table` — the shared data model of the dining table.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`resource`]  | `ResourceUnit` — an exclusive-use token (a fork)             |
//! | [`actor`]     | `Actor`, `ActorState`, `StateCounts`                         |
//! | [`decision`]  | `Decision` (what a strategy asks for), `Attempt` (outcome)   |
//! | [`table`]     | `Table` — actors and resources in parallel arrays on a ring  |
//! | [`error`]     | `InvariantViolation`                                         |
//!
//! # Ownership model
//!
//! Actors and resources are addressed by integer id.  A resource records its
//! holder as `Option<ActorId>`; an actor's `holds_left` / `holds_right` are
//! derived from that field rather than stored.  Mutual exclusion (at most one
//! holder per resource) therefore holds by representation, and there are no
//! cyclic references between the two arrays.

pub mod actor;
pub mod decision;
pub mod error;
pub mod resource;
pub mod table;

#[cfg(test)]
mod tests;

pub use actor::{Actor, ActorState, StateCounts};
pub use decision::{Attempt, Decision};
pub use error::{InvariantResult, InvariantViolation};
pub use resource::ResourceUnit;
pub use table::Table;
