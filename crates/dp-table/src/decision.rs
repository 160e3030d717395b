//! Strategy decisions and their outcomes.

/// One action a HUNGRY actor requests for the current tick.
///
/// Strategies produce a `Decision`; [`Table::apply`][crate::Table::apply]
/// carries it out.  Exactly one decision is applied per actor per tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// Take the left resource if it is free.
    AcquireLeft,
    /// Take the right resource if it is free.
    AcquireRight,
    /// Take both resources if both are free; otherwise take neither.
    AcquireBoth,
    /// Put down everything held and stay HUNGRY.
    ReleaseAll,
    /// Do nothing this tick.
    Wait,
    /// Do nothing this tick, deferring to a neighbor with higher priority.
    Yield,
}

/// Whether an applied decision left the actor holding both resources.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attempt {
    /// The actor now holds both resources and has started EATING.
    AcquiredBoth,
    /// The actor is still HUNGRY.  It may hold one resource (naive strategy).
    AcquiredNone,
}
