//! Atomic acquisition with a yield rule.

use dp_table::{Actor, Decision};

use crate::{AcquisitionStrategy, ActorView};

/// Like [`Atomic`][crate::Atomic], but before acquiring, the actor checks its
/// hungry neighbors and stands aside for any that outrank it.
///
/// A neighbor outranks the deciding actor if it became hungry strictly
/// earlier, or in the same tick and has a lower id.  That is a total order
/// over contested acquisitions, which spreads meals evenly at some cost in
/// throughput: a yielding actor leaves its resources free even if the
/// neighbor it yields to cannot use them yet.
#[derive(Copy, Clone, Debug, Default)]
pub struct Cooperative;

impl AcquisitionStrategy for Cooperative {
    fn name(&self) -> &'static str {
        "cooperative"
    }

    fn decide(&self, view: &ActorView<'_>) -> Decision {
        if !(view.left_free() && view.right_free()) {
            return Decision::Wait;
        }
        let me = view.me();
        if view.neighbors().any(|n| n.is_hungry() && outranks(n, me)) {
            return Decision::Yield;
        }
        Decision::AcquireBoth
    }
}

/// `true` if `other` has priority over `me` for a shared resource.
fn outranks(other: &Actor, me: &Actor) -> bool {
    match (other.hungry_since, me.hungry_since) {
        (Some(theirs), Some(mine)) => theirs < mine || (theirs == mine && other.id < me.id),
        // A hungry actor always has a start tick; rank a missing one last.
        (Some(_), None) => true,
        (None, _) => false,
    }
}
