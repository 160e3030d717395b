//! Both or nothing.

use dp_table::Decision;

use crate::{AcquisitionStrategy, ActorView};

/// Acquire both resources in one step when both are free; otherwise wait
/// holding nothing.
///
/// Removing hold-and-wait rules out deadlock, but nothing stops two faster
/// neighbors from keeping an actor hungry forever.
#[derive(Copy, Clone, Debug, Default)]
pub struct Atomic;

impl AcquisitionStrategy for Atomic {
    fn name(&self) -> &'static str {
        "atomic"
    }

    fn decide(&self, view: &ActorView<'_>) -> Decision {
        if view.left_free() && view.right_free() {
            Decision::AcquireBoth
        } else {
            Decision::Wait
        }
    }
}
