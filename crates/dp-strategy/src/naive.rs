//! Left first, then right.

use dp_table::Decision;

use crate::{AcquisitionStrategy, ActorView};

/// Take the left resource, then the right one on a later tick, holding the
/// left one for as long as the right one is busy.
///
/// This is the classic hold-and-wait policy.  When every actor becomes hungry
/// in the same tick they all take their left resource together and the table
/// stalls for good: nobody releases without eating.
#[derive(Copy, Clone, Debug, Default)]
pub struct Naive;

impl AcquisitionStrategy for Naive {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn decide(&self, view: &ActorView<'_>) -> Decision {
        if !view.holds_left() {
            return if view.left_free() { Decision::AcquireLeft } else { Decision::Wait };
        }
        if view.right_free() { Decision::AcquireRight } else { Decision::Wait }
    }
}
