//! The `AcquisitionStrategy` trait — the policy extension point.

use dp_table::Decision;

use crate::ActorView;

/// Pluggable resource acquisition policy.
///
/// Called once per HUNGRY actor per tick, in ascending actor id.  The
/// returned [`Decision`] is applied to the table before the next actor is
/// asked.
///
/// # Thread safety
///
/// Seed sweeps may run several simulations on a Rayon pool, each with its own
/// strategy value, so implementations must be `Send + Sync`.
///
/// # Example
///
/// ```rust
/// use dp_strategy::{AcquisitionStrategy, ActorView};
/// use dp_table::Decision;
///
/// /// Never eats.
/// struct Fasting;
///
/// impl AcquisitionStrategy for Fasting {
///     fn name(&self) -> &'static str { "fasting" }
///     fn decide(&self, _view: &ActorView<'_>) -> Decision { Decision::Wait }
/// }
/// ```
pub trait AcquisitionStrategy: Send + Sync + 'static {
    /// Short label for logs and reports.
    fn name(&self) -> &'static str;

    /// Choose this tick's action for `view.actor`.
    fn decide(&self, view: &ActorView<'_>) -> Decision;
}
