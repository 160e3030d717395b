//! `dp-strategy` — how a hungry actor tries to get its two resources.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`view`]        | `ActorView<'a>` — read-only table state seen by one actor |
//! | [`model`]       | `AcquisitionStrategy` trait                               |
//! | [`naive`]       | `Naive` — left, then right; hold-and-wait                 |
//! | [`atomic`]      | `Atomic` — both or nothing                                |
//! | [`cooperative`] | `Cooperative` — atomic plus yielding to hungrier neighbors|
//! | [`any`]         | `AnyStrategy` — runtime choice from a `StrategyKind`      |
//!
//! # Design notes
//!
//! A strategy is a pure decision function.  It reads the table through an
//! [`ActorView`] and returns one [`Decision`][dp_table::Decision]; the
//! scheduler in dp-sim applies it before asking the next actor.  Strategies
//! hold no per-actor state: everything that varies per actor (wait time,
//! holdings) lives in the `Table`.

pub mod any;
pub mod atomic;
pub mod cooperative;
pub mod model;
pub mod naive;
pub mod view;


pub use any::AnyStrategy;
pub use atomic::Atomic;
pub use cooperative::Cooperative;
pub use model::AcquisitionStrategy;
pub use naive::Naive;
pub use view::ActorView;
