//! Runtime strategy selection.

use dp_core::StrategyKind;
use dp_table::Decision;

use crate::{AcquisitionStrategy, ActorView, Atomic, Cooperative, Naive};

/// One of the built-in strategies, chosen from a [`StrategyKind`] at
/// initialization.  Dispatch is a `match`, so `Sim<AnyStrategy>` costs the
/// same as a monomorphic `Sim<Naive>`.
#[derive(Copy, Clone, Debug)]
pub enum AnyStrategy {
    Naive(Naive),
    Atomic(Atomic),
    Cooperative(Cooperative),
}

impl AnyStrategy {
    pub fn from_kind(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Naive       => AnyStrategy::Naive(Naive),
            StrategyKind::Atomic      => AnyStrategy::Atomic(Atomic),
            StrategyKind::Cooperative => AnyStrategy::Cooperative(Cooperative),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            AnyStrategy::Naive(_)       => StrategyKind::Naive,
            AnyStrategy::Atomic(_)      => StrategyKind::Atomic,
            AnyStrategy::Cooperative(_) => StrategyKind::Cooperative,
        }
    }
}

impl From<StrategyKind> for AnyStrategy {
    fn from(kind: StrategyKind) -> Self {
        Self::from_kind(kind)
    }
}

impl AcquisitionStrategy for AnyStrategy {
    fn name(&self) -> &'static str {
        match self {
            AnyStrategy::Naive(s)       => s.name(),
            AnyStrategy::Atomic(s)      => s.name(),
            AnyStrategy::Cooperative(s) => s.name(),
        }
    }

    fn decide(&self, view: &ActorView<'_>) -> Decision {
        match self {
            AnyStrategy::Naive(s)       => s.decide(view),
            AnyStrategy::Atomic(s)      => s.decide(view),
            AnyStrategy::Cooperative(s) => s.decide(view),
        }
    }
}
