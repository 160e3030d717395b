//! Unit tests for dp-table.

#[cfg(test)]
mod resource_unit {
    use dp_core::{ActorId, ResourceId};

    use crate::ResourceUnit;

    #[test]
    fn acquire_free_resource() {
        let mut r = ResourceUnit::new(ResourceId(0));
        assert!(r.is_free());
        assert!(r.try_acquire(ActorId(1)));
        assert_eq!(r.holder(), Some(ActorId(1)));
    }

    #[test]
    fn acquire_held_resource_fails_without_side_effect() {
        let mut r = ResourceUnit::new(ResourceId(0));
        r.try_acquire(ActorId(1));
        assert!(!r.try_acquire(ActorId(2)));
        assert_eq!(r.holder(), Some(ActorId(1)));
        // The holder re-acquiring is also a failed attempt.
        assert!(!r.try_acquire(ActorId(1)));
        assert_eq!(r.holder(), Some(ActorId(1)));
    }

    #[test]
    fn release_by_non_holder_is_noop() {
        let mut r = ResourceUnit::new(ResourceId(0));
        r.try_acquire(ActorId(1));
        assert!(!r.release(ActorId(2)));
        assert_eq!(r.holder(), Some(ActorId(1)));
        assert!(r.release(ActorId(1)));
        assert!(r.is_free());
        assert!(!r.release(ActorId(1)), "second release is a no-op");
    }
}

#[cfg(test)]
mod ring {
    use dp_core::{ActorId, ResourceId};

    use crate::{ActorState, Table};

    #[test]
    fn ring_wiring() {
        let t = Table::ring(5);
        assert_eq!(t.len(), 5);
        assert_eq!(t.resources().len(), 5);
        assert_eq!(t.actor(ActorId(0)).left, ResourceId(0));
        assert_eq!(t.actor(ActorId(0)).right, ResourceId(1));
        assert_eq!(t.actor(ActorId(4)).left, ResourceId(4));
        assert_eq!(t.actor(ActorId(4)).right, ResourceId(0), "ring wraps");
        assert!(t.actors().iter().all(|a| a.state == ActorState::Thinking));
        assert!(t.resources().iter().all(|r| r.is_free()));
    }

    #[test]
    fn neighbors_wrap() {
        let t = Table::ring(5);
        assert_eq!(t.left_neighbor(ActorId(0)), ActorId(4));
        assert_eq!(t.right_neighbor(ActorId(0)), ActorId(1));
        assert_eq!(t.right_neighbor(ActorId(4)), ActorId(0));
    }

    #[test]
    fn actor_ids_ascending() {
        let t = Table::ring(4);
        let ids: Vec<_> = t.actor_ids().collect();
        assert_eq!(ids, vec![ActorId(0), ActorId(1), ActorId(2), ActorId(3)]);
    }

    #[test]
    fn single_actor_shares_one_resource() {
        let t = Table::ring(1);
        let a = t.actor(ActorId(0));
        assert_eq!(a.left, a.right);
        assert_eq!(t.left_neighbor(ActorId(0)), ActorId(0));
    }
}

#[cfg(test)]
mod apply {
    use dp_core::{ActorId, ResourceId, Tick};

    use crate::{ActorState, Attempt, Decision, Table};

    fn hungry_table(n: usize) -> Table {
        let mut t = Table::ring(n);
        for id in t.actor_ids() {
            t.become_hungry(id, Tick(1));
        }
        t
    }

    #[test]
    fn acquire_left_then_right_starts_eating() {
        let mut t = hungry_table(3);
        let a = ActorId(0);
        assert_eq!(t.apply(a, Decision::AcquireLeft, Tick(2)), Attempt::AcquiredNone);
        assert!(t.holds_left(a));
        assert!(!t.holds_right(a));
        assert_eq!(t.held_count(a), 1);

        assert_eq!(t.apply(a, Decision::AcquireRight, Tick(3)), Attempt::AcquiredBoth);
        let actor = t.actor(a);
        assert_eq!(actor.state, ActorState::Eating);
        assert_eq!(actor.meals_started, 1);
        assert_eq!(actor.total_wait_ticks, 2);
    }

    #[test]
    fn acquire_both_is_all_or_nothing() {
        let mut t = hungry_table(3);
        // Actor 1 takes its left (resource 1), which is actor 0's right.
        t.apply(ActorId(1), Decision::AcquireLeft, Tick(2));
        assert_eq!(t.apply(ActorId(0), Decision::AcquireBoth, Tick(2)), Attempt::AcquiredNone);
        assert!(!t.holds_left(ActorId(0)), "left must not be taken alone");
        assert!(t.resource(ResourceId(0)).is_free());
    }

    #[test]
    fn acquire_both_when_free() {
        let mut t = hungry_table(3);
        assert_eq!(t.apply(ActorId(2), Decision::AcquireBoth, Tick(2)), Attempt::AcquiredBoth);
        assert!(t.holds_both(ActorId(2)));
        assert_eq!(t.resource(ResourceId(0)).holder(), Some(ActorId(2)));
    }

    #[test]
    fn wait_and_yield_change_nothing() {
        let mut t = hungry_table(3);
        let before = t.clone();
        t.apply(ActorId(0), Decision::Wait, Tick(2));
        t.apply(ActorId(1), Decision::Yield, Tick(2));
        assert_eq!(t, before);
    }

    #[test]
    fn release_all_keeps_actor_hungry() {
        let mut t = hungry_table(3);
        t.apply(ActorId(0), Decision::AcquireLeft, Tick(2));
        assert_eq!(t.apply(ActorId(0), Decision::ReleaseAll, Tick(3)), Attempt::AcquiredNone);
        assert_eq!(t.held_count(ActorId(0)), 0);
        assert_eq!(t.actor(ActorId(0)).state, ActorState::Hungry);
    }

    #[test]
    fn decisions_ignored_unless_hungry() {
        let mut t = Table::ring(3);
        assert_eq!(t.apply(ActorId(0), Decision::AcquireBoth, Tick(1)), Attempt::AcquiredNone);
        assert!(t.resources().iter().all(|r| r.is_free()));
    }

    #[test]
    fn single_actor_eats_with_one_resource() {
        let mut t = hungry_table(1);
        assert_eq!(t.apply(ActorId(0), Decision::AcquireLeft, Tick(2)), Attempt::AcquiredBoth);
        assert_eq!(t.held_count(ActorId(0)), 1);
        assert!(t.check_invariants().is_ok());
    }

    #[test]
    fn finish_eating_releases_both_and_counts() {
        let mut t = hungry_table(3);
        t.apply(ActorId(0), Decision::AcquireBoth, Tick(2));
        t.finish_eating(ActorId(0), Tick(3));
        let a = t.actor(ActorId(0));
        assert_eq!(a.state, ActorState::Thinking);
        assert_eq!(a.completions, 1);
        assert_eq!(a.hungry_since, None);
        assert_eq!(t.held_count(ActorId(0)), 0);
        assert!(t.resources().iter().all(|r| r.is_free()));
    }

    #[test]
    fn release_of_unheld_resource_leaves_holder_alone() {
        let mut t = hungry_table(3);
        t.apply(ActorId(0), Decision::AcquireBoth, Tick(2));
        let before = t.clone();
        // Actor 1 shares resource 1 with actor 0 but does not hold it.
        assert!(!t.release(ResourceId(1), ActorId(1)));
        t.release_all(ActorId(2));
        assert_eq!(t, before);
    }

    #[test]
    fn wait_time_only_while_hungry() {
        let mut t = hungry_table(2);
        assert_eq!(t.actor(ActorId(0)).wait_time(Tick(4)), Some(3));
        t.apply(ActorId(0), Decision::AcquireBoth, Tick(4));
        assert_eq!(t.actor(ActorId(0)).wait_time(Tick(5)), None);
        assert_eq!(t.actor(ActorId(0)).mean_wait(), 3.0);
    }
}

#[cfg(test)]
mod queries {
    use dp_core::{ActorId, ResourceId, Tick};

    use crate::{Decision, InvariantViolation, Table};

    #[test]
    fn state_counts() {
        let mut t = Table::ring(4);
        t.become_hungry(ActorId(0), Tick(1));
        t.become_hungry(ActorId(1), Tick(1));
        t.apply(ActorId(0), Decision::AcquireBoth, Tick(2));
        let c = t.state_counts();
        assert_eq!((c.thinking, c.hungry, c.eating), (2, 1, 1));
        assert_eq!(c.total(), 4);
    }

    #[test]
    fn hold_and_wait_cycle_detected() {
        let mut t = Table::ring(3);
        for id in t.actor_ids() {
            t.become_hungry(id, Tick(1));
        }
        assert!(!t.all_hungry_holding_one());
        for id in t.actor_ids() {
            t.apply(id, Decision::AcquireLeft, Tick(2));
        }
        assert!(t.all_hungry_holding_one());
        assert!(t.check_invariants().is_ok());
    }

    #[test]
    fn fresh_table_is_consistent() {
        assert!(Table::ring(7).check_invariants().is_ok());
    }

    #[test]
    fn foreign_holder_reported() {
        let mut t = Table::ring(5);
        // Actor 3 is not seated next to resource 0.
        t.resources_mut()[0].try_acquire(ActorId(3));
        assert_eq!(
            t.check_invariants(),
            Err(InvariantViolation::ForeignHolder { resource: ResourceId(0), holder: ActorId(3) })
        );
    }

    #[test]
    fn thinking_holder_reported() {
        let mut t = Table::ring(3);
        t.resources_mut()[1].try_acquire(ActorId(1));
        assert_eq!(
            t.check_invariants(),
            Err(InvariantViolation::ThinkingWhileHolding {
                actor:    ActorId(1),
                resource: ResourceId(1),
            })
        );
    }
}
