//! `Table` — actors and resource units on a ring.
//!
//! # Layout
//!
//! ```text
//!   actor i:  left = resource i,  right = resource (i + 1) mod N
//!
//!   r0 ─ a0 ─ r1 ─ a1 ─ r2 ─ … ─ a(N-1) ─ (r0)
//! ```
//!
//! Both arrays have exactly N elements and are indexed by id.  With a single
//! actor, `left` and `right` name the same resource, so holding it counts as
//! holding both.

use dp_core::{ActorId, ResourceId, Tick};

use crate::{
    Actor, ActorState, Attempt, Decision, InvariantResult, InvariantViolation, ResourceUnit,
    StateCounts,
};

/// The whole mutable world of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    actors:    Vec<Actor>,
    resources: Vec<ResourceUnit>,
}

impl Table {
    /// Seat `count` THINKING actors around a ring of `count` free resources.
    ///
    /// `count` must fit in a `u32`; `SimConfig::validate` guarantees this.
    pub fn ring(count: usize) -> Self {
        let resources = (0..count as u32)
            .map(|i| ResourceUnit::new(ResourceId(i)))
            .collect();
        let actors = (0..count as u32)
            .map(|i| {
                let right = (i as usize + 1) % count;
                Actor::new(ActorId(i), ResourceId(i), ResourceId(right as u32))
            })
            .collect();
        Self { actors, resources }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Iterator over all `ActorId`s in ascending order, which is the tick order.
    pub fn actor_ids(&self) -> impl Iterator<Item = ActorId> + use<> {
        (0..self.actors.len() as u32).map(ActorId)
    }

    #[inline]
    pub fn actor(&self, id: ActorId) -> &Actor {
        &self.actors[id.index()]
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    #[inline]
    pub fn resource(&self, id: ResourceId) -> &ResourceUnit {
        &self.resources[id.index()]
    }

    pub fn resources(&self) -> &[ResourceUnit] {
        &self.resources
    }

    // ── Derived holdings ──────────────────────────────────────────────────

    #[inline]
    pub fn holds_left(&self, id: ActorId) -> bool {
        self.resource(self.actor(id).left).is_held_by(id)
    }

    #[inline]
    pub fn holds_right(&self, id: ActorId) -> bool {
        self.resource(self.actor(id).right).is_held_by(id)
    }

    #[inline]
    pub fn holds_both(&self, id: ActorId) -> bool {
        self.holds_left(id) && self.holds_right(id)
    }

    /// Number of distinct resources `id` holds (0, 1, or 2).
    pub fn held_count(&self, id: ActorId) -> usize {
        let actor = self.actor(id);
        if actor.left == actor.right {
            return usize::from(self.holds_left(id));
        }
        usize::from(self.holds_left(id)) + usize::from(self.holds_right(id))
    }

    // ── Ring neighbors ────────────────────────────────────────────────────

    /// The actor sharing `id`'s left resource.
    #[inline]
    pub fn left_neighbor(&self, id: ActorId) -> ActorId {
        let n = self.actors.len();
        ActorId(((id.index() + n - 1) % n) as u32)
    }

    /// The actor sharing `id`'s right resource.
    #[inline]
    pub fn right_neighbor(&self, id: ActorId) -> ActorId {
        let n = self.actors.len();
        ActorId(((id.index() + 1) % n) as u32)
    }

    // ── Resource operations ───────────────────────────────────────────────

    /// Release `resource` on behalf of `actor`.  No-op unless `actor` holds it.
    pub fn release(&mut self, resource: ResourceId, actor: ActorId) -> bool {
        self.resources[resource.index()].release(actor)
    }

    /// Release both of `id`'s resources in one step.
    pub fn release_all(&mut self, id: ActorId) {
        let (left, right) = { let a = self.actor(id); (a.left, a.right) };
        self.resources[left.index()].release(id);
        self.resources[right.index()].release(id);
    }

    /// Carry out a strategy decision for a HUNGRY actor.
    ///
    /// If the actor ends up holding both resources it starts EATING at `now`
    /// and the result is [`Attempt::AcquiredBoth`].  Decisions for actors that
    /// are not HUNGRY are ignored.
    pub fn apply(&mut self, id: ActorId, decision: Decision, now: Tick) -> Attempt {
        if !self.actor(id).is_hungry() {
            return Attempt::AcquiredNone;
        }
        let (left, right) = { let a = self.actor(id); (a.left, a.right) };

        match decision {
            Decision::AcquireLeft => {
                self.resources[left.index()].try_acquire(id);
            }
            Decision::AcquireRight => {
                self.resources[right.index()].try_acquire(id);
            }
            Decision::AcquireBoth => {
                if self.resource(left).is_free() && self.resource(right).is_free() {
                    self.resources[left.index()].try_acquire(id);
                    self.resources[right.index()].try_acquire(id);
                }
            }
            Decision::ReleaseAll => self.release_all(id),
            Decision::Wait | Decision::Yield => {}
        }

        if self.holds_both(id) {
            self.start_eating(id, now);
            Attempt::AcquiredBoth
        } else {
            Attempt::AcquiredNone
        }
    }

    // ── State transitions ─────────────────────────────────────────────────

    /// THINKING → HUNGRY.
    pub fn become_hungry(&mut self, id: ActorId, now: Tick) {
        let actor = &mut self.actors[id.index()];
        debug_assert_eq!(actor.state, ActorState::Thinking);
        actor.state = ActorState::Hungry;
        actor.hungry_since = Some(now);
        actor.last_transition = now;
    }

    /// EATING → THINKING: put down both resources and count the meal.
    pub fn finish_eating(&mut self, id: ActorId, now: Tick) {
        debug_assert_eq!(self.actor(id).state, ActorState::Eating);
        self.release_all(id);
        let actor = &mut self.actors[id.index()];
        actor.state = ActorState::Thinking;
        actor.hungry_since = None;
        actor.completions += 1;
        actor.last_transition = now;
    }

    fn start_eating(&mut self, id: ActorId, now: Tick) {
        let actor = &mut self.actors[id.index()];
        let waited = actor.hungry_since.map_or(0, |since| now.since(since));
        actor.state = ActorState::Eating;
        actor.meals_started += 1;
        actor.total_wait_ticks += waited;
        actor.last_transition = now;
    }

    // ── Whole-table queries ───────────────────────────────────────────────

    pub fn state_counts(&self) -> StateCounts {
        let mut counts = StateCounts::default();
        for actor in &self.actors {
            counts.record(actor.state);
        }
        counts
    }

    /// `true` if every actor is HUNGRY holding exactly one resource: the
    /// hold-and-wait cycle.  With N actors and N resources every resource is
    /// then held, so no actor can make progress without releasing.
    pub fn all_hungry_holding_one(&self) -> bool {
        !self.actors.is_empty()
            && self
                .actors
                .iter()
                .all(|a| a.is_hungry() && self.held_count(a.id) == 1)
    }

    /// Verify the table's consistency rules.
    pub fn check_invariants(&self) -> InvariantResult<()> {
        for res in &self.resources {
            if let Some(holder) = res.holder() {
                let seated = holder.index() < self.actors.len() && {
                    let a = self.actor(holder);
                    a.left == res.id || a.right == res.id
                };
                if !seated {
                    return Err(InvariantViolation::ForeignHolder { resource: res.id, holder });
                }
            }
        }

        for actor in &self.actors {
            match actor.state {
                ActorState::Eating if !self.holds_both(actor.id) => {
                    return Err(InvariantViolation::EatingWithoutBoth { actor: actor.id });
                }
                ActorState::Thinking => {
                    for resource in [actor.left, actor.right] {
                        if self.resource(resource).is_held_by(actor.id) {
                            return Err(InvariantViolation::ThinkingWhileHolding {
                                actor: actor.id,
                                resource,
                            });
                        }
                    }
                }
                ActorState::Hungry if actor.hungry_since.is_none() => {
                    return Err(InvariantViolation::HungryWithoutStart { actor: actor.id });
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Mutable access for tests that need to stage a table state directly.
    #[cfg(test)]
    pub(crate) fn resources_mut(&mut self) -> &mut [ResourceUnit] {
        &mut self.resources
    }
}
