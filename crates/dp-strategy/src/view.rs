//! Read-only table state passed to every strategy call.

use dp_core::{ActorId, Tick};
use dp_table::{Actor, Table};

/// What one actor can see when deciding: itself, its two resources, and its
/// two ring neighbors.
///
/// Built by dp-sim immediately before each decision, so it reflects every
/// change already applied earlier in the same tick by lower-id actors.
pub struct ActorView<'a> {
    /// The deciding actor.
    pub actor: ActorId,

    /// The tick being processed.
    pub tick: Tick,

    /// The whole table, read-only.
    pub table: &'a Table,
}

impl<'a> ActorView<'a> {
    #[inline]
    pub fn new(actor: ActorId, tick: Tick, table: &'a Table) -> Self {
        Self { actor, tick, table }
    }

    /// The deciding actor's record.
    #[inline]
    pub fn me(&self) -> &'a Actor {
        self.table.actor(self.actor)
    }

    #[inline]
    pub fn holds_left(&self) -> bool {
        self.table.holds_left(self.actor)
    }

    #[inline]
    pub fn holds_right(&self) -> bool {
        self.table.holds_right(self.actor)
    }

    #[inline]
    pub fn left_free(&self) -> bool {
        self.table.resource(self.me().left).is_free()
    }

    #[inline]
    pub fn right_free(&self) -> bool {
        self.table.resource(self.me().right).is_free()
    }

    /// The neighbors contesting the left and right resource, in that order.
    /// Never includes the deciding actor itself (single-actor tables have no
    /// neighbors).
    pub fn neighbors(&self) -> impl Iterator<Item = &'a Actor> + '_ {
        let (me, table) = (self.actor, self.table);
        [table.left_neighbor(me), table.right_neighbor(me)]
            .into_iter()
            .filter(move |&n| n != me)
            .map(move |n| table.actor(n))
    }
}
