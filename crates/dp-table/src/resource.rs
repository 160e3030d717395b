//! `ResourceUnit` — a single exclusive-use token.

use dp_core::{ActorId, ResourceId};

/// One fork on the table.  Held by at most one actor at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceUnit {
    pub id: ResourceId,
    holder: Option<ActorId>,
}

impl ResourceUnit {
    /// A free resource.
    pub fn new(id: ResourceId) -> Self {
        Self { id, holder: None }
    }

    /// The actor currently holding this resource, if any.
    #[inline]
    pub fn holder(&self) -> Option<ActorId> {
        self.holder
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.holder.is_none()
    }

    #[inline]
    pub fn is_held_by(&self, actor: ActorId) -> bool {
        self.holder == Some(actor)
    }

    /// Take the resource for `actor`.
    ///
    /// Succeeds only if nobody holds it.  A failed attempt (including one by
    /// the current holder) leaves the resource untouched.
    pub fn try_acquire(&mut self, actor: ActorId) -> bool {
        if self.holder.is_some() {
            return false;
        }
        self.holder = Some(actor);
        true
    }

    /// Put the resource down if `actor` holds it; otherwise a no-op.
    ///
    /// Returns `true` if the holder was cleared.
    pub fn release(&mut self, actor: ActorId) -> bool {
        if self.holder != Some(actor) {
            return false;
        }
        self.holder = None;
        true
    }
}
