//! Collaborator contracts the pool relies on
//!
//! The pool never spawns, frees or talks to actors itself. A host (usually
//! the game world) supplies construction, destruction, liveness and the two
//! lifecycle hooks. Hosts must not call back into the pool from inside any of
//! these methods.

use super::PoolScope;
use crate::ecs::ActorClass;
use std::fmt::Debug;
use std::hash::Hash;

/// Constructs, destroys and classifies actors
pub trait ActorFactory {
    /// Handle the host uses to refer to one actor
    type Handle: Copy + Eq + Hash + Debug;

    /// Capability check: whether actors of `class` implement the pooled
    /// actor hooks and may therefore be pooled
    fn supports(&self, class: &ActorClass) -> bool;

    /// Class of a live actor, or `None` if the handle is dead
    fn class_of(&self, handle: Self::Handle) -> Option<ActorClass>;

    /// Whether the handle still refers to a live actor
    fn is_alive(&self, handle: Self::Handle) -> bool {
        self.class_of(handle).is_some()
    }

    /// Spawn a new inert actor (origin transform, collision off)
    ///
    /// Returns `None` when the host cannot construct the class.
    fn construct(&mut self, class: &ActorClass) -> Option<Self::Handle>;

    /// Permanently remove an actor; no-op for dead handles
    fn destroy(&mut self, handle: Self::Handle);
}

/// Delivers the pooled actor lifecycle hooks
pub trait LifecycleNotifier<H> {
    /// The actor was moved into the inactive set
    fn on_pushed(&mut self, handle: H);

    /// The actor was handed out by the pool identified by `scope`
    fn on_pulled(&mut self, handle: H, scope: &PoolScope);
}

/// Everything a pool needs from its host
pub trait ActorHost: ActorFactory + LifecycleNotifier<<Self as ActorFactory>::Handle> {}

impl<T> ActorHost for T where T: ActorFactory + LifecycleNotifier<<T as ActorFactory>::Handle> {}
