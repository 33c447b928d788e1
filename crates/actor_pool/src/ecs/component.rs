//! Actor behavior traits

use crate::pool::PoolScope;
use std::any::Any;

/// Behavior attached to an actor in an [`ActorWorld`](super::ActorWorld)
pub trait Actor: 'static {
    /// Downcast support for reading concrete actor state
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast support
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Actor that can live in a pool
///
/// Only classes whose actors implement this trait pass the pool's
/// capability check.
pub trait PooledActor: Actor {
    /// Called after the actor was moved into its pool's inactive set
    fn on_pushed_to_pool(&mut self);

    /// Called after the actor was handed out by the pool identified by `pool`
    fn on_pulled_from_pool(&mut self, pool: &PoolScope);
}
