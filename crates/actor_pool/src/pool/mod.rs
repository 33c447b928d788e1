//! Actor pooling
//!
//! Recycles actors per class instead of spawning and destroying them:
//! - [`Subpool`] tracks the active and inactive actors of one class
//! - [`ActorPool`] maps classes to subpools and applies each class's policy
//! - [`ActorPoolComponent`] is the single-class pool owned by one object
//! - [`ActorHost`] is what the pool needs from the world it lives in

pub mod component;
pub mod error;
pub mod host;
pub mod registry;
pub mod scope;
pub mod subpool;

#[cfg(test)]
mod tests;

pub use component::ActorPoolComponent;
pub use error::PoolError;
pub use host::{ActorFactory, ActorHost, LifecycleNotifier};
pub use registry::{ActorPool, PoolStats};
pub use scope::{PoolScope, WorldKind};
pub use subpool::Subpool;
