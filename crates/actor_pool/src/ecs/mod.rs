//! Actors and the world that owns them
//!
//! [`ActorWorld`] is a ready-made host for the pool: it spawns actors from
//! registered classes, tracks their transforms and delivers the pool hooks.

pub mod component;
pub mod entity;
pub mod world;

pub use component::{Actor, PooledActor};
pub use entity::{ActorClass, ActorId};
pub use world::ActorWorld;
