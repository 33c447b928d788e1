//! # Actor Pool
//!
//! Recycles expensive game actors per class instead of spawning and
//! destroying them over and over.
//!
//! ## Features
//!
//! - **Per-class subpools**: active and inactive actors tracked per class
//! - **Policies**: pre-warm counts and expand-or-fail behavior per class
//! - **Two scopes**: one shared pool per world, or a single-class pool owned by an object
//! - **Settings files**: classes to pre-register, loaded from TOML or RON
//! - **Host agnostic**: any world implementing [`pool::ActorHost`] can be pooled into;
//!   [`ecs::ActorWorld`] is a ready-made one
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use actor_pool::prelude::*;
//!
//! fn run(world: &mut ActorWorld) -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = PoolSettings::load_from_file("pool.toml")?;
//!     let mut pool = ActorPool::for_world(WorldKind::Game, settings).ok_or("no pool for this world")?;
//!     pool.begin_play(world);
//!
//!     let goblin = pool.pull(world, &ActorClass::new("Goblin"))?;
//!     pool.push(world, goblin)?;
//!
//!     pool.teardown(world);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod ecs;
pub mod foundation;
pub mod pool;
pub mod settings;

/// Common imports for pool users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, ConfigFormat},
        ecs::{Actor, ActorClass, ActorId, ActorWorld, PooledActor},
        foundation::math::{ActorTransform, Vec3},
        pool::{
            ActorFactory, ActorHost, ActorPool, ActorPoolComponent, LifecycleNotifier, PoolError,
            PoolScope, PoolStats, Subpool, WorldKind,
        },
        settings::{PoolPolicy, PoolSettings},
    };
}
