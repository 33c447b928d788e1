//! Owner-scoped pool for a single actor class
//!
//! Same push/pull rules as the world pool, but bound to one class and owned
//! by one object (a turret owning its projectiles, a spawner owning its
//! enemies).

use super::{ActorHost, ActorPool, PoolError, PoolScope, PoolStats, Subpool};
use crate::ecs::ActorClass;
use crate::settings::{PoolPolicy, PoolSettings};
use std::fmt::Debug;
use std::hash::Hash;

/// Pool component holding actors of exactly one class
#[derive(Debug)]
pub struct ActorPoolComponent<H> {
    class: ActorClass,
    policy: PoolPolicy,
    pool: ActorPool<H>,
}

impl<H: Copy + Eq + Hash + Debug> ActorPoolComponent<H> {
    /// Create a component for `class` owned by `owner`
    ///
    /// Nothing is spawned until [`ActorPoolComponent::begin_play`].
    pub fn new(owner: impl Into<String>, class: impl Into<ActorClass>, policy: PoolPolicy) -> Self {
        Self {
            class: class.into(),
            policy,
            pool: ActorPool::new(PoolScope::Owner(owner.into()), PoolSettings::default()),
        }
    }

    /// Set whether teardown destroys the pooled actors (defaults to true)
    pub fn with_destroy_on_end_play(mut self, destroy: bool) -> Self {
        self.pool.settings_mut().destroy_on_end_play = destroy;
        self
    }

    /// Register the class and spawn the initial actors
    ///
    /// # Errors
    ///
    /// Same as [`ActorPool::add_type`].
    pub fn begin_play<W>(&mut self, host: &mut W) -> Result<(), PoolError>
    where
        W: ActorHost<Handle = H>,
    {
        self.pool.add_type(host, self.class.clone(), self.policy)
    }

    /// Return an actor of this component's class to the pool
    ///
    /// Never spawns anything. Before [`ActorPoolComponent::begin_play`] the
    /// class is registered with this component's policy but no pre-warm.
    ///
    /// # Errors
    ///
    /// * [`PoolError::InvalidHandle`] - the actor is not alive
    /// * [`PoolError::IneligibleType`] - the class lacks the pooled actor hooks
    /// * [`PoolError::WrongClass`] - the actor belongs to another class
    pub fn push<W>(&mut self, host: &mut W, handle: H) -> Result<(), PoolError>
    where
        W: ActorHost<Handle = H>,
    {
        let found = host.class_of(handle).ok_or(PoolError::InvalidHandle)?;
        if !host.supports(&found) {
            return Err(PoolError::IneligibleType(found));
        }
        if found != self.class {
            return Err(PoolError::WrongClass {
                expected: self.class.clone(),
                found,
            });
        }
        if !self.pool.is_registered(&self.class) {
            log::warn!("Pushed \"{found}\" before begin_play; registering it without pre-warming");
            let policy = PoolPolicy {
                initial_spawn_count: 0,
                ..self.policy
            };
            self.pool.add_type(host, found, policy)?;
        }
        self.pool.push(host, handle)
    }

    /// Get an actor, reusing an inactive one or spawning if allowed
    ///
    /// # Errors
    ///
    /// Same as [`ActorPool::pull`].
    pub fn pull<W>(&mut self, host: &mut W) -> Result<H, PoolError>
    where
        W: ActorHost<Handle = H>,
    {
        if !self.pool.is_registered(&self.class) {
            self.begin_play(host).map_err(|err| PoolError::RegistrationFailed {
                class: self.class.clone(),
                source: Box::new(err),
            })?;
        }
        self.pool.pull(host, &self.class)
    }

    /// Destroy the pooled actors if configured to; returns how many were destroyed
    pub fn teardown<W>(self, host: &mut W) -> usize
    where
        W: ActorHost<Handle = H>,
    {
        self.pool.teardown(host)
    }

    /// Class this component pools
    pub fn class(&self) -> &ActorClass {
        &self.class
    }

    /// Policy this component was created with
    pub fn policy(&self) -> PoolPolicy {
        self.policy
    }

    /// Membership of the pooled class, once registered
    pub fn subpool(&self) -> Option<&Subpool<H>> {
        self.pool.subpool(&self.class)
    }

    /// Current statistics
    pub fn stats(&self) -> PoolStats {
        self.pool.stats()
    }
}
