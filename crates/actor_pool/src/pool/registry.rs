//! Actor pool registry
//!
//! Keeps one [`Subpool`] and one [`PoolPolicy`] per actor class and moves
//! actors between the active and inactive sets. Construction, destruction
//! and lifecycle hooks are delegated to the host passed into every call.

use super::{ActorHost, PoolError, PoolScope, Subpool, WorldKind};
use crate::ecs::ActorClass;
use crate::settings::{PoolPolicy, PoolSettings};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Counters for monitoring a pool
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Number of registered classes
    pub subpools: usize,
    /// Actors currently handed out
    pub active: usize,
    /// Actors waiting to be pulled
    pub inactive: usize,
    /// Successful pulls since creation
    pub total_pulled: u64,
    /// Successful pushes since creation
    pub total_pushed: u64,
    /// Actors spawned by the pool since creation
    pub total_spawned: u64,
}

/// Registry of per-class actor subpools
///
/// # Usage
///
/// ```rust
/// use actor_pool::prelude::*;
///
/// let mut world = ActorWorld::new();
/// world.register_pooled_class::<Dummy>("Goblin");
///
/// let mut pool = ActorPool::new(PoolScope::World, PoolSettings::default());
/// pool.add_type(&mut world, ActorClass::new("Goblin"), PoolPolicy::fixed(2))?;
///
/// let goblin = pool.pull(&mut world, &ActorClass::new("Goblin"))?;
/// pool.push(&mut world, goblin)?;
/// pool.teardown(&mut world);
///
/// #[derive(Default)]
/// struct Dummy;
/// impl Actor for Dummy {
///     fn as_any(&self) -> &dyn std::any::Any { self }
///     fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
/// }
/// impl PooledActor for Dummy {
///     fn on_pushed_to_pool(&mut self) {}
///     fn on_pulled_from_pool(&mut self, _pool: &PoolScope) {}
/// }
/// # Ok::<(), PoolError>(())
/// ```
#[derive(Debug)]
pub struct ActorPool<H> {
    scope: PoolScope,
    settings: PoolSettings,
    subpools: HashMap<ActorClass, Subpool<H>>,
    policies: HashMap<ActorClass, PoolPolicy>,
    stats: PoolStats,
}

impl<H: Copy + Eq + Hash + Debug> ActorPool<H> {
    /// Create an empty pool
    ///
    /// Configured classes are not registered until [`ActorPool::begin_play`].
    pub fn new(scope: PoolScope, settings: PoolSettings) -> Self {
        log::info!(
            "Creating {} with {} configured actor classes",
            scope,
            settings.initial_actors_to_pool.len()
        );
        Self {
            scope,
            settings,
            subpools: HashMap::new(),
            policies: HashMap::new(),
            stats: PoolStats::default(),
        }
    }

    /// Create the world pool for a world, if that kind of world pools actors
    pub fn for_world(kind: WorldKind, settings: PoolSettings) -> Option<Self> {
        if !kind.supports_pooling() {
            log::debug!("{kind:?} worlds do not get an actor pool");
            return None;
        }
        Some(Self::new(PoolScope::World, settings))
    }

    /// Register and pre-warm every class listed in the settings
    ///
    /// Classes that fail to register are logged and skipped. Returns how many
    /// classes were registered.
    pub fn begin_play<W>(&mut self, host: &mut W) -> usize
    where
        W: ActorHost<Handle = H>,
    {
        let configured: Vec<_> = self
            .settings
            .initial_actors_to_pool
            .iter()
            .map(|(class, policy)| (class.clone(), *policy))
            .collect();

        let mut registered = 0;
        for (class, policy) in configured {
            match self.add_type(host, class.clone(), policy) {
                Ok(()) => registered += 1,
                Err(err) => {
                    log::error!("Failed to spawn initial count of actor class \"{class}\": {err}");
                }
            }
        }
        registered
    }

    /// Register a class with its policy and pre-warm it
    ///
    /// Spawns `policy.initial_spawn_count` actors straight into the inactive
    /// set. Individual spawn failures are logged and skipped, so the subpool
    /// may start smaller than requested.
    ///
    /// # Errors
    ///
    /// * [`PoolError::IneligibleType`] - the class lacks the pooled actor hooks
    /// * [`PoolError::AlreadyRegistered`] - the class already has a subpool
    pub fn add_type<W>(&mut self, host: &mut W, class: ActorClass, policy: PoolPolicy) -> Result<(), PoolError>
    where
        W: ActorHost<Handle = H>,
    {
        if !host.supports(&class) {
            log::error!("The actor class \"{class}\" does not implement the pooled actor interface");
            return Err(PoolError::IneligibleType(class));
        }
        if self.subpools.contains_key(&class) {
            return Err(PoolError::AlreadyRegistered(class));
        }

        let mut subpool = Subpool::new();
        for _ in 0..policy.initial_spawn_count {
            let Some(handle) = host.construct(&class) else {
                log::error!("add_type failed to spawn a new \"{class}\"");
                continue;
            };
            self.stats.total_spawned += 1;
            subpool.move_to_inactive(handle);
            host.on_pushed(handle);
        }

        log::info!(
            "Added subpool for \"{}\" to {} ({} of {} pre-warmed, expand: {})",
            class,
            self.scope,
            subpool.inactive_len(),
            policy.initial_spawn_count,
            policy.can_expand
        );
        self.subpools.insert(class.clone(), subpool);
        self.policies.insert(class, policy);
        Ok(())
    }

    /// Return a live actor to the pool
    ///
    /// Moves it from the active to the inactive set of its class and fires the
    /// pushed hook. Pushing an actor that is already inactive leaves the sets
    /// unchanged but still fires the hook. An actor of an unregistered class
    /// registers that class with [`PoolPolicy::fallback`].
    ///
    /// # Errors
    ///
    /// * [`PoolError::InvalidHandle`] - the actor is not alive
    /// * [`PoolError::IneligibleType`] - the class lacks the pooled actor hooks
    pub fn push<W>(&mut self, host: &mut W, handle: H) -> Result<(), PoolError>
    where
        W: ActorHost<Handle = H>,
    {
        let class = host.class_of(handle).ok_or(PoolError::InvalidHandle)?;
        if !host.supports(&class) {
            return Err(PoolError::IneligibleType(class));
        }

        if !self.subpools.contains_key(&class) {
            log::warn!("Pushed actor of class \"{class}\" was not registered; adding it with the fallback policy");
            self.add_type(host, class.clone(), PoolPolicy::fallback())?;
        }

        self.subpool_mut(&class).move_to_inactive(handle);
        host.on_pushed(handle);
        self.stats.total_pushed += 1;

        log::debug!("Pushed {handle:?} ({class}) into {}", self.scope);
        Ok(())
    }

    /// Get an actor of `class`, reusing an inactive one when possible
    ///
    /// Inactive actors are handed out oldest first; handles destroyed behind
    /// the pool's back are discarded along the way. When nothing inactive is
    /// left and the policy allows it, the host spawns a new actor that goes
    /// straight into the active set. The pulled hook fires on success.
    ///
    /// # Errors
    ///
    /// * [`PoolError::RegistrationFailed`] - the class was unknown and could not be registered
    /// * [`PoolError::PoolExhausted`] - nothing inactive and expansion is disabled
    /// * [`PoolError::ConstructionFailed`] - the host could not spawn a new actor
    pub fn pull<W>(&mut self, host: &mut W, class: &ActorClass) -> Result<H, PoolError>
    where
        W: ActorHost<Handle = H>,
    {
        if !self.subpools.contains_key(class) {
            log::warn!("Pulled actor class \"{class}\" was not registered; adding it with the fallback policy");
            self.add_type(host, class.clone(), PoolPolicy::fallback())
                .map_err(|err| PoolError::RegistrationFailed {
                    class: class.clone(),
                    source: Box::new(err),
                })?;
        }

        let reused = self.take_live_inactive(host, class);
        let handle = match reused {
            Some(handle) => handle,
            None => self.expand(host, class)?,
        };

        self.subpool_mut(class).move_to_active(handle);
        host.on_pulled(handle, &self.scope);
        self.stats.total_pulled += 1;

        log::debug!(
            "Pulled {handle:?} ({class}) from {}{}",
            self.scope,
            if reused.is_some() { "" } else { " after expanding" }
        );
        Ok(handle)
    }

    /// Tear the pool down at the end of play
    ///
    /// When the settings ask for it, every live member of every subpool is
    /// destroyed through the host; dead handles are skipped. Returns how many
    /// actors were destroyed.
    pub fn teardown<W>(self, host: &mut W) -> usize
    where
        W: ActorHost<Handle = H>,
    {
        if !self.settings.destroy_on_end_play {
            log::info!("Tearing down {} without destroying pooled actors", self.scope);
            return 0;
        }

        let mut destroyed = 0;
        for subpool in self.subpools.values() {
            for handle in subpool.members() {
                if host.is_alive(handle) {
                    host.destroy(handle);
                    destroyed += 1;
                }
            }
        }

        log::info!("Tore down {} and destroyed {destroyed} pooled actors", self.scope);
        destroyed
    }

    /// Scope this pool reports to the pulled hook
    pub fn scope(&self) -> &PoolScope {
        &self.scope
    }

    /// Settings the pool was created with
    pub fn settings(&self) -> &PoolSettings {
        &self.settings
    }

    pub(crate) fn settings_mut(&mut self) -> &mut PoolSettings {
        &mut self.settings
    }

    /// Subpool for a class, if registered
    pub fn subpool(&self, class: &ActorClass) -> Option<&Subpool<H>> {
        self.subpools.get(class)
    }

    /// Policy for a class, if registered
    pub fn policy(&self, class: &ActorClass) -> Option<PoolPolicy> {
        self.policies.get(class).copied()
    }

    /// Whether a class has a subpool
    pub fn is_registered(&self, class: &ActorClass) -> bool {
        self.subpools.contains_key(class)
    }

    /// Registered classes, in no particular order
    pub fn classes(&self) -> impl Iterator<Item = &ActorClass> {
        self.subpools.keys()
    }

    /// Current pool statistics
    pub fn stats(&self) -> PoolStats {
        let (active, inactive) = self
            .subpools
            .values()
            .fold((0, 0), |(a, i), s| (a + s.active_len(), i + s.inactive_len()));
        PoolStats {
            subpools: self.subpools.len(),
            active,
            inactive,
            ..self.stats.clone()
        }
    }

    fn take_live_inactive<W>(&mut self, host: &W, class: &ActorClass) -> Option<H>
    where
        W: ActorHost<Handle = H>,
    {
        let subpool = self.subpools.get_mut(class)?;
        while let Some(handle) = subpool.take_one_inactive() {
            if host.is_alive(handle) {
                return Some(handle);
            }
            log::warn!("Discarding {handle:?} from the \"{class}\" subpool: actor no longer exists");
        }
        None
    }

    fn expand<W>(&mut self, host: &mut W, class: &ActorClass) -> Result<H, PoolError>
    where
        W: ActorHost<Handle = H>,
    {
        let can_expand = self.policies.get(class).is_some_and(|policy| policy.can_expand);
        if !can_expand {
            return Err(PoolError::PoolExhausted(class.clone()));
        }

        let handle = host.construct(class).ok_or_else(|| {
            log::error!("Failed to spawn actor of class \"{class}\"");
            PoolError::ConstructionFailed(class.clone())
        })?;
        self.stats.total_spawned += 1;
        Ok(handle)
    }

    fn subpool_mut(&mut self, class: &ActorClass) -> &mut Subpool<H> {
        self.subpools
            .get_mut(class)
            .unwrap_or_else(|| unreachable!("subpool for \"{class}\" was registered above"))
    }
}
