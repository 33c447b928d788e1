//! Actor world implementation

use super::{Actor, ActorClass, ActorId, PooledActor};
use crate::foundation::math::ActorTransform;
use crate::pool::{ActorFactory, LifecycleNotifier, PoolScope};
use slotmap::SlotMap;
use std::any::Any;
use std::collections::HashMap;

enum Behavior {
    Plain(Box<dyn Actor>),
    Pooled(Box<dyn PooledActor>),
}

impl Behavior {
    fn as_any(&self) -> &dyn Any {
        match self {
            Self::Plain(actor) => actor.as_any(),
            Self::Pooled(actor) => actor.as_any(),
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        match self {
            Self::Plain(actor) => actor.as_any_mut(),
            Self::Pooled(actor) => actor.as_any_mut(),
        }
    }

    fn pooled_mut(&mut self) -> Option<&mut dyn PooledActor> {
        match self {
            Self::Plain(_) => None,
            Self::Pooled(actor) => Some(actor.as_mut()),
        }
    }
}

struct ActorRecord {
    class: ActorClass,
    transform: ActorTransform,
    collision_enabled: bool,
    behavior: Behavior,
}

struct ClassEntry {
    spawn: Box<dyn Fn() -> Behavior>,
    pooled: bool,
}

/// World containing all live actors
///
/// Actor classes must be registered before they can be spawned. Classes
/// registered through [`ActorWorld::register_pooled_class`] are the only ones
/// a pool accepts.
pub struct ActorWorld {
    actors: SlotMap<ActorId, ActorRecord>,
    classes: HashMap<ActorClass, ClassEntry>,
    actor_limit: Option<usize>,
}

impl ActorWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            actors: SlotMap::with_key(),
            classes: HashMap::new(),
            actor_limit: None,
        }
    }

    /// Register a class whose actors cannot be pooled
    pub fn register_class<A: Actor + Default>(&mut self, class: impl Into<ActorClass>) {
        self.insert_class(class.into(), ClassEntry {
            spawn: Box::new(|| Behavior::Plain(Box::new(A::default()))),
            pooled: false,
        });
    }

    /// Register a class whose actors implement the pool hooks
    pub fn register_pooled_class<A: PooledActor + Default>(&mut self, class: impl Into<ActorClass>) {
        self.insert_class(class.into(), ClassEntry {
            spawn: Box::new(|| Behavior::Pooled(Box::new(A::default()))),
            pooled: true,
        });
    }

    /// Whether a class has been registered
    pub fn is_registered(&self, class: &ActorClass) -> bool {
        self.classes.contains_key(class)
    }

    /// Whether a registered class can be pooled
    pub fn is_pooled_class(&self, class: &ActorClass) -> bool {
        self.classes.get(class).is_some_and(|entry| entry.pooled)
    }

    /// Cap the number of live actors; spawns fail once the cap is reached
    pub fn set_actor_limit(&mut self, limit: Option<usize>) {
        self.actor_limit = limit;
    }

    /// Spawn an actor at `transform` with collision enabled
    ///
    /// Returns `None` if the class is unknown or the actor limit is reached.
    pub fn spawn(&mut self, class: &ActorClass, transform: ActorTransform) -> Option<ActorId> {
        self.spawn_with(class, transform, true)
    }

    /// Spawn an inert actor: at the origin with collision disabled
    pub fn spawn_inert(&mut self, class: &ActorClass) -> Option<ActorId> {
        self.spawn_with(class, ActorTransform::origin(), false)
    }

    /// Destroy an actor, returning `false` if it was already gone
    pub fn destroy(&mut self, id: ActorId) -> bool {
        match self.actors.remove(id) {
            Some(record) => {
                log::trace!("Destroyed {:?} ({})", id, record.class);
                true
            }
            None => false,
        }
    }

    /// Whether the actor is still alive
    pub fn is_alive(&self, id: ActorId) -> bool {
        self.actors.contains_key(id)
    }

    /// Class of a live actor
    pub fn class_of(&self, id: ActorId) -> Option<&ActorClass> {
        self.actors.get(id).map(|record| &record.class)
    }

    /// Read an actor's behavior as its concrete type
    pub fn actor<A: Actor>(&self, id: ActorId) -> Option<&A> {
        self.actors.get(id)?.behavior.as_any().downcast_ref()
    }

    /// Mutate an actor's behavior as its concrete type
    pub fn actor_mut<A: Actor>(&mut self, id: ActorId) -> Option<&mut A> {
        self.actors.get_mut(id)?.behavior.as_any_mut().downcast_mut()
    }

    /// Transform of a live actor
    pub fn transform(&self, id: ActorId) -> Option<ActorTransform> {
        self.actors.get(id).map(|record| record.transform)
    }

    /// Move a live actor, returning `false` if it is gone
    pub fn set_transform(&mut self, id: ActorId, transform: ActorTransform) -> bool {
        self.actors
            .get_mut(id)
            .map(|record| record.transform = transform)
            .is_some()
    }

    /// Whether a live actor collides
    pub fn collision_enabled(&self, id: ActorId) -> Option<bool> {
        self.actors.get(id).map(|record| record.collision_enabled)
    }

    /// Turn collision on or off, returning `false` if the actor is gone
    pub fn set_collision_enabled(&mut self, id: ActorId, enabled: bool) -> bool {
        self.actors
            .get_mut(id)
            .map(|record| record.collision_enabled = enabled)
            .is_some()
    }

    /// Number of live actors
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Whether the world has no live actors
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Iterate over all live actor IDs
    pub fn actors(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.actors.keys()
    }

    fn insert_class(&mut self, class: ActorClass, entry: ClassEntry) {
        log::debug!("Registered actor class \"{}\" (poolable: {})", class, entry.pooled);
        self.classes.insert(class, entry);
    }

    fn spawn_with(&mut self, class: &ActorClass, transform: ActorTransform, collision_enabled: bool) -> Option<ActorId> {
        let Some(entry) = self.classes.get(class) else {
            log::error!("Cannot spawn unregistered actor class \"{class}\"");
            return None;
        };
        if self.actor_limit.is_some_and(|limit| self.actors.len() >= limit) {
            log::error!("Cannot spawn \"{class}\": actor limit reached");
            return None;
        }

        let record = ActorRecord {
            class: class.clone(),
            transform,
            collision_enabled,
            behavior: (entry.spawn)(),
        };
        Some(self.actors.insert(record))
    }
}

impl Default for ActorWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorFactory for ActorWorld {
    type Handle = ActorId;

    fn supports(&self, class: &ActorClass) -> bool {
        self.is_pooled_class(class)
    }

    fn class_of(&self, handle: ActorId) -> Option<ActorClass> {
        ActorWorld::class_of(self, handle).cloned()
    }

    fn is_alive(&self, handle: ActorId) -> bool {
        ActorWorld::is_alive(self, handle)
    }

    fn construct(&mut self, class: &ActorClass) -> Option<ActorId> {
        self.spawn_inert(class)
    }

    fn destroy(&mut self, handle: ActorId) {
        ActorWorld::destroy(self, handle);
    }
}

impl LifecycleNotifier<ActorId> for ActorWorld {
    fn on_pushed(&mut self, handle: ActorId) {
        let Some(record) = self.actors.get_mut(handle) else {
            return;
        };
        record.transform = ActorTransform::origin();
        record.collision_enabled = false;
        if let Some(actor) = record.behavior.pooled_mut() {
            actor.on_pushed_to_pool();
        }
    }

    fn on_pulled(&mut self, handle: ActorId, scope: &PoolScope) {
        if let Some(actor) = self
            .actors
            .get_mut(handle)
            .and_then(|record| record.behavior.pooled_mut())
        {
            actor.on_pulled_from_pool(scope);
        }
    }
}
