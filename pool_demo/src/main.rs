//! Pool demo application
//!
//! Spawns a wave of goblins and arrows through a world pool, recycles them
//! for a few rounds, then tears everything down.

use actor_pool::foundation::logging;
use actor_pool::prelude::*;
use rand::Rng;
use std::any::Any;
use std::path::Path;

const DEFAULT_SETTINGS_PATH: &str = "pool.toml";
const ROUNDS: usize = 5;

#[derive(Default)]
struct Goblin {
    lives: u32,
}

impl Actor for Goblin {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl PooledActor for Goblin {
    fn on_pushed_to_pool(&mut self) {}

    fn on_pulled_from_pool(&mut self, pool: &PoolScope) {
        self.lives += 1;
        log::trace!("Goblin starting life {} from {pool}", self.lives);
    }
}

#[derive(Default)]
struct Arrow {
    flights: u32,
}

impl Actor for Arrow {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl PooledActor for Arrow {
    fn on_pushed_to_pool(&mut self) {}

    fn on_pulled_from_pool(&mut self, _pool: &PoolScope) {
        self.flights += 1;
    }
}

struct DemoApp {
    world: ActorWorld,
    pool: ActorPool<ActorId>,
    quiver: ActorPoolComponent<ActorId>,
}

impl DemoApp {
    fn new(settings: PoolSettings) -> Result<Self, Box<dyn std::error::Error>> {
        let mut world = ActorWorld::new();
        world.register_pooled_class::<Goblin>("Goblin");
        world.register_pooled_class::<Arrow>("Arrow");

        let pool = ActorPool::for_world(WorldKind::Game, settings).ok_or("game worlds should pool actors")?;
        let quiver = ActorPoolComponent::new("Archer", "Arrow", PoolPolicy::new(8, true));

        Ok(Self { world, pool, quiver })
    }

    fn run(&mut self) -> Result<(), PoolError> {
        let registered = self.pool.begin_play(&mut self.world);
        log::info!("Registered {registered} configured classes");
        self.quiver.begin_play(&mut self.world)?;

        let goblin = ActorClass::new("Goblin");
        let mut rng = rand::thread_rng();

        for round in 1..=ROUNDS {
            let wave = rng.gen_range(2..=6);
            let mut goblins = Vec::with_capacity(wave);
            for _ in 0..wave {
                let id = self.pool.pull(&mut self.world, &goblin)?;
                let location = Vec3::new(rng.gen_range(-50.0..50.0), 0.0, rng.gen_range(-50.0..50.0));
                self.world.set_transform(id, ActorTransform::at(location));
                self.world.set_collision_enabled(id, true);
                goblins.push(id);
            }

            let volley = rng.gen_range(1..=12);
            let mut arrows = Vec::with_capacity(volley);
            for _ in 0..volley {
                arrows.push(self.quiver.pull(&mut self.world)?);
            }

            log::info!(
                "Round {round}: {wave} goblins, {volley} arrows, {} actors alive",
                self.world.len()
            );

            for id in goblins {
                self.pool.push(&mut self.world, id)?;
            }
            for id in arrows {
                self.quiver.push(&mut self.world, id)?;
            }
        }

        let stats = self.pool.stats();
        log::info!(
            "World pool: {} subpools, {} inactive, {} pulled, {} spawned",
            stats.subpools,
            stats.inactive,
            stats.total_pulled,
            stats.total_spawned
        );
        let stats = self.quiver.stats();
        log::info!(
            "Quiver: {} inactive, {} pulled, {} spawned",
            stats.inactive,
            stats.total_pulled,
            stats.total_spawned
        );
        Ok(())
    }

    fn shutdown(self) {
        let Self { mut world, pool, quiver } = self;
        let destroyed = pool.teardown(&mut world) + quiver.teardown(&mut world);
        log::info!("Destroyed {destroyed} actors, {} left in the world", world.len());
    }
}

fn load_settings(path: &Path) -> PoolSettings {
    match PoolSettings::load_from_file(path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Could not load pool settings: {e}; using defaults");
            PoolSettings::default().with_class("Goblin", PoolPolicy::new(4, true))
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(log::LevelFilter::Info);

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    log::info!("Starting pool demo with settings from {path}");

    let mut app = DemoApp::new(load_settings(Path::new(&path)))?;
    let result = app.run();
    app.shutdown();

    match result {
        Ok(()) => {
            log::info!("Pool demo finished successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Pool demo failed: {e}");
            Err(e.into())
        }
    }
}
