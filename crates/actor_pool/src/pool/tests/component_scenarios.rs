//! Scenarios for the owner-scoped, single-class pool

use super::mock_host::{Hook, RecordingHost};
use crate::ecs::ActorClass;
use crate::pool::{ActorPoolComponent, PoolError, PoolScope};
use crate::settings::PoolPolicy;

#[cfg(test)]
mod tests {
    use super::*;

    fn turret_pool(policy: PoolPolicy) -> ActorPoolComponent<u32> {
        ActorPoolComponent::new("Turret", "Projectile", policy)
    }

    #[test]
    fn test_begin_play_prewarms_owned_class() {
        let mut host = RecordingHost::new(&["Projectile"]);
        let mut component = turret_pool(PoolPolicy::fixed(4));

        component.begin_play(&mut host).unwrap();

        let subpool = component.subpool().unwrap();
        assert_eq!(subpool.inactive_len(), 4);
        assert_eq!(component.class(), &ActorClass::new("Projectile"));
        assert_eq!(component.begin_play(&mut host), Err(PoolError::AlreadyRegistered(ActorClass::new("Projectile"))));
    }

    #[test]
    fn test_pull_reports_owner_scope() {
        let mut host = RecordingHost::new(&["Projectile"]);
        let mut component = turret_pool(PoolPolicy::fixed(1));
        component.begin_play(&mut host).unwrap();

        let handle = component.pull(&mut host).unwrap();

        assert_eq!(host.hooks.last(), Some(&Hook::Pulled(handle, PoolScope::Owner("Turret".into()))));
        assert_eq!(
            component.pull(&mut host),
            Err(PoolError::PoolExhausted(ActorClass::new("Projectile")))
        );
    }

    #[test]
    fn test_pull_before_begin_play_registers_with_own_policy() {
        let mut host = RecordingHost::new(&["Projectile"]);
        let mut component = turret_pool(PoolPolicy::fixed(2));

        let handle = component.pull(&mut host).unwrap();

        let subpool = component.subpool().unwrap();
        assert!(subpool.is_active(&handle));
        assert_eq!(subpool.inactive_len(), 1);
        assert_eq!(host.constructed.len(), 2);
    }

    #[test]
    fn test_push_rejects_other_classes() {
        let mut host = RecordingHost::new(&["Projectile", "Goblin"]);
        let mut component = turret_pool(PoolPolicy::default());
        component.begin_play(&mut host).unwrap();
        let goblin = host.spawn_external("Goblin");

        assert_eq!(
            component.push(&mut host, goblin),
            Err(PoolError::WrongClass {
                expected: ActorClass::new("Projectile"),
                found: ActorClass::new("Goblin"),
            })
        );
        assert!(component.subpool().unwrap().is_empty());
        assert_eq!(component.push(&mut host, 404), Err(PoolError::InvalidHandle));
    }

    #[test]
    fn test_round_trip_and_teardown() {
        let mut host = RecordingHost::new(&["Projectile"]);
        let mut component = turret_pool(PoolPolicy::default());
        component.begin_play(&mut host).unwrap();

        let first = component.pull(&mut host).unwrap();
        let second = component.pull(&mut host).unwrap();
        component.push(&mut host, first).unwrap();
        assert_eq!(component.pull(&mut host), Ok(first));
        component.push(&mut host, second).unwrap();

        let stats = component.stats();
        assert_eq!((stats.active, stats.inactive, stats.total_spawned), (1, 1, 2));

        assert_eq!(component.teardown(&mut host), 2);
        assert_eq!(host.destroyed.len(), 2);
    }

    #[test]
    fn test_teardown_can_leave_actors_alive() {
        let mut host = RecordingHost::new(&["Projectile"]);
        let mut component = turret_pool(PoolPolicy::fixed(3)).with_destroy_on_end_play(false);
        component.begin_play(&mut host).unwrap();

        assert_eq!(component.teardown(&mut host), 0);
        assert!(host.destroyed.is_empty());
    }

    #[test]
    fn test_push_before_begin_play_spawns_nothing() {
        let mut host = RecordingHost::new(&["Projectile"]);
        let mut component = turret_pool(PoolPolicy::fixed(5));
        let stray = host.spawn_external("Projectile");

        component.push(&mut host, stray).unwrap();

        assert!(host.constructed.is_empty());
        let subpool = component.subpool().unwrap();
        assert_eq!((subpool.active_len(), subpool.inactive_len()), (0, 1));
        assert!(subpool.is_inactive(&stray));
        assert_eq!(component.pull(&mut host), Ok(stray));
        assert_eq!(
            component.pull(&mut host),
            Err(PoolError::PoolExhausted(ActorClass::new("Projectile")))
        );
    }

    #[test]
    fn test_push_reports_ineligible_before_wrong_class() {
        let mut host = RecordingHost::new(&["Projectile"]);
        let mut component = turret_pool(PoolPolicy::default());
        let tree = host.spawn_external("Tree");

        assert_eq!(
            component.push(&mut host, tree),
            Err(PoolError::IneligibleType(ActorClass::new("Tree")))
        );
        assert!(component.subpool().is_none());
    }
}
