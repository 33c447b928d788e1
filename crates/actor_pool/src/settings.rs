//! Pool settings read at world start
//!
//! ```toml
//! destroy_on_end_play = true
//!
//! [initial_actors_to_pool.Goblin]
//! initial_spawn_count = 3
//! can_expand = false
//! ```

use crate::config::{Config, ConfigError, ConfigFormat};
use crate::ecs::ActorClass;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-class pooling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolPolicy {
    /// Actors spawned into the inactive set when the class is registered
    pub initial_spawn_count: u32,
    /// Whether a pull may spawn a new actor when none is inactive
    pub can_expand: bool,
}

impl PoolPolicy {
    /// Policy with the given pre-warm count and expansion rule
    pub const fn new(initial_spawn_count: u32, can_expand: bool) -> Self {
        Self {
            initial_spawn_count,
            can_expand,
        }
    }

    /// Fixed-size pool: pre-warm `count` actors and never grow
    pub const fn fixed(count: u32) -> Self {
        Self::new(count, false)
    }

    /// Policy given to classes registered implicitly by a push or pull
    pub const fn fallback() -> Self {
        Self::new(0, true)
    }
}

impl Default for PoolPolicy {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Settings for a world pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolSettings {
    /// Destroy every pooled actor, active or not, when the pool is torn down
    pub destroy_on_end_play: bool,
    /// Classes registered and pre-warmed when the world begins play
    pub initial_actors_to_pool: BTreeMap<ActorClass, PoolPolicy>,
}

impl PoolSettings {
    /// Add a class to pre-register (builder pattern)
    pub fn with_class(mut self, class: impl Into<ActorClass>, policy: PoolPolicy) -> Self {
        self.initial_actors_to_pool.insert(class.into(), policy);
        self
    }

    /// Set whether teardown destroys pooled actors
    pub fn with_destroy_on_end_play(mut self, destroy: bool) -> Self {
        self.destroy_on_end_play = destroy;
        self
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents, ConfigFormat::Toml)
    }
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            destroy_on_end_play: true,
            initial_actors_to_pool: BTreeMap::new(),
        }
    }
}

impl Config for PoolSettings {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PoolSettings::default();
        assert!(settings.destroy_on_end_play);
        assert!(settings.initial_actors_to_pool.is_empty());
        assert_eq!(PoolPolicy::default(), PoolPolicy::new(0, true));
    }

    #[test]
    fn test_parse_toml() {
        let settings = PoolSettings::from_toml_str(
            r#"
            destroy_on_end_play = false

            [initial_actors_to_pool.Goblin]
            initial_spawn_count = 3
            can_expand = false

            [initial_actors_to_pool.Arrow]
            initial_spawn_count = 20
            "#,
        )
        .unwrap();

        assert!(!settings.destroy_on_end_play);
        assert_eq!(
            settings.initial_actors_to_pool[&ActorClass::new("Goblin")],
            PoolPolicy::fixed(3)
        );
        // Missing fields fall back to the default policy
        assert_eq!(
            settings.initial_actors_to_pool[&ActorClass::new("Arrow")],
            PoolPolicy::new(20, true)
        );
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings = PoolSettings::from_toml_str("").unwrap();
        assert_eq!(settings, PoolSettings::default());
    }

    #[test]
    fn test_ron_round_trip() {
        let settings = PoolSettings::default()
            .with_destroy_on_end_play(false)
            .with_class("Goblin", PoolPolicy::fixed(2));

        let text = settings.render(ConfigFormat::Ron).unwrap();
        let parsed = PoolSettings::parse(&text, ConfigFormat::Ron).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = PoolSettings::from_toml_str("destroy_on_end_play = \"sometimes\"");
        assert!(matches!(result, Err(ConfigError::Parse { format: ConfigFormat::Toml, .. })));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("actor_pool_settings_{}.toml", std::process::id()));
        let settings = PoolSettings::default().with_class("Orc", PoolPolicy::new(1, true));

        settings.save_to_file(&path).unwrap();
        let loaded = PoolSettings::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }
}
