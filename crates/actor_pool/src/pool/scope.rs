//! Pool scopes and the world kinds that get a pool

use std::fmt;

/// Which pool an operation belongs to
///
/// Passed to the pulled hook so an actor knows where to push itself back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PoolScope {
    /// The single shared pool of a world
    World,
    /// A pool owned by one object, named after its owner
    Owner(String),
}

impl fmt::Display for PoolScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::World => write!(f, "world pool"),
            Self::Owner(owner) => write!(f, "pool owned by {owner}"),
        }
    }
}

/// Kind of world a pool may be created for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorldKind {
    /// No world
    None,
    /// Running game
    Game,
    /// Editor world
    Editor,
    /// Play-in-editor session
    Pie,
    /// Editor preview viewport
    EditorPreview,
    /// Game preview viewport
    GamePreview,
    /// Remote-procedure-call game world
    GameRpc,
    /// Loaded but inactive world
    Inactive,
}

impl WorldKind {
    /// Whether worlds of this kind get a world pool
    ///
    /// Only worlds that actually run gameplay pool actors.
    pub const fn supports_pooling(self) -> bool {
        matches!(self, Self::Game | Self::Pie | Self::GamePreview | Self::GameRpc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gameplay_worlds_support_pooling() {
        for kind in [WorldKind::Game, WorldKind::Pie, WorldKind::GamePreview, WorldKind::GameRpc] {
            assert!(kind.supports_pooling(), "{kind:?} should pool");
        }
        for kind in [WorldKind::None, WorldKind::Editor, WorldKind::EditorPreview, WorldKind::Inactive] {
            assert!(!kind.supports_pooling(), "{kind:?} should not pool");
        }
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(PoolScope::World.to_string(), "world pool");
        assert_eq!(PoolScope::Owner("Turret".into()).to_string(), "pool owned by Turret");
    }
}
