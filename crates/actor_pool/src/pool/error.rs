//! Pool operation errors

use crate::ecs::ActorClass;
use thiserror::Error;

/// Errors reported by pool operations
///
/// All of these are expected, recoverable outcomes. Live actors keep their
/// partition when one is returned; a failed pull may still have dropped
/// inactive handles whose actors were already destroyed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The handle does not refer to a live actor
    #[error("Handle does not refer to a live actor")]
    InvalidHandle,

    /// The class does not implement the pooled actor lifecycle hooks
    #[error("Actor class \"{0}\" does not implement the pooled actor interface")]
    IneligibleType(ActorClass),

    /// A pull found no subpool and the fallback registration failed
    #[error("Actor class \"{class}\" did not exist in the pool and could not be added: {source}")]
    RegistrationFailed {
        /// Class that was pulled
        class: ActorClass,
        /// Why the fallback registration failed
        source: Box<PoolError>,
    },

    /// Explicit registration of a class that already has a subpool
    #[error("Actor class \"{0}\" is already registered")]
    AlreadyRegistered(ActorClass),

    /// No inactive actor is available and the policy forbids expansion
    #[error("No inactive \"{0}\" available and the pool may not expand")]
    PoolExhausted(ActorClass),

    /// The host failed to spawn an actor while expanding the pool
    #[error("Failed to spawn actor of class \"{0}\"")]
    ConstructionFailed(ActorClass),

    /// An owner-scoped pool was handed an actor of a different class
    #[error("Pool holds \"{expected}\" actors but was given a \"{found}\"")]
    WrongClass {
        /// Class the pool was created for
        expected: ActorClass,
        /// Class of the actor that was pushed
        found: ActorClass,
    },
}

impl PoolError {
    /// Class the error refers to, if any
    pub fn class(&self) -> Option<&ActorClass> {
        match self {
            Self::InvalidHandle => None,
            Self::IneligibleType(class)
            | Self::AlreadyRegistered(class)
            | Self::PoolExhausted(class)
            | Self::ConstructionFailed(class)
            | Self::RegistrationFailed { class, .. } => Some(class),
            Self::WrongClass { found, .. } => Some(found),
        }
    }
}
