//! Actor identifiers and class keys

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

slotmap::new_key_type! {
    /// Generational handle to an actor living in an [`ActorWorld`](super::ActorWorld)
    ///
    /// A handle stays unique after its actor is destroyed, so a stale handle
    /// is reported as dead instead of aliasing a newer actor.
    pub struct ActorId;
}

/// Name of an actor class, used to key subpools and pool settings
///
/// Cheap to clone; two classes are equal when their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ActorClass(Arc<str>);

impl ActorClass {
    /// Create a class key from its name
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Get the class name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorClass {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ActorClass {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<ActorClass> for String {
    fn from(class: ActorClass) -> Self {
        class.0.to_string()
    }
}
