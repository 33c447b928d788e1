//! Active/inactive partition for one actor class

use crate::foundation::collections::OrderedSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Membership of one actor class, split into active and inactive actors
///
/// A handle is in at most one of the two sets at any time. Inactive actors are
/// handed out oldest first.
#[derive(Debug, Clone)]
pub struct Subpool<H> {
    active: OrderedSet<H>,
    inactive: OrderedSet<H>,
}

impl<H: Copy + Eq + Hash + Debug> Subpool<H> {
    /// Create an empty subpool
    pub fn new() -> Self {
        Self {
            active: OrderedSet::new(),
            inactive: OrderedSet::new(),
        }
    }

    /// Move a handle into the inactive set
    ///
    /// Removes it from the active set if present. Inserting a handle that is
    /// already inactive changes nothing.
    pub fn move_to_inactive(&mut self, handle: H) {
        self.active.remove(&handle);
        self.inactive.insert(handle);
        self.debug_check(handle);
    }

    /// Move a handle into the active set
    pub fn move_to_active(&mut self, handle: H) {
        self.inactive.remove(&handle);
        self.active.insert(handle);
        self.debug_check(handle);
    }

    /// Remove and return the oldest inactive handle
    ///
    /// The handle is not placed anywhere; callers follow up with
    /// [`Subpool::move_to_active`] or drop it.
    pub fn take_one_inactive(&mut self) -> Option<H> {
        self.inactive.pop_first()
    }

    /// Whether the handle is in the active set
    pub fn is_active(&self, handle: &H) -> bool {
        self.active.contains(handle)
    }

    /// Whether the handle is in the inactive set
    pub fn is_inactive(&self, handle: &H) -> bool {
        self.inactive.contains(handle)
    }

    /// Whether the handle is a member at all
    pub fn contains(&self, handle: &H) -> bool {
        self.is_active(handle) || self.is_inactive(handle)
    }

    /// Active handles, oldest first
    pub fn active(&self) -> impl Iterator<Item = H> + '_ {
        self.active.iter().copied()
    }

    /// Inactive handles in the order they will be handed out
    pub fn inactive(&self) -> impl Iterator<Item = H> + '_ {
        self.inactive.iter().copied()
    }

    /// Every member, active first
    pub fn members(&self) -> impl Iterator<Item = H> + '_ {
        self.active().chain(self.inactive())
    }

    /// Number of active handles
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Number of inactive handles
    pub fn inactive_len(&self) -> usize {
        self.inactive.len()
    }

    /// Whether the subpool has no members
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.inactive.is_empty()
    }

    fn debug_check(&self, handle: H) {
        debug_assert!(
            !(self.active.contains(&handle) && self.inactive.contains(&handle)),
            "{handle:?} is both active and inactive"
        );
    }
}

impl<H: Copy + Eq + Hash + Debug> Default for Subpool<H> {
    fn default() -> Self {
        Self::new()
    }
}
