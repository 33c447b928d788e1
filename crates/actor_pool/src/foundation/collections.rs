//! Specialized collection types

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Set with O(1) membership tests that remembers insertion order
///
/// Re-inserting a member keeps its original position. Iteration and
/// [`OrderedSet::pop_first`] walk members oldest first, so repeated takes
/// drain the set in a predictable order.
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    positions: HashMap<T, u64>,
    order: BTreeMap<u64, T>,
    next_position: u64,
}

impl<T: Copy + Eq + Hash> OrderedSet<T> {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            order: BTreeMap::new(),
            next_position: 0,
        }
    }

    /// Insert a value, returning `false` if it was already present
    pub fn insert(&mut self, value: T) -> bool {
        if self.positions.contains_key(&value) {
            return false;
        }
        let position = self.next_position;
        self.next_position += 1;
        self.positions.insert(value, position);
        self.order.insert(position, value);
        true
    }

    /// Remove a value, returning `false` if it was not present
    pub fn remove(&mut self, value: &T) -> bool {
        match self.positions.remove(value) {
            Some(position) => {
                self.order.remove(&position);
                true
            }
            None => false,
        }
    }

    /// Remove and return the oldest member
    pub fn pop_first(&mut self) -> Option<T> {
        let (_, value) = self.order.pop_first()?;
        self.positions.remove(&value);
        Some(value)
    }

    /// Check whether a value is a member
    pub fn contains(&self, value: &T) -> bool {
        self.positions.contains_key(value)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate members oldest first
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.values()
    }
}

impl<T: Copy + Eq + Hash> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Eq + Hash> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}
