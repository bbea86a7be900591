//! Deduplicated set of directed observations

use std::collections::{HashMap, HashSet};
use crate::graph::EntityId;

/// Set of ordered pairs `(a, b)`, meaning "a was observed adjacent to b".
///
/// Stored as an adjacency map from source to its distinct targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSet<T: EntityId> {
    targets: HashMap<T, HashSet<T>>,

    /// Number of distinct pairs
    pair_count: usize,
}

impl<T: EntityId> Default for PairSet<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<T: EntityId> PairSet<T> {
    /// Create an empty set with room for `capacity` source entities
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            targets: HashMap::with_capacity(capacity),
            pair_count: 0,
        }
    }

    /// Insert a pair, returning false if it was already present
    pub fn insert(&mut self, src: T, dst: T) -> bool {
        let added = self.targets.entry(src).or_default().insert(dst);
        if added {
            self.pair_count += 1;
        }
        added
    }

    /// Check if the directed pair `(src, dst)` was observed
    pub fn contains(&self, src: &T, dst: &T) -> bool {
        self.targets
            .get(src)
            .map_or(false, |targets| targets.contains(dst))
    }

    /// Check if both `(a, b)` and `(b, a)` were observed
    pub fn is_reciprocal(&self, a: &T, b: &T) -> bool {
        self.contains(a, b) && self.contains(b, a)
    }

    /// Get the distinct targets observed from `src`
    pub fn outgoing(&self, src: &T) -> impl Iterator<Item = &T> {
        self.targets.get(src).into_iter().flatten()
    }

    /// Iterate over all stored pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&T, &T)> {
        self.targets
            .iter()
            .flat_map(|(src, targets)| targets.iter().map(move |dst| (src, dst)))
    }

    /// Number of distinct pairs
    pub fn len(&self) -> usize {
        self.pair_count
    }

    pub fn is_empty(&self) -> bool {
        self.pair_count == 0
    }
}

impl<T: EntityId> FromIterator<(T, T)> for PairSet<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut set = Self::default();
        for (src, dst) in iter {
            set.insert(src, dst);
        }
        set
    }
}
