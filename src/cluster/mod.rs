//! Cluster analysis module

pub mod detection;
pub mod metrics;

use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};
use crate::graph::{EntityId, PairSet};

/// Set of entities believed to be fully mutually connected.
///
/// Members are kept ordered, so two cliques with the same members compare
/// equal and sort by their ascending member sequence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clique<T: EntityId> {
    members: BTreeSet<T>,
}

impl<T: EntityId> Clique<T> {
    /// Create a two-member clique from a reciprocal pair
    pub fn pair(a: T, b: T) -> Self {
        Self {
            members: BTreeSet::from([a, b]),
        }
    }

    /// Check if `candidate` is reciprocally paired with every current member
    pub fn admits(&self, candidate: &T, pairs: &PairSet<T>) -> bool {
        self.members
            .iter()
            .all(|member| pairs.is_reciprocal(candidate, member))
    }

    /// Copy of this clique with `entity` added
    pub fn grown(&self, entity: T) -> Self {
        let mut members = self.members.clone();
        members.insert(entity);
        Self { members }
    }

    /// Strict subset test: every member shared, and `other` is larger
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.members.len() < other.members.len() && self.members.is_subset(&other.members)
    }

    pub fn contains(&self, entity: &T) -> bool {
        self.members.contains(entity)
    }

    pub fn members(&self) -> impl Iterator<Item = &T> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in ascending order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.members.into_iter().collect()
    }
}

impl<T: EntityId> FromIterator<T> for Clique<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

/// Set of cliques, deduplicated by member-set equality
pub type ClusterFamily<T> = BTreeSet<Clique<T>>;

/// A reported mutual cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster<T> {
    /// Position of this cluster in the sorted output
    pub id: u32,

    /// Members in ascending order
    pub members: Vec<T>,

    /// Size of the cluster
    pub size: usize,
}
