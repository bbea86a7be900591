//! Cluster statistics and metrics

use std::collections::HashSet;
use itertools::Itertools;
use serde::{Serialize, Deserialize};
use crate::cluster::Cluster;
use crate::graph::{EntityId, PairSet};

/// Aggregate statistics over a list of reported clusters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterStats {
    pub cluster_count: usize,

    /// Sum of cluster sizes (an entity in two clusters counts twice)
    pub total_memberships: usize,

    /// Distinct entities belonging to at least one cluster
    pub clustered_entities: usize,

    pub largest_cluster_size: usize,
    pub smallest_cluster_size: usize,
    pub avg_cluster_size: f64,
}

/// Check that every two distinct members are reciprocally paired
pub fn is_mutual_clique<T: EntityId>(pairs: &PairSet<T>, members: &[T]) -> bool {
    members
        .iter()
        .tuple_combinations()
        .all(|(a, b)| a != b && pairs.is_reciprocal(a, b))
}

/// Calculate aggregate statistics for a list of clusters
pub fn summarize<T: EntityId>(clusters: &[Cluster<T>]) -> ClusterStats {
    if clusters.is_empty() {
        return ClusterStats::default();
    }

    let total_memberships: usize = clusters.iter().map(|c| c.size).sum();
    let clustered_entities = clusters
        .iter()
        .flat_map(|c| c.members.iter())
        .collect::<HashSet<_>>()
        .len();

    let (smallest, largest) = clusters
        .iter()
        .map(|c| c.size)
        .minmax()
        .into_option()
        .unwrap_or((0, 0));

    ClusterStats {
        cluster_count: clusters.len(),
        total_memberships,
        clustered_entities,
        largest_cluster_size: largest,
        smallest_cluster_size: smallest,
        avg_cluster_size: total_memberships as f64 / clusters.len() as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(id: u32, members: Vec<u32>) -> Cluster<u32> {
        Cluster { id, size: members.len(), members }
    }

    #[test]
    fn test_mutual_clique_check() {
        let pairs: PairSet<u32> = vec![(1, 2), (2, 1), (1, 3), (3, 1), (2, 3)]
            .into_iter()
            .collect();

        assert!(is_mutual_clique(&pairs, &[1, 2]));
        assert!(!is_mutual_clique(&pairs, &[1, 2, 3]));
        assert!(is_mutual_clique(&pairs, &[1]));
    }

    #[test]
    fn test_duplicate_member_is_not_a_clique() {
        let pairs: PairSet<u32> = vec![(1, 1), (1, 2), (2, 1)].into_iter().collect();
        assert!(!is_mutual_clique(&pairs, &[1, 1, 2]));
    }

    #[test]
    fn test_summarize_overlapping_clusters() {
        let clusters = vec![cluster(0, vec![1, 2, 3, 4]), cluster(1, vec![3, 4, 5])];
        let stats = summarize(&clusters);

        assert_eq!(stats.cluster_count, 2);
        assert_eq!(stats.total_memberships, 7);
        assert_eq!(stats.clustered_entities, 5);
        assert_eq!(stats.largest_cluster_size, 4);
        assert_eq!(stats.smallest_cluster_size, 3);
        assert!((stats.avg_cluster_size - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize::<u32>(&[]), ClusterStats::default());
    }
}
