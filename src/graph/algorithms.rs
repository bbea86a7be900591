//! Graph algorithms for analysis

use std::collections::BTreeSet;
use crate::cluster::{Clique, ClusterFamily};
use crate::graph::{EntityId, PairSet};

/// Find reciprocal pairs and seed one two-member clique per unordered pair
pub fn find_reciprocal_pairs<T: EntityId>(pairs: &PairSet<T>) -> ClusterFamily<T> {
    log::info!("Finding reciprocal pairs among {} observed pairs", pairs.len());

    let mut self_pairs = 0;
    let mut family = ClusterFamily::new();

    for (src, dst) in pairs.iter() {
        // Skip self-pairs
        if src == dst {
            self_pairs += 1;
            continue;
        }

        // Only store in one direction; the set collapses the other anyway
        if src < dst && pairs.contains(dst, src) {
            family.insert(Clique::pair(src.clone(), dst.clone()));
        }
    }

    if self_pairs > 0 {
        log::debug!("Ignored {} self-pairs", self_pairs);
    }
    log::info!("Found {} reciprocal pairs", family.len());

    family
}

/// Collect every entity appearing in any clique of the family
pub fn entity_ids<T: EntityId>(family: &ClusterFamily<T>) -> BTreeSet<T> {
    family
        .iter()
        .flat_map(|clique| clique.members().cloned())
        .collect()
}
