//! Cluster detection algorithms

use std::collections::BTreeSet;
use rayon::prelude::*;
use crate::cluster::{Cluster, ClusterFamily};
use crate::config::{Config, ExpansionMode};
use crate::graph::algorithms::{entity_ids, find_reciprocal_pairs};
use crate::graph::{EntityId, PairSet, PairSetBuilder};

/// Try to admit `entity` into every clique of the family.
///
/// Produces the next family; the input family is left untouched. A clique
/// that does not admit the entity is carried forward unchanged.
pub fn expand_with_entity<T: EntityId>(
    family: &ClusterFamily<T>,
    entity: &T,
    pairs: &PairSet<T>,
    mode: ExpansionMode,
) -> ClusterFamily<T> {
    family
        .par_iter()
        .flat_map_iter(|clique| {
            if clique.contains(entity) || !clique.admits(entity, pairs) {
                return vec![clique.clone()];
            }

            let grown = clique.grown(entity.clone());
            match mode {
                ExpansionMode::Exhaustive => vec![clique.clone(), grown],
                ExpansionMode::Greedy => vec![grown],
            }
        })
        .collect()
}

/// Grow the seed family by processing every entity id exactly once
pub fn expand_clusters<'a, T, I>(
    seeds: ClusterFamily<T>,
    pairs: &PairSet<T>,
    ids: I,
    mode: ExpansionMode,
) -> ClusterFamily<T>
where
    T: EntityId + 'a,
    I: IntoIterator<Item = &'a T>,
{
    ids.into_iter().fold(seeds, |family, entity| {
        let next = expand_with_entity(&family, entity, pairs, mode);
        log::trace!("Admitting {:?}: {} -> {} candidates", entity, family.len(), next.len());
        next
    })
}

/// Keep only cliques that are not a proper subset of another clique
pub fn dominating_sets<T: EntityId>(family: &ClusterFamily<T>) -> ClusterFamily<T> {
    family
        .par_iter()
        .filter(|clique| !family.iter().any(|other| clique.is_proper_subset(other)))
        .cloned()
        .collect()
}

/// Run the full pipeline over an already built pair set
pub fn detect_clusters<T: EntityId>(pairs: &PairSet<T>, config: &Config) -> Vec<Cluster<T>> {
    let seeds = find_reciprocal_pairs(pairs);
    let ids: BTreeSet<T> = entity_ids(&seeds);

    log::info!(
        "Expanding {} seed clusters over {} entities ({:?} mode)",
        seeds.len(),
        ids.len(),
        config.mode
    );

    let candidates = expand_clusters(seeds, pairs, &ids, config.mode);
    log::info!("Expansion produced {} candidate clusters", candidates.len());

    let maximal = dominating_sets(&candidates);
    log::debug!("{} candidates are maximal", maximal.len());

    // Family order is already ascending by sorted member sequence
    let clusters: Vec<Cluster<T>> = maximal
        .into_iter()
        .filter(|clique| clique.len() >= config.min_cluster_size)
        .enumerate()
        .map(|(id, clique)| {
            let members = clique.into_sorted_vec();
            Cluster {
                id: id as u32,
                size: members.len(),
                members,
            }
        })
        .collect();

    log::info!(
        "Found {} clusters with {} or more members",
        clusters.len(),
        config.min_cluster_size
    );

    clusters
}

/// Find maximal mutual clusters in a sequence of directed observations
pub fn find_mutual_clusters<T, I>(pairs: I, config: &Config) -> Vec<Cluster<T>>
where
    T: EntityId,
    I: IntoIterator<Item = (T, T)>,
{
    let mut builder = PairSetBuilder::default();
    builder.extend(pairs);
    let (pairs, _) = builder.build();

    detect_clusters(&pairs, config)
}
