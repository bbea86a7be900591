//! Pair set construction module

use std::collections::HashSet;
use serde::{Serialize, Deserialize};
use crate::graph::{EntityId, PairSet};

/// Counters gathered while ingesting raw observations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSetStats {
    /// Records seen, including duplicates
    pub records: usize,

    /// Records that repeated an already seen pair
    pub duplicate_records: usize,

    /// Distinct pairs whose two sides are the same entity
    pub self_pairs: usize,

    /// Distinct pairs kept in the set
    pub distinct_pairs: usize,

    /// Distinct entities appearing on either side of a pair
    pub entity_count: usize,
}

/// Builder for incrementally constructing a PairSet
pub struct PairSetBuilder<T: EntityId> {
    pairs: PairSet<T>,

    /// Every entity seen so far
    entities: HashSet<T>,

    stats: PairSetStats,
}

impl<T: EntityId> PairSetBuilder<T> {
    /// Create a new builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: PairSet::with_capacity(capacity),
            entities: HashSet::with_capacity(capacity),
            stats: PairSetStats::default(),
        }
    }

    /// Record one observation of `src` adjacent to `dst`
    pub fn add_pair(&mut self, src: T, dst: T) {
        self.stats.records += 1;

        let self_pair = src == dst;
        self.entities.insert(src.clone());
        self.entities.insert(dst.clone());

        if !self.pairs.insert(src, dst) {
            self.stats.duplicate_records += 1;
        } else if self_pair {
            self.stats.self_pairs += 1;
        }
    }

    /// Record every observation from an iterator
    pub fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, pairs: I) {
        for (src, dst) in pairs {
            self.add_pair(src, dst);
        }
    }

    /// Build the pair set together with its ingestion counters
    pub fn build(mut self) -> (PairSet<T>, PairSetStats) {
        self.stats.distinct_pairs = self.pairs.len();
        self.stats.entity_count = self.entities.len();

        log::debug!(
            "Built pair set: {} records, {} duplicates, {} self-pairs, {} distinct pairs",
            self.stats.records,
            self.stats.duplicate_records,
            self.stats.self_pairs,
            self.stats.distinct_pairs
        );

        (self.pairs, self.stats)
    }
}

impl<T: EntityId> Default for PairSetBuilder<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
