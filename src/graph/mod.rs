//! Pair graph representation and algorithms module

pub mod pair_set;
pub mod builder;
pub mod algorithms;

pub use builder::{PairSetBuilder, PairSetStats};
pub use pair_set::PairSet;

use std::fmt::Debug;
use std::hash::Hash;

/// Opaque entity identifier: anything totally ordered, hashable and shareable
/// across the worker pool
pub trait EntityId: Ord + Hash + Clone + Debug + Send + Sync {}

impl<T> EntityId for T where T: Ord + Hash + Clone + Debug + Send + Sync {}
