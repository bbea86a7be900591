//! Configuration management for the mutual cluster analyzer

use serde::{Serialize, Deserialize};

/// How the cluster expander treats a cluster that admits a new entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionMode {
    /// Keep both the grown cluster and the original one.
    /// Finds every maximal cluster regardless of processing order.
    #[default]
    Exhaustive,

    /// Replace the original cluster with the grown one.
    /// Keeps the family small, but the result can depend on id order.
    Greedy,
}

/// Default configuration for the mutual cluster analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Minimum cluster size reported
    pub min_cluster_size: usize,

    /// Cluster expansion strategy
    pub mode: ExpansionMode,

    /// Skip malformed input records instead of failing
    pub skip_malformed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_cluster_size: 3,
            mode: ExpansionMode::Exhaustive,
            skip_malformed: false,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        min_cluster_size: usize,
        mode: ExpansionMode,
        skip_malformed: bool,
    ) -> Self {
        Self {
            min_cluster_size,
            mode,
            skip_malformed,
        }
    }
}
