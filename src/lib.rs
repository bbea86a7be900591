//! Core library functions for the mutual cluster analyzer

pub mod config;
pub mod data;
pub mod graph;
pub mod cluster;
pub mod storage;

pub use anyhow::{Result, anyhow};
pub use cluster::Cluster;
pub use cluster::detection::find_mutual_clusters;
pub use config::{Config, ExpansionMode};
