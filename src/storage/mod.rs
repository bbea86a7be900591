//! Results output and persistence module

use anyhow::Result;
use crate::cluster::Cluster;
use crate::cluster::metrics::{self, ClusterStats};
use crate::config::Config;
use crate::graph::{EntityId, PairSetStats};
use itertools::Itertools;
use serde::Serialize;
use std::fmt::Display;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use serde_json::{json, to_string_pretty};

/// Render cluster members as a single `a, b, c` line
pub fn format_cluster<T: Display>(members: &[T]) -> String {
    members.iter().join(", ")
}

/// Write one line per cluster in the given order
pub fn write_clusters<T: Display, W: Write>(writer: &mut W, clusters: &[Cluster<T>]) -> Result<()> {
    for cluster in clusters {
        writeln!(writer, "{}", format_cluster(&cluster.members))?;
    }
    writer.flush()?;

    Ok(())
}

/// Save analysis results to the specified directory
pub fn save_results<T: EntityId + Serialize>(
    clusters: &[Cluster<T>],
    input_stats: &PairSetStats,
    config: &Config,
    output_dir: &Path,
) -> Result<()> {
    log::info!("Saving {} clusters to {}", clusters.len(), output_dir.display());

    // Ensure output directory exists
    fs::create_dir_all(output_dir)?;

    let cluster_stats = metrics::summarize(clusters);
    save_summary(input_stats, &cluster_stats, config, output_dir)?;
    save_clusters(clusters, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save summary information
fn save_summary(
    input_stats: &PairSetStats,
    cluster_stats: &ClusterStats,
    config: &Config,
    output_dir: &Path,
) -> Result<()> {
    let path = output_dir.join("summary.json");
    let mut file = File::create(path)?;

    let summary = json!({
        "input_stats": input_stats,
        "cluster_stats": cluster_stats,
        "config": config,
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// Save every cluster into a single file
fn save_clusters<T: Serialize>(clusters: &[Cluster<T>], output_dir: &Path) -> Result<()> {
    let path = output_dir.join("all_clusters.json");
    let mut file = File::create(path)?;

    let clusters_json = json!({ "clusters": clusters });
    file.write_all(to_string_pretty(&clusters_json)?.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(id: u32, members: &[&str]) -> Cluster<String> {
        Cluster {
            id,
            size: members.len(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_format_cluster() {
        assert_eq!(format_cluster(&[1, 2, 3]), "1, 2, 3");
        assert_eq!(format_cluster::<u32>(&[]), "");
    }

    #[test]
    fn test_write_clusters_one_per_line() {
        let clusters = vec![cluster(0, &["a", "b", "c"]), cluster(1, &["d", "e", "f"])];
        let mut out = Vec::new();
        write_clusters(&mut out, &clusters).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "a, b, c\nd, e, f\n");
    }

    #[test]
    fn test_save_results_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let clusters = vec![cluster(0, &["a", "b", "c"])];
        let stats = PairSetStats {
            records: 6,
            distinct_pairs: 6,
            entity_count: 3,
            ..PairSetStats::default()
        };

        save_results(&clusters, &stats, &Config::default(), dir.path()).unwrap();

        let all: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("all_clusters.json")).unwrap())
                .unwrap();
        assert_eq!(all["clusters"][0]["members"], json!(["a", "b", "c"]));
        assert_eq!(all["clusters"][0]["size"], json!(3));

        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("summary.json")).unwrap())
                .unwrap();
        assert_eq!(summary["input_stats"]["records"], json!(6));
        assert_eq!(summary["cluster_stats"]["cluster_count"], json!(1));
        assert_eq!(summary["cluster_stats"]["clustered_entities"], json!(3));
        assert_eq!(summary["config"]["mode"], json!("exhaustive"));
    }
}
