use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use mutual_cluster_analyzer::cluster::detection::detect_clusters;
use mutual_cluster_analyzer::config::{Config, ExpansionMode};
use mutual_cluster_analyzer::graph::PairSetBuilder;
use mutual_cluster_analyzer::{data, storage};

#[derive(Parser, Debug)]
#[clap(
    name = "mutual-cluster-analyzer",
    about = "Find maximal clusters of mutually connected entities in pairwise traffic logs"
)]
struct Cli {
    /// Path to input log file (last two columns of each line form a pair)
    #[clap(long)]
    input: PathBuf,

    /// Also save JSON results to this directory
    #[clap(long)]
    output_dir: Option<PathBuf>,

    /// Minimum cluster size
    #[clap(long, default_value = "3")]
    min_cluster_size: usize,

    /// Cluster expansion strategy
    #[clap(long, value_enum, default_value_t = ExpansionMode::Exhaustive)]
    mode: ExpansionMode,

    /// Skip malformed input lines instead of failing
    #[clap(long)]
    skip_malformed: bool,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        // If threads = 0, use all available cores
        num_cpus::get()
    };

    log::debug!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let config = Config::new(args.min_cluster_size, args.mode, args.skip_malformed);

    // 1. Load observations
    let records = data::load_pairs(&args.input, config.skip_malformed)?;

    let mut builder = PairSetBuilder::with_capacity(records.len());
    builder.extend(records);
    let (pairs, input_stats) = builder.build();

    log::info!(
        "Loaded {} distinct pairs over {} entities",
        input_stats.distinct_pairs,
        input_stats.entity_count
    );

    // 2. Find clusters
    let clusters = detect_clusters(&pairs, &config);

    // 3. Print clusters
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    storage::write_clusters(&mut out, &clusters)?;

    // 4. Save results if requested
    if let Some(output_dir) = &args.output_dir {
        storage::save_results(&clusters, &input_stats, &config, output_dir)?;
    }

    Ok(())
}
