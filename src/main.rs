//! Hopfield pattern recognition demo.
//!
//! Trains a network on a CSV pattern file, corrupts two stored patterns and
//! shows what the network recovers.
//!
//! Usage:
//!   cargo run --release -- data/patterns.csv --noise-level-1 0.4 --noise-level-2 0.3

use anyhow::{bail, Context, Result};
use clap::Parser;
use hopfield::{
    load_patterns, render_trial, run_trial, HopfieldNetwork, NoiseInjector, RecallConfig,
    DEFAULT_GRID_WIDTH, DEFAULT_MAX_ITERATIONS,
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Hopfield network for recognizing noisy bipolar patterns
#[derive(Parser, Debug)]
#[command(name = "hopfield")]
#[command(version)]
#[command(about = "Hopfield network for recognizing noisy bipolar patterns")]
struct Args {
    /// CSV file: header row, label column, then one pattern per row
    csv_file: PathBuf,

    /// Fraction of flipped positions for the first query, in [0, 1]
    #[arg(long, default_value_t = 0.4, value_parser = noise_level)]
    noise_level_1: f64,

    /// Fraction of flipped positions for the second query, in [0, 1]
    #[arg(long, default_value_t = 0.3, value_parser = noise_level)]
    noise_level_2: f64,

    /// Index of the first queried pattern
    #[arg(long, default_value_t = 0)]
    query_1: usize,

    /// Index of the second queried pattern
    #[arg(long, default_value_t = 25)]
    query_2: usize,

    /// Maximum recall sweeps
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Cells per grid row when drawing patterns
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    grid_width: usize,

    /// Seed for reproducible noise (OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write the trained weights to this JSON file
    #[arg(long)]
    save_weights: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn noise_level(value: &str) -> std::result::Result<f64, String> {
    let level: f64 = value
        .parse()
        .map_err(|_| format!("{value} is not a number"))?;
    if !(0.0..=1.0).contains(&level) {
        return Err(format!("{value} is not in the range [0, 1]"));
    }
    Ok(level)
}

fn main() {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt().with_env_filter(filter).with_target(false).init();

    if let Err(e) = run(&args) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let patterns = load_patterns(&args.csv_file)
        .with_context(|| format!("failed to load patterns from {}", args.csv_file.display()))?;
    info!("Loaded {} patterns", patterns.len());

    for query in [args.query_1, args.query_2] {
        if query >= patterns.len() {
            bail!(
                "query index {} is out of range: the file holds {} patterns",
                query,
                patterns.len()
            );
        }
    }

    let mut network = HopfieldNetwork::new(patterns[0].dimensions())?;
    network.train(&patterns).context("training failed")?;
    println!("Hopfield network trained on {} patterns.", patterns.len());

    if let Some(path) = &args.save_weights {
        network
            .save(path)
            .with_context(|| format!("failed to save weights to {}", path.display()))?;
        info!("Saved weights to {}", path.display());
    }

    let mut noise = match args.seed {
        Some(seed) => NoiseInjector::with_seed(seed),
        None => NoiseInjector::new(),
    };
    let config = RecallConfig {
        max_iterations: args.max_iterations,
    };

    println!("Testing recall of noisy patterns");
    let queries = [
        (args.query_1, args.noise_level_1),
        (args.query_2, args.noise_level_2),
    ];
    for (n, (index, level)) in queries.into_iter().enumerate() {
        let trial = run_trial(&network, &patterns, index, level, &config, noise.rng())
            .with_context(|| format!("trial on pattern {} failed", index))?;
        let title = format!("Reconstruction of pattern {} (query {})", index, n + 1);
        print!("\n{}", render_trial(&trial, args.grid_width, &title)?);
    }

    println!("Recognition tests complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_noise_level_parser() {
        assert_eq!(noise_level("0.4"), Ok(0.4));
        assert_eq!(noise_level("0"), Ok(0.0));
        assert_eq!(noise_level("1"), Ok(1.0));
        assert!(noise_level("1.5").is_err());
        assert!(noise_level("-0.1").is_err());
        assert!(noise_level("loud").is_err());
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["hopfield", "data/patterns.csv"]).unwrap();
        assert_eq!(args.noise_level_1, 0.4);
        assert_eq!(args.noise_level_2, 0.3);
        assert_eq!((args.query_1, args.query_2), (0, 25));
        assert_eq!(args.max_iterations, 10);

        assert!(Args::try_parse_from(["hopfield", "x.csv", "--noise-level-1", "2"]).is_err());
    }

    #[test]
    fn test_run_bundled() {
        let args = Args::try_parse_from([
            "hopfield",
            concat!(env!("CARGO_MANIFEST_DIR"), "/data/patterns.csv"),
            "--seed",
            "7",
        ])
        .unwrap();
        run(&args).unwrap();
    }
}
