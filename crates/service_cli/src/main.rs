//! midpoint-pi CLI - π estimation by parallel midpoint quadrature
//!
//! This is the operational entry point for the midpoint-pi workspace.
//!
//! # Usage
//!
//! - `pi` - estimate π with the reference 200,000,000 subintervals across
//!   all logical cores
//! - `pi --intervals 1000000 --threads 4` - custom run
//!
//! # Output
//!
//! Two lines on stdout:
//!
//! ```text
//! PI ~= 3.141592653590
//! Threads used: 8
//! ```
//!
//! Diagnostics go to stderr via `tracing` and never disturb the report.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quadrature_core::{EstimatorConfig, PiEstimator, DEFAULT_INTERVALS};

mod error;

pub use error::{CliError, Result};

/// Estimate π by midpoint-rule integration of 4/(1+x²) over [0,1]
#[derive(Parser)]
#[command(name = "pi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of subintervals for the midpoint rule
    #[arg(short = 'n', long, default_value_t = DEFAULT_INTERVALS)]
    intervals: u64,

    /// Worker thread count (defaults to all logical cores)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
        info!("  Subintervals: {}", cli.intervals);
        info!(
            "  Requested threads: {}",
            cli.threads
                .map_or_else(|| format!("all ({})", num_cpus::get()), |t| t.to_string())
        );
    }

    let mut builder = EstimatorConfig::builder().intervals(cli.intervals);
    if let Some(threads) = cli.threads {
        builder = builder.threads(threads);
    }
    let config = builder.build()?;

    let estimator = PiEstimator::new(config)?;
    let estimate = estimator.estimate();

    info!(
        "Quadrature complete: {} intervals, step {:e}",
        estimate.intervals, estimate.step
    );

    println!("PI ~= {:.12}", estimate.value);
    println!("Threads used: {}", estimate.threads);

    Ok(())
}
