//! Benchmark runner for the matmul variants.
//!
//! ```bash
//! # The classic run: 512×512, 32 trials, naive/unrolled/write-cached/tiled/packed
//! gemm-lab
//!
//! # Just the transposed variants on a smaller problem
//! gemm-lab --size 256 --variants transpose-a,transpose-b --trials 8
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::TypedValueParser;
use gemm_lab::Variant;
use gemm_lab::harness::{BenchConfig, DEFAULT_SIZE, DEFAULT_TRIALS, run_benchmark};
use tracing_subscriber::EnvFilter;

/// Time integer matrix multiplication variants and check every result
#[derive(Parser, Debug)]
#[command(name = "gemm-lab")]
#[command(version)]
struct Args {
    /// Side length of the square matrices
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE,
          value_parser = clap::value_parser!(u32).range(1..).map(|v| v as usize))]
    size: usize,

    /// Number of timed trials
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Comma-separated variants to run back-to-back in each trial
    #[arg(short, long, value_delimiter = ',',
          default_value = "naive,unrolled,write-cached,tiled,packed")]
    variants: Vec<Variant>,

    /// Seed for the operand generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Largest operand value; entries are drawn from 0..=max
    #[arg(long, default_value_t = i32::MAX,
          value_parser = clap::value_parser!(i32).range(0..))]
    max_value: i32,

    /// List the available variants and exit
    #[arg(long)]
    list: bool,

    /// Log level when RUST_LOG is unset (logs go to stderr)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        for v in Variant::ALL {
            writeln!(out, "{:22} {}", v.name(), v.description())?;
        }
        return Ok(());
    }

    let config = BenchConfig {
        size: args.size,
        trials: args.trials,
        variants: args.variants,
        seed: args.seed,
        max_value: args.max_value,
    };

    run_benchmark(&config, &mut out).with_context(|| {
        format!(
            "benchmark failed (size {}, seed {})",
            config.size,
            config.seed.map_or("random".to_string(), |s| s.to_string())
        )
    })?;
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
