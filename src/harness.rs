//! Trial loop: time the selected variants, print, validate, average.

use std::io::Write;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::error::{MatmulError, Result};
use crate::matrix::Matrix;
use crate::validate::compare;
use crate::variant::Variant;
use crate::workload::Workload;

pub const DEFAULT_SIZE: usize = 512;
pub const DEFAULT_TRIALS: usize = 32;

/// What to run and on what.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Side length of the square operands.
    pub size: usize,
    pub trials: usize,
    /// Run back-to-back, in this order, inside every trial.
    pub variants: Vec<Variant>,
    pub seed: Option<u64>,
    /// Operand entries are drawn from `0..=max_value`.
    pub max_value: i32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            trials: DEFAULT_TRIALS,
            variants: Variant::DEFAULT_SET.to_vec(),
            seed: None,
            max_value: i32::MAX,
        }
    }
}

/// Timings collected by [`run_benchmark`].
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub seed: Option<u64>,
    /// Wall-clock microseconds per trial, all variants together.
    pub trial_us: Vec<f64>,
    /// Summed microseconds per variant across all trials.
    pub variant_us: Vec<(Variant, f64)>,
}

impl BenchReport {
    pub fn avg_us(&self) -> f64 {
        if self.trial_us.is_empty() {
            return 0.0;
        }
        self.trial_us.iter().sum::<f64>() / self.trial_us.len() as f64
    }

    /// Average microseconds per run of each variant.
    pub fn variant_avg_us(&self) -> impl Iterator<Item = (Variant, f64)> + '_ {
        let trials = self.trial_us.len().max(1) as f64;
        self.variant_us.iter().map(move |&(v, total)| (v, total / trials))
    }
}

/// Generates a random workload from `config` and benchmarks it.
pub fn run_benchmark<W: Write>(config: &BenchConfig, out: &mut W) -> Result<BenchReport> {
    info!(
        size = config.size,
        trials = config.trials,
        variants = ?config.variants.iter().map(|v| v.name()).collect::<Vec<_>>(),
        "starting benchmark"
    );
    let workload = Workload::random(config.size, config.seed, config.max_value);
    info!(seed = ?workload.seed, "operands ready");
    run_trials(&workload, &config.variants, config.trials, out)
}

/// Runs `trials` timed trials over an existing workload.
///
/// Each trial runs every variant back-to-back into its own output buffer,
/// writes the elapsed microseconds as one line, then validates every buffer.
/// Stops at the first mismatch. After the last trial writes
/// `Avg Time for Calculation: <value> us`.
pub fn run_trials<W: Write>(
    workload: &Workload,
    variants: &[Variant],
    trials: usize,
    out: &mut W,
) -> Result<BenchReport> {
    let n = workload.n();
    let mut outputs: Vec<Matrix> = variants.iter().map(|_| Matrix::zeros(n)).collect();
    let mut report = BenchReport {
        seed: workload.seed,
        trial_us: Vec::with_capacity(trials),
        variant_us: variants.iter().map(|&v| (v, 0.0)).collect(),
    };

    for trial in 0..trials {
        let start = Instant::now();
        for (idx, (&variant, c)) in variants.iter().zip(outputs.iter_mut()).enumerate() {
            let t = Instant::now();
            variant.run(&workload.a, &workload.b, c)?;
            let us = t.elapsed().as_secs_f64() * 1e6;
            report.variant_us[idx].1 += us;
            debug!(trial, variant = variant.name(), us, "variant finished");
        }
        let elapsed_us = start.elapsed().as_secs_f64() * 1e6;

        writeln!(out, "{:.6}", elapsed_us)?;
        report.trial_us.push(elapsed_us);

        for (&variant, c) in variants.iter().zip(&outputs) {
            check_variant(variant, &workload.expected, c).inspect_err(|e| {
                error!(trial, seed = ?workload.seed, "{}", e);
            })?;
        }
    }

    writeln!(out, "Avg Time for Calculation: {:.6} us", report.avg_us())?;
    for (variant, avg) in report.variant_avg_us() {
        debug!(variant = variant.name(), avg_us = avg, "per-variant average");
    }
    Ok(report)
}

fn check_variant(variant: Variant, expected: &Matrix, actual: &Matrix) -> Result<()> {
    compare(expected, actual).map_err(|e| match e {
        MatmulError::Mismatch {
            row,
            col,
            expected,
            actual,
            ..
        } => MatmulError::Mismatch {
            variant: Some(variant),
            row,
            col,
            expected,
            actual,
        },
        other => other,
    })
}
