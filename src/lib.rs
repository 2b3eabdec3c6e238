//! Integer matrix multiplication, ten ways, timed and checked.
//!
//! I built this to see how much the loop order alone matters before any SIMD
//! gets involved. Every variant computes the same `n×n` product of `i32`
//! matrices with wrapping arithmetic, so each one can be checked bit for bit
//! against a plain triple-loop ground truth.
//!
//! ## Usage
//!
//! ```
//! use gemm_lab::{Matrix, Variant, multiply};
//!
//! let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
//! let b = Matrix::from_rows(&[[5, 6], [7, 8]]).unwrap();
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c, Matrix::from_rows(&[[19, 22], [43, 50]]).unwrap());
//!
//! // Or pick a specific kernel
//! let tiled = Variant::Tiled.multiply(&a, &b).unwrap();
//! assert_eq!(tiled, c);
//! ```
//!
//! Timing a set of variants the way the `gemm-lab` binary does:
//!
//! ```
//! use gemm_lab::harness::{BenchConfig, run_benchmark};
//!
//! let config = BenchConfig { size: 24, trials: 2, seed: Some(1), ..Default::default() };
//! let mut out = Vec::new();
//! let report = run_benchmark(&config, &mut out).unwrap();
//! assert_eq!(report.trial_us.len(), 2);
//! ```
//!
//! ## What's inside
//!
//! - i-j-k, i-k-j, unrolled and write-cached scalar loops
//! - 16×16 tiling with clipped edge tiles
//! - packed operands
//! - transposed-A / transposed-B, plus blocked and 8-accumulator B^T variants

pub mod blocked;
pub mod error;
pub mod harness;
pub mod matrix;
pub mod validate;
pub mod variant;
pub mod workload;

pub use error::{MatmulError, Result};
pub use matrix::Matrix;
pub use variant::Variant;
pub use workload::{Workload, ground_truth};

/// Matrix multiply: C = A * B
///
/// Uses the i-k-j kernel, the fastest of the scalar loop orders here.
///
/// # Errors
///
/// Returns [`MatmulError::DimensionMismatch`] if `a` and `b` differ in size.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    Variant::Ikj.multiply(a, b)
}
