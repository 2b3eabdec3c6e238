//! Operand generation and the reference product.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::Result;
use crate::matrix::Matrix;

/// Two operands plus their product, computed once up front.
#[derive(Debug, Clone)]
pub struct Workload {
    pub a: Matrix,
    pub b: Matrix,
    pub expected: Matrix,
    /// Seed the operands were drawn with, if they were random.
    pub seed: Option<u64>,
}

impl Workload {
    /// Wraps caller-provided operands and computes the ground truth.
    pub fn new(a: Matrix, b: Matrix) -> Result<Self> {
        a.check_same_size(&b)?;
        let expected = ground_truth(&a, &b);
        Ok(Self {
            a,
            b,
            expected,
            seed: None,
        })
    }

    /// Random operands with entries in `0..=max_value`.
    ///
    /// Without a seed, one is drawn from the thread RNG and kept in
    /// [`Workload::seed`] so the run can be replayed.
    pub fn random(n: usize, seed: Option<u64>, max_value: i32) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);

        let a = Matrix::random(n, &mut rng, max_value);
        let b = Matrix::random(n, &mut rng, max_value);
        debug!(n, seed, max_value, "generated operands");

        let expected = ground_truth(&a, &b);
        Self {
            a,
            b,
            expected,
            seed: Some(seed),
        }
    }

    pub fn n(&self) -> usize {
        self.a.n()
    }
}

/// Textbook i-j-k product in wrapping 32-bit arithmetic.
///
/// Deliberately shares no code with the kernels under test.
///
/// # Panics
///
/// Panics if `a` and `b` differ in size.
pub fn ground_truth(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(a.n(), b.n(), "operands must be the same size");
    let n = a.n();
    let mut c = Matrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                c[(i, j)] = c[(i, j)].wrapping_add(a[(i, k)].wrapping_mul(b[(k, j)]));
            }
        }
    }
    c
}
