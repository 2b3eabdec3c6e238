//! The square integer matrix type and the scalar loop-order kernels.
//!
//! Every kernel in this module takes row-major `n×n` slices, clears `c`, and
//! writes `C = A × B` using wrapping 32-bit arithmetic, so all of them agree
//! bit for bit with [`crate::workload::ground_truth`] even when the sums
//! overflow.

pub mod naive_ijk;
pub mod naive_ikj;
pub mod transpose;
pub mod transposed;
pub mod unrolled;
pub mod write_cached;

use std::fmt;
use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::error::{MatmulError, Result};

/// An owned `n×n` matrix of `i32`, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// All-zero matrix.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0; n * n],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m[(i, i)] = 1;
        }
        m
    }

    /// Wraps a row-major buffer. Fails unless `data.len() == n * n`.
    pub fn from_vec(n: usize, data: Vec<i32>) -> Result<Self> {
        if data.len() != n * n {
            return Err(MatmulError::InvalidLength {
                n,
                expected: n * n,
                actual: data.len(),
            });
        }
        Ok(Self { n, data })
    }

    /// Builds a matrix from nested rows.
    ///
    /// ```
    /// use gemm_lab::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(m[(1, 0)], 3);
    /// ```
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(MatmulError::InvalidLength {
                    n,
                    expected: n * n,
                    actual: data.len() + row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { n, data })
    }

    /// Fills a matrix with values drawn uniformly from `0..=max_value`.
    ///
    /// A negative `max_value` is treated as 0.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R, max_value: i32) -> Self {
        let max_value = max_value.max(0);
        let data = (0..n * n).map(|_| rng.random_range(0..=max_value)).collect();
        Self { n, data }
    }

    /// Side length.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    pub fn row(&self, i: usize) -> &[i32] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.data
    }

    /// Returns `Aᵀ` as a new matrix.
    pub fn transposed(&self) -> Self {
        let mut out = Self::zeros(self.n);
        transpose::transpose(&self.data, &mut out.data, self.n, self.n);
        out
    }

    /// Errors unless `other` has the same side length.
    pub fn check_same_size(&self, other: &Matrix) -> Result<()> {
        if self.n != other.n {
            return Err(MatmulError::DimensionMismatch {
                left: self.n,
                right: other.n,
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i32;

    fn index(&self, (i, j): (usize, usize)) -> &i32 {
        &self.data[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut i32 {
        &mut self.data[i * self.n + j]
    }
}

// 512×512 matrices would flood the terminal, so only small ones print their
// elements.
impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.n > 8 {
            return f
                .debug_struct("Matrix")
                .field("n", &self.n)
                .finish_non_exhaustive();
        }
        f.debug_list()
            .entries((0..self.n).map(|i| self.row(i)))
            .finish()
    }
}

/// Panics unless all three slices hold `n * n` elements.
#[inline]
pub(crate) fn check_dims(a: &[i32], b: &[i32], c: &[i32], n: usize) {
    let len = n * n;
    assert_eq!(a.len(), len, "A: expected {}x{}={} elements", n, n, len);
    assert_eq!(b.len(), len, "B: expected {}x{}={} elements", n, n, len);
    assert_eq!(c.len(), len, "C: expected {}x{}={} elements", n, n, len);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Matrix::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, MatmulError::InvalidLength { n: 2, .. }));
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(Matrix::from_vec(3, vec![0; 9]).is_ok());
        assert!(Matrix::from_vec(3, vec![0; 8]).is_err());
    }

    #[test]
    fn transposed_swaps_indices() {
        let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
        let t = m.transposed();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], t[(j, i)]);
            }
        }
    }

    #[test]
    fn random_respects_bound() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let m = Matrix::random(10, &mut rng, 5);
        assert!(m.as_slice().iter().all(|&v| (0..=5).contains(&v)));
    }
}
