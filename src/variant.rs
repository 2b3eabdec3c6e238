//! Registry of every multiplication kernel, addressable by name.

use std::fmt;
use std::str::FromStr;

use crate::blocked::packed::matmul_packed;
use crate::blocked::tiled::matmul_tiled;
use crate::blocked::transpose_b_tiled::matmul_transpose_b_tiled;
use crate::error::{MatmulError, Result};
use crate::matrix::Matrix;
use crate::matrix::naive_ijk::matmul_naive_ijk;
use crate::matrix::naive_ikj::matmul_naive_ikj;
use crate::matrix::transposed::{
    matmul_transpose_a, matmul_transpose_b, matmul_transpose_b_unrolled,
};
use crate::matrix::unrolled::matmul_unrolled;
use crate::matrix::write_cached::matmul_write_cached;

/// Slice-level kernel signature: `c = a × b`, all `n×n` row-major.
pub type KernelFn = fn(&[i32], &[i32], &mut [i32], usize);

/// One way of computing `C = A × B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Naive,
    Unrolled,
    WriteCached,
    Tiled,
    Packed,
    Ikj,
    TransposeA,
    TransposeB,
    TransposeBTiled,
    TransposeBUnrolled,
}

impl Variant {
    pub const ALL: [Variant; 10] = [
        Variant::Naive,
        Variant::Unrolled,
        Variant::WriteCached,
        Variant::Tiled,
        Variant::Packed,
        Variant::Ikj,
        Variant::TransposeA,
        Variant::TransposeB,
        Variant::TransposeBTiled,
        Variant::TransposeBUnrolled,
    ];

    /// What the benchmark runs when nothing is selected.
    pub const DEFAULT_SET: [Variant; 5] = [
        Variant::Naive,
        Variant::Unrolled,
        Variant::WriteCached,
        Variant::Tiled,
        Variant::Packed,
    ];

    /// Kebab-case name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Naive => "naive",
            Variant::Unrolled => "unrolled",
            Variant::WriteCached => "write-cached",
            Variant::Tiled => "tiled",
            Variant::Packed => "packed",
            Variant::Ikj => "ikj",
            Variant::TransposeA => "transpose-a",
            Variant::TransposeB => "transpose-b",
            Variant::TransposeBTiled => "transpose-b-tiled",
            Variant::TransposeBUnrolled => "transpose-b-unrolled",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Variant::Naive => "i-j-k triple loop, accumulates into C every step",
            Variant::Unrolled => "i-j-k with the k-loop unrolled by 4",
            Variant::WriteCached => "i-j-k with a local accumulator, one write per element",
            Variant::Tiled => "16x16x16 blocks, local accumulator per k-tile",
            Variant::Packed => "naive loop over operands packed into i64 buffers",
            Variant::Ikj => "i-k-j order, unit stride on B and C",
            Variant::TransposeA => "materializes A^T and reads it column-wise",
            Variant::TransposeB => "materializes B^T, unit stride on both operands",
            Variant::TransposeBTiled => "B^T with 64x64x64 blocks and 4 accumulators",
            Variant::TransposeBUnrolled => "B^T with 8 independent accumulators",
        }
    }

    pub fn kernel(self) -> KernelFn {
        match self {
            Variant::Naive => matmul_naive_ijk,
            Variant::Unrolled => matmul_unrolled,
            Variant::WriteCached => matmul_write_cached,
            Variant::Tiled => matmul_tiled,
            Variant::Packed => matmul_packed,
            Variant::Ikj => matmul_naive_ikj,
            Variant::TransposeA => matmul_transpose_a,
            Variant::TransposeB => matmul_transpose_b,
            Variant::TransposeBTiled => matmul_transpose_b_tiled,
            Variant::TransposeBUnrolled => matmul_transpose_b_unrolled,
        }
    }

    /// Overwrites `c` with `a × b`.
    ///
    /// Whatever `c` held before is discarded.
    pub fn run(self, a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<()> {
        a.check_same_size(b)?;
        a.check_same_size(c)?;
        let n = a.n();
        (self.kernel())(a.as_slice(), b.as_slice(), c.as_mut_slice(), n);
        Ok(())
    }

    /// Allocating form of [`Variant::run`].
    pub fn multiply(self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let mut c = Matrix::zeros(a.n());
        self.run(a, b, &mut c)?;
        Ok(c)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = MatmulError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == wanted)
            .ok_or_else(|| MatmulError::UnknownVariant(s.to_string()))
    }
}
