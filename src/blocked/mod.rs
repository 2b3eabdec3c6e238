//! Cache-blocked and packed GEMM implementations.
//!
//! These break the multiplication into tiles that fit in L1, or copy the
//! operands into a different layout before the inner loops run.
//!
//! Available implementations:
//! - `tiled`: 16×16×16 blocks over A and B as given
//! - `transpose_b_tiled`: 64×64×64 blocks over A and a transposed B
//! - `packed`: naive loop over `i64` copies of A and B

pub mod packed;
pub mod tiled;
pub mod transpose_b_tiled;
