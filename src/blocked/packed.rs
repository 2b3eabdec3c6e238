//! Packed-operand multiplication.
//!
//! A and B are copied into `i64` buffers before the naive loop runs over them.
//! The wider type keeps the conversion cost of a packing step while staying
//! exact: the low 32 bits of an `i64` wrapping product or sum equal the `i32`
//! wrapping result, so truncating on write-back reproduces the ground truth.

use crate::matrix::check_dims;

/// Element type of the packed buffers.
pub type Packed = i64;

/// Copies a row-major `n×n` matrix into a freshly allocated packed buffer.
pub fn pack(src: &[i32]) -> Vec<Packed> {
    src.iter().map(|&v| Packed::from(v)).collect()
}

/// i-j-k multiplication over packed copies of A and B.
pub fn matmul_packed(a: &[i32], b: &[i32], c: &mut [i32], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);

    let a_packed = pack(a);
    let b_packed = pack(b);

    for i in 0..n {
        for j in 0..n {
            let mut sum: Packed = 0;
            for p in 0..n {
                sum = sum.wrapping_add(a_packed[i * n + p].wrapping_mul(b_packed[p * n + j]));
            }
            c[i * n + j] = sum as i32;
        }
    }
}
