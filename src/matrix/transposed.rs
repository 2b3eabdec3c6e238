//! Variants that materialize a transposed operand first.
//!
//! The transpose is redone on every call; nothing is cached between runs.

use super::check_dims;
use super::transpose::transpose_square;

/// Multiplies via `Aᵀ`: builds AT, then reads it as `AT[k][i]`.
///
/// This is the "wrong" transpose: the inner k-loop now walks both AT and B
/// column-wise. Kept because the contrast with [`matmul_transpose_b`] is the
/// point.
pub fn matmul_transpose_a(a: &[i32], b: &[i32], c: &mut [i32], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);

    let at = transpose_square(a, n);

    for i in 0..n {
        for j in 0..n {
            let idx = i * n + j;
            for p in 0..n {
                c[idx] = c[idx].wrapping_add(at[p * n + i].wrapping_mul(b[p * n + j]));
            }
        }
    }
}

/// Multiplies via `Bᵀ`: builds BT, then reads it as `BT[j][k]`.
///
/// After the transpose, the inner k-loop reads a row of A and a row of BT,
/// both stride 1.
pub fn matmul_transpose_b(a: &[i32], b: &[i32], c: &mut [i32], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);

    let bt = transpose_square(b, n);

    for i in 0..n {
        let a_row = &a[i * n..(i + 1) * n];
        for j in 0..n {
            let bt_row = &bt[j * n..(j + 1) * n];
            let idx = i * n + j;
            for (&a_ip, &bt_jp) in a_row.iter().zip(bt_row) {
                c[idx] = c[idx].wrapping_add(a_ip.wrapping_mul(bt_jp));
            }
        }
    }
}

/// `Bᵀ` variant with eight independent accumulators over k.
///
/// Splitting the sum breaks the add dependency chain. A scalar tail handles
/// `n % 8` leftovers.
pub fn matmul_transpose_b_unrolled(a: &[i32], b: &[i32], c: &mut [i32], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);

    let bt = transpose_square(b, n);
    let k_main = (n / 8) * 8;

    for i in 0..n {
        let a_row = &a[i * n..(i + 1) * n];
        for j in 0..n {
            let bt_row = &bt[j * n..(j + 1) * n];
            let mut acc = [0i32; 8];

            for p in (0..k_main).step_by(8) {
                for (lane, sum) in acc.iter_mut().enumerate() {
                    *sum = sum.wrapping_add(a_row[p + lane].wrapping_mul(bt_row[p + lane]));
                }
            }

            let mut sum = acc.iter().fold(0i32, |s, &v| s.wrapping_add(v));
            for p in k_main..n {
                sum = sum.wrapping_add(a_row[p].wrapping_mul(bt_row[p]));
            }
            c[i * n + j] = sum;
        }
    }
}
