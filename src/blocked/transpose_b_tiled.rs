//! Cache-blocked multiplication over a transposed B.

use crate::matrix::check_dims;
use crate::matrix::transpose::transpose_square;

/// Edge length of the tiles used by [`matmul_transpose_b_tiled`].
pub const TRANSPOSED_TILE_SIZE: usize = 64;

/// Transposes B, then multiplies in 64×64×64 blocks.
///
/// With B transposed, both operands are read row-wise inside a block. The
/// k-loop keeps four independent accumulators; tiles whose k-extent isn't a
/// multiple of 4 finish with a scalar tail.
///
/// # Panics
///
/// Panics if any slice doesn't hold `n * n` elements.
pub fn matmul_transpose_b_tiled(a: &[i32], b: &[i32], c: &mut [i32], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);

    let bt = transpose_square(b, n);
    let tile = TRANSPOSED_TILE_SIZE;

    for ii in (0..n).step_by(tile) {
        let i_end = (ii + tile).min(n);
        for jj in (0..n).step_by(tile) {
            let j_end = (jj + tile).min(n);
            for kk in (0..n).step_by(tile) {
                let k_end = (kk + tile).min(n);
                let k_main = kk + ((k_end - kk) / 4) * 4;

                for i in ii..i_end {
                    let a_row = &a[i * n..(i + 1) * n];
                    for j in jj..j_end {
                        let bt_row = &bt[j * n..(j + 1) * n];
                        let (mut s0, mut s1, mut s2, mut s3) = (0i32, 0i32, 0i32, 0i32);

                        for p in (kk..k_main).step_by(4) {
                            s0 = s0.wrapping_add(a_row[p].wrapping_mul(bt_row[p]));
                            s1 = s1.wrapping_add(a_row[p + 1].wrapping_mul(bt_row[p + 1]));
                            s2 = s2.wrapping_add(a_row[p + 2].wrapping_mul(bt_row[p + 2]));
                            s3 = s3.wrapping_add(a_row[p + 3].wrapping_mul(bt_row[p + 3]));
                        }

                        let mut sum = s0.wrapping_add(s1).wrapping_add(s2).wrapping_add(s3);
                        for p in k_main..k_end {
                            sum = sum.wrapping_add(a_row[p].wrapping_mul(bt_row[p]));
                        }
                        c[i * n + j] = c[i * n + j].wrapping_add(sum);
                    }
                }
            }
        }
    }
}
