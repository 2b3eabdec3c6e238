//! Cache-blocked i-j-k multiplication.

use crate::matrix::check_dims;

/// Edge length of the square tiles used by [`matmul_tiled`].
pub const TILE_SIZE: usize = 16;

/// Tiled matrix multiplication with the default [`TILE_SIZE`].
pub fn matmul_tiled(a: &[i32], b: &[i32], c: &mut [i32], n: usize) {
    matmul_tiled_with(a, b, c, n, TILE_SIZE);
}

/// Tiled matrix multiplication with an explicit tile size.
///
/// Walks the i, j and k ranges in blocks of `tile`, so one block of A, one of
/// B and one of C are hot at a time. Within a block every (i, j) pair sums its
/// slice of k into a local and adds it to C once per k-tile. Blocks on the
/// right and bottom edges are clipped to `n`.
///
/// # Panics
///
/// Panics if `tile == 0` or any slice doesn't hold `n * n` elements.
pub fn matmul_tiled_with(a: &[i32], b: &[i32], c: &mut [i32], n: usize, tile: usize) {
    assert!(tile > 0, "tile size must be non-zero");
    check_dims(a, b, c, n);
    c.fill(0);

    for ii in (0..n).step_by(tile) {
        let i_end = (ii + tile).min(n);
        for jj in (0..n).step_by(tile) {
            let j_end = (jj + tile).min(n);
            for kk in (0..n).step_by(tile) {
                let k_end = (kk + tile).min(n);

                for i in ii..i_end {
                    let a_row = &a[i * n..(i + 1) * n];
                    for j in jj..j_end {
                        let mut sum = 0i32;
                        for p in kk..k_end {
                            sum = sum.wrapping_add(a_row[p].wrapping_mul(b[p * n + j]));
                        }
                        c[i * n + j] = c[i * n + j].wrapping_add(sum);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::naive_ijk::matmul_naive_ijk;

    #[test]
    fn odd_tile_sizes_match_naive() {
        let n = 23;
        let a: Vec<i32> = (0..n * n).map(|i| (i % 13) as i32 - 6).collect();
        let b: Vec<i32> = (0..n * n).map(|i| (i % 7) as i32).collect();
        let mut expected = vec![0; n * n];
        matmul_naive_ijk(&a, &b, &mut expected, n);

        for tile in [1, 3, 5, 16, 22, 23, 24, 100] {
            let mut c = vec![0; n * n];
            matmul_tiled_with(&a, &b, &mut c, n, tile);
            assert_eq!(c, expected, "tile = {}", tile);
        }
    }
}
