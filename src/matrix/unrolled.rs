use super::check_dims;

/// How many k-steps the unrolled kernel does per loop iteration.
pub const UNROLL_FACTOR: usize = 4;

/// i-j-k multiplication with the k-loop unrolled by [`UNROLL_FACTOR`].
///
/// Same memory traffic as [`matmul_naive_ijk`](super::naive_ijk::matmul_naive_ijk),
/// less loop overhead. The scalar tail picks up the last `n % 4` terms so any
/// `n` works.
///
/// # Panics
///
/// Panics if any slice doesn't hold `n * n` elements.
pub fn matmul_unrolled(a: &[i32], b: &[i32], c: &mut [i32], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);

    let k_main = (n / UNROLL_FACTOR) * UNROLL_FACTOR;

    for i in 0..n {
        let a_row = &a[i * n..(i + 1) * n];
        for j in 0..n {
            let idx = i * n + j;
            for p in (0..k_main).step_by(UNROLL_FACTOR) {
                c[idx] = c[idx].wrapping_add(a_row[p].wrapping_mul(b[p * n + j]));
                c[idx] = c[idx].wrapping_add(a_row[p + 1].wrapping_mul(b[(p + 1) * n + j]));
                c[idx] = c[idx].wrapping_add(a_row[p + 2].wrapping_mul(b[(p + 2) * n + j]));
                c[idx] = c[idx].wrapping_add(a_row[p + 3].wrapping_mul(b[(p + 3) * n + j]));
            }

            // Leftover k when n isn't a multiple of 4
            for p in k_main..n {
                c[idx] = c[idx].wrapping_add(a_row[p].wrapping_mul(b[p * n + j]));
            }
        }
    }
}
