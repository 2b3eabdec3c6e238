use super::check_dims;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation. It's slow because
/// the innermost loop accesses B with stride `n` (column-wise), and it
/// writes `C[i][j]` back to memory on every single step of k.
///
/// Use this as a correctness baseline, not for performance.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, cleared then overwritten with A * B
/// * `n` - Side length of all three matrices
///
/// # Panics
///
/// Panics if any slice doesn't hold `n * n` elements.
pub fn matmul_naive_ijk(a: &[i32], b: &[i32], c: &mut [i32], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);

    for i in 0..n {
        for j in 0..n {
            for p in 0..n {
                c[i * n + j] = c[i * n + j].wrapping_add(a[i * n + p].wrapping_mul(b[p * n + j]));
            }
        }
    }
}
