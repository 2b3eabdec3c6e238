use super::check_dims;

/// Cache-friendly matrix multiplication using i-k-j loop order.
///
/// By swapping the j and k loops, the innermost loop now accesses both
/// B and C sequentially (stride 1), and `A[i][k]` stays in a register for
/// the whole row sweep.
///
/// This is what [`crate::multiply`] uses.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, cleared then overwritten with A * B
/// * `n` - Side length of all three matrices
pub fn matmul_naive_ikj(a: &[i32], b: &[i32], c: &mut [i32], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);

    for i in 0..n {
        let c_row = &mut c[i * n..(i + 1) * n];
        for p in 0..n {
            let a_ip = a[i * n + p];
            let b_row = &b[p * n..(p + 1) * n];
            for (c_ij, &b_pj) in c_row.iter_mut().zip(b_row) {
                *c_ij = c_ij.wrapping_add(a_ip.wrapping_mul(b_pj));
            }
        }
    }
}
