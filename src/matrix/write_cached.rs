use super::check_dims;

/// i-j-k multiplication that keeps `C[i][j]` in a local until the k-loop
/// finishes, so the output is written exactly once per element.
pub fn matmul_write_cached(a: &[i32], b: &[i32], c: &mut [i32], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);

    for i in 0..n {
        let a_row = &a[i * n..(i + 1) * n];
        for j in 0..n {
            let mut sum = 0i32;
            for (p, &a_ip) in a_row.iter().enumerate() {
                sum = sum.wrapping_add(a_ip.wrapping_mul(b[p * n + j]));
            }
            c[i * n + j] = sum;
        }
    }
}
