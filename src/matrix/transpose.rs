/// Transpose a matrix: dst = src^T
///
/// Converts from row-major (rows × cols) to row-major (cols × rows).
/// After transpose, what was column j of src becomes row j of dst.
///
/// # Arguments
///
/// * `src` - Source matrix (rows × cols), row-major
/// * `dst` - Destination matrix (cols × rows), row-major
/// * `rows` - Number of rows in src
/// * `cols` - Number of columns in src
///
/// # Example
///
/// ```
/// use gemm_lab::matrix::transpose::transpose;
///
/// let src = vec![1, 2, 3,   // 2×3 matrix
///                4, 5, 6];
/// let mut dst = vec![0; 6]; // will be 3×2
///
/// transpose(&src, &mut dst, 2, 3);
///
/// assert_eq!(dst, vec![1, 4,   // 3×2 matrix
///                      2, 5,
///                      3, 6]);
/// ```
pub fn transpose<T: Copy>(src: &[T], dst: &mut [T], rows: usize, cols: usize) {
    assert_eq!(src.len(), rows * cols, "src: expected {}x{} elements", rows, cols);
    assert_eq!(dst.len(), rows * cols, "dst: expected {}x{} elements", cols, rows);

    for i in 0..rows {
        for j in 0..cols {
            dst[j * rows + i] = src[i * cols + j];
        }
    }
}

/// Square convenience wrapper that allocates the destination.
pub fn transpose_square(src: &[i32], n: usize) -> Vec<i32> {
    let mut dst = vec![0; n * n];
    transpose(src, &mut dst, n, n);
    dst
}
