//! Element-wise comparison against the ground truth.

use crate::error::{MatmulError, Result};
use crate::matrix::Matrix;

/// Compares `actual` to `expected` in row-major order.
///
/// Returns the first differing element as [`MatmulError::Mismatch`] (with no
/// variant attached), or [`MatmulError::DimensionMismatch`] when the sizes
/// differ.
///
/// ```
/// use gemm_lab::{Matrix, validate::compare};
///
/// let expected = Matrix::identity(3);
/// let mut actual = Matrix::identity(3);
/// assert!(compare(&expected, &actual).is_ok());
///
/// actual[(2, 1)] = 7;
/// assert!(compare(&expected, &actual).is_err());
/// ```
pub fn compare(expected: &Matrix, actual: &Matrix) -> Result<()> {
    expected.check_same_size(actual)?;
    let n = expected.n();

    let first_diff = expected
        .as_slice()
        .iter()
        .zip(actual.as_slice())
        .position(|(e, a)| e != a);

    match first_diff {
        None => Ok(()),
        Some(idx) => Err(MatmulError::Mismatch {
            variant: None,
            row: idx / n,
            col: idx % n,
            expected: expected.as_slice()[idx],
            actual: actual.as_slice()[idx],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_first_diff_location() {
        let expected = Matrix::zeros(5);
        let mut actual = Matrix::zeros(5);
        actual[(3, 4)] = -1;
        actual[(4, 0)] = 9;

        match compare(&expected, &actual) {
            Err(MatmulError::Mismatch {
                row,
                col,
                expected,
                actual,
                variant: None,
            }) => {
                assert_eq!((row, col), (3, 4));
                assert_eq!((expected, actual), (0, -1));
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn size_difference_is_reported() {
        assert!(matches!(
            compare(&Matrix::zeros(2), &Matrix::zeros(3)),
            Err(MatmulError::DimensionMismatch { left: 2, right: 3 })
        ));
    }
}
