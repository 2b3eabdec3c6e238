use gemm_lab::blocked::tiled::TILE_SIZE;
use gemm_lab::blocked::transpose_b_tiled::TRANSPOSED_TILE_SIZE;
use gemm_lab::matrix::naive_ikj::matmul_naive_ikj;
use gemm_lab::validate::compare;
use gemm_lab::{Matrix, MatmulError, Variant, Workload, ground_truth, multiply};

fn patterned(n: usize, modulus: usize, offset: i32) -> Matrix {
    let data = (0..n * n).map(|i| (i % modulus) as i32 - offset).collect();
    Matrix::from_vec(n, data).unwrap()
}

fn assert_all_variants_match(a: &Matrix, b: &Matrix, name: &str) {
    let expected = ground_truth(a, b);
    for v in Variant::ALL {
        let c = v.multiply(a, b).unwrap();
        if let Err(e) = compare(&expected, &c) {
            panic!("{} / {}: {}", name, v, e);
        }
    }
}

// ============================================================
// Small matrix scenarios
// ============================================================

#[test]
fn test_2x2_multiply() {
    let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    let b = Matrix::from_rows(&[[5, 6], [7, 8]]).unwrap();
    let expected = Matrix::from_rows(&[[19, 22], [43, 50]]).unwrap();

    for v in Variant::ALL {
        assert_eq!(v.multiply(&a, &b).unwrap(), expected, "{}", v);
    }
    assert_eq!(multiply(&a, &b).unwrap(), expected);
}

#[test]
fn test_identity_times_m() {
    let id = Matrix::identity(4);
    let m = Matrix::from_rows(&[
        [3, -1, 4, 1],
        [5, 9, -2, 6],
        [5, 3, 5, -8],
        [9, 7, 9, 3],
    ])
    .unwrap();

    for v in Variant::ALL {
        assert_eq!(v.multiply(&id, &m).unwrap(), m, "{}", v);
    }
}

#[test]
fn test_zeros() {
    for n in [1, 4, 17] {
        let z = Matrix::zeros(n);
        for v in Variant::ALL {
            assert_eq!(v.multiply(&z, &z).unwrap(), z, "{} n={}", v, n);
        }
    }
}

#[test]
fn test_empty_matrix() {
    let z = Matrix::zeros(0);
    for v in Variant::ALL {
        assert_eq!(v.multiply(&z, &z).unwrap().n(), 0, "{}", v);
    }
}

#[test]
fn test_small_odd_sizes() {
    for n in [1, 3, 5, 7, 11, 13] {
        let a = patterned(n, 10, 0);
        let b = patterned(n, 7, 3);
        assert_all_variants_match(&a, &b, &format!("{}x{}", n, n));
    }
}

// ============================================================
// Tile and unroll boundary tests
// ============================================================

#[test]
fn test_unroll_boundary() {
    // Unroll factors are 4 and 8
    for n in [3, 4, 5, 7, 8, 9, 12, 15, 16, 17] {
        assert_all_variants_match(&patterned(n, 10, 5), &patterned(n, 9, 4), &format!("unroll_{}", n));
    }
}

#[test]
fn test_tile_boundary_16() {
    for n in [TILE_SIZE - 1, TILE_SIZE, TILE_SIZE + 1, 33, 100] {
        assert_all_variants_match(&patterned(n, 10, 0), &patterned(n, 10, 0), &format!("tile_{}", n));
    }
}

#[test]
fn test_tile_boundary_64() {
    let t = TRANSPOSED_TILE_SIZE;
    for n in [t - 1, t, t + 1, t + 3] {
        assert_all_variants_match(&patterned(n, 17, 8), &patterned(n, 11, 5), &format!("tile_{}", n));
    }
}

#[test]
fn test_default_size_random() {
    let w = Workload::random(512, Some(2024), i32::MAX);
    for v in [Variant::Ikj, Variant::Tiled, Variant::TransposeBTiled] {
        let c = v.multiply(&w.a, &w.b).unwrap();
        compare(&w.expected, &c).unwrap();
    }
}

// ============================================================
// Overflow: every variant must wrap exactly like the ground truth
// ============================================================

#[test]
fn test_full_range_operands_wrap_identically() {
    let w = Workload::random(37, Some(7), i32::MAX);
    assert_all_variants_match(&w.a, &w.b, "full_range");
}

#[test]
fn test_negative_extremes() {
    let n = 9;
    let a = Matrix::from_vec(n, vec![i32::MIN; n * n]).unwrap();
    let b = Matrix::from_vec(n, vec![-1; n * n]).unwrap();
    assert_all_variants_match(&a, &b, "i32::MIN");
}

// ============================================================
// Clearing contract (C = A*B, not C += A*B)
// ============================================================

#[test]
fn test_stale_output_is_overwritten() {
    let n = 19;
    let a = patterned(n, 10, 2);
    let b = patterned(n, 6, 1);
    let expected = ground_truth(&a, &b);

    for v in Variant::ALL {
        let mut c = Matrix::from_vec(n, vec![12345; n * n]).unwrap();
        v.run(&a, &b, &mut c).unwrap();
        assert_eq!(c, expected, "{} leaked stale values", v);
    }
}

#[test]
fn test_rerun_with_fresh_operands() {
    let first = Workload::random(21, Some(1), 1000);
    let second = Workload::random(21, Some(2), 1000);

    for v in Variant::ALL {
        let mut c = Matrix::zeros(21);
        v.run(&first.a, &first.b, &mut c).unwrap();
        v.run(&second.a, &second.b, &mut c).unwrap();
        compare(&second.expected, &c).unwrap();
    }
}

#[test]
fn test_idempotent() {
    let w = Workload::random(25, Some(99), 500);
    for v in Variant::ALL {
        let mut c = Matrix::zeros(25);
        v.run(&w.a, &w.b, &mut c).unwrap();
        let first = c.clone();
        v.run(&w.a, &w.b, &mut c).unwrap();
        assert_eq!(first, c, "{}", v);
    }
}

// ============================================================
// Direct slice kernels
// ============================================================

#[test]
fn test_slice_kernel_direct() {
    let a = vec![1, 2, 3, 4];
    let b = vec![5, 6, 7, 8];
    let mut c = vec![-1; 4];

    matmul_naive_ikj(&a, &b, &mut c, 2);
    assert_eq!(c, vec![19, 22, 43, 50]);
}

#[test]
#[should_panic(expected = "B: expected")]
fn test_slice_kernel_rejects_short_input() {
    let a = vec![0; 9];
    let b = vec![0; 8];
    let mut c = vec![0; 9];
    matmul_naive_ikj(&a, &b, &mut c, 3);
}

#[test]
fn test_mismatched_operands() {
    let err = multiply(&Matrix::zeros(3), &Matrix::zeros(4)).unwrap_err();
    assert!(matches!(err, MatmulError::DimensionMismatch { left: 3, right: 4 }));
}
