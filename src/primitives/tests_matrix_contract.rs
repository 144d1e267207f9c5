// =========================================================================
// FALSIFY-MX: Matrix arithmetic contract
//
// Each test tries to falsify one algebraic law the matrix operations must
// satisfy. Failures name the law they broke.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

/// FALSIFY-MX-001: Transpose involution: (A^T)^T = A
#[test]
fn falsify_mx_001_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let att = a.transpose().transpose();

    assert_eq!(att.shape(), a.shape(), "FALSIFIED MX-001: shape mismatch");
    assert_eq!(att, a, "FALSIFIED MX-001: (A^T)^T != A");
}

/// FALSIFY-MX-002: Transpose swaps shape: (m×n)^T = (n×m)
#[test]
fn falsify_mx_002_transpose_swaps_shape() {
    let mut a = Matrix::zeros(3, 5);
    assert_eq!(
        a.transpose().shape(),
        (5, 3),
        "FALSIFIED MX-002: transpose shape={:?}, expected (5,3)",
        a.transpose().shape()
    );
    a.transpose_in_place();
    assert_eq!(a.shape(), (5, 3), "FALSIFIED MX-002: in-place shape");
}

/// FALSIFY-MX-003: Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn falsify_mx_003_matmul_shape() {
    let a = Matrix::ones(2, 3);
    let b = Matrix::ones(3, 4);
    let c = a.matmul(&b).expect("compatible dims");

    assert_eq!(
        c.shape(),
        (2, 4),
        "FALSIFIED MX-003: (2x3)*(3x4) shape={:?}, expected (2,4)",
        c.shape()
    );
}

/// FALSIFY-MX-004: Identity matmul from both sides: A * I = I * A = A
#[test]
fn falsify_mx_004_identity_matmul() {
    let a =
        Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).expect("valid");
    let eye = Matrix::eye(3);
    let right = a.matmul(&eye).expect("compatible dims");
    let left = eye.matmul(&a).expect("compatible dims");

    for i in 0..3 {
        for j in 0..3 {
            assert!(
                (right.get(i, j) - a.get(i, j)).abs() < 1e-5,
                "FALSIFIED MX-004: (A*I)[{i},{j}]={} != A[{i},{j}]={}",
                right.get(i, j),
                a.get(i, j)
            );
            assert!(
                (left.get(i, j) - a.get(i, j)).abs() < 1e-5,
                "FALSIFIED MX-004: (I*A)[{i},{j}]={} != A[{i},{j}]={}",
                left.get(i, j),
                a.get(i, j)
            );
        }
    }
}

/// FALSIFY-MX-005: Add then subtract is the identity: (A + B) - B = A
#[test]
fn falsify_mx_005_add_sub_inverse() {
    let a = Matrix::from_vec(2, 2, vec![1.5, -2.0, 0.25, 8.0]).expect("valid");
    let b = Matrix::from_vec(2, 2, vec![-0.5, 3.0, 7.75, 1.0]).expect("valid");
    let back = a.add(&b).and_then(|s| s.sub(&b)).expect("same shape");

    for (x, y) in back.as_slice().iter().zip(a.as_slice()) {
        assert!((x - y).abs() < 1e-5, "FALSIFIED MX-005: {x} != {y}");
    }
}

/// FALSIFY-MX-006: A rejected operation mutates nothing
#[test]
fn falsify_mx_006_failed_ops_are_pure() {
    let mut a = Matrix::ones(2, 3);
    let b = Matrix::ones(3, 3);
    let mut out = Matrix::eye(2);

    assert!(a.add_into(&b, &mut out).is_err());
    assert!(a.sub_into(&b, &mut out).is_err());
    assert!(b.matmul_into(&a, &mut out).is_err());
    assert!(a.add_in_place(&b).is_err());
    assert!(a.sub_in_place(&b).is_err());

    assert_eq!(a, Matrix::ones(2, 3), "FALSIFIED MX-006: operand mutated");
    assert_eq!(b, Matrix::ones(3, 3), "FALSIFIED MX-006: operand mutated");
    assert_eq!(out, Matrix::eye(2), "FALSIFIED MX-006: output mutated");
}

mod matrix_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-MX-001-prop: Transpose involution for random matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_001_prop_transpose_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f32> = (0..rows * cols)
                .map(|i| ((i as f32 + seed as f32) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(rows, cols, data).expect("valid");
            let mut att = a.duplicate();
            att.transpose_in_place();
            att.transpose_in_place();

            prop_assert_eq!(att, a, "FALSIFIED MX-001-prop: (A^T)^T != A");
        }
    }

    /// FALSIFY-MX-004-prop: Identity matmul for random square matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_mx_004_prop_identity_matmul(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f32> = (0..n * n)
                .map(|i| ((i as f32 + seed as f32) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(n, n, data).expect("valid");
            let eye = Matrix::eye(n);
            let result = a.matmul(&eye).expect("compatible");

            for i in 0..n {
                for j in 0..n {
                    prop_assert!(
                        (result.get(i, j) - a.get(i, j)).abs() < 1e-3,
                        "FALSIFIED MX-004-prop: (A*I)[{},{}] != A[{},{}]",
                        i, j, i, j
                    );
                }
            }
        }
    }
}
