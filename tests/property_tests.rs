//! Property-based tests using proptest.
//!
//! These tests verify the algebraic laws and the validate-then-act contract of
//! the matrix and vector operations.

use linalg::prelude::*;
use proptest::prelude::*;

// Strategy for generating small matrices
fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(-100.0f32..100.0, rows * cols).prop_map(move |data| {
        Matrix::from_vec(rows, cols, data).expect("Test data should be valid")
    })
}

// Strategy for matrices of arbitrary small shape
fn any_matrix() -> impl Strategy<Value = Matrix> {
    (1..6usize, 1..6usize).prop_flat_map(|(r, c)| matrix_strategy(r, c))
}

// Strategy for generating vectors
fn vector_strategy(len: usize) -> impl Strategy<Value = Vector> {
    proptest::collection::vec(-100.0f32..100.0, len).prop_map(Vector::from_vec)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Matrix properties
    #[test]
    fn matrix_add_then_sub_restores(a in matrix_strategy(3, 4), b in matrix_strategy(3, 4)) {
        let back = a.add(&b).unwrap().sub(&b).unwrap();
        for (x, y) in back.as_slice().iter().zip(a.as_slice()) {
            prop_assert!((x - y).abs() < 1e-3);
        }
    }

    #[test]
    fn matrix_duplicate_is_independent(a in any_matrix(), value in -10.0f32..10.0) {
        let original = a.clone();
        let mut dup = a.duplicate();
        prop_assert_eq!(&dup, &a);
        dup.set(0, 0, value + 1000.0);
        prop_assert_eq!(a, original);
    }

    #[test]
    fn matrix_identity_is_neutral(a in matrix_strategy(4, 4)) {
        let eye = Matrix::eye(4);
        prop_assert_eq!(a.matmul(&eye).unwrap(), a.clone());
        prop_assert_eq!(eye.matmul(&a).unwrap(), a);
    }

    #[test]
    fn matrix_transpose_involution(a in any_matrix()) {
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn matrix_transpose_of_product(a in matrix_strategy(2, 3), b in matrix_strategy(3, 4)) {
        // (AB)^T = B^T A^T
        let lhs = a.matmul(&b).unwrap().transpose();
        let rhs = b.transpose().matmul(&a.transpose()).unwrap();
        for (x, y) in lhs.as_slice().iter().zip(rhs.as_slice()) {
            prop_assert!((x - y).abs() < 1e-2);
        }
    }

    #[test]
    fn matrix_mismatched_add_leaves_operands(a in matrix_strategy(2, 3), b in matrix_strategy(3, 2)) {
        let (a0, b0) = (a.clone(), b.clone());
        let mut out = Matrix::eye(3);
        prop_assert!(a.add_into(&b, &mut out).unwrap_err().is_incompatible_dimensions());
        prop_assert!(a.sub_into(&b, &mut out).unwrap_err().is_incompatible_dimensions());
        prop_assert_eq!(a, a0);
        prop_assert_eq!(b, b0);
        prop_assert_eq!(out, Matrix::eye(3));
    }

    #[test]
    fn matrix_checked_access_bounds(a in any_matrix()) {
        let (rows, cols) = a.shape();
        for i in 0..rows {
            for j in 0..cols {
                prop_assert!(a.read(i, j).is_ok());
            }
        }
        prop_assert!(a.read(rows, 0).unwrap_err().is_out_of_bounds());
        prop_assert!(a.read(0, cols).unwrap_err().is_out_of_bounds());
        prop_assert!(a.read(usize::MAX, 0).unwrap_err().is_out_of_bounds());
    }

    // Vector properties
    #[test]
    fn vector_dot_is_commutative(a in vector_strategy(10), b in vector_strategy(10)) {
        let dot_ab = a.dot(&b).unwrap();
        let dot_ba = b.dot(&a).unwrap();
        prop_assert!((dot_ab - dot_ba).abs() < 1e-4);
    }

    #[test]
    fn vector_add_then_sub_restores(a in vector_strategy(8), b in vector_strategy(8)) {
        let mut c = a.clone();
        c.add_in_place(&b).unwrap();
        c.sub_in_place(&b).unwrap();
        for i in 0..8 {
            prop_assert!((c[i] - a[i]).abs() < 1e-3);
        }
    }

    #[test]
    fn vector_scalar_mul_distributes(v in vector_strategy(10), s in -10.0f32..10.0) {
        let scaled = v.mul_scalar(s);
        let expected_sum = v.sum() * s;
        prop_assert!((scaled.sum() - expected_sum).abs() < 1e-1);
    }

    #[test]
    fn vector_matrix_products_have_expected_dims(
        m in any_matrix(),
        seed in -5.0f32..5.0,
    ) {
        let (rows, cols) = m.shape();
        let col = Vector::from_vec(vec![seed; cols]);
        let row = Vector::from_vec(vec![seed; rows]);
        prop_assert_eq!(col.matvec(&m).unwrap().dim(), rows);
        prop_assert_eq!(row.vecmat(&m).unwrap().dim(), cols);
    }

    #[test]
    fn vector_mismatched_matvec_leaves_vector(m in matrix_strategy(3, 2), v in vector_strategy(3)) {
        let original = v.clone();
        let mut v = v;
        prop_assert!(v.matvec_in_place(&m).unwrap_err().is_incompatible_dimensions());
        prop_assert_eq!(&v, &original);
        // dim 3 == rows, so the row form succeeds
        prop_assert!(v.vecmat_in_place(&m).is_ok());
        prop_assert_eq!(v.dim(), 2);
    }

    #[test]
    fn vector_checked_access_bounds(v in vector_strategy(6)) {
        for i in 0..6 {
            prop_assert!(v.read(i).is_ok());
        }
        prop_assert!(v.read(6).unwrap_err().is_out_of_bounds());
        prop_assert!(v.read(usize::MAX).unwrap_err().is_out_of_bounds());
    }
}
