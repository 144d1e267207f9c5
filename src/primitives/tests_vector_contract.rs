// =========================================================================
// FALSIFY-VE: Vector arithmetic contract
//
// References:
//   - Cauchy-Schwarz inequality: |dot(u,v)| <= norm(u) * norm(v)
// =========================================================================

use super::*;

/// FALSIFY-VE-001: Dot product is commutative: dot(u,v) = dot(v,u)
#[test]
fn falsify_ve_001_dot_commutative() {
    let u = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let v = Vector::from_slice(&[4.0, 5.0, 6.0]);

    let uv = u.dot(&v).expect("same dim");
    let vu = v.dot(&u).expect("same dim");

    assert!(
        (uv - vu).abs() < 1e-6,
        "FALSIFIED VE-001: dot(u,v)={uv} != dot(v,u)={vu}"
    );
}

/// FALSIFY-VE-002: Norm is non-negative
#[test]
fn falsify_ve_002_norm_nonneg() {
    let v = Vector::from_slice(&[-3.0, 4.0]);
    let n = v.norm();

    assert!(n >= 0.0, "FALSIFIED VE-002: norm={n}, expected >= 0.0");
    assert!(
        (n - 5.0).abs() < 1e-5,
        "FALSIFIED VE-002: norm of [-3,4]={n}, expected 5.0"
    );
}

/// FALSIFY-VE-003: Cauchy-Schwarz: |dot(u,v)| <= norm(u) * norm(v)
#[test]
fn falsify_ve_003_cauchy_schwarz() {
    let u = Vector::from_slice(&[1.0, -2.0, 3.0, 0.5]);
    let v = Vector::from_slice(&[4.0, 0.0, -1.0, 2.0]);

    let dot = u.dot(&v).expect("same dim").abs();
    let bound = u.norm() * v.norm();

    assert!(
        dot <= bound + 1e-5,
        "FALSIFIED VE-003: |dot|={dot} > norm(u)*norm(v)={bound}"
    );
}

/// FALSIFY-VE-004: dot(v, e_i) picks out v[i]
#[test]
fn falsify_ve_004_basis_selects_component() {
    let v = Vector::from_slice(&[2.0, 4.0, 6.0, 8.0, 10.0]);

    for i in 0..v.dim() {
        let e = Vector::basis(v.dim(), i).expect("in range");
        let picked = v.dot(&e).expect("same dim");
        assert!(
            (picked - v[i]).abs() < 1e-6,
            "FALSIFIED VE-004: dot(v, e_{i})={picked}, expected {}",
            v[i]
        );
    }
}

/// FALSIFY-VE-005: Identity leaves a vector unchanged from either side
#[test]
fn falsify_ve_005_identity_vecmat_matvec() {
    let v = Vector::from_slice(&[1.5, -2.0, 0.0]);
    let eye = Matrix::eye(3);

    assert_eq!(v.vecmat(&eye).expect("dim 3"), v, "FALSIFIED VE-005: v*I != v");
    assert_eq!(v.matvec(&eye).expect("dim 3"), v, "FALSIFIED VE-005: I*v != v");
}

/// FALSIFY-VE-006: Scaling by s then dividing by s is the identity (s != 0)
#[test]
fn falsify_ve_006_scale_then_divide() {
    let v = Vector::from_slice(&[1.0, -7.0, 0.125]);
    let back = v.mul_scalar(4.0).div_scalar(4.0);

    for (x, y) in back.iter().zip(v.iter()) {
        assert!((x - y).abs() < 1e-6, "FALSIFIED VE-006: {x} != {y}");
    }
}

mod vector_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// FALSIFY-VE-001-prop: Dot commutativity for random vectors
        #[test]
        fn falsify_ve_001_prop_dot_commutative(
            data in proptest::collection::vec((-100.0f32..100.0, -100.0f32..100.0), 0..16),
        ) {
            let (a, b): (Vec<f32>, Vec<f32>) = data.into_iter().unzip();
            let u = Vector::from_vec(a);
            let v = Vector::from_vec(b);
            let uv = u.dot(&v).expect("same dim");
            let vu = v.dot(&u).expect("same dim");
            prop_assert!((uv - vu).abs() < 1e-2, "FALSIFIED VE-001-prop: {} != {}", uv, vu);
        }

        /// FALSIFY-VE-007-prop: Mismatched dims are always rejected
        #[test]
        fn falsify_ve_007_prop_mismatch_rejected(n in 0..10usize, extra in 1..5usize) {
            let u = Vector::ones(n);
            let v = Vector::ones(n + extra);
            prop_assert!(u.dot(&v).is_err());
            prop_assert!(u.add(&v).is_err());
            prop_assert!(v.sub(&u).is_err());
        }
    }
}
