//! Operator overloads for [`Matrix`] and [`Vector`].
//!
//! Only infallible operations get operators. Shape-checked arithmetic stays
//! on the named methods so mismatches surface as `Result`s instead of panics.

use super::{Matrix, Vector};
use std::ops::{Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg};

impl Index<usize> for Vector {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.as_slice()[i]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.as_mut_slice()[i]
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    /// # Panics
    ///
    /// Panics if `row >= n_rows()` or `col >= n_cols()`.
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(
            row < self.n_rows() && col < self.n_cols(),
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.n_rows(),
            self.n_cols()
        );
        &self.as_slice()[row * self.n_cols() + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        let (rows, cols) = self.shape();
        assert!(
            row < rows && col < cols,
            "index ({row}, {col}) out of bounds for {rows}x{cols} matrix"
        );
        &mut self.as_mut_slice()[row * cols + col]
    }
}

macro_rules! impl_scalar_ops {
    ($t:ty) => {
        impl Mul<f32> for &$t {
            type Output = $t;

            fn mul(self, rhs: f32) -> $t {
                self.mul_scalar(rhs)
            }
        }

        impl Mul<f32> for $t {
            type Output = $t;

            fn mul(mut self, rhs: f32) -> $t {
                self.mul_scalar_in_place(rhs);
                self
            }
        }

        impl Mul<&$t> for f32 {
            type Output = $t;

            fn mul(self, rhs: &$t) -> $t {
                rhs.mul_scalar(self)
            }
        }

        impl Div<f32> for &$t {
            type Output = $t;

            fn div(self, rhs: f32) -> $t {
                self.div_scalar(rhs)
            }
        }

        impl Div<f32> for $t {
            type Output = $t;

            fn div(mut self, rhs: f32) -> $t {
                self.div_scalar_in_place(rhs);
                self
            }
        }

        impl MulAssign<f32> for $t {
            fn mul_assign(&mut self, rhs: f32) {
                self.mul_scalar_in_place(rhs);
            }
        }

        impl DivAssign<f32> for $t {
            fn div_assign(&mut self, rhs: f32) {
                self.div_scalar_in_place(rhs);
            }
        }

        impl Neg for &$t {
            type Output = $t;

            fn neg(self) -> $t {
                self.mul_scalar(-1.0)
            }
        }

        impl Neg for $t {
            type Output = $t;

            fn neg(self) -> $t {
                self * -1.0
            }
        }
    };
}

impl_scalar_ops!(Matrix);
impl_scalar_ops!(Vector);
