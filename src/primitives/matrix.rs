//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{LinalgError, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D matrix of single-precision values (row-major storage).
///
/// Arithmetic comes in three forms: a value-returning method (`add`), an
/// out-parameter method that overwrites a caller-owned destination (`add_into`)
/// and an in-place method that mutates `self` (`add_in_place`). Checked forms
/// validate shapes before touching any operand.
///
/// # Examples
///
/// ```
/// use linalg::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix"))]
pub struct Matrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

/// Unvalidated wire form; converted through [`Matrix::from_vec`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMatrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for Matrix {
    type Error = LinalgError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::from_vec(raw.rows, raw.cols, raw.data)
    }
}

/// Element count of a `rows x cols` matrix. Overflow is treated like an
/// allocation failure.
fn element_count(rows: usize, cols: usize) -> usize {
    rows.checked_mul(cols).expect("matrix element count overflows usize")
}

impl Matrix {
    /// Creates a new matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] if data length doesn't
    /// match rows * cols, including when rows * cols overflows `usize`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        let needed = rows.checked_mul(cols);
        if needed != Some(data.len()) {
            return Err(LinalgError::length_mismatch(
                "from_vec",
                (rows, cols),
                needed,
                data.len(),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a new matrix by copying row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] if data length doesn't
    /// match rows * cols.
    pub fn from_slice(rows: usize, cols: usize, data: &[f32]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    /// Creates a matrix of the given shape whose contents the caller is
    /// expected to populate before reading.
    ///
    /// The buffer is zero-filled, but code should not rely on that.
    #[must_use]
    pub fn with_shape(rows: usize, cols: usize) -> Self {
        Self::zeros(rows, cols)
    }

    /// Creates an empty 0x0 matrix, usable as an output destination.
    #[must_use]
    pub fn alloc() -> Self {
        Self::default()
    }

    /// Creates a matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if rows * cols overflows `usize`.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; element_count(rows, cols)],
            rows,
            cols,
        }
    }

    /// Creates a matrix of ones.
    ///
    /// # Panics
    ///
    /// Panics if rows * cols overflows `usize`.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![1.0; element_count(rows, cols)],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Returns an independent copy of this matrix.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Overwrites this matrix's shape and contents with `src`'s.
    ///
    /// The existing allocation is reused when it is large enough, so a
    /// destination created with [`Matrix::alloc`] can receive results of any
    /// shape without being replaced.
    pub fn copy_from(&mut self, src: &Self) {
        self.data.clear();
        self.data.extend_from_slice(&src.data);
        self.rows = src.rows;
        self.cols = src.cols;
    }

    /// Releases the matrix and its buffer.
    pub fn release(self) {}

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of elements (rows * cols).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the matrix holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if rows == cols.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Returns the underlying row-major data as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the matrix and returns its row-major buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Copies all elements, row-major, into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != rows * cols`.
    pub fn copy_to_slice(&self, out: &mut [f32]) {
        out.copy_from_slice(&self.data);
    }

    /// Overwrites all elements with row-major `data`.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn copy_from_slice(&mut self, data: &[f32]) {
        self.data.copy_from_slice(data);
    }

    fn check_coord(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(LinalgError::coord_out_of_bounds(row, col, self.shape()));
        }
        Ok(())
    }

    /// Reads the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::OutOfBounds`] if either index is outside the
    /// matrix.
    pub fn read(&self, row: usize, col: usize) -> Result<f32> {
        self.check_coord(row, col)?;
        Ok(self.get(row, col))
    }

    /// Writes `value` at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::OutOfBounds`] if either index is outside the
    /// matrix; the matrix is left unchanged.
    pub fn write(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        self.check_coord(row, col)?;
        self.set(row, col, value);
        Ok(())
    }

    /// Gets element at (row, col) without a bounds check.
    ///
    /// The caller must guarantee `row < n_rows()` and `col < n_cols()`.
    /// Debug builds assert this; release builds only catch offsets past the
    /// end of the buffer, so an out-of-range `col` may silently read an
    /// element from another row.
    ///
    /// # Panics
    ///
    /// Panics if the row-major offset is past the end of the buffer.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col) without a bounds check.
    ///
    /// Same precondition as [`Matrix::get`].
    ///
    /// # Panics
    ///
    /// Panics if the row-major offset is past the end of the buffer.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a Vector.
    ///
    /// # Panics
    ///
    /// Panics if `row_idx >= n_rows()`.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector {
        let start = row_idx * self.cols;
        let end = start + self.cols;
        Vector::from_slice(&self.data[start..end])
    }

    /// Returns a column as a Vector.
    ///
    /// # Panics
    ///
    /// Panics if `col_idx >= n_cols()` and the matrix has rows.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vector {
        assert!(col_idx < self.cols || self.rows == 0, "column index out of range");
        (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect()
    }

    fn check_same_shape(&self, operation: &'static str, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(LinalgError::incompatible_shapes(
                operation,
                self.shape(),
                other.shape(),
            ));
        }
        Ok(())
    }

    /// Adds `other` element-wise into `self`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] if shapes differ.
    pub fn add_in_place(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape("add", other)?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a += b;
        }
        Ok(())
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] if shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        let mut result = self.duplicate();
        result.add_in_place(other)?;
        Ok(result)
    }

    /// Writes `self + other` into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] if shapes differ; `out`
    /// is left unchanged.
    pub fn add_into(&self, other: &Self, out: &mut Self) -> Result<()> {
        let result = self.add(other)?;
        out.copy_from(&result);
        Ok(())
    }

    /// Subtracts `other` element-wise from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] if shapes differ.
    pub fn sub_in_place(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape("sub", other)?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a -= b;
        }
        Ok(())
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] if shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        let mut result = self.duplicate();
        result.sub_in_place(other)?;
        Ok(result)
    }

    /// Writes `self - other` into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] if shapes differ; `out`
    /// is left unchanged.
    pub fn sub_into(&self, other: &Self, out: &mut Self) -> Result<()> {
        let result = self.sub(other)?;
        out.copy_from(&result);
        Ok(())
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] unless
    /// `self.n_cols() == other.n_rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(LinalgError::incompatible_shapes(
                "matmul",
                self.shape(),
                other.shape(),
            ));
        }

        let mut result = Self::with_shape(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result.set(i, j, sum);
            }
        }
        Ok(result)
    }

    /// Replaces `self` with `self * other`, resizing to
    /// `n_rows() x other.n_cols()`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] unless
    /// `self.n_cols() == other.n_rows()`.
    pub fn matmul_in_place(&mut self, other: &Self) -> Result<()> {
        let product = self.matmul(other)?;
        self.copy_from(&product);
        Ok(())
    }

    /// Writes `self * other` into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] unless
    /// `self.n_cols() == other.n_rows()`; `out` is left unchanged.
    pub fn matmul_into(&self, other: &Self, out: &mut Self) -> Result<()> {
        let product = self.matmul(other)?;
        out.copy_from(&product);
        Ok(())
    }

    /// Matrix-vector multiplication (`self * vec`, `vec` as a column).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] unless
    /// `vec.len() == self.n_cols()`.
    pub fn matvec(&self, vec: &Vector) -> Result<Vector> {
        vec.matvec(self)
    }

    /// Multiplies each element by `scalar` in place.
    pub fn mul_scalar_in_place(&mut self, scalar: f32) {
        for x in &mut self.data {
            *x *= scalar;
        }
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f32) -> Self {
        let mut result = self.duplicate();
        result.mul_scalar_in_place(scalar);
        result
    }

    /// Writes `scalar * self` into `out`.
    pub fn mul_scalar_into(&self, scalar: f32, out: &mut Self) {
        out.copy_from(&self.mul_scalar(scalar));
    }

    /// Divides each element by `scalar` in place.
    ///
    /// Follows IEEE-754: dividing by zero yields infinities or NaN.
    pub fn div_scalar_in_place(&mut self, scalar: f32) {
        for x in &mut self.data {
            *x /= scalar;
        }
    }

    /// Divides each element by a scalar.
    ///
    /// Follows IEEE-754: dividing by zero yields infinities or NaN.
    #[must_use]
    pub fn div_scalar(&self, scalar: f32) -> Self {
        let mut result = self.duplicate();
        result.div_scalar_in_place(scalar);
        result
    }

    /// Writes `self / scalar` into `out`.
    pub fn div_scalar_into(&self, scalar: f32, out: &mut Self) {
        out.copy_from(&self.div_scalar(scalar));
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::with_shape(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.set(j, i, self.get(i, j));
            }
        }
        result
    }

    /// Transposes `self`, swapping its row and column counts.
    pub fn transpose_in_place(&mut self) {
        let transposed = self.transpose();
        self.copy_from(&transposed);
    }

    /// Writes the transpose of `self` into `out`.
    pub fn transpose_into(&self, out: &mut Self) {
        out.copy_from(&self.transpose());
    }
}

impl fmt::Display for Matrix {
    /// One row per line, elements separated by tabs. Honors `{:.N}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            for j in 0..self.cols {
                if j > 0 {
                    f.write_str("\t")?;
                }
                let x = self.get(i, j);
                match f.precision() {
                    Some(p) => write!(f, "{x:.p$}")?,
                    None => write!(f, "{x}")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
