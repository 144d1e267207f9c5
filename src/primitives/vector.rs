//! Vector type for 1D numeric data.

use super::Matrix;
use crate::error::{LinalgError, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1D vector of single-precision values.
///
/// A vector carries no orientation. [`Vector::vecmat`] treats it as a row
/// (`v * M`), [`Vector::matvec`] as a column (`M * v`).
///
/// # Examples
///
/// ```
/// use linalg::primitives::Vector;
///
/// let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// assert_eq!(v.len(), 3);
/// assert!((v.dot(&v).expect("same dim") - 14.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    /// Creates a vector that takes ownership of `data`.
    #[must_use]
    pub fn from_vec(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Creates a vector by copying `data`.
    #[must_use]
    pub fn from_slice(data: &[f32]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Creates a vector of dimension `dim` whose contents the caller is
    /// expected to populate before reading.
    #[must_use]
    pub fn with_dim(dim: usize) -> Self {
        Self::zeros(dim)
    }

    /// Creates an empty vector, usable as an output destination.
    #[must_use]
    pub fn alloc() -> Self {
        Self::default()
    }

    /// Creates a vector of zeros.
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim],
        }
    }

    /// Creates a vector of ones.
    #[must_use]
    pub fn ones(dim: usize) -> Self {
        Self {
            data: vec![1.0; dim],
        }
    }

    /// Creates the basis vector with a 1 at `pos` and 0 elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::OutOfBounds`] if `pos >= dim`.
    pub fn basis(dim: usize, pos: usize) -> Result<Self> {
        let mut v = Self::zeros(dim);
        v.write(pos, 1.0)?;
        Ok(v)
    }

    /// Returns an independent copy of this vector.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Overwrites this vector's dimension and contents with `src`'s,
    /// reusing the existing allocation where possible.
    pub fn copy_from(&mut self, src: &Self) {
        self.data.clear();
        self.data.extend_from_slice(&src.data);
    }

    /// Releases the vector and its buffer.
    pub fn release(self) {}

    /// Returns the dimension.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of elements (same as [`Vector::dim`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has dimension 0.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Returns the underlying data as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the vector and returns its buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Copies all elements into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != dim()`.
    pub fn copy_to_slice(&self, out: &mut [f32]) {
        out.copy_from_slice(&self.data);
    }

    /// Overwrites all elements with `data`.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != dim()`.
    pub fn copy_from_slice(&mut self, data: &[f32]) {
        self.data.copy_from_slice(data);
    }

    /// Reads the element at `i`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::OutOfBounds`] if `i >= dim()`.
    pub fn read(&self, i: usize) -> Result<f32> {
        self.data
            .get(i)
            .copied()
            .ok_or_else(|| LinalgError::index_out_of_bounds(i, self.dim()))
    }

    /// Writes `value` at `i`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::OutOfBounds`] if `i >= dim()`; the vector is left
    /// unchanged.
    pub fn write(&mut self, i: usize, value: f32) -> Result<()> {
        let dim = self.dim();
        let slot = self
            .data
            .get_mut(i)
            .ok_or_else(|| LinalgError::index_out_of_bounds(i, dim))?;
        *slot = value;
        Ok(())
    }

    /// Gets the element at `i` without a recoverable check.
    ///
    /// The caller must guarantee `i < dim()`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= dim()`.
    #[must_use]
    pub fn get(&self, i: usize) -> f32 {
        self.data[i]
    }

    /// Sets the element at `i` without a recoverable check.
    ///
    /// # Panics
    ///
    /// Panics if `i >= dim()`.
    pub fn set(&mut self, i: usize, value: f32) {
        self.data[i] = value;
    }

    fn check_same_dim(&self, operation: &'static str, other: &Self) -> Result<()> {
        if self.dim() != other.dim() {
            return Err(LinalgError::incompatible_dims(
                operation,
                self.dim(),
                other.dim(),
            ));
        }
        Ok(())
    }

    /// Adds `other` element-wise into `self`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] if dimensions differ.
    pub fn add_in_place(&mut self, other: &Self) -> Result<()> {
        self.check_same_dim("add", other)?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a += b;
        }
        Ok(())
    }

    /// Adds another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] if dimensions differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        let mut result = self.duplicate();
        result.add_in_place(other)?;
        Ok(result)
    }

    /// Writes `self + other` into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] if dimensions differ;
    /// `out` is left unchanged.
    pub fn add_into(&self, other: &Self, out: &mut Self) -> Result<()> {
        let result = self.add(other)?;
        out.copy_from(&result);
        Ok(())
    }

    /// Subtracts `other` element-wise from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] if dimensions differ.
    pub fn sub_in_place(&mut self, other: &Self) -> Result<()> {
        self.check_same_dim("sub", other)?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a -= b;
        }
        Ok(())
    }

    /// Subtracts another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] if dimensions differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        let mut result = self.duplicate();
        result.sub_in_place(other)?;
        Ok(result)
    }

    /// Writes `self - other` into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] if dimensions differ;
    /// `out` is left unchanged.
    pub fn sub_into(&self, other: &Self, out: &mut Self) -> Result<()> {
        let result = self.sub(other)?;
        out.copy_from(&result);
        Ok(())
    }

    /// Dot product.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] if dimensions differ.
    pub fn dot(&self, other: &Self) -> Result<f32> {
        self.check_same_dim("dot", other)?;
        Ok(self.data.iter().zip(&other.data).map(|(a, b)| a * b).sum())
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

    /// Row vector times matrix: `self * m`.
    ///
    /// The result has dimension `m.n_cols()`, with
    /// `r[i] = sum_j self[j] * m[j, i]`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] unless
    /// `dim() == m.n_rows()`.
    pub fn vecmat(&self, m: &Matrix) -> Result<Self> {
        let (rows, cols) = m.shape();
        if self.dim() != rows {
            return Err(LinalgError::incompatible_vec_mat(
                "vecmat",
                self.dim(),
                m.shape(),
            ));
        }

        Ok((0..cols)
            .map(|i| (0..rows).map(|j| self.data[j] * m.get(j, i)).sum::<f32>())
            .collect())
    }

    /// Replaces `self` with `self * m`, resizing to `m.n_cols()`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] unless
    /// `dim() == m.n_rows()`.
    pub fn vecmat_in_place(&mut self, m: &Matrix) -> Result<()> {
        let product = self.vecmat(m)?;
        self.copy_from(&product);
        Ok(())
    }

    /// Writes `self * m` into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] unless
    /// `dim() == m.n_rows()`; `out` is left unchanged.
    pub fn vecmat_into(&self, m: &Matrix, out: &mut Self) -> Result<()> {
        let product = self.vecmat(m)?;
        out.copy_from(&product);
        Ok(())
    }

    /// Matrix times column vector: `m * self`.
    ///
    /// The result has dimension `m.n_rows()`, with
    /// `r[i] = sum_j m[i, j] * self[j]`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] unless
    /// `dim() == m.n_cols()`.
    pub fn matvec(&self, m: &Matrix) -> Result<Self> {
        let (rows, cols) = m.shape();
        if self.dim() != cols {
            return Err(LinalgError::incompatible_vec_mat(
                "matvec",
                self.dim(),
                m.shape(),
            ));
        }

        Ok((0..rows)
            .map(|i| (0..cols).map(|j| m.get(i, j) * self.data[j]).sum::<f32>())
            .collect())
    }

    /// Replaces `self` with `m * self`, resizing to `m.n_rows()`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] unless
    /// `dim() == m.n_cols()`.
    pub fn matvec_in_place(&mut self, m: &Matrix) -> Result<()> {
        let product = self.matvec(m)?;
        self.copy_from(&product);
        Ok(())
    }

    /// Writes `m * self` into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IncompatibleDimensions`] unless
    /// `dim() == m.n_cols()`; `out` is left unchanged.
    pub fn matvec_into(&self, m: &Matrix, out: &mut Self) -> Result<()> {
        let product = self.matvec(m)?;
        out.copy_from(&product);
        Ok(())
    }

    /// Sum of all elements.
    #[must_use]
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Euclidean (L2) norm.
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.data.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.data.iter()
    }
}

impl From<Vec<f32>> for Vector {
    fn from(data: Vec<f32>) -> Self {
        Self::from_vec(data)
    }
}

impl FromIterator<f32> for Vector {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f32;
    type IntoIter = std::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl fmt::Display for Vector {
    /// Bracketed, comma separated elements. Honors `{:.N}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match f.precision() {
                Some(p) => write!(f, "{x:.p$}")?,
                None => write!(f, "{x}")?,
            }
        }
        f.write_str("]")
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_vector_contract.rs"]
mod tests_vector_contract;
