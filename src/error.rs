//! Error types for linalg operations.
//!
//! Checked operations report one of two failure kinds. Both are detected
//! before any operand is touched, so a failed call leaves every argument
//! (including output parameters) exactly as it was.

use std::fmt;

/// Main error type for linalg operations.
///
/// # Examples
///
/// ```
/// use linalg::error::LinalgError;
///
/// let err = LinalgError::IncompatibleDimensions {
///     operation: "add",
///     left: "2x3".to_string(),
///     right: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("incompatible dimensions"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Operand shapes violate the relationship the operation requires.
    IncompatibleDimensions {
        /// Operation that rejected its operands
        operation: &'static str,
        /// Shape of the left-hand operand
        left: String,
        /// Shape of the right-hand operand
        right: String,
    },

    /// An element index falls outside the container's current dimensions.
    OutOfBounds {
        /// Requested index
        index: String,
        /// Dimensions the index was checked against
        bounds: String,
    },
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::IncompatibleDimensions {
                operation,
                left,
                right,
            } => {
                write!(
                    f,
                    "{operation}: incompatible dimensions {left} and {right}"
                )
            }
            LinalgError::OutOfBounds { index, bounds } => {
                write!(f, "index {index} out of bounds for {bounds}")
            }
        }
    }
}

impl std::error::Error for LinalgError {}

impl LinalgError {
    /// Create an incompatible dimensions error from two matrix shapes.
    #[must_use]
    pub fn incompatible_shapes(
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        log::debug!(
            "{operation} rejected: {}x{} vs {}x{}",
            left.0,
            left.1,
            right.0,
            right.1
        );
        Self::IncompatibleDimensions {
            operation,
            left: format!("{}x{}", left.0, left.1),
            right: format!("{}x{}", right.0, right.1),
        }
    }

    /// Create an incompatible dimensions error from two vector lengths.
    #[must_use]
    pub fn incompatible_dims(operation: &'static str, left: usize, right: usize) -> Self {
        log::debug!("{operation} rejected: dim {left} vs dim {right}");
        Self::IncompatibleDimensions {
            operation,
            left: format!("dim {left}"),
            right: format!("dim {right}"),
        }
    }

    /// Create an incompatible dimensions error between a vector and a matrix.
    #[must_use]
    pub fn incompatible_vec_mat(
        operation: &'static str,
        dim: usize,
        shape: (usize, usize),
    ) -> Self {
        log::debug!(
            "{operation} rejected: dim {dim} vs {}x{}",
            shape.0,
            shape.1
        );
        Self::IncompatibleDimensions {
            operation,
            left: format!("dim {dim}"),
            right: format!("{}x{}", shape.0, shape.1),
        }
    }

    /// Create an incompatible dimensions error for a data buffer whose length
    /// doesn't fit a `rows x cols` shape. `needed` is `None` when
    /// `rows * cols` overflows `usize`.
    #[must_use]
    pub fn length_mismatch(
        operation: &'static str,
        shape: (usize, usize),
        needed: Option<usize>,
        len: usize,
    ) -> Self {
        match needed {
            Some(needed) => log::debug!(
                "{operation} rejected: {}x{} needs {needed} elements, got {len}",
                shape.0,
                shape.1
            ),
            None => log::debug!(
                "{operation} rejected: {}x{} element count overflows usize",
                shape.0,
                shape.1
            ),
        }
        Self::IncompatibleDimensions {
            operation,
            left: format!("{}x{}", shape.0, shape.1),
            right: format!("len {len}"),
        }
    }

    /// Create an out of bounds error for a matrix coordinate.
    #[must_use]
    pub fn coord_out_of_bounds(row: usize, col: usize, shape: (usize, usize)) -> Self {
        log::debug!(
            "access rejected: ({row}, {col}) outside {}x{} matrix",
            shape.0,
            shape.1
        );
        Self::OutOfBounds {
            index: format!("({row}, {col})"),
            bounds: format!("{}x{} matrix", shape.0, shape.1),
        }
    }

    /// Create an out of bounds error for a vector index.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, dim: usize) -> Self {
        log::debug!("access rejected: index {index} outside vector of dim {dim}");
        Self::OutOfBounds {
            index: format!("{index}"),
            bounds: format!("vector of dim {dim}"),
        }
    }

    /// Returns true for [`LinalgError::IncompatibleDimensions`].
    #[must_use]
    pub fn is_incompatible_dimensions(&self) -> bool {
        matches!(self, Self::IncompatibleDimensions { .. })
    }

    /// Returns true for [`LinalgError::OutOfBounds`].
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, LinalgError>;
