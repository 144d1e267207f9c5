//! Core compute primitives (Vector, Matrix).
//!
//! Both types own a dense `f32` buffer. Matrices are stored row-major.

mod matrix;
mod ops;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
