//! linalg: small dense linear algebra in pure Rust.
//!
//! Provides single-precision [`Matrix`] and [`Vector`] value types with the
//! basic arithmetic set: addition, subtraction, matrix and matrix-vector
//! products, scalar scaling, transpose and dot product.
//!
//! # Quick Start
//!
//! ```
//! use linalg::prelude::*;
//!
//! let mut a = Matrix::from_vec(2, 3, vec![
//!     1.0, 2.0, 3.0,
//!     4.0, 5.0, 6.0,
//! ]).unwrap();
//! let b = Matrix::ones(3, 2);
//!
//! a.transpose_in_place();
//! let mut c = Matrix::alloc();
//! a.add_into(&b, &mut c).unwrap();
//! assert_eq!(c.shape(), (3, 2));
//!
//! let v = Vector::from_slice(&[1.0, 1.0, 1.0]);
//! let r = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
//!     .unwrap()
//!     .matvec(&v)
//!     .unwrap();
//! assert_eq!(r.as_slice(), &[6.0, 15.0]);
//! ```
//!
//! # Operation forms
//!
//! Most arithmetic exists as a value-returning method (`add`), an
//! out-parameter method (`add_into`) and an in-place method
//! (`add_in_place`). Checked forms validate operand shapes before touching
//! anything, so a failed call leaves every argument unchanged.
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`error`]: Error type and `Result` alias
//! - [`prelude`]: Convenience re-exports

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{LinalgError, Result};
pub use primitives::{Matrix, Vector};
