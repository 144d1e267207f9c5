//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use linalg::prelude::*;
//! ```

pub use crate::error::{LinalgError, Result};
pub use crate::primitives::{Matrix, Vector};
