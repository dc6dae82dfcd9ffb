// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod scalar;
pub mod exact;
pub mod matrix;

pub use error::{QubitError, Result};
pub use scalar::Scalar;
pub use exact::{Exact, GaussianRational};
pub use matrix::Matrix;

pub mod constants;
pub use constants::defaults::{
    DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_RELATIVE_TOLERANCE, LARGE_COMPOSITE_WARN_ELEMENTS,
};
