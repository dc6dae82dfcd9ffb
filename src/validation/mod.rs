// src/validation/mod.rs

//! Floating-point closeness tests used by the numeric back-end.
//!
//! Comparisons follow the asymmetric rule `|actual - expected| <= absolute + relative * |expected|`,
//! the same shape as numpy's `isclose`/`allclose`. The tolerances are caller
//! configuration; the defaults live in [`crate::core::constants::defaults`].

use crate::core::Matrix;
use crate::core::constants::defaults::{DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_RELATIVE_TOLERANCE};
use num_complex::Complex;

/// Relative and absolute tolerance for approximate equality.
///
/// Negative or NaN values are clamped to zero so every comparison stays defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    relative: f64,
    absolute: f64,
}

fn sanitize(value: f64) -> f64 {
    // NaN.max(0.0) is 0.0
    value.max(0.0)
}

impl Tolerance {
    /// Creates a tolerance from explicit relative and absolute bounds.
    pub fn new(relative: f64, absolute: f64) -> Self {
        Self { relative: sanitize(relative), absolute: sanitize(absolute) }
    }

    /// Zero tolerance: only identical values compare close.
    pub fn exact() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Returns a copy with the relative bound replaced.
    pub fn with_relative(self, relative: f64) -> Self {
        Self { relative: sanitize(relative), ..self }
    }

    /// Returns a copy with the absolute bound replaced.
    pub fn with_absolute(self, absolute: f64) -> Self {
        Self { absolute: sanitize(absolute), ..self }
    }

    pub fn relative(&self) -> f64 {
        self.relative
    }

    pub fn absolute(&self) -> f64 {
        self.absolute
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(DEFAULT_RELATIVE_TOLERANCE, DEFAULT_ABSOLUTE_TOLERANCE)
    }
}

/// Checks `|actual - expected| <= absolute + relative * |expected|`.
///
/// Non-finite inputs never compare close.
pub fn is_close(actual: Complex<f64>, expected: Complex<f64>, tolerance: &Tolerance) -> bool {
    if !actual.is_finite() || !expected.is_finite() {
        return false;
    }
    (actual - expected).norm() <= tolerance.absolute + tolerance.relative * expected.norm()
}

/// Element-wise [`is_close`] over two matrices of the same shape.
/// Matrices of different shapes are never close.
pub fn all_close(actual: &Matrix<Complex<f64>>, expected: &Matrix<Complex<f64>>, tolerance: &Tolerance) -> bool {
    actual.shape() == expected.shape()
        && actual
            .as_slice()
            .iter()
            .zip(expected.as_slice())
            .all(|(a, e)| is_close(*a, *e, tolerance))
}
