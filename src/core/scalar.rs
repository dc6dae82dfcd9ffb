// src/core/scalar.rs

use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// The field operations a back-end's amplitudes must support.
///
/// Both `Complex<f64>` (approximate) and [`Exact`](crate::core::Exact)
/// implement this, which lets `Matrix` carry the tensor and multiplication
/// algebra once for both back-ends.
pub trait Scalar:
    Clone
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Complex conjugate.
    fn conjugate(&self) -> Self;

    /// Squared modulus `|z|^2`, kept in the scalar's own field so exact
    /// values stay exact.
    fn modulus_sqr(&self) -> Self {
        self.clone() * self.conjugate()
    }
}

impl Scalar for Complex<f64> {
    fn conjugate(&self) -> Self {
        self.conj()
    }

    fn modulus_sqr(&self) -> Self {
        Complex::new(self.norm_sqr(), 0.0)
    }
}
