// src/lib.rs

//! `qubit_kit` - Checks and operations on qubit states and operators
//!
//! Four pure operations, each available under a floating-point and an exact
//! back-end through the [`Backend`] trait:
//!
//! * [`Backend::is_valid_state`] - is `(α, β)` a normalized 2-level state?
//! * [`Backend::tensor_product`] - left-fold Kronecker product of states or matrices
//! * [`Backend::is_unitary`] - does `M·Mᴴ` equal the identity?
//! * [`Backend::apply_operator`] - matrix × state
//!
//! [`Numeric`] works on `Complex<f64>` with a configurable [`Tolerance`];
//! [`Symbolic`] works on [`Exact`] values of `Q(i, √2)` and compares exactly.

pub mod core;
pub mod validation;
pub mod backend;

pub use crate::core::{Exact, Matrix, QubitError, Result, Scalar};
pub use backend::{Backend, Numeric, Symbolic};
pub use validation::{Tolerance, all_close, is_close};

// Example 1: The numeric back-end on the usual single-qubit literals
/// ```
/// use qubit_kit::{Backend, Matrix, Numeric, QubitError};
/// use num_complex::Complex;
/// use std::f64::consts::FRAC_1_SQRT_2;
///
/// fn c(re: f64, im: f64) -> Complex<f64> { Complex::new(re, im) }
///
/// let numeric = Numeric::new();
///
/// // (1/√2, i/√2) is normalized, (1, 1) is not
/// assert!(numeric.is_valid_state(&c(FRAC_1_SQRT_2, 0.0), &c(0.0, FRAC_1_SQRT_2)));
/// assert!(!numeric.is_valid_state(&c(1.0, 0.0), &c(1.0, 0.0)));
///
/// // |0> ⊗ |1> = |01>
/// let ket0 = Matrix::basis_ket(2, 0)?;
/// let ket1 = Matrix::basis_ket(2, 1)?;
/// let joint = numeric.tensor_product(&[ket0.clone(), ket1])?;
/// assert_eq!(joint, Matrix::basis_ket(4, 1)?);
///
/// // Hadamard is unitary and sends |0> to (|0> + |1>)/√2
/// let h = Matrix::from_rows(vec![
///     vec![c(1.0, 0.0), c(1.0, 0.0)],
///     vec![c(1.0, 0.0), c(-1.0, 0.0)],
/// ])?
/// .scale(&c(FRAC_1_SQRT_2, 0.0));
/// assert!(numeric.is_unitary(&h)?);
/// let plus = numeric.apply_operator(&h, &ket0)?;
/// assert!(numeric.is_normalized(&plus));
/// # Ok::<(), QubitError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: The same checks, exactly
/// ```
/// use qubit_kit::{Backend, Exact, Matrix, QubitError, Symbolic};
/// use num_traits::One;
///
/// let symbolic = Symbolic::new();
/// let r = Exact::frac_1_sqrt_2();
///
/// assert!(symbolic.is_valid_state(&r, &(Exact::i() * r.clone())));
///
/// let h = Matrix::from_rows(vec![
///     vec![Exact::one(), Exact::one()],
///     vec![Exact::one(), -Exact::one()],
/// ])?
/// .scale(&r);
/// assert!(symbolic.is_unitary(&h)?);
///
/// let ket0 = Matrix::basis_ket(2, 0)?;
/// let plus = symbolic.apply_operator(&h, &ket0)?;
/// assert_eq!(plus, Matrix::column(vec![r.clone(), r])?);
/// # Ok::<(), QubitError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
